// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`members`] - Member directory with filters, creation form and goals
//! - [`coaches`] - Coach roster with specialization filter and matching
//! - [`plans`] - Training plan lookup, sessions and progress
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error block, stat cards, forms)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod coaches;
pub mod components;
pub mod design_tokens;
pub mod members;
pub mod notifications;
pub mod plans;
pub mod styles;
pub mod theming;

use std::future::Future;
use std::pin::Pin;

/// Work a screen hands back from `update`.
///
/// The future resolves to the screen's next message. The application wraps
/// it in an `iced::Task`; tests await it directly.
pub type Effect<Message> = Option<Pin<Box<dyn Future<Output = Message> + Send + 'static>>>;

/// Outcome of one runner invocation, carried in the settling message.
///
/// The error is the extracted failure message of that invocation, so a call
/// site never has to read it back from shared runner state.
pub type Outcome<T> = Result<T, String>;

pub(crate) fn perform<Message, F>(future: F) -> Effect<Message>
where
    F: Future<Output = Message> + Send + 'static,
{
    Some(Box::pin(future))
}
