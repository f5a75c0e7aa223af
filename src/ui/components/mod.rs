// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across the feature screens.
//!
//! # Components
//!
//! - [`error_block`] - Inline rendering of a runner's error with a dismiss action
//! - [`stat_card`] - Labelled figure shown in a screen's summary row
//! - [`badge`] - Small tinted pill for tiers, statuses and counts
//! - [`form`] - Labelled inputs shared by the create forms
//! - [`page`] - Header, action buttons and empty state of a screen

pub mod badge;
pub mod error_block;
pub mod form;
pub mod page;
pub mod stat_card;
