// SPDX-License-Identifier: MPL-2.0
//! `iron_studio` is a desktop management console for a training studio,
//! built with the Iced GUI framework.
//!
//! It manages members, coaches and training plans through a remote REST API
//! and demonstrates per-screen async operation tracking, a shared toast
//! notification queue and Fluent localization.

#![doc(html_root_url = "https://docs.rs/iron_studio/0.1.0")]

pub mod api;
pub mod app;
pub mod coordination;
pub mod error;
pub mod i18n;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod ui;
