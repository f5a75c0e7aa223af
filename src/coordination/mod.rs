// SPDX-License-Identifier: MPL-2.0
//! Coordination layer shared by the feature views.
//!
//! - [`AsyncRunner`] runs network operations and exposes pending/error state.
//! - [`CallbackRelay`] and [`RefetchTrigger`] let a view report derived values
//!   to its parent without the report feeding back into its fetch condition.
//!
//! The notification queue lives in [`crate::ui::notifications`] next to its
//! overlay.

mod relay;
mod runner;

pub use relay::{CallbackRelay, RefetchTrigger};
pub use runner::{AsyncRunner, FailureMessage, OperationState};
