// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! # Components
//!
//! - [`notification`] - `Notification` entries and their [`Kind`]
//! - [`center`] - [`NotificationCenter`], the process-wide queue with
//!   per-notification timers and two-phase removal
//! - [`toast`] - Toast widget rendering the queue as an overlay
//!
//! # Usage
//!
//! ```ignore
//! let center = NotificationCenter::new();
//! center.success("Ada Lovelace added.");
//!
//! // Every 100 ms while timers are pending:
//! center.expire_due(Instant::now());
//!
//! // In the view:
//! let overlay = Toast::view_overlay(&center).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Default lifetime 4.5 s, errors 7 s, `<= 0` persists until removed
//! - Display order is insertion order
//! - Position: bottom-right corner

mod center;
mod notification;
mod toast;

pub use center::{Message as NotificationMessage, NotificationCenter, EXIT_TRANSITION};
pub use notification::{Kind, Notification, NotificationId};
pub use toast::Toast;
