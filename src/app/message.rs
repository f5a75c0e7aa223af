// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Tab;
use crate::ui::{coaches, members, notifications, plans};

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Members(members::Message),
    Coaches(coaches::Message),
    Plans(plans::Message),
    SelectTab(Tab),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL. Takes precedence over `[api] base_url`.
    pub api: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IRON_STUDIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Debug-level logging.
    pub verbose: bool,
}
