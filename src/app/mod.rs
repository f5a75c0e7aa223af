// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the feature screens.
//!
//! The `App` struct owns the three screens, the process-wide
//! [`NotificationCenter`] they share, and the sidebar count badges. Screens
//! return [`Effect`]s from their `update`; this module lifts them into
//! `iced::Task`s and re-supplies the count callbacks after every message.

pub mod config;
mod counts;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use counts::TabCounts;
pub use message::{Flags, Message};
pub use screen::Tab;

use crate::api::{HttpStudioApi, SharedApi};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::NotificationCenter;
use crate::ui::theming::ThemeMode;
use crate::ui::{coaches, members, plans, Effect};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    tab: Tab,
    members: members::State,
    coaches: coaches::State,
    plans: plans::State,
    notifications: NotificationCenter,
    counts: TabCounts,
    theme_mode: ThemeMode,
    /// `host[:port]` of the API, shown in the sidebar footer.
    api_host: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tab", &self.tab)
            .field("api_host", &self.api_host)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Everything `App::new` needs, resolved before the event loop starts so
/// that a broken HTTP stack is reported instead of panicking inside boot.
#[derive(Clone)]
struct Startup {
    flags: Flags,
    config: Config,
    config_warning: Option<String>,
    api: SharedApi,
    base_url: String,
}

impl Startup {
    fn prepare(flags: Flags) -> Result<Self> {
        let (config, config_warning) = config::load();
        let base_url = flags
            .api
            .clone()
            .unwrap_or_else(|| config.api.base_url.clone());
        let client = HttpStudioApi::new(base_url.clone(), config.api.timeout())?;
        tracing::info!(base_url = %client.base_url(), "studio API configured");

        Ok(Self {
            flags,
            config,
            config_warning,
            api: Arc::new(client),
            base_url,
        })
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    let startup = Startup::prepare(flags)?;

    // iced 0.14 requires a `Fn` boot, so every call gets its own copy.
    let boot = move || {
        let startup = startup.clone();
        App::new(
            startup.flags,
            startup.config,
            startup.config_warning,
            startup.api,
            &startup.base_url,
        )
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|err| Error::Ui(err.to_string()))
}

/// `host[:port]` of `base_url`, or the URL itself when it does not parse.
fn api_host(base_url: &str) -> String {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| {
            let host = url.host_str()?.to_string();
            Some(match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host,
            })
        })
        .unwrap_or_else(|| base_url.to_string())
}

/// Lifts a screen effect into an iced task.
fn task<M, F>(effect: Effect<M>, wrap: F) -> Task<Message>
where
    M: Send + 'static,
    F: Fn(M) -> Message + Send + 'static,
{
    match effect {
        Some(future) => Task::perform(future, wrap),
        None => Task::none(),
    }
}

impl App {
    /// Builds the root state and starts loading the screens with badges.
    pub fn new(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        api: SharedApi,
        base_url: &str,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);
        let notifications = NotificationCenter::with_durations(
            config.notifications.default_duration_ms,
            config.notifications.error_duration_ms,
        );
        if let Some(key) = config_warning {
            notifications.warning(i18n.tr(&key));
        }

        let mut app = Self {
            members: members::State::new(Arc::clone(&api), notifications.clone()),
            coaches: coaches::State::new(Arc::clone(&api), notifications.clone()),
            plans: plans::State::new(api, notifications.clone()),
            i18n,
            tab: Tab::default(),
            notifications,
            counts: TabCounts::default(),
            theme_mode: config.general.theme_mode,
            api_host: api_host(base_url),
        };
        app.sync_views();

        let startup = Task::batch([
            task(app.members.activate(), Message::Members),
            task(app.coaches.activate(), Message::Coaches),
        ]);
        (app, startup)
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.i18n.tr(self.tab.label_key()),
            self.i18n.tr("app-brand")
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_shortcut_subscription(),
            subscription::create_tick_subscription(self.notifications.has_pending_timers()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let next = match message {
            Message::Members(message) => {
                task(self.members.update(message, &self.i18n), Message::Members)
            }
            Message::Coaches(message) => {
                task(self.coaches.update(message, &self.i18n), Message::Coaches)
            }
            Message::Plans(message) => task(self.plans.update(message, &self.i18n), Message::Plans),
            Message::SelectTab(tab) => {
                self.tab = tab;
                match tab {
                    Tab::Members => task(self.members.activate(), Message::Members),
                    Tab::Coaches => task(self.coaches.activate(), Message::Coaches),
                    Tab::Plans => Task::none(),
                }
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
        };
        self.sync_views();
        next
    }

    /// Hands every screen a fresh count callback. Never triggers a fetch.
    fn sync_views(&self) {
        self.members
            .report_count_to(self.counts.reporter(Tab::Members));
        self.coaches
            .report_count_to(self.counts.reporter(Tab::Coaches));
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            tab: self.tab,
            members: &self.members,
            coaches: &self.coaches,
            plans: &self.plans,
            counts: &self.counts,
            notifications: &self.notifications,
            api_host: &self.api_host,
        })
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    #[must_use]
    pub fn counts(&self) -> &TabCounts {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_coach, sample_member, InMemoryStudio};
    use crate::ui::notifications::{Kind, NotificationMessage};
    use std::time::{Duration, Instant};

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        }
    }

    fn app_with(studio: Arc<InMemoryStudio>) -> App {
        let (app, _) = App::new(
            english(),
            Config::default(),
            None,
            studio,
            "http://localhost:8000",
        );
        app
    }

    #[test]
    fn api_host_keeps_port_and_drops_scheme() {
        assert_eq!(api_host("http://localhost:8000"), "localhost:8000");
        assert_eq!(api_host("https://studio.example.com/"), "studio.example.com");
        assert_eq!(api_host("not a url"), "not a url");
    }

    #[test]
    fn title_names_the_active_tab() {
        let mut app = app_with(Arc::new(InMemoryStudio::new()));
        assert_eq!(app.title(), "Members - IRON Training Studio");

        let _ = app.update(Message::SelectTab(Tab::Plans));
        assert_eq!(app.tab(), Tab::Plans);
        assert_eq!(app.title(), "Plans - IRON Training Studio");
    }

    #[test]
    fn config_warning_becomes_a_notification() {
        let (app, _) = App::new(
            english(),
            Config::default(),
            Some(config::LOAD_WARNING_KEY.to_string()),
            Arc::new(InMemoryStudio::new()),
            "",
        );

        let shown = app.notifications().snapshot();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind(), Kind::Warning);
    }

    #[test]
    fn notification_durations_come_from_config() {
        let mut config = Config::default();
        config.notifications.default_duration_ms = 1000;
        config.notifications.error_duration_ms = 0;
        let (app, _) = App::new(english(), config, None, Arc::new(InMemoryStudio::new()), "");

        assert_eq!(app.notifications().default_duration_ms(), 1000);
        assert_eq!(app.notifications().error_duration_ms(), 0);
    }

    #[test]
    fn tick_expires_notifications() {
        let mut app = app_with(Arc::new(InMemoryStudio::new()));
        app.notifications().success("saved");

        let later = Instant::now() + Duration::from_secs(60);
        let _ = app.update(Message::Notification(NotificationMessage::Tick(later)));

        assert!(app.notifications().is_empty());
    }

    #[tokio::test]
    async fn screen_loads_feed_the_sidebar_counts() {
        let studio = Arc::new(InMemoryStudio::new());
        studio.insert_member(sample_member(0, "Ada", "Lovelace"));
        studio.insert_member(sample_member(0, "Alan", "Turing"));
        studio.insert_coach(sample_coach(0, "Jo", "Fit", &[]));
        let mut app = app_with(studio);

        if let Some(load) = app.members.update(members::Message::Refresh, &app.i18n) {
            load.await;
        }
        assert_eq!(app.counts.get(Tab::Members), Some(2));
        assert_eq!(app.counts.get(Tab::Coaches), None);
    }
}
