// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the site list and the notification manager, and
//! translates messages into side effects like persisting the site list.
//! Callbacks of deferred notifications produce `Message`s, so confirming or
//! undoing a deletion flows back through `update` like any other event.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::sites::SiteRegistry;
use crate::ui::notifications::{Manager, NotificationRequest, NotificationSettings};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    theme_mode: ThemeMode,
    config: Config,
    sites: SiteRegistry,
    /// Where the site list is saved; `None` keeps it in memory only.
    sites_path: Option<PathBuf>,
    notifications: Manager<Message>,
    /// Instant of the last tick, used to draw undo countdowns.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sites", &self.sites.len())
            .field("sites_path", &self.sites_path)
            .field("notifications", &self.notifications)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 600;

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

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Directory overrides from `flags` must already be registered with
/// [`paths::init_cli_overrides`].
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            config: Config::default(),
            sites: SiteRegistry::default(),
            sites_path: None,
            notifications: Manager::new(),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Loads preferences and the site list. Load failures never abort
    /// startup: they surface as notifications instead.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = App {
            theme_mode: config.general.theme_mode,
            notifications: Manager::with_settings(NotificationSettings::from_config(
                &config.notifications,
            )),
            config,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications.add(NotificationRequest::warning(warning));
        }

        let sites_path = flags
            .sites_path
            .map(PathBuf::from)
            .or_else(paths::default_sites_path);

        if let Some(path) = sites_path {
            match SiteRegistry::load_from_path(&path) {
                Ok(sites) => {
                    tracing::info!(path = %path.display(), count = sites.len(), "sites loaded");
                    app.sites = sites;
                    app.sites_path = Some(path);
                }
                Err(error) => {
                    // Keep the unreadable file intact: work in memory only.
                    tracing::error!(path = %path.display(), %error, "failed to load sites");
                    app.notifications.add(NotificationRequest::error(format!(
                        "Sites could not be loaded, changes will not be saved ({error})"
                    )));
                }
            }
        } else {
            tracing::warn!("no data directory available, sites are kept in memory");
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.sites.len() {
            0 => "Chantier".to_string(),
            1 => "Chantier - 1 site".to_string(),
            n => format!("Chantier - {n} sites"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_timers())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            sites: &mut self.sites,
            sites_path: self.sites_path.as_deref(),
            notifications: &mut self.notifications,
            now: &mut self.now,
        };

        match message {
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::DeleteSite(id) => update::handle_delete_site(&mut ctx, id),
            Message::RestoreSite(removed) => update::handle_restore_site(&mut ctx, removed),
            Message::PersistDeletion(removed) => {
                update::handle_persist_deletion(&mut ctx, removed)
            }
            Message::DeletionPersisted { removed, result } => {
                update::handle_deletion_persisted(&mut ctx, removed, result)
            }
            Message::AdvanceStatus(id) => update::handle_advance_status(&mut ctx, id),
            Message::StatusPersisted { id, status, result } => {
                update::handle_status_persisted(&mut ctx, id, status, result)
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.next();
                self.config.general.theme_mode = self.theme_mode;
                persistence::persist_preferences(&self.config);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            sites: &self.sites,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
            now: self.now,
        })
    }
}
