// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the notification manager and the menu controller
//! to the demo catalogue, the config file, and the window-level
//! subscriptions. Startup runs the flash sweep once; the listeners live for
//! the whole application and are never torn down.

pub mod catalogue;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::menu::{self, Controller};
use crate::ui::notifications::{self, Severity};
use crate::ui::theming::ThemeMode;
use catalogue::{Catalogue, RowAction};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    catalogue: Catalogue,
    menus: Controller<RowAction>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    theme: Theme,
    config: config::Config,
    /// Directory `settings.toml` is written to; `None` follows the usual
    /// resolution order.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.catalogue.len())
            .field("open_menu", &self.menus.open_menu())
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

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

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed only once.
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
        let mut menus = Controller::new();
        let catalogue = Catalogue::sample(&mut menus);
        let theme_mode = ThemeMode::Dark;
        Self {
            catalogue,
            menus,
            notifications: notifications::Manager::new(),
            theme_mode,
            theme: theme_mode.theme(),
            config: config::Config::default(),
            config_dir: None,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags,
    /// then sweeps the startup flash messages onto the dismiss schedule.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app, _) = Self::from_parts(flags, config, config_warning, Instant::now());
        (app, Task::none())
    }

    /// Builds the application from already resolved inputs. Returns the ids
    /// of the notifications adopted by the startup sweep.
    fn from_parts(
        flags: Flags,
        config: config::Config,
        config_warning: Option<String>,
        now: Instant,
    ) -> (Self, Vec<notifications::NotificationId>) {
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let mut menus = Controller::new();
        let catalogue = Catalogue::sample(&mut menus);
        let mut app = App {
            catalogue,
            menus,
            notifications: notifications::Manager::with_timing(config.notifications.timing()),
            theme_mode,
            theme: theme_mode.theme(),
            config,
            config_dir: None,
        };

        let mut flashes = flags.flashes;
        if let Some(warning) = config_warning {
            flashes.push(notifications::Flash::new(Severity::Error, warning));
        }
        let adopted = app.notifications.adopt_flashes(flashes, now);
        log::info!(
            "started with {} entries, {} flash messages, theme {:?}",
            app.catalogue.len(),
            adopted.len(),
            app.theme_mode
        );

        (app, adopted)
    }

    fn title(&self) -> String {
        match self.catalogue.len() {
            1 => "1 entry - IcedFlash".to_string(),
            n => format!("{n} entries - IcedFlash"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let click_sub = subscription::create_click_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_pending_timers());

        Subscription::batch([click_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
            }
            Message::Menu(message) => {
                if let menu::Event::Selected(menu_id, action) = self.menus.update(message) {
                    self.apply_row_action(menu_id, action);
                }
            }
            Message::Show(severity) => {
                self.notifications
                    .show(sample_message(severity), severity);
            }
            Message::CycleTheme => self.cycle_theme(),
        }
        Task::none()
    }

    fn cycle_theme(&mut self) {
        self.theme_mode = self.theme_mode.next();
        self.theme = self.theme_mode.theme();
        self.config.general.theme_mode = self.theme_mode;
        log::debug!("theme mode switched to {:?}", self.theme_mode);

        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            log::warn!("failed to persist theme mode: {err}");
            self.notifications
                .show(format!("Theme could not be saved ({err})"), Severity::Error);
        }
    }

    fn apply_row_action(&mut self, menu_id: menu::MenuId, action: RowAction) {
        match action {
            RowAction::Edit => {
                let Some(entry) = self.catalogue.find(menu_id) else {
                    log::warn!("edit requested for unknown row {menu_id:?}");
                    return;
                };
                let message = format!("Editing \"{}\" is not available in this demo.", entry.title);
                self.notifications.show(message, Severity::Info);
            }
            RowAction::Delete => match self.catalogue.remove(&mut self.menus, menu_id) {
                Some(entry) => {
                    let message =
                        format!("Successfully deleted \"{}\" from the library.", entry.title);
                    self.notifications.show(message, Severity::Success);
                }
                None => {
                    self.notifications
                        .show("Entry not found.", Severity::Error);
                }
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            catalogue: &self.catalogue,
            menus: &self.menus,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
        })
    }
}

/// Text of the toolbar sample toasts.
fn sample_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "Heads up: this is an informational message.",
        Severity::Success => "Saved successfully",
        Severity::Error => "Something went wrong.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::icons::Icon;
    use crate::ui::notifications::{Flash, Notification, Origin};
    use std::time::Duration;

    fn first_menu(app: &App) -> menu::MenuId {
        app.catalogue.entries().next().expect("sample entries").menu
    }

    #[test]
    fn default_app_has_sample_catalogue_and_no_toasts() {
        let app = App::default();
        assert!(!app.catalogue.is_empty());
        assert!(app.notifications.is_empty());
        assert_eq!(app.menus.open_count(), 0);
    }

    #[test]
    fn toolbar_show_appends_toast_with_severity_icon() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Severity::Success));

        let toast = app.notifications.notifications().next().expect("toast shown");
        assert_eq!(toast.message(), "Saved successfully");
        assert_eq!(toast.icon(), Icon::Check);
    }

    #[test]
    fn startup_sweep_adopts_flashes_and_config_warning() {
        let flags = Flags {
            flashes: vec![Flash::new(Severity::Success, "Added")],
            ..Flags::default()
        };
        let now = Instant::now();
        let (mut app, adopted) = App::from_parts(
            flags,
            config::Config::default(),
            Some("broken settings".to_string()),
            now,
        );

        assert_eq!(adopted.len(), 2);
        assert!(app.notifications.notifications().all(|n| n.origin() == Origin::Flash));
        let severities: Vec<_> = app.notifications.notifications().map(Notification::severity).collect();
        assert_eq!(severities, vec![Severity::Success, Severity::Error]);

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Tick(now + Duration::from_millis(5_300)),
        ));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn theme_flag_overrides_config() {
        let flags = Flags {
            theme: Some(ThemeMode::Light),
            ..Flags::default()
        };
        let mut config = config::Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        let (app, _) = App::from_parts(flags, config, None, Instant::now());
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn outside_press_closes_open_row_menu() {
        let mut app = App::default();
        let id = first_menu(&app);

        let _ = app.update(Message::Menu(menu::Message::Toggle(id)));
        assert!(app.menus.is_open(id));

        let _ = app.update(Message::Menu(menu::Message::PointerPressed));
        assert_eq!(app.menus.open_count(), 0);
    }

    #[test]
    fn delete_removes_row_and_reports_success() {
        let mut app = App::default();
        let id = first_menu(&app);
        let title = app.catalogue.find(id).expect("entry").title.clone();
        let before = app.catalogue.len();

        let _ = app.update(Message::Menu(menu::Message::Toggle(id)));
        let _ = app.update(Message::Menu(menu::Message::Select(id, RowAction::Delete)));

        assert_eq!(app.catalogue.len(), before - 1);
        assert_eq!(app.menus.open_count(), 0);
        let toast = app.notifications.notifications().last().expect("toast shown");
        assert_eq!(toast.severity(), Severity::Success);
        assert!(toast.message().contains(&title));
    }

    #[test]
    fn edit_keeps_row_and_reports_info() {
        let mut app = App::default();
        let id = first_menu(&app);
        let before = app.catalogue.len();

        let _ = app.update(Message::Menu(menu::Message::Select(id, RowAction::Edit)));

        assert_eq!(app.catalogue.len(), before);
        let toast = app.notifications.notifications().last().expect("toast shown");
        assert_eq!(toast.severity(), Severity::Info);
    }

    #[test]
    fn cycle_theme_switches_mode_and_persists_it() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut config = config::Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let (mut app, _) = App::from_parts(Flags::default(), config, None, Instant::now());
        app.config_dir = Some(temp_dir.path().to_path_buf());

        let _ = app.update(Message::CycleTheme);

        assert_eq!(app.theme(), Theme::Dark);
        let (saved, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
        assert_eq!(saved.notifications, app.config.notifications);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn title_counts_entries() {
        let app = App::default();
        assert_eq!(
            app.title(),
            format!("{} entries - IcedFlash", app.catalogue.len())
        );
    }

    #[test]
    fn view_renders_with_menu_open_and_toasts() {
        let mut app = App::default();
        let id = first_menu(&app);
        let _ = app.update(Message::Menu(menu::Message::Toggle(id)));
        let _ = app.update(Message::Show(Severity::Error));
        let _ = app.view();
    }
}
