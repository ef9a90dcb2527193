// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios through the public API.

use iced_flash::config::{self, Config, NotificationsConfig};
use iced_flash::ui::icons::Icon;
use iced_flash::ui::menu::{ClickTarget, Controller, MenuItem};
use iced_flash::ui::notifications::{Flash, Manager, Notification, Phase, Severity};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn saved_successfully_scenario() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let id = manager.show_at("Saved successfully", Severity::Success, t0);

    let toast = manager.get(id).expect("toast appended");
    assert_eq!(toast.message(), "Saved successfully");
    assert_eq!(toast.icon(), Icon::Check);

    manager.advance(t0 + Duration::from_millis(5_000));
    assert_eq!(manager.get(id).map(Notification::phase), Some(Phase::Exiting));

    manager.advance(t0 + Duration::from_millis(5_300));
    assert!(manager.get(id).is_none());
}

#[test]
fn manual_close_beats_pending_timers() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let id = manager.show_at("Missing title", Severity::Error, t0);

    manager.advance(t0 + Duration::from_millis(1_200));
    assert!(manager.close(id));
    assert!(manager.is_empty());

    // Timers for the closed toast still fire, harmlessly.
    manager.advance(t0 + Duration::from_secs(10));
    assert!(manager.is_empty());
    assert!(!manager.has_pending_timers());
}

#[test]
fn flashes_from_the_command_line_are_swept_like_shown_toasts() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let flashes = ["success:Book added", "error:ISBN is required", "plain note"]
        .iter()
        .map(|raw| Flash::parse(raw));
    manager.adopt_flashes(flashes, t0);

    let icons: Vec<_> = manager.notifications().map(Notification::icon).collect();
    assert_eq!(icons, vec![Icon::Check, Icon::Warning, Icon::Info]);

    manager.advance(t0 + Duration::from_millis(5_300));
    assert!(manager.is_empty());
}

#[test]
fn only_one_menu_is_ever_open() {
    let mut menus: Controller<&'static str> = Controller::new();
    let a = menus.register("a", vec![MenuItem::new("Edit", "edit")]);
    let b = menus.register("b", vec![MenuItem::new("Edit", "edit")]);

    menus.toggle(b);
    menus.toggle(a);
    assert!(menus.is_open(a));
    assert!(!menus.is_open(b));

    menus.handle_click(ClickTarget::Inside(a));
    assert!(menus.is_open(a));

    menus.toggle(a);
    assert_eq!(menus.open_count(), 0);

    menus.toggle(b);
    menus.handle_click(ClickTarget::Outside);
    assert_eq!(menus.open_count(), 0);
}

#[test]
fn configured_timing_drives_the_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        notifications: NotificationsConfig {
            dismiss_delay_ms: Some(1_000),
            exit_duration_ms: Some(0),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    let mut manager = Manager::with_timing(loaded.notifications.timing());
    let t0 = Instant::now();
    let id = manager.show_at("quick", Severity::Info, t0);

    manager.advance(t0 + Duration::from_millis(1_000));
    assert!(manager.get(id).is_none());
}
