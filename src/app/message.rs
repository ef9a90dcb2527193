// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::catalogue::RowAction;
use crate::ui::menu;
use crate::ui::notifications::{Flash, NotificationMessage, Severity};
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    Menu(menu::Message<RowAction>),
    /// Toolbar request to show a sample toast.
    Show(Severity),
    /// Toolbar request to switch to the next theme mode and persist it.
    CycleTheme,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FLASH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Theme override; wins over `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
    /// Messages that exist before the window opens, swept on startup.
    pub flashes: Vec<Flash>,
}
