//! Theme settings: fonts, colors, spacing, custom code

pub mod handler;
pub mod types;

pub use types::ThemeSettings;

pub const THEME_SETTINGS_CONFIG: &str = "theme_settings";

// vim: ts=4
