//! UI components outside the ruler itself.

mod settings_panel;

pub use settings_panel::SettingsPanel;
