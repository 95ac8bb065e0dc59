use std::str::FromStr;

use thiserror::Error;

/// The user's theme choice as stored under the `theme` preference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{value}', expected light, dark or system")]
pub struct ParseThemeError {
    pub value: String,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Whether the "reset on next system change" checkbox applies. It only
    /// means something once an explicit light or dark choice has been made.
    pub fn exposes_follow_toggle(self) -> bool {
        self != Self::System
    }

    /// Resolve to a concrete appearance given what the OS currently prefers.
    pub fn resolve(self, system_dark: bool) -> AppliedTheme {
        match self {
            Self::Light => AppliedTheme::Light,
            Self::Dark => AppliedTheme::Dark,
            Self::System => AppliedTheme::from_dark(system_dark),
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

/// The class marker actually placed on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppliedTheme {
    #[default]
    Light,
    Dark,
}

impl AppliedTheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Persisted appearance preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSettings {
    pub theme: ThemePreference,
    /// When set, the next OS appearance flip resets `theme` to `System`.
    pub follow_system: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            follow_system: true,
        }
    }
}
