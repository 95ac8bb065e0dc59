//! Persisted user preferences.
//!
//! Two keys are stored, `theme` (a plain string) and `shouldFollowSystem` (a
//! JSON boolean). The browser keeps them in `localStorage`; the desktop build
//! keeps the same key/value pairs in a JSON file under the config directory.

use std::collections::HashMap;

use crate::constants::{FOLLOW_SYSTEM_KEY, THEME_KEY};
use crate::state::{ThemePreference, ThemeSettings};

use super::error::PreferenceError;

/// String key/value storage with `localStorage` semantics.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// Volatile store. Used in tests and when no real backend can be opened.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn open() -> Result<Self, PreferenceError> {
        let window = web_sys::window()
            .ok_or_else(|| PreferenceError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|err| PreferenceError::Unavailable(format!("{:?}", err)))?
            .ok_or_else(|| PreferenceError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage
            .get_item(key)
            .map_err(|err| PreferenceError::Storage {
                key: key.to_string(),
                reason: format!("{:?}", err),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| PreferenceError::Storage {
                key: key.to_string(),
                reason: format!("{:?}", err),
            })
    }
}

/// JSON object file holding the same keys the browser would keep.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStore {
    path: std::path::PathBuf,
    values: std::collections::BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Read `path` if it exists. A missing or malformed file is an empty store;
    /// the next `set` rewrites it.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => parse_preference_file(&json).unwrap_or_else(|err| {
                tracing::warn!("ignoring malformed preferences file {}: {err}", path.display());
                Default::default()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Default::default(),
            Err(source) => return Err(PreferenceError::Io { path, source }),
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        let io_error = |source: std::io::Error| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json).map_err(io_error)
    }
}

/// Flatten a JSON object into `localStorage`-style strings. Hand-edited files may
/// hold real JSON values (`true` rather than `"true"`); those keep their JSON text.
#[cfg(not(target_arch = "wasm32"))]
fn parse_preference_file(
    json: &str,
) -> Result<std::collections::BTreeMap<String, String>, PreferenceError> {
    let raw: std::collections::BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(text) => (key, text),
            other => (key, other.to_string()),
        })
        .collect())
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Open the backend for the current platform, or a memory store if that fails.
pub fn open_platform_store() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    let opened = BrowserStore::open();
    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStore::open(super::paths::preferences_path());

    match opened {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!("preferences will not persist: {err}");
            Box::new(MemoryStore::default())
        }
    }
}

/// Read the theme settings, substituting defaults for anything missing or unreadable.
///
/// An unrecognized theme string falls back to `system` instead of being trusted.
pub fn load_theme_settings<S: PreferenceStore + ?Sized>(store: &S) -> ThemeSettings {
    let defaults = ThemeSettings::default();

    let theme = match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|err| {
            tracing::warn!("ignoring stored theme: {err}");
            defaults.theme
        }),
        Ok(None) => defaults.theme,
        Err(err) => {
            tracing::warn!("could not read theme preference: {err}");
            defaults.theme
        }
    };

    let follow_system = match store.get(FOLLOW_SYSTEM_KEY) {
        Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|err| {
            tracing::warn!("ignoring stored {FOLLOW_SYSTEM_KEY} value '{raw}': {err}");
            defaults.follow_system
        }),
        Ok(None) => defaults.follow_system,
        Err(err) => {
            tracing::warn!("could not read {FOLLOW_SYSTEM_KEY} preference: {err}");
            defaults.follow_system
        }
    };

    ThemeSettings {
        theme,
        follow_system,
    }
}

pub fn save_theme<S: PreferenceStore + ?Sized>(
    store: &mut S,
    theme: ThemePreference,
) -> Result<(), PreferenceError> {
    store.set(THEME_KEY, theme.as_str())
}

pub fn save_follow_system<S: PreferenceStore + ?Sized>(
    store: &mut S,
    follow: bool,
) -> Result<(), PreferenceError> {
    let json = serde_json::to_string(&follow)?;
    store.set(FOLLOW_SYSTEM_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Storage {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Storage {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = load_theme_settings(&MemoryStore::default());
        assert_eq!(settings, ThemeSettings::default());
    }

    #[test]
    fn test_stored_values_are_loaded() {
        let store = MemoryStore::default()
            .with_value(THEME_KEY, "dark")
            .with_value(FOLLOW_SYSTEM_KEY, "false");
        let settings = load_theme_settings(&store);
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert!(!settings.follow_system);
    }

    #[test]
    fn test_corrupt_values_fall_back() {
        let store = MemoryStore::default()
            .with_value(THEME_KEY, "solarized")
            .with_value(FOLLOW_SYSTEM_KEY, "yes please");
        let settings = load_theme_settings(&store);
        assert_eq!(settings, ThemeSettings::default());
    }

    #[test]
    fn test_unreadable_backend_falls_back() {
        assert_eq!(load_theme_settings(&BrokenStore), ThemeSettings::default());
        assert!(save_theme(&mut BrokenStore, ThemePreference::Light).is_err());
    }

    #[test]
    fn test_follow_flag_is_written_as_json() {
        let mut store = MemoryStore::default();
        save_follow_system(&mut store, false).unwrap();
        save_theme(&mut store, ThemePreference::Light).unwrap();
        assert_eq!(store.get(FOLLOW_SYSTEM_KEY).unwrap().as_deref(), Some("false"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::default());
        save_theme(&mut store, ThemePreference::Dark).unwrap();
        assert_eq!(load_theme_settings(&store).theme, ThemePreference::Dark);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = std::env::temp_dir().join(format!("day-ruler-prefs-{}", std::process::id()));
        let path = dir.join("preferences.json");
        let _ = std::fs::remove_dir_all(&dir);

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        save_theme(&mut store, ThemePreference::Light).unwrap();
        save_follow_system(&mut store, false).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        let settings = load_theme_settings(&reopened);
        assert_eq!(settings.theme, ThemePreference::Light);
        assert!(!settings.follow_system);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_recovers_from_malformed_file() {
        let dir = std::env::temp_dir().join(format!("day-ruler-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(load_theme_settings(&store), ThemeSettings::default());

        save_theme(&mut store, ThemePreference::Dark).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(load_theme_settings(&reopened).theme, ThemePreference::Dark);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_accepts_hand_written_bool() {
        let dir = std::env::temp_dir().join(format!("day-ruler-bool-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, r#"{ "theme": "dark", "shouldFollowSystem": false }"#).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(FOLLOW_SYSTEM_KEY).unwrap().as_deref(), Some("false"));
        let settings = load_theme_settings(&store);
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert!(!settings.follow_system);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
