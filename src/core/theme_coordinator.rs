//! Theme selection, persistence and application.
//!
//! Two things move the theme: the user picking one in the settings panel, and
//! the OS flipping its dark-mode preference. Both end with exactly one of the
//! `light` / `dark` markers on the document root.

use crate::state::{AppliedTheme, ThemePreference, ThemeSettings};

use super::appearance::AppearanceEvent;
use super::preferences::{load_theme_settings, save_follow_system, save_theme, PreferenceStore};

/// Receives the resolved theme. Implementations must leave exactly one marker set.
pub trait ThemeTarget {
    fn apply_theme(&self, theme: AppliedTheme);
}

/// Owns the theme preferences and keeps the root marker in sync with them.
pub struct ThemeCoordinator<S, T> {
    store: S,
    target: T,
    settings: ThemeSettings,
    system_dark: bool,
    applied: AppliedTheme,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeCoordinator<S, T> {
    /// Read stored preferences and resolve them against the OS preference
    /// known at startup. Later reports arrive through `handle_appearance`.
    pub fn load(store: S, target: T, system_dark: bool) -> Self {
        let settings = load_theme_settings(&store);
        tracing::info!(
            theme = settings.theme.as_str(),
            follow_system = settings.follow_system,
            system_dark,
            "loaded theme preferences"
        );
        Self {
            applied: settings.theme.resolve(system_dark),
            store,
            target,
            settings,
            system_dark,
        }
    }

    pub fn settings(&self) -> ThemeSettings {
        self.settings
    }

    pub fn applied(&self) -> AppliedTheme {
        self.applied
    }

    /// Push the current applied theme to the target.
    pub fn apply(&self) {
        self.target.apply_theme(self.applied);
    }

    pub fn select_theme(&mut self, theme: ThemePreference) {
        tracing::info!(theme = theme.as_str(), "theme selected");
        self.settings.theme = theme;
        if let Err(err) = save_theme(&mut self.store, theme) {
            tracing::warn!("failed to persist theme: {err}");
        }
        self.applied = theme.resolve(self.system_dark);
        self.apply();
    }

    pub fn set_follow_system(&mut self, follow: bool) {
        tracing::info!(follow_system = follow, "follow-system toggled");
        self.settings.follow_system = follow;
        if let Err(err) = save_follow_system(&mut self.store, follow) {
            tracing::warn!("failed to persist follow-system flag: {err}");
        }
    }

    pub fn handle_appearance(&mut self, event: AppearanceEvent) {
        match event {
            AppearanceEvent::Initial { dark } => self.observe_system(dark),
            AppearanceEvent::Change { dark } => self.system_changed(dark),
        }
    }

    /// First OS report after mount. Only matters when following `system`.
    pub fn observe_system(&mut self, dark: bool) {
        self.system_dark = dark;
        self.applied = self.settings.theme.resolve(dark);
        self.apply();
    }

    /// OS preference flipped.
    ///
    /// With `follow_system` the preference snaps back to `system` in memory;
    /// the stored value is left alone. The root marker always follows the OS,
    /// even when an explicit light/dark choice remains selected.
    pub fn system_changed(&mut self, dark: bool) {
        tracing::info!(dark, follow_system = self.settings.follow_system, "system appearance changed");
        self.system_dark = dark;
        if self.settings.follow_system {
            self.settings.theme = ThemePreference::System;
        }
        self.applied = AppliedTheme::from_dark(dark);
        self.apply();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FOLLOW_SYSTEM_KEY, THEME_KEY};
    use crate::core::preferences::MemoryStore;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    /// Mimics `classList.remove("light", "dark"); classList.add(theme)`.
    #[derive(Clone, Default)]
    struct RecordingTarget {
        classes: Rc<RefCell<BTreeSet<&'static str>>>,
    }

    impl RecordingTarget {
        fn classes(&self) -> Vec<&'static str> {
            self.classes.borrow().iter().copied().collect()
        }
    }

    impl ThemeTarget for RecordingTarget {
        fn apply_theme(&self, theme: AppliedTheme) {
            let mut classes = self.classes.borrow_mut();
            classes.remove("light");
            classes.remove("dark");
            classes.insert(theme.class_name());
        }
    }

    fn coordinator(store: MemoryStore) -> (ThemeCoordinator<MemoryStore, RecordingTarget>, RecordingTarget) {
        let target = RecordingTarget::default();
        (ThemeCoordinator::load(store, target.clone(), false), target)
    }

    #[test]
    fn test_dark_os_at_startup_paints_dark_first() {
        let root = RecordingTarget::default();
        let theme = ThemeCoordinator::load(MemoryStore::default(), root.clone(), true);
        theme.apply();
        assert_eq!(theme.applied(), AppliedTheme::Dark);
        assert_eq!(root.classes(), vec!["dark"]);
    }

    #[test]
    fn test_explicit_light_wins_over_dark_os_at_startup() {
        let root = RecordingTarget::default();
        let store = MemoryStore::default().with_value(THEME_KEY, "light");
        let theme = ThemeCoordinator::load(store, root.clone(), true);
        theme.apply();
        assert_eq!(root.classes(), vec!["light"]);
    }

    #[test]
    fn test_absent_theme_follows_dark_os() {
        let (mut theme, root) = coordinator(MemoryStore::default());
        theme.apply();
        theme.handle_appearance(AppearanceEvent::Initial { dark: true });
        assert_eq!(theme.settings().theme, ThemePreference::System);
        assert_eq!(theme.applied(), AppliedTheme::Dark);
        assert_eq!(root.classes(), vec!["dark"]);
    }

    #[test]
    fn test_stored_light_ignores_os() {
        let (mut theme, root) = coordinator(MemoryStore::default().with_value(THEME_KEY, "light"));
        theme.handle_appearance(AppearanceEvent::Initial { dark: true });
        assert_eq!(theme.applied(), AppliedTheme::Light);
        assert_eq!(root.classes(), vec!["light"]);
    }

    #[test]
    fn test_initial_report_never_resets_choice() {
        let (mut theme, _root) = coordinator(MemoryStore::default().with_value(THEME_KEY, "dark"));
        theme.observe_system(false);
        assert_eq!(theme.settings().theme, ThemePreference::Dark);
        assert_eq!(theme.applied(), AppliedTheme::Dark);
    }

    #[test]
    fn test_select_theme_persists_and_applies() {
        let (mut theme, root) = coordinator(MemoryStore::default());
        theme.observe_system(true);

        theme.select_theme(ThemePreference::Light);
        assert_eq!(root.classes(), vec!["light"]);
        assert_eq!(theme.store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        theme.select_theme(ThemePreference::System);
        assert_eq!(root.classes(), vec!["dark"]);
        assert_eq!(theme.store.get(THEME_KEY).unwrap().as_deref(), Some("system"));
    }

    #[test]
    fn test_follow_system_flip_resets_to_system() {
        let store = MemoryStore::default()
            .with_value(THEME_KEY, "light")
            .with_value(FOLLOW_SYSTEM_KEY, "true");
        let (mut theme, root) = coordinator(store);
        theme.observe_system(false);

        theme.system_changed(true);
        assert_eq!(theme.settings().theme, ThemePreference::System);
        assert_eq!(theme.applied(), AppliedTheme::Dark);
        assert_eq!(root.classes(), vec!["dark"]);
        // the reset is not written back
        assert_eq!(theme.store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_flip_without_follow_repaints_but_keeps_choice() {
        let store = MemoryStore::default()
            .with_value(THEME_KEY, "light")
            .with_value(FOLLOW_SYSTEM_KEY, "false");
        let (mut theme, root) = coordinator(store);
        theme.observe_system(false);

        theme.handle_appearance(AppearanceEvent::Change { dark: true });
        assert_eq!(theme.settings().theme, ThemePreference::Light);
        assert_eq!(theme.applied(), AppliedTheme::Dark);
        assert_eq!(root.classes(), vec!["dark"]);
    }

    #[test]
    fn test_set_follow_system_persists_json() {
        let (mut theme, _root) = coordinator(MemoryStore::default());
        theme.set_follow_system(false);
        assert!(!theme.settings().follow_system);
        assert_eq!(theme.store.get(FOLLOW_SYSTEM_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_root_always_has_exactly_one_marker() {
        let (mut theme, root) = coordinator(MemoryStore::default());
        theme.apply();
        assert_eq!(root.classes().len(), 1);
        theme.system_changed(true);
        theme.select_theme(ThemePreference::Light);
        theme.system_changed(false);
        theme.select_theme(ThemePreference::Dark);
        assert_eq!(root.classes(), vec!["dark"]);
    }
}
