//! Bridges to the document: the OS dark-mode signal and the root class marker.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::constants::{APPEARANCE_SCRIPT, ROOT_THEME_SCRIPT};
use crate::state::AppliedTheme;

use super::theme_coordinator::ThemeTarget;

/// Message sent by `APPEARANCE_SCRIPT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AppearanceEvent {
    /// The OS preference at subscription time
    Initial { dark: bool },
    /// The OS preference flipped
    Change { dark: bool },
}

/// Live subscription to `prefers-color-scheme`.
///
/// Acquire once per mount with [`subscribe`](Self::subscribe) and release with
/// [`unsubscribe`](Self::unsubscribe) when the owner unmounts.
#[derive(Clone)]
pub struct SystemAppearanceWatcher {
    eval: document::Eval,
}

impl SystemAppearanceWatcher {
    pub fn subscribe() -> Self {
        Self {
            eval: document::eval(APPEARANCE_SCRIPT),
        }
    }

    /// Wait for the next report. `None` once the script has gone away.
    pub async fn next_event(&mut self) -> Option<AppearanceEvent> {
        match self.eval.recv::<AppearanceEvent>().await {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::debug!("appearance watcher closed: {err:?}");
                None
            }
        }
    }

    /// Remove the page-side listener.
    pub fn unsubscribe(&self) {
        if let Err(err) = self.eval.send("stop") {
            tracing::debug!("appearance watcher already stopped: {err:?}");
        }
    }
}

/// Current OS dark-mode preference, read synchronously before the first paint.
///
/// Only the browser can answer this up front. Other targets report light and
/// rely on the watcher's `initial` message to correct it.
#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    false
}

/// Script that leaves exactly `theme` on the document root.
pub fn root_theme_script(theme: AppliedTheme) -> String {
    format!(
        "{ROOT_THEME_SCRIPT}root.classList.add(\"{}\");\n",
        theme.class_name()
    )
}

/// Writes the applied theme onto `document.documentElement`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn apply_theme(&self, theme: AppliedTheme) {
        tracing::debug!(theme = theme.class_name(), "applying theme to document root");
        let _ = document::eval(&root_theme_script(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_messages_deserialize() {
        let initial: AppearanceEvent =
            serde_json::from_str(r#"{ "kind": "initial", "dark": true }"#).unwrap();
        assert_eq!(initial, AppearanceEvent::Initial { dark: true });

        let change: AppearanceEvent =
            serde_json::from_str(r#"{ "kind": "change", "dark": false }"#).unwrap();
        assert_eq!(change, AppearanceEvent::Change { dark: false });

        assert!(serde_json::from_str::<AppearanceEvent>(r#"{ "kind": "other" }"#).is_err());
    }

    #[test]
    fn test_root_script_names_its_class_inline() {
        let dark = root_theme_script(AppliedTheme::Dark);
        assert!(dark.contains(r#"root.classList.remove("light", "dark");"#));
        assert!(dark.trim_end().ends_with(r#"root.classList.add("dark");"#));
        assert!(!dark.contains("dioxus.recv"));

        let light = root_theme_script(AppliedTheme::Light);
        assert!(light.trim_end().ends_with(r#"root.classList.add("light");"#));
    }
}
