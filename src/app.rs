//! Root application component
//!
//! Owns the canonical widget state (step, compact flag, theme preferences),
//! wires the ruler and the settings panel together and keeps the OS appearance
//! subscription alive for as long as it is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::SettingsPanel;
use crate::constants::{BG_APP, BG_BUTTON, TEXT_PRIMARY, THEME_STYLESHEET, VIEWPORT_SCRIPT};
use crate::core::appearance::{system_prefers_dark, DocumentRoot, SystemAppearanceWatcher};
use crate::core::preferences::open_platform_store;
use crate::core::theme_coordinator::ThemeCoordinator;
use crate::state::Granularity;
use crate::timeline::TimeRuler;

#[component]
pub fn App() -> Element {
    let mut granularity = use_signal(Granularity::default);
    let mut compact_ruler = use_signal(|| true);
    let mut theme = use_signal(|| {
        ThemeCoordinator::load(open_platform_store(), DocumentRoot, system_prefers_dark())
    });
    let viewport_width = use_signal(|| 0.0_f64);
    let appearance = use_hook(|| Rc::new(RefCell::new(None::<SystemAppearanceWatcher>)));

    use_effect(move || {
        theme.peek().apply();
    });

    let appearance_slot = appearance.clone();
    use_future(move || {
        let mut theme = theme;
        let appearance_slot = appearance_slot.clone();
        async move {
            let mut watcher = SystemAppearanceWatcher::subscribe();
            *appearance_slot.borrow_mut() = Some(watcher.clone());
            while let Some(event) = watcher.next_event().await {
                theme.write().handle_appearance(event);
            }
        }
    });

    use_drop(move || {
        if let Some(watcher) = appearance.borrow_mut().take() {
            watcher.unsubscribe();
        }
    });

    use_future(move || {
        let mut viewport_width = viewport_width;
        async move {
            let mut eval = document::eval(VIEWPORT_SCRIPT);
            while let Ok(width) = eval.recv::<f64>().await {
                let width = width.max(0.0);
                if (viewport_width() - width).abs() > 0.5 {
                    viewport_width.set(width);
                }
            }
        }
    });

    let settings = theme.read().settings();
    let color_scheme = theme.read().applied().class_name();

    rsx! {
        style { "{THEME_STYLESHEET}" }
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; }}
            body {{ -webkit-font-smoothing: antialiased; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}
            .step-btn:not(:disabled):hover {{ background-color: {BG_BUTTON} !important; }}
            .theme-btn:hover {{ filter: brightness(0.95); }}
            "#
        }

        div {
            style: "min-height: 100vh; background-color: {BG_APP}; color: {TEXT_PRIMARY}; color-scheme: {color_scheme}; transition: background-color 0.2s ease;",
            TimeRuler {
                granularity: granularity(),
                viewport_width: viewport_width(),
                compact_ruler: compact_ruler(),
                on_granularity_change: move |next: Granularity| {
                    tracing::debug!(minutes = next.minutes(), "ruler step changed");
                    granularity.set(next);
                },
            }
            SettingsPanel {
                theme: settings.theme,
                follow_system: settings.follow_system,
                compact_ruler: compact_ruler(),
                on_theme_change: move |choice| theme.write().select_theme(choice),
                on_follow_system_change: move |follow| theme.write().set_follow_system(follow),
                on_compact_ruler_change: move |compact: bool| {
                    tracing::debug!(compact, "compact ruler toggled");
                    compact_ruler.set(compact);
                },
            }
        }
    }
}
