use dioxus::prelude::*;

use crate::constants::*;
use crate::state::ThemePreference;

/// Floating panel in the bottom-right corner with appearance and ruler options.
///
/// Theme state belongs to the parent; this only renders it and reports clicks.
/// The compact-ruler checkbox keeps a local copy, seeded from `compact_ruler`.
#[component]
pub fn SettingsPanel(
    theme: ThemePreference,
    follow_system: bool,
    compact_ruler: bool,
    on_theme_change: EventHandler<ThemePreference>,
    on_follow_system_change: EventHandler<bool>,
    on_compact_ruler_change: EventHandler<bool>,
) -> Element {
    let mut compact = use_signal(|| compact_ruler);
    let show_follow_toggle = theme.exposes_follow_toggle();

    rsx! {
        div {
            style: "
                position: fixed; bottom: 16px; right: 16px; z-index: 50;
                background-color: {BG_PANEL}; border: 1px solid {BORDER_PANEL};
                border-radius: 8px; padding: 16px;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
            ",
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                h2 { style: "margin: 0; font-size: 18px; font-weight: 600; color: {TEXT_PRIMARY};", "Settings" }

                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    h3 { style: "margin: 0; font-size: 14px; font-weight: 500; color: {TEXT_SECONDARY};", "Appearance" }

                    div {
                        style: "display: flex; flex-direction: column; gap: 8px;",
                        div {
                            style: "display: flex; align-items: center; gap: 8px;",
                            span { style: "font-size: 14px; color: {TEXT_SECONDARY};", "Theme:" }
                            div {
                                style: "display: flex; align-items: center; gap: 8px;",
                                div {
                                    style: "display: flex; border-radius: 6px; overflow: hidden; border: 1px solid {BORDER_PANEL};",
                                    ThemeBtn {
                                        choice: ThemePreference::Light,
                                        active: theme == ThemePreference::Light,
                                        rounded: false,
                                        on_select: move |choice| on_theme_change.call(choice),
                                    }
                                    ThemeBtn {
                                        choice: ThemePreference::Dark,
                                        active: theme == ThemePreference::Dark,
                                        rounded: false,
                                        on_select: move |choice| on_theme_change.call(choice),
                                    }
                                }
                                ThemeBtn {
                                    choice: ThemePreference::System,
                                    active: theme == ThemePreference::System,
                                    rounded: true,
                                    on_select: move |choice| on_theme_change.call(choice),
                                }
                            }
                        }
                        if show_follow_toggle {
                            label {
                                style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: {TEXT_SECONDARY};",
                                input {
                                    r#type: "checkbox",
                                    checked: follow_system,
                                    style: "width: 16px; height: 16px; accent-color: {BG_BUTTON_ACTIVE};",
                                    onchange: move |evt: FormEvent| on_follow_system_change.call(evt.checked()),
                                }
                                "Reset by next system color changes"
                            }
                        }
                    }

                    div { style: "height: 1px; background-color: {BORDER_PANEL};" }

                    div {
                        style: "display: flex; flex-direction: column; gap: 8px;",
                        label {
                            style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: {TEXT_SECONDARY};",
                            input {
                                r#type: "checkbox",
                                checked: compact(),
                                style: "width: 16px; height: 16px; accent-color: {BG_BUTTON_ACTIVE};",
                                onchange: move |evt: FormEvent| {
                                    let enabled = evt.checked();
                                    compact.set(enabled);
                                    on_compact_ruler_change.call(enabled);
                                },
                            }
                            div {
                                style: "display: flex; flex-direction: column;",
                                span { "Compact ruler design" }
                                span { style: "font-size: 12px; color: {TEXT_MUTED};", "Align markers to the left" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeBtn(
    choice: ThemePreference,
    active: bool,
    rounded: bool,
    on_select: EventHandler<ThemePreference>,
) -> Element {
    let (bg, fg) = if active {
        (BG_BUTTON_ACTIVE, TEXT_ON_ACCENT)
    } else {
        (BG_BUTTON, TEXT_MUTED)
    };
    let radius = if rounded { "6px" } else { "0" };
    rsx! {
        button {
            class: "theme-btn",
            style: "
                padding: 4px 12px; border: none; border-radius: {radius};
                background-color: {bg}; color: {fg}; font-size: 14px; cursor: pointer;
                transition: background-color 0.15s ease, color 0.15s ease;
            ",
            onclick: move |_| on_select.call(choice),
            "{choice.display_name()}"
        }
    }
}
