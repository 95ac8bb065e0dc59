//! Shared UI constants: palette, ruler geometry, preference keys and scripts.
//!
//! Colors are CSS custom properties so the `light` / `dark` class on the
//! document root switches every component at once. `THEME_STYLESHEET` holds
//! the concrete values for both themes.

pub const BG_APP: &str = "var(--bg-app)";
pub const BG_RULER: &str = "var(--bg-ruler)";
pub const BG_PANEL: &str = "var(--bg-panel)";
pub const BG_TRACK: &str = "var(--bg-track)";
pub const BG_BUTTON: &str = "var(--bg-button)";
pub const BG_BUTTON_ACTIVE: &str = "var(--bg-button-active)";

pub const BORDER_DEFAULT: &str = "var(--border-default)";
pub const BORDER_PANEL: &str = "var(--border-panel)";

pub const TEXT_PRIMARY: &str = "var(--text-primary)";
pub const TEXT_SECONDARY: &str = "var(--text-secondary)";
pub const TEXT_MUTED: &str = "var(--text-muted)";
pub const TEXT_ON_ACCENT: &str = "var(--text-on-accent)";

pub const LINE_NEUTRAL_HOUR: &str = "var(--line-neutral-hour)";
pub const LINE_NEUTRAL_EVEN: &str = "var(--line-neutral-even)";
pub const LINE_NEUTRAL_ODD: &str = "var(--line-neutral-odd)";
pub const LINE_ACCENT_HOUR: &str = "var(--line-accent-hour)";
pub const LINE_ACCENT_EVEN: &str = "var(--line-accent-even)";
pub const LINE_ACCENT_ODD: &str = "var(--line-accent-odd)";

pub const LABEL_HOUR: &str = "var(--label-hour)";
pub const LABEL_HOUR_ACCENT: &str = "var(--label-hour-accent)";
pub const LABEL_MINUTE: &str = "var(--label-minute)";
pub const LABEL_MINUTE_ACCENT: &str = "var(--label-minute-accent)";

pub const SELECTOR_FRAME: &str = "var(--selector-frame)";
pub const SELECTOR_CELL: &str = "var(--selector-cell)";
pub const SELECTOR_TEXT: &str = "var(--selector-text)";
pub const SELECTOR_TEXT_DISABLED: &str = "var(--selector-text-disabled)";

pub const SCROLLBAR_THUMB: &str = "var(--scrollbar-thumb)";
pub const SCROLLBAR_TRACK: &str = "var(--scrollbar-track)";

pub const THEME_STYLESHEET: &str = r#"
:root.light {
    --bg-app: #f9fafb; --bg-ruler: #ffffff; --bg-panel: #ffffff; --bg-track: #f3f4f6;
    --bg-button: #f3f4f6; --bg-button-active: #2563eb;
    --border-default: #e5e7eb; --border-panel: #e5e7eb;
    --text-primary: #111827; --text-secondary: #374151; --text-muted: #6b7280; --text-on-accent: #ffffff;
    --line-neutral-hour: #d1d5db; --line-neutral-even: #d1d5db; --line-neutral-odd: #e5e7eb;
    --line-accent-hour: #2563eb; --line-accent-even: #2563eb; --line-accent-odd: #60a5fa;
    --label-hour: #4b5563; --label-hour-accent: #2563eb; --label-minute: #9ca3af; --label-minute-accent: #2563eb;
    --selector-frame: #e5e7eb; --selector-cell: #ffffff; --selector-text: #374151; --selector-text-disabled: #9ca3af;
    --scrollbar-thumb: #d1d5db; --scrollbar-track: transparent;
}
:root.dark {
    --bg-app: #111827; --bg-ruler: #111827; --bg-panel: #1f2937; --bg-track: #1f2937;
    --bg-button: #374151; --bg-button-active: #2563eb;
    --border-default: #1f2937; --border-panel: #374151;
    --text-primary: #ffffff; --text-secondary: #d1d5db; --text-muted: #9ca3af; --text-on-accent: #ffffff;
    --line-neutral-hour: #4b5563; --line-neutral-even: #4b5563; --line-neutral-odd: #6b7280;
    --line-accent-hour: #60a5fa; --line-accent-even: #60a5fa; --line-accent-odd: #93c5fd;
    --label-hour: #f3f4f6; --label-hour-accent: #60a5fa; --label-minute: #6b7280; --label-minute-accent: #60a5fa;
    --selector-frame: #374151; --selector-cell: #1f2937; --selector-text: #d1d5db; --selector-text-disabled: #4b5563;
    --scrollbar-thumb: #4b5563; --scrollbar-track: transparent;
}
"#;

pub const RULER_HEIGHT_PX: f64 = 96.0;
pub const RULER_GUTTER_PX: f64 = 120.0;
pub const MARKER_CELL_WIDTH: &str = "2ch";
pub const MARKER_TRANSITION: &str = "all 0.3s ease-in-out";

/// Preference key holding `light`, `dark` or `system`.
pub const THEME_KEY: &str = "theme";
/// Preference key holding a JSON boolean.
pub const FOLLOW_SYSTEM_KEY: &str = "shouldFollowSystem";

pub const PREFERENCES_FILENAME: &str = "preferences.json";
pub const APP_DIR_NAME: &str = "day-ruler";

/// Reports the OS dark-mode preference once, then on every change, until told to stop.
pub const APPEARANCE_SCRIPT: &str = r#"
const query = window.matchMedia("(prefers-color-scheme: dark)");
const onChange = (event) => dioxus.send({ kind: "change", dark: event.matches });
query.addEventListener("change", onChange);
dioxus.send({ kind: "initial", dark: query.matches });

while (true) {
    const msg = await dioxus.recv();
    if (msg === "stop") {
        query.removeEventListener("change", onChange);
        break;
    }
}
"#;

/// Clears both theme markers; `root_theme_script` appends the `add` for the new one.
pub const ROOT_THEME_SCRIPT: &str = r#"
const root = document.documentElement;
root.classList.remove("light", "dark");
"#;

pub const VIEWPORT_SCRIPT: &str = r#"
let lastWidth = null;

function sendWidth() {
    const width = window.innerWidth || 0;
    if (lastWidth !== null && Math.abs(lastWidth - width) < 0.5) {
        return;
    }
    lastWidth = width;
    dioxus.send(width);
}

window.addEventListener("resize", sendWidth, { passive: true });
sendWidth();
await new Promise(() => {});
"#;
