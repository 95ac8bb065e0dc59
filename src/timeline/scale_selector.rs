use dioxus::prelude::*;

use crate::constants::{SELECTOR_CELL, SELECTOR_FRAME, SELECTOR_TEXT, SELECTOR_TEXT_DISABLED};
use crate::state::Granularity;

/// Up/down stepper over the fixed list of minute steps.
///
/// Keeps its own index, seeded from `granularity`, and reports every step
/// through `on_change`. Stepping past either end does nothing.
#[component]
pub(crate) fn TimeScaleSelector(granularity: Granularity, on_change: EventHandler<Granularity>) -> Element {
    let current = use_signal(|| granularity);
    let scale = current();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 1px; background-color: {SELECTOR_FRAME}; padding: 1px; border-radius: 8px; user-select: none; overflow: hidden;",
            div {
                style: "min-width: 48px; height: 32px; background-color: {SELECTOR_CELL}; display: flex; align-items: center; justify-content: center; font-size: 16px; font-family: 'SF Mono', Consolas, monospace; color: {SELECTOR_TEXT}; border-radius: 8px 0 0 8px;",
                "{scale}"
            }
            div {
                style: "display: flex; flex-direction: column; height: 32px; background-color: {SELECTOR_CELL}; border-radius: 0 8px 8px 0;",
                StepBtn {
                    icon: "▲",
                    disabled: scale.is_coarsest(),
                    on_click: move |_| step_to(current, on_change, scale.increment()),
                }
                StepBtn {
                    icon: "▼",
                    disabled: scale.is_finest(),
                    on_click: move |_| step_to(current, on_change, scale.decrement()),
                }
            }
        }
    }
}

fn step_to(
    mut current: Signal<Granularity>,
    on_change: EventHandler<Granularity>,
    next: Option<Granularity>,
) {
    let Some(next) = next else {
        return;
    };
    current.set(next);
    on_change.call(next);
}

#[component]
fn StepBtn(icon: &'static str, disabled: bool, on_click: EventHandler<MouseEvent>) -> Element {
    let color = if disabled { SELECTOR_TEXT_DISABLED } else { SELECTOR_TEXT };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            class: "step-btn",
            style: "height: 16px; width: 24px; border: none; padding: 0; background: transparent; color: {color}; font-size: 10px; font-family: 'SF Mono', Consolas, monospace; cursor: {cursor}; display: flex; align-items: center; justify-content: center; transition: background-color 0.12s ease;",
            disabled,
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
