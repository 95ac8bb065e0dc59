use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::constants::{
    BG_RULER, BG_TRACK, BORDER_DEFAULT, RULER_GUTTER_PX, RULER_HEIGHT_PX, SCROLLBAR_THUMB,
    SCROLLBAR_TRACK,
};
use crate::state::{Granularity, HoverState, MarkerCache};

use super::marker_element::MarkerElement;
use super::marker_style::{derive_label_color, derive_label_position, derive_line_style};
use super::scale_selector::TimeScaleSelector;

/// Scrollable strip of today's ticks with the step selector pinned on the left.
///
/// `viewport_width` only sizes the strip; 0 means "fill the parent".
#[component]
pub fn TimeRuler(
    granularity: Granularity,
    viewport_width: f64,
    compact_ruler: bool,
    on_granularity_change: EventHandler<Granularity>,
) -> Element {
    let marker_cache = use_hook(|| Rc::new(RefCell::new(MarkerCache::default())));
    let mut hover = use_signal(HoverState::default);
    let mut pointer_inside = use_signal(|| false);

    let today = chrono::Local::now().date_naive();
    let markers = marker_cache.borrow_mut().markers_for(granularity, today);
    let hover_now = hover();

    let width_style = if viewport_width > 0.0 {
        format!("width: {viewport_width}px;")
    } else {
        String::new()
    };
    // scrollbar only shows while the pointer is over the ruler
    let scrollbar_color = if pointer_inside() {
        format!("{SCROLLBAR_THUMB} {SCROLLBAR_TRACK}")
    } else {
        "transparent transparent".to_string()
    };

    rsx! {
        div {
            style: "position: relative; {width_style} background-color: {BG_RULER}; border-bottom: 1px solid {BORDER_DEFAULT};",
            onmouseenter: move |_| pointer_inside.set(true),
            onmouseleave: move |_| pointer_inside.set(false),

            div {
                style: "position: absolute; left: 0; top: 0; bottom: 0; width: {RULER_GUTTER_PX}px; z-index: 10; display: flex; align-items: center; justify-content: center; background-color: {BG_RULER}; border-right: 1px solid {BORDER_DEFAULT};",
                TimeScaleSelector {
                    granularity,
                    on_change: move |next: Granularity| on_granularity_change.call(next),
                }
            }
            div {
                style: "position: relative; height: {RULER_HEIGHT_PX}px; margin-left: {RULER_GUTTER_PX}px; overflow-x: auto; overflow-y: hidden; user-select: none; scrollbar-color: {scrollbar_color};",
                div {
                    style: "position: relative; height: 100%; display: flex;",
                    for marker in markers.iter() {
                        {
                            let line = derive_line_style(marker, &hover_now, compact_ruler);
                            let label_color = derive_label_color(marker, &hover_now);
                            let label_position = derive_label_position(marker, compact_ruler);
                            let entered = marker.clone();
                            rsx! {
                                MarkerElement {
                                    key: "{marker.identity}",
                                    marker: marker.clone(),
                                    line,
                                    label_color,
                                    label_position,
                                    compact: compact_ruler,
                                    on_enter: move |_| hover.write().enter(&entered),
                                    on_leave: move |_| hover.write().leave(),
                                }
                            }
                        }
                    }
                }
            }
            // scrollbar track
            div { style: "height: 4px; background-color: {BG_TRACK};" }
        }
    }
}
