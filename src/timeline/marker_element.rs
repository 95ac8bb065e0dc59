use dioxus::prelude::*;

use crate::constants::{MARKER_CELL_WIDTH, MARKER_TRANSITION};
use crate::state::Marker;

use super::marker_style::{LabelColor, LabelPosition, LineStyle};

/// One ruler cell: the tick line plus its label.
#[component]
pub fn MarkerElement(
    marker: Marker,
    line: LineStyle,
    label_color: LabelColor,
    label_position: LabelPosition,
    compact: bool,
    on_enter: EventHandler<()>,
    on_leave: EventHandler<()>,
) -> Element {
    // compact ticks hug the left edge of the cell
    let line_anchor = if compact {
        "left: 0;"
    } else {
        "left: 50%; transform: translateX(-50%);"
    };
    let line_height = line.length.px();
    let line_color = line.color.css();
    let label_top = label_position.top_px();
    let text_color = label_color.css();
    let (font_size, font_weight) = if marker.is_hour_boundary { (12, 500) } else { (10, 400) };

    rsx! {
        div {
            style: "position: relative; width: {MARKER_CELL_WIDTH}; min-width: {MARKER_CELL_WIDTH}; height: 100%; display: flex; flex-direction: column; align-items: center;",
            onmouseenter: move |_| on_enter.call(()),
            onmouseleave: move |_| on_leave.call(()),

            div {
                style: "position: absolute; top: 0; {line_anchor} transition: {MARKER_TRANSITION};",
                div {
                    style: "width: 1px; height: {line_height}px; background-color: {line_color}; transition: {MARKER_TRANSITION};",
                }
            }
            div {
                style: "
                    position: absolute; left: 50%; transform: translateX(-50%);
                    top: {label_top}px; width: {MARKER_CELL_WIDTH}; text-align: center;
                    font-size: {font_size}px; font-weight: {font_weight}; color: {text_color};
                    transition: {MARKER_TRANSITION};
                ",
                "{marker.label}"
            }
        }
    }
}
