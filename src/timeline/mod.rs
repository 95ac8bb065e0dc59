//! Timeline module
//!
//! The day ruler, its per-marker elements and the step selector. Marker
//! styling lives in `marker_style` as plain functions so it can be tested
//! without a renderer.

mod ruler;
mod marker_element;
mod marker_style;
mod scale_selector;

pub use ruler::TimeRuler;
