//! State management module
//!
//! Plain value types shared by the ruler and the settings panel:
//! - Granularity: the minute step between ticks
//! - Marker: one tick of the day, plus the single-entry marker cache
//! - HoverState: the minute marker under the pointer
//! - Theme: stored preference, resolved appearance and persisted settings

mod granularity;
mod marker;
mod hover;
mod theme;

pub use granularity::*;
pub use marker::*;
pub use hover::*;
pub use theme::*;
