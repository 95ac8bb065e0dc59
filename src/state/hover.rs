use super::Marker;

/// Which minute marker the pointer is over, if any.
///
/// Only minute markers are ever recorded. Hour markers light up indirectly when
/// a minute inside their hour is hovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered_minute: Option<u32>,
}

impl HoverState {
    pub fn hovered_minute(&self) -> Option<u32> {
        self.hovered_minute
    }

    pub fn hovered_hour(&self) -> Option<u32> {
        self.hovered_minute.map(|minute| minute / 60)
    }

    /// Pointer entered `marker`. No-op for hour boundaries.
    pub fn enter(&mut self, marker: &Marker) {
        if !marker.is_hour_boundary {
            self.hovered_minute = Some(marker.absolute_minute());
        }
    }

    /// Pointer left a marker; always clears.
    pub fn leave(&mut self) {
        self.hovered_minute = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{generate_markers, Granularity};
    use chrono::NaiveDate;

    fn markers() -> Vec<Marker> {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        generate_markers(Granularity::from_minutes(5).unwrap(), day)
    }

    #[test]
    fn test_enter_minute_marker_sets_absolute_minute() {
        let markers = markers();
        let mut hover = HoverState::default();
        hover.enter(&markers[25]);
        assert_eq!(hover.hovered_minute(), Some(125));
        assert_eq!(hover.hovered_hour(), Some(2));
    }

    #[test]
    fn test_enter_hour_marker_is_ignored() {
        let markers = markers();
        let mut hover = HoverState::default();
        hover.enter(&markers[24]);
        assert_eq!(hover.hovered_minute(), None);

        hover.enter(&markers[25]);
        hover.enter(&markers[36]);
        assert_eq!(hover.hovered_minute(), Some(125));
    }

    #[test]
    fn test_leave_clears_unconditionally() {
        let markers = markers();
        let mut hover = HoverState::default();
        hover.enter(&markers[25]);
        hover.leave();
        assert_eq!(hover, HoverState::default());
    }
}
