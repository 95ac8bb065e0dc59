//! Visual treatment of ruler markers.
//!
//! Everything here is a pure function of a marker, the hover state and the
//! compact flag. Components turn the returned tokens into inline styles.

use crate::constants::{
    LABEL_HOUR, LABEL_HOUR_ACCENT, LABEL_MINUTE, LABEL_MINUTE_ACCENT, LINE_ACCENT_EVEN,
    LINE_ACCENT_HOUR, LINE_ACCENT_ODD, LINE_NEUTRAL_EVEN, LINE_NEUTRAL_HOUR, LINE_NEUTRAL_ODD,
};
use crate::state::{HoverState, Marker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLength {
    Tall,
    Short,
    Shorter,
}

impl LineLength {
    pub fn px(self) -> u32 {
        match self {
            Self::Tall => 24,
            Self::Short => 12,
            Self::Shorter => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    NeutralHour,
    NeutralEven,
    NeutralOdd,
    AccentHour,
    AccentEven,
    AccentOdd,
}

impl LineColor {
    pub fn css(self) -> &'static str {
        match self {
            Self::NeutralHour => LINE_NEUTRAL_HOUR,
            Self::NeutralEven => LINE_NEUTRAL_EVEN,
            Self::NeutralOdd => LINE_NEUTRAL_ODD,
            Self::AccentHour => LINE_ACCENT_HOUR,
            Self::AccentEven => LINE_ACCENT_EVEN,
            Self::AccentOdd => LINE_ACCENT_ODD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub length: LineLength,
    pub color: LineColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Hour,
    HourAccent,
    Minute,
    MinuteAccent,
}

impl LabelColor {
    pub fn css(self) -> &'static str {
        match self {
            Self::Hour => LABEL_HOUR,
            Self::HourAccent => LABEL_HOUR_ACCENT,
            Self::Minute => LABEL_MINUTE,
            Self::MinuteAccent => LABEL_MINUTE_ACCENT,
        }
    }
}

/// Vertical placement of a marker label inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    Top,
    BelowShort,
    BelowTall,
}

impl LabelPosition {
    pub fn top_px(self) -> u32 {
        match self {
            Self::Top => 0,
            Self::BelowShort => LineLength::Short.px(),
            Self::BelowTall => LineLength::Tall.px(),
        }
    }
}

fn hour_length(compact: bool) -> LineLength {
    if compact {
        LineLength::Short
    } else {
        LineLength::Tall
    }
}

fn minute_style(marker: &Marker, even: LineColor, odd: LineColor) -> LineStyle {
    if marker.parity_even {
        LineStyle {
            length: LineLength::Short,
            color: even,
        }
    } else {
        LineStyle {
            length: LineLength::Shorter,
            color: odd,
        }
    }
}

fn neutral_style(marker: &Marker, compact: bool) -> LineStyle {
    if marker.is_hour_boundary {
        LineStyle {
            length: hour_length(compact),
            color: LineColor::NeutralHour,
        }
    } else {
        minute_style(marker, LineColor::NeutralEven, LineColor::NeutralOdd)
    }
}

/// Tick length and color for `marker`.
///
/// The hovered marker takes the accent color. An hour marker also takes it when
/// the hovered minute falls inside its hour. Everything else stays neutral.
pub fn derive_line_style(marker: &Marker, hover: &HoverState, compact: bool) -> LineStyle {
    let Some(hovered) = hover.hovered_minute() else {
        return neutral_style(marker, compact);
    };

    if marker.absolute_minute() == hovered {
        return if marker.is_hour_boundary {
            LineStyle {
                length: hour_length(compact),
                color: LineColor::AccentHour,
            }
        } else {
            minute_style(marker, LineColor::AccentEven, LineColor::AccentOdd)
        };
    }

    if marker.is_hour_boundary && Some(marker.hour_of_day) == hover.hovered_hour() {
        return LineStyle {
            length: hour_length(compact),
            color: LineColor::AccentHour,
        };
    }

    neutral_style(marker, compact)
}

pub fn derive_label_color(marker: &Marker, hover: &HoverState) -> LabelColor {
    if marker.is_hour_boundary {
        if hover.hovered_hour() == Some(marker.hour_of_day) {
            LabelColor::HourAccent
        } else {
            LabelColor::Hour
        }
    } else if hover.hovered_minute() == Some(marker.absolute_minute()) {
        LabelColor::MinuteAccent
    } else {
        LabelColor::Minute
    }
}

pub fn derive_label_position(marker: &Marker, compact: bool) -> LabelPosition {
    if compact {
        LabelPosition::Top
    } else if marker.is_hour_boundary {
        LabelPosition::BelowTall
    } else {
        LabelPosition::BelowShort
    }
}
