use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::Granularity;

/// One tick on the ruler, somewhere inside a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Minute within the hour (0-59)
    pub minute_of_hour: u32,
    /// Hour of the day (0-23)
    pub hour_of_day: u32,
    /// True when `minute_of_hour == 0`
    pub is_hour_boundary: bool,
    /// Hour number on boundaries, minute number elsewhere. Never zero-padded.
    pub label: String,
    /// Whether this marker sits at an even index in its sequence
    pub parity_even: bool,
    /// Render key, unique per granularity and instant
    pub identity: String,
}

impl Marker {
    /// Minutes since midnight.
    pub fn absolute_minute(&self) -> u32 {
        self.hour_of_day * 60 + self.minute_of_hour
    }
}

fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}

/// Every tick of `day` at the given step, ascending from midnight.
///
/// All allowed steps divide 1440, so this yields exactly `1440 / minutes` markers.
pub fn generate_markers(granularity: Granularity, day: NaiveDate) -> Vec<Marker> {
    let step_minutes = granularity.minutes();
    let step = Duration::minutes(i64::from(step_minutes));
    let (start, end) = day_bounds(day);

    let mut markers = Vec::with_capacity((24 * 60 / step_minutes) as usize);
    let mut instant = start;
    while instant <= end {
        let index = markers.len();
        let minute_of_hour = instant.minute();
        let hour_of_day = instant.hour();
        let is_hour_boundary = minute_of_hour == 0;
        let label = if is_hour_boundary {
            hour_of_day.to_string()
        } else {
            minute_of_hour.to_string()
        };
        markers.push(Marker {
            minute_of_hour,
            hour_of_day,
            is_hour_boundary,
            label,
            parity_even: index % 2 == 0,
            identity: format!("{}-{}", step_minutes, instant.and_utc().timestamp_millis()),
        });
        instant += step;
    }
    markers
}

/// Holds the marker sequence for the most recent (granularity, day) pair.
#[derive(Debug, Default)]
pub struct MarkerCache {
    entry: Option<(Granularity, NaiveDate, Rc<[Marker]>)>,
}

impl MarkerCache {
    /// Markers for the key, regenerating only when it differs from the cached one.
    pub fn markers_for(&mut self, granularity: Granularity, day: NaiveDate) -> Rc<[Marker]> {
        if let Some((cached_scale, cached_day, markers)) = &self.entry {
            if *cached_scale == granularity && *cached_day == day {
                return Rc::clone(markers);
            }
        }
        let markers: Rc<[Marker]> = generate_markers(granularity, day).into();
        tracing::debug!(
            minutes = granularity.minutes(),
            count = markers.len(),
            "regenerated ruler markers"
        );
        self.entry = Some((granularity, day, Rc::clone(&markers)));
        markers
    }
}
