/// Minute steps the ruler can show, in ascending order.
pub const TIME_SCALES: [u32; 6] = [1, 5, 10, 15, 30, 60];

/// Index into `TIME_SCALES` used when nothing else has been chosen (10 minutes).
const DEFAULT_SCALE_INDEX: usize = 2;

/// The minute step between adjacent ruler ticks.
///
/// Stored as an index into [`TIME_SCALES`], so a value outside the fixed set
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Granularity {
    index: usize,
}

impl Granularity {
    /// Build from a position in `TIME_SCALES`. Returns `None` past the end.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TIME_SCALES.len()).then_some(Self { index })
    }

    /// Look up the granularity with exactly this many minutes.
    #[cfg(test)]
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        TIME_SCALES
            .iter()
            .position(|&m| m == minutes)
            .map(|index| Self { index })
    }

    pub fn minutes(self) -> u32 {
        TIME_SCALES[self.index]
    }

    /// Next coarser step, or `None` at 60 minutes.
    pub fn increment(self) -> Option<Self> {
        Self::from_index(self.index + 1)
    }

    /// Next finer step, or `None` at 1 minute.
    pub fn decrement(self) -> Option<Self> {
        self.index.checked_sub(1).map(|index| Self { index })
    }

    pub fn is_coarsest(self) -> bool {
        self.index == TIME_SCALES.len() - 1
    }

    pub fn is_finest(self) -> bool {
        self.index == 0
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Self {
            index: DEFAULT_SCALE_INDEX,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}M", self.minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ten_minutes() {
        let scale = Granularity::default();
        assert_eq!(scale, Granularity::from_index(2).unwrap());
        assert_eq!(scale.minutes(), 10);
        assert_eq!(scale.to_string(), "10M");
    }

    #[test]
    fn test_increment_saturates_at_sixty() {
        let mut scale = Granularity::default();
        for _ in 0..6 {
            if let Some(next) = scale.increment() {
                scale = next;
            }
        }
        assert_eq!(scale.minutes(), 60);
        assert!(scale.is_coarsest());
        assert!(scale.increment().is_none());
    }

    #[test]
    fn test_decrement_saturates_at_one() {
        let mut scale = Granularity::from_index(5).unwrap();
        for _ in 0..6 {
            if let Some(next) = scale.decrement() {
                scale = next;
            }
        }
        assert_eq!(scale.minutes(), 1);
        assert!(scale.is_finest());
        assert!(scale.decrement().is_none());
    }

    #[test]
    fn test_only_listed_minutes_are_constructible() {
        let minutes: Vec<u32> = (0..TIME_SCALES.len())
            .filter_map(Granularity::from_index)
            .map(Granularity::minutes)
            .collect();
        assert_eq!(minutes, TIME_SCALES);
        assert!(Granularity::from_index(TIME_SCALES.len()).is_none());
        assert_eq!(Granularity::from_minutes(15), Granularity::from_index(3));
        assert!(Granularity::from_minutes(7).is_none());
    }
}
