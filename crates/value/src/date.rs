//! Millisecond-precision instants.

/// An instant in time with millisecond precision, counted from the Unix
/// epoch. Negative values are instants before the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    ms: i64,
}

impl Date {
    /// Create an instant from milliseconds since the Unix epoch.
    pub fn from_millis(ms: i64) -> Self {
        Self { ms }
    }

    /// Milliseconds since the Unix epoch.
    pub fn millis(&self) -> i64 {
        self.ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_instant_equal() {
        assert_eq!(Date::from_millis(1_672_567_200_000), Date::from_millis(1_672_567_200_000));
    }

    #[test]
    fn different_instant_unequal() {
        assert_ne!(Date::from_millis(0), Date::from_millis(1));
    }

    #[test]
    fn pre_epoch_instants() {
        let d = Date::from_millis(-86_400_000);
        assert_eq!(d.millis(), -86_400_000);
    }
}
