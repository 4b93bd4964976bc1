/// Signed elapsed time in nanoseconds.
pub type Elapsed = i128;

/// Helpers for calculating elapsed time frames
///
/// Years are a fixed 365 days and weeks 7 days. Months have no fixed length
/// and are deliberately missing.
///
/// ```
/// use isoduration::Unit;
///
/// assert_eq!(Unit::days(7), Unit::weeks(1));
/// assert_eq!(Unit::days(365), Unit::years(1));
/// assert_eq!(1_000_000_000, Unit::seconds(1));
/// ```
pub struct Unit;

impl Unit {
    /// Formats N years as nanosecond time frame.
    #[must_use]
    pub const fn years(n: u64) -> Elapsed {
        Self::days(n) * 365
    }

    /// Formats N weeks as nanosecond time frame.
    #[must_use]
    pub const fn weeks(n: u64) -> Elapsed {
        Self::days(n) * 7
    }

    /// Formats N days as nanosecond time frame.
    #[must_use]
    pub const fn days(n: u64) -> Elapsed {
        Self::hours(n) * 24
    }

    /// Formats N hours as nanosecond time frame.
    #[must_use]
    pub const fn hours(n: u64) -> Elapsed {
        Self::minutes(n) * 60
    }

    /// Formats N minutes as nanosecond time frame.
    #[must_use]
    pub const fn minutes(n: u64) -> Elapsed {
        Self::seconds(n) * 60
    }

    /// Formats N seconds as nanosecond time frame.
    #[must_use]
    pub const fn seconds(n: u64) -> Elapsed {
        Self::millis(n) * 1_000
    }

    /// Formats N milliseconds as nanosecond time frame.
    #[must_use]
    pub const fn millis(n: u64) -> Elapsed {
        Self::micros(n) * 1_000
    }

    /// Formats N microseconds as nanosecond time frame.
    #[must_use]
    pub const fn micros(n: u64) -> Elapsed {
        Self::nanos(n) * 1_000
    }

    /// Formats N nanoseconds as nanosecond time frame.
    #[must_use]
    pub const fn nanos(n: u64) -> Elapsed {
        n as Elapsed
    }
}

/// Converts a [`std::time::Duration`] into elapsed nanoseconds.
#[must_use]
pub fn from_std(duration: std::time::Duration) -> Elapsed {
    Elapsed::try_from(duration.as_nanos()).unwrap_or(Elapsed::MAX)
}

/// Converts elapsed nanoseconds into a [`std::time::Duration`].
///
/// Returns `None` for negative values and for values too large for it.
#[must_use]
pub fn to_std(elapsed: Elapsed) -> Option<std::time::Duration> {
    let nanos = u128::try_from(elapsed).ok()?;
    let secs = u64::try_from(nanos / 1_000_000_000).ok()?;

    #[allow(clippy::cast_possible_truncation)]
    let subsec = (nanos % 1_000_000_000) as u32;

    Some(std::time::Duration::new(secs, subsec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn unit_rates() {
        assert_eq!(60 * Unit::seconds(1), Unit::minutes(1));
        assert_eq!(3_600 * Unit::seconds(1), Unit::hours(1));
        assert_eq!(86_400 * Unit::seconds(1), Unit::days(1));
        assert_eq!(604_800 * Unit::seconds(1), Unit::weeks(1));
        assert_eq!(31_536_000 * Unit::seconds(1), Unit::years(1));
    }

    #[test]
    fn unit_max_does_not_overflow() {
        let total = Unit::years(u64::MAX)
            + Unit::weeks(u64::MAX)
            + Unit::days(u64::MAX)
            + Unit::hours(u64::MAX)
            + Unit::minutes(u64::MAX)
            + Unit::seconds(u64::MAX);

        assert!(total > 0);
    }

    #[test]
    fn std_conversion() {
        let std = std::time::Duration::new(90, 500);
        let elapsed = from_std(std);

        assert_eq!(Unit::seconds(90) + 500, elapsed);
        assert_eq!(Some(std), to_std(elapsed));
    }

    #[test]
    fn std_conversion_negative() {
        assert_eq!(None, to_std(-1));
        assert_eq!(Some(std::time::Duration::ZERO), to_std(0));
    }

    #[test]
    fn std_conversion_too_large() {
        assert_eq!(None, to_std(Elapsed::MAX));
    }
}
