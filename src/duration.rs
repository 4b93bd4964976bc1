use crate::{units::Elapsed, Error, Unit};

/// Structured breakdown of an ISO 8601 duration, exactly as written.
///
/// ```
/// use isoduration::Duration;
///
/// let duration: Duration = "P1Y2DT3H".parse()?;
///
/// assert_eq!(1, duration.years);
/// assert_eq!(2, duration.days);
/// assert_eq!(3, duration.hours);
/// assert_eq!("P1Y2DT3H", duration.to_string());
///
/// # Ok::<(), isoduration::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    /// `nY`, counted as 365 days
    pub years: u64,

    /// `nM` before `T`, only ever zero after a successful parse
    pub months: u64,

    /// `nW`
    pub weeks: u64,

    /// `nD`
    pub days: u64,

    /// `nH`
    pub hours: u64,

    /// `nM` after `T`
    pub minutes: u64,

    /// `nS`
    pub seconds: u64,
}

impl Duration {
    /// Returns `true` if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Sums all components into elapsed nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMonth`] if the month component is not zero.
    pub fn elapsed(&self) -> crate::Result<Elapsed> {
        if self.months != 0 {
            return Err(Error::NoMonth);
        }

        Ok(Unit::years(self.years)
            + Unit::weeks(self.weeks)
            + Unit::days(self.days)
            + Unit::hours(self.hours)
            + Unit::minutes(self.minutes)
            + Unit::seconds(self.seconds))
    }
}

impl std::str::FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s).map(|(_, duration)| duration)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }

        f.write_str("P")?;

        for (n, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if n > 0 {
                write!(f, "{n}{designator}")?;
            }
        }

        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            f.write_str("T")?;

            for (n, designator) in [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')] {
                if n > 0 {
                    write!(f, "{n}{designator}")?;
                }
            }
        }

        Ok(())
    }
}
