use crate::{
    pattern::{match_full, match_week, Fields},
    units::Elapsed,
    Duration, Error, Result, Unit,
};
use std::fmt::Write;

const NANOS_PER_SECOND: Elapsed = Unit::seconds(1);

fn number(digits: Option<&str>) -> Result<u64> {
    digits.map_or(Ok(0), |s| s.parse::<u64>().map_err(Error::from))
}

fn decode(fields: &Fields<'_>) -> Result<Duration> {
    let years = number(fields.years)?;
    let months = number(fields.months)?;

    if months != 0 {
        return Err(Error::NoMonth);
    }

    let duration = Duration {
        years,
        months,
        weeks: number(fields.weeks)?,
        days: number(fields.days)?,
        hours: number(fields.hours)?,
        minutes: number(fields.minutes)?,
        seconds: number(fields.seconds)?,
    };

    Ok(duration)
}

/// Parses an ISO 8601 duration.
///
/// Two forms are understood: the week form (`P2W`) and the full form
/// (`P1Y2DT3H4M5S`), where every component is optional.
/// Years are counted as 365 days. A month component is only accepted if it is zero.
///
/// Returns the total elapsed time in nanoseconds, and the components as written.
///
/// # Errors
///
/// Returns [`Error::BadFormat`] if the whole input matches neither form,
/// [`Error::NoMonth`] if it contains a non-zero month,
/// and [`Error::Conversion`] if a component does not fit into an integer.
///
/// # Examples
///
/// ```
/// use isoduration::{parse, Unit};
///
/// let (elapsed, duration) = parse("P2W")?;
///
/// assert_eq!(Unit::days(14), elapsed);
/// assert_eq!(2, duration.weeks);
///
/// # Ok::<(), isoduration::Error>(())
/// ```
pub fn parse(s: &str) -> Result<(Elapsed, Duration)> {
    let fields = if let Some(fields) = match_week(s) {
        log::trace!("{s:?} matched week form");
        fields
    } else if let Some(fields) = match_full(s) {
        log::trace!("{s:?} matched full form");
        fields
    } else {
        log::debug!("{s:?} is not an ISO 8601 duration");
        return Err(Error::BadFormat);
    };

    let duration = decode(&fields)?;
    let elapsed = duration.elapsed()?;

    log::trace!("parsed {s:?} => {elapsed}ns");

    Ok((elapsed, duration))
}

/// Formats elapsed nanoseconds as an ISO 8601 duration.
///
/// Only hours, minutes and seconds are emitted, so 30 hours stay `PT30H`.
/// Sub-second precision is truncated.
/// Zero, negative and sub-second values all format as `PT0S`.
///
/// # Examples
///
/// ```
/// use isoduration::{format, Unit};
///
/// assert_eq!("PT1H1M1S", format(Unit::seconds(3_661)));
/// assert_eq!("PT30H", format(Unit::hours(30)));
/// assert_eq!("PT0S", format(-Unit::seconds(5)));
/// ```
#[must_use]
pub fn format(elapsed: Elapsed) -> String {
    let total_seconds = elapsed / NANOS_PER_SECOND;

    if total_seconds <= 0 {
        return "PT0S".into();
    }

    let hours = total_seconds / 3_600;
    let minutes = total_seconds / 60 - hours * 60;
    let seconds = total_seconds - (hours * 3_600 + minutes * 60);

    let mut s = String::with_capacity(16);
    s.push_str("PT");

    // NOTE: Writing to a String never fails
    if hours > 0 {
        let _ = write!(s, "{hours}H");
    }
    if minutes > 0 {
        let _ = write!(s, "{minutes}M");
    }
    if seconds > 0 {
        let _ = write!(s, "{seconds}S");
    }

    s
}
