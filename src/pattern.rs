use regex::{Captures, Regex};
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static WEEK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P(?P<week>\d+)W$").expect("week pattern is valid"));

#[allow(clippy::expect_used)]
static FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^P",
        r"(?:(?P<year>\d+)Y)?",
        r"(?:(?P<month>\d+)M)?",
        r"(?:(?P<day>\d+)D)?",
        r"(?:T",
        r"(?:(?P<hour>\d+)H)?",
        r"(?:(?P<minute>\d+)M)?",
        r"(?:(?P<second>\d+)S)?",
        r")?$",
    ))
    .expect("full pattern is valid")
});

/// Digit runs of every designator present in the input.
///
/// `None` means the designator did not appear.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Fields<'a> {
    pub years: Option<&'a str>,
    pub months: Option<&'a str>,
    pub weeks: Option<&'a str>,
    pub days: Option<&'a str>,
    pub hours: Option<&'a str>,
    pub minutes: Option<&'a str>,
    pub seconds: Option<&'a str>,
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Matches the week-only form, e.g. `P2W`.
pub fn match_week(s: &str) -> Option<Fields<'_>> {
    let caps = WEEK.captures(s)?;

    Some(Fields {
        weeks: group(&caps, "week"),
        ..Default::default()
    })
}

/// Matches the full form, e.g. `P1Y2DT3H4M5S`.
pub fn match_full(s: &str) -> Option<Fields<'_>> {
    let caps = FULL.captures(s)?;

    Some(Fields {
        years: group(&caps, "year"),
        months: group(&caps, "month"),
        weeks: None,
        days: group(&caps, "day"),
        hours: group(&caps, "hour"),
        minutes: group(&caps, "minute"),
        seconds: group(&caps, "second"),
    })
}
