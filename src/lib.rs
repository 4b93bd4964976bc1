//! Parsing and formatting of ISO 8601 durations.
//!
//! Durations are turned into elapsed time using fixed rates: a week is 7 days,
//! a year is 365 days. Months have no fixed length, so any non-zero month is rejected.
//!
//! Elapsed time is a signed nanosecond count ([`Elapsed`]).
//! Formatting only emits hours, minutes and seconds, and never fails.
//!
//! ```
//! use isoduration::{format, parse, Unit};
//!
//! let (elapsed, duration) = parse("P1DT2H30M")?;
//!
//! assert_eq!(Unit::hours(26) + Unit::minutes(30), elapsed);
//! assert_eq!(1, duration.days);
//! assert_eq!(2, duration.hours);
//! assert_eq!(30, duration.minutes);
//!
//! assert_eq!("PT26H30M", format(elapsed));
//!
//! // Months are ambiguous
//! assert!(matches!(parse("P1M"), Err(isoduration::Error::NoMonth)));
//!
//! # Ok::<(), isoduration::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod codec;
mod duration;
mod error;
mod pattern;
mod units;

pub use codec::{format, parse};
pub use duration::Duration;
pub use error::{Error, Result};
pub use units::{from_std, to_std, Elapsed, Unit};
