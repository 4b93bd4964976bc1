use std::num::ParseIntError;

/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not an ISO 8601 duration this crate understands.
    BadFormat,

    /// The input has a non-zero month component.
    ///
    /// Months have no fixed length, so they cannot be turned into elapsed time.
    NoMonth,

    /// A component's digits could not be converted to an integer.
    Conversion(ParseIntError),
}

impl From<ParseIntError> for Error {
    fn from(value: ParseIntError) -> Self {
        Self::Conversion(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadFormat => {
                write!(f, "bad format string")
            }
            Self::NoMonth => {
                write!(f, "no months allowed")
            }
            Self::Conversion(e) => {
                write!(f, "{e}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
