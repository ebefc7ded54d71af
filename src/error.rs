//! # Error Types
//!
//! Stream problems (bad checksums, unknown sentences, overlong terms) are never errors:
//! they are reported through [`Statement`](crate::Statement). This module covers the
//! fallible calls of the public API.

use core::fmt;

/// Represents all possible errors returned by the public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// All custom term slots of the handle are taken.
    ///
    /// Unregister a custom term to free its slot.
    CustomTermsFull,

    /// The custom term tag is not a sentence tag.
    ///
    /// Tags must start with `$` and fit in the term buffer, e.g. `$GPRMB` or `$PGRME`.
    InvalidTag,

    /// The speed unit abbreviation is not one of the supported units.
    UnknownSpeedUnit,

    /// The published time does not form a valid time of day.
    #[cfg(feature = "time")]
    InvalidTime,

    /// The published date does not form a valid calendar date.
    #[cfg(feature = "time")]
    InvalidDate,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CustomTermsFull => f.write_str("no free custom term slot"),
            Self::InvalidTag => f.write_str("custom term tag must be a `$`-prefixed sentence tag"),
            Self::UnknownSpeedUnit => f.write_str("unknown speed unit"),
            #[cfg(feature = "time")]
            Self::InvalidTime => f.write_str("published time is not a valid time of day"),
            #[cfg(feature = "time")]
            Self::InvalidDate => f.write_str("published date is not a valid calendar date"),
        }
    }
}

impl core::error::Error for Error {}
