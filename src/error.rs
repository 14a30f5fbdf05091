//! Error types for media fragment parsing.
//!
//! None of these surface from [`Parser::parse`](crate::Parser::parse): a
//! rejected pair is dropped from the result. They are returned by the
//! individual validators and reported as diagnostics when verbose output is
//! enabled.

use std::fmt;

use crate::dimension::Dimension;

/// Reasons a dimension validator rejects a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// Value matches none of the `npt`, `smpte` or `clock` grammars
    InvalidTime,
    /// Both ends of a temporal range are present but not in ascending order
    StartNotBeforeEnd {
        /// Normalized start
        start: String,
        /// Normalized end
        end: String,
    },
    /// Value has wall-clock syntax but is not a real calendar instant
    InvalidClockTime {
        /// The offending side of the range
        value: String,
    },
    /// Value matches neither the pixel nor the percent spatial grammar
    InvalidSpatial,
    /// A percent selection field lies outside `0..=100`
    PercentOutOfRange {
        /// Field name (`x`, `y`, `w` or `h`)
        field: char,
        /// The offending field value
        value: String,
    },
    /// Value is empty
    Empty {
        /// Dimension that received the empty value
        dimension: Dimension,
    },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTime => write!(f, "invalid time dimension"),
            Self::StartNotBeforeEnd { start, end } => {
                write!(
                    f,
                    "start must be less than end (start '{start}', end '{end}')"
                )
            }
            Self::InvalidClockTime { value } => {
                write!(f, "invalid wall-clock time '{value}'")
            }
            Self::InvalidSpatial => write!(f, "invalid spatial dimension"),
            Self::PercentOutOfRange { field, value } => {
                write!(
                    f,
                    "percent value out of range for field {field}: {value} (expected 0 <= {field} <= 100)"
                )
            }
            Self::Empty { dimension } => {
                write!(f, "value for dimension '{dimension}' cannot be empty")
            }
        }
    }
}

impl std::error::Error for DimensionError {}

/// Errors for percent-decoding a key or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// `%` not followed by two hexadecimal digits
    InvalidEscape {
        /// Byte offset of the `%`
        position: usize,
    },
    /// Decoded octets are not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape { position } => {
                write!(f, "invalid percent escape at position {position}")
            }
            Self::InvalidUtf8 => write!(f, "decoded octets are not valid UTF-8"),
        }
    }
}

impl std::error::Error for DecodeError {}
