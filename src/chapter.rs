//! Chapter dimension (`chapter`).

use std::fmt;
use std::str::FromStr;

use crate::dimension::Dimension;
use crate::error::DimensionError;

/// A chapter selection by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChapterFragment {
    value: String,
    chapter: String,
}

impl ChapterFragment {
    /// Accepts a decoded `chapter` value.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Empty`] if the value is empty.
    pub fn parse(input: &str) -> Result<Self, DimensionError> {
        if input.is_empty() {
            return Err(DimensionError::Empty {
                dimension: Dimension::Chapter,
            });
        }
        Ok(Self {
            value: input.to_string(),
            chapter: input.to_string(),
        })
    }

    /// Returns the decoded value this fragment was parsed from.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the chapter name.
    #[must_use]
    pub fn chapter(&self) -> &str {
        &self.chapter
    }
}

impl fmt::Display for ChapterFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chapter)
    }
}

impl FromStr for ChapterFragment {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
