//! Track dimension (`track`).

use std::fmt;
use std::str::FromStr;

use crate::dimension::Dimension;
use crate::error::DimensionError;

/// A track selection by name.
///
/// Track names are defined by the media resource, so any non-empty value
/// is accepted as is.
///
/// # Examples
///
/// ```
/// use media_fragments::TrackFragment;
///
/// let track = TrackFragment::parse("audio").unwrap();
/// assert_eq!(track.name(), "audio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackFragment {
    value: String,
    name: String,
}

impl TrackFragment {
    /// Accepts a decoded `track` value.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Empty`] if the value is empty.
    pub fn parse(input: &str) -> Result<Self, DimensionError> {
        if input.is_empty() {
            return Err(DimensionError::Empty {
                dimension: Dimension::Track,
            });
        }
        Ok(Self {
            value: input.to_string(),
            name: input.to_string(),
        })
    }

    /// Returns the decoded value this fragment was parsed from.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the track name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TrackFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for TrackFragment {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
