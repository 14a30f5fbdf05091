//! Supported media fragment dimensions.

use std::fmt;
use std::str::FromStr;

use crate::chapter::ChapterFragment;
use crate::constants::{CHAPTER_DIMENSION, SPATIAL_DIMENSION, TIME_DIMENSION, TRACK_DIMENSION};
use crate::error::DimensionError;
use crate::fragment::MediaFragment;
use crate::spatial::SpatialFragment;
use crate::time::TimeFragment;
use crate::track::TrackFragment;

/// A media fragment dimension name.
///
/// The set is closed. Keys outside it are not dimensions and are ignored
/// by the assembler before any validation happens.
///
/// # Examples
///
/// ```
/// use media_fragments::Dimension;
///
/// let dim: Dimension = "xywh".parse().unwrap();
/// assert_eq!(dim, Dimension::Spatial);
/// assert!("foo".parse::<Dimension>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// `t`
    Time,
    /// `xywh`
    Spatial,
    /// `track`
    Track,
    /// `chapter`
    Chapter,
}

impl Dimension {
    /// All dimensions, in declaration order.
    pub const ALL: [Self; 4] = [Self::Time, Self::Spatial, Self::Track, Self::Chapter];

    /// Looks up a dimension by its key name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            TIME_DIMENSION => Some(Self::Time),
            SPATIAL_DIMENSION => Some(Self::Spatial),
            TRACK_DIMENSION => Some(Self::Track),
            CHAPTER_DIMENSION => Some(Self::Chapter),
            _ => None,
        }
    }

    /// Returns the key name of this dimension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => TIME_DIMENSION,
            Self::Spatial => SPATIAL_DIMENSION,
            Self::Track => TRACK_DIMENSION,
            Self::Chapter => CHAPTER_DIMENSION,
        }
    }

    /// Runs this dimension's validator on a decoded value.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError` describing why the value was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_fragments::{Dimension, MediaFragment};
    ///
    /// let frag = Dimension::Time.validate("10,20").unwrap();
    /// assert!(matches!(frag, MediaFragment::Time(_)));
    /// assert!(Dimension::Time.validate("10,5").is_err());
    /// ```
    pub fn validate(self, value: &str) -> Result<MediaFragment, DimensionError> {
        match self {
            Self::Time => TimeFragment::parse(value).map(MediaFragment::Time),
            Self::Spatial => SpatialFragment::parse(value).map(MediaFragment::Spatial),
            Self::Track => TrackFragment::parse(value).map(MediaFragment::Track),
            Self::Chapter => ChapterFragment::parse(value).map(MediaFragment::Chapter),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or("not a media fragment dimension")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
