//! Normalized media fragment records.

use std::fmt;

use crate::chapter::ChapterFragment;
use crate::dimension::Dimension;
use crate::spatial::SpatialFragment;
use crate::time::TimeFragment;
use crate::track::TrackFragment;

/// A validated and normalized media fragment, one variant per dimension.
///
/// # Examples
///
/// ```
/// use media_fragments::{Dimension, MediaFragment};
///
/// let frag = Dimension::Track.validate("audio").unwrap();
/// assert_eq!(frag.dimension(), Dimension::Track);
/// assert_eq!(frag.value(), "audio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MediaFragment {
    /// Temporal fragment (`t`)
    Time(TimeFragment),
    /// Spatial fragment (`xywh`)
    Spatial(SpatialFragment),
    /// Track fragment (`track`)
    Track(TrackFragment),
    /// Chapter fragment (`chapter`)
    Chapter(ChapterFragment),
}

impl MediaFragment {
    /// Returns the dimension this fragment belongs to.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Time(_) => Dimension::Time,
            Self::Spatial(_) => Dimension::Spatial,
            Self::Track(_) => Dimension::Track,
            Self::Chapter(_) => Dimension::Chapter,
        }
    }

    /// Returns the decoded value this fragment was parsed from.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Time(t) => t.value(),
            Self::Spatial(s) => s.value(),
            Self::Track(t) => t.value(),
            Self::Chapter(c) => c.value(),
        }
    }

    /// Returns the temporal fragment, if this is one.
    #[must_use]
    pub const fn as_time(&self) -> Option<&TimeFragment> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the spatial fragment, if this is one.
    #[must_use]
    pub const fn as_spatial(&self) -> Option<&SpatialFragment> {
        match self {
            Self::Spatial(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the track fragment, if this is one.
    #[must_use]
    pub const fn as_track(&self) -> Option<&TrackFragment> {
        match self {
            Self::Track(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the chapter fragment, if this is one.
    #[must_use]
    pub const fn as_chapter(&self) -> Option<&ChapterFragment> {
        match self {
            Self::Chapter(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the record's named fields in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Time(t) => vec![
                ("value", t.value()),
                ("unit", t.unit().as_str()),
                ("start", t.start()),
                ("end", t.end()),
            ],
            Self::Spatial(s) => vec![
                ("value", s.value()),
                ("unit", s.unit().as_str()),
                ("x", s.x()),
                ("y", s.y()),
                ("w", s.w()),
                ("h", s.h()),
            ],
            Self::Track(t) => vec![("value", t.value()), ("name", t.name())],
            Self::Chapter(c) => vec![("value", c.value()), ("chapter", c.chapter())],
        }
    }
}

/// Writes the normalized value (without the dimension key).
impl fmt::Display for MediaFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time(t) => fmt::Display::fmt(t, f),
            Self::Spatial(s) => fmt::Display::fmt(s, f),
            Self::Track(t) => fmt::Display::fmt(t, f),
            Self::Chapter(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<TimeFragment> for MediaFragment {
    fn from(t: TimeFragment) -> Self {
        Self::Time(t)
    }
}

impl From<SpatialFragment> for MediaFragment {
    fn from(s: SpatialFragment) -> Self {
        Self::Spatial(s)
    }
}

impl From<TrackFragment> for MediaFragment {
    fn from(t: TrackFragment) -> Self {
        Self::Track(t)
    }
}

impl From<ChapterFragment> for MediaFragment {
    fn from(c: ChapterFragment) -> Self {
        Self::Chapter(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_matches_variant() {
        for dim in Dimension::ALL {
            let value = match dim {
                Dimension::Time => "10,20",
                Dimension::Spatial => "1,2,3,4",
                Dimension::Track | Dimension::Chapter => "name",
            };
            assert_eq!(dim.validate(value).unwrap().dimension(), dim);
        }
    }

    #[test]
    fn accessors_select_variant() {
        let frag = MediaFragment::from(TimeFragment::parse("10,20").unwrap());
        assert!(frag.as_time().is_some());
        assert!(frag.as_spatial().is_none());
        assert!(frag.as_track().is_none());
        assert!(frag.as_chapter().is_none());
    }

    #[test]
    fn time_fields_in_order() {
        let frag = Dimension::Time.validate("npt:10:00,npt:20:00").unwrap();
        assert_eq!(
            frag.fields(),
            vec![
                ("value", "npt:10:00,npt:20:00"),
                ("unit", "npt"),
                ("start", "600"),
                ("end", "1200"),
            ]
        );
    }

    #[test]
    fn display_delegates_to_variant() {
        let frag = Dimension::Spatial.validate("10,10,100,100").unwrap();
        assert_eq!(frag.to_string(), "pixel:10,10,100,100");
        let frag = Dimension::Chapter.validate("intro").unwrap();
        assert_eq!(frag.to_string(), "intro");
    }
}
