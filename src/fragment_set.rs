//! Per-component collection of validated media fragments.

use std::fmt;

use crate::chapter::ChapterFragment;
use crate::config::ParserConfig;
use crate::constants::{KEY_VALUE_SEPARATOR, PAIR_SEPARATOR};
use crate::dimension::Dimension;
use crate::fragment::MediaFragment;
use crate::percent;
use crate::spatial::SpatialFragment;
use crate::time::TimeFragment;
use crate::track::TrackFragment;

/// Media fragments found in one URI component (query or hash).
///
/// Maps each dimension to its fragments in the order they appeared.
/// Dimensions are kept in order of first appearance and a repeated key
/// adds to its dimension rather than replacing it.
///
/// # Examples
///
/// ```
/// use media_fragments::{Dimension, FragmentSet, ParserConfig};
///
/// let set = FragmentSet::parse("track=audio&foo=bar&track=video", &ParserConfig::default());
/// let names: Vec<_> = set.tracks().map(|t| t.name()).collect();
/// assert_eq!(names, ["audio", "video"]);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    entries: Vec<(Dimension, Vec<MediaFragment>)>,
}

impl FragmentSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a set from an octet string (a query or hash component
    /// without its leading `?` or `#`).
    ///
    /// Parsing never fails. A pair is dropped when it has no `=`, an empty
    /// key or value, an undecodable escape, or a key that is not a
    /// dimension. A pair whose value the dimension's validator rejects is
    /// dropped too, and reported as a `tracing` warning when
    /// [`ParserConfig::verbose`] is set.
    #[must_use]
    pub fn parse(octets: &str, config: &ParserConfig) -> Self {
        let mut set = Self::new();

        for pair in octets.split(PAIR_SEPARATOR) {
            let Some((raw_key, raw_value)) = split_pair(pair) else {
                continue;
            };
            let Ok(key) = percent::decode(raw_key) else {
                continue;
            };
            let Some(dimension) = Dimension::from_name(&key) else {
                continue;
            };
            let Ok(value) = percent::decode(raw_value) else {
                continue;
            };

            match dimension.validate(&value) {
                Ok(fragment) => set.push(fragment),
                Err(reason) if config.verbose => {
                    tracing::warn!(
                        target: "media_fragments",
                        dimension = dimension.as_str(),
                        value = %value,
                        reason = %reason,
                        "Media Fragments URI parsing warning"
                    );
                }
                Err(_) => {}
            }
        }

        set
    }

    fn push(&mut self, fragment: MediaFragment) {
        let dimension = fragment.dimension();
        match self.entries.iter_mut().find(|(d, _)| *d == dimension) {
            Some((_, fragments)) => fragments.push(fragment),
            None => self.entries.push((dimension, vec![fragment])),
        }
    }

    /// Returns the fragments for a dimension, empty if it never appeared.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> &[MediaFragment] {
        self.entries
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, fragments)| fragments.as_slice())
            .unwrap_or_default()
    }

    /// Returns the fragments for a key name, empty for unknown names.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> &[MediaFragment] {
        Dimension::from_name(name)
            .map(|d| self.get(d))
            .unwrap_or_default()
    }

    /// Returns true if at least one fragment of the dimension is present.
    #[must_use]
    pub fn contains(&self, dimension: Dimension) -> bool {
        !self.get(dimension).is_empty()
    }

    /// Returns the number of distinct dimensions present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no fragment was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the dimensions present, in order of first appearance.
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    /// Returns each dimension with its fragments, in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[MediaFragment])> {
        self.entries.iter().map(|(d, f)| (*d, f.as_slice()))
    }

    /// Returns the temporal fragments in order.
    pub fn times(&self) -> impl Iterator<Item = &TimeFragment> {
        self.get(Dimension::Time).iter().filter_map(MediaFragment::as_time)
    }

    /// Returns the spatial fragments in order.
    pub fn spatials(&self) -> impl Iterator<Item = &SpatialFragment> {
        self.get(Dimension::Spatial)
            .iter()
            .filter_map(MediaFragment::as_spatial)
    }

    /// Returns the track fragments in order.
    pub fn tracks(&self) -> impl Iterator<Item = &TrackFragment> {
        self.get(Dimension::Track).iter().filter_map(MediaFragment::as_track)
    }

    /// Returns the chapter fragments in order.
    pub fn chapters(&self) -> impl Iterator<Item = &ChapterFragment> {
        self.get(Dimension::Chapter)
            .iter()
            .filter_map(MediaFragment::as_chapter)
    }
}

/// Splits a pair at its first `=`, rejecting an empty key or value.
fn split_pair(pair: &str) -> Option<(&str, &str)> {
    let (key, value) = pair.split_once(KEY_VALUE_SEPARATOR)?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Writes the set back as an octet string of normalized values.
///
/// Fragments are grouped by dimension, so interleaved keys come out
/// regrouped.
impl fmt::Display for FragmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (dimension, fragments) in &self.entries {
            for fragment in fragments {
                if !first {
                    write!(f, "{PAIR_SEPARATOR}")?;
                }
                first = false;
                write!(
                    f,
                    "{dimension}{KEY_VALUE_SEPARATOR}{}",
                    percent::encode(&fragment.to_string())
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FragmentSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(d, f)| (d.as_str(), f)))
    }
}
