//! Spatial dimension (`xywh`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MAX_PERCENT;
use crate::error::DimensionError;

/// `[pixel:]x,y,w,h`
static PIXEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:pixel:)?(\d+),(\d+),(\d+),(\d+)$").expect("pixel pattern is valid")
});

/// `percent:x,y,w,h`
static PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^percent:(\d+),(\d+),(\d+),(\d+)$").expect("percent pattern is valid")
});

const FIELD_NAMES: [char; 4] = ['x', 'y', 'w', 'h'];

/// Coordinate unit of a spatial fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialUnit {
    /// Absolute pixel coordinates (the default when no unit is given)
    Pixel,
    /// Percentages of the frame, each field in `0..=100`
    Percent,
}

impl SpatialUnit {
    /// Returns the string representation of this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pixel => "pixel",
            Self::Percent => "percent",
        }
    }
}

impl fmt::Display for SpatialUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SpatialUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A validated spatial fragment: a rectangle at `x,y` of size `w`×`h`.
///
/// Fields are kept as the digit strings that were written.
///
/// # Examples
///
/// ```
/// use media_fragments::{SpatialFragment, SpatialUnit};
///
/// let area = SpatialFragment::parse("percent:10,10,50,50").unwrap();
/// assert_eq!(area.unit(), SpatialUnit::Percent);
/// assert_eq!(area.w(), "50");
///
/// assert!(SpatialFragment::parse("percent:10,10,150,50").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpatialFragment {
    value: String,
    unit: SpatialUnit,
    x: String,
    y: String,
    w: String,
    h: String,
}

impl SpatialFragment {
    /// Validates and normalizes a decoded `xywh` value.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError` if:
    /// - The value is not `[pixel:]x,y,w,h` or `percent:x,y,w,h`
    ///   ([`DimensionError::InvalidSpatial`])
    /// - A percent field exceeds 100 ([`DimensionError::PercentOutOfRange`])
    pub fn parse(input: &str) -> Result<Self, DimensionError> {
        if let Some(caps) = PIXEL.captures(input) {
            let fields = [&caps[1], &caps[2], &caps[3], &caps[4]];
            return Ok(Self::new(input, SpatialUnit::Pixel, fields));
        }

        let caps = PERCENT
            .captures(input)
            .ok_or(DimensionError::InvalidSpatial)?;
        let fields = [&caps[1], &caps[2], &caps[3], &caps[4]];

        for (field, value) in FIELD_NAMES.into_iter().zip(fields) {
            let in_range = value
                .parse::<f64>()
                .is_ok_and(|n| (0.0..=MAX_PERCENT).contains(&n));
            if !in_range {
                return Err(DimensionError::PercentOutOfRange {
                    field,
                    value: value.to_string(),
                });
            }
        }

        Ok(Self::new(input, SpatialUnit::Percent, fields))
    }

    fn new(value: &str, unit: SpatialUnit, [x, y, w, h]: [&str; 4]) -> Self {
        Self {
            value: value.to_string(),
            unit,
            x: x.to_string(),
            y: y.to_string(),
            w: w.to_string(),
            h: h.to_string(),
        }
    }

    /// Returns the decoded value this fragment was parsed from.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the coordinate unit.
    #[must_use]
    pub const fn unit(&self) -> SpatialUnit {
        self.unit
    }

    /// Returns the horizontal offset.
    #[must_use]
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Returns the vertical offset.
    #[must_use]
    pub fn y(&self) -> &str {
        &self.y
    }

    /// Returns the width.
    #[must_use]
    pub fn w(&self) -> &str {
        &self.w
    }

    /// Returns the height.
    #[must_use]
    pub fn h(&self) -> &str {
        &self.h
    }
}

impl fmt::Display for SpatialFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{},{},{},{}", self.unit, self.x, self.y, self.w, self.h)
    }
}

impl FromStr for SpatialFragment {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
