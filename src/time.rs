//! Temporal dimension (`t`).
//!
//! A temporal value is `start,end` where either side may be empty. Three
//! time schemes are recognized and tried in a fixed order: normal play time
//! (`npt`), SMPTE timecodes and wall-clock time. The first scheme whose
//! grammar accepts both sides owns the result.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use regex::{Captures, Regex};

use crate::constants::RANGE_SEPARATOR;
use crate::error::DimensionError;

/// `[npt:]seconds[.fraction]`
static NPT_SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:npt:)?\d+(?:\.\d+)?$").expect("npt seconds pattern is valid")
});

/// `[npt:][[hours:]minutes:]seconds[.fraction]` with two-digit minutes and seconds
static NPT_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:npt:)?(?:(\d+):)?(\d\d):(\d\d)(\.\d+)?$").expect("npt clock pattern is valid")
});

static SMPTE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(smpte(?:-30-drop|-25|-30)?):").expect("smpte prefix pattern is valid")
});

/// `H:MM:SS[:FF[.ff]]`
static SMPTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+:\d\d:\d\d(?::\d\d(?:\.\d\d)?)?$").expect("smpte pattern is valid")
});

/// `YYYY[-MM[-DD[Thh:mm[:ss[.f+]][Z|(+|-)hh:mm]]]]`
static WALL_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})(?:-(\d{2})(?:-(\d{2})(?:T(\d{2}):(\d{2})(?::(\d{2})(?:\.(\d+))?)?(?:Z|([-+])(\d{2}):(\d{2}))?)?)?)?$",
    )
    .expect("wall-clock pattern is valid")
});

const NPT_PREFIX: &str = "npt:";
const CLOCK_PREFIX: &str = "clock:";

/// Time scheme of a temporal fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Normal play time, in seconds
    Npt,
    /// SMPTE timecode without an explicit frame rate
    Smpte,
    /// SMPTE timecode at 25 frames per second
    Smpte25,
    /// SMPTE timecode at 30 frames per second
    Smpte30,
    /// SMPTE drop-frame timecode at 29.97 frames per second
    Smpte30Drop,
    /// Wall-clock time
    Clock,
}

impl TimeUnit {
    /// Returns the string representation of this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Npt => "npt",
            Self::Smpte => "smpte",
            Self::Smpte25 => "smpte-25",
            Self::Smpte30 => "smpte-30",
            Self::Smpte30Drop => "smpte-30-drop",
            Self::Clock => "clock",
        }
    }

    /// Returns true for any of the SMPTE timecode units.
    #[must_use]
    pub const fn is_smpte(self) -> bool {
        matches!(
            self,
            Self::Smpte | Self::Smpte25 | Self::Smpte30 | Self::Smpte30Drop
        )
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npt" => Ok(Self::Npt),
            "smpte" => Ok(Self::Smpte),
            "smpte-25" => Ok(Self::Smpte25),
            "smpte-30" => Ok(Self::Smpte30),
            "smpte-30-drop" => Ok(Self::Smpte30Drop),
            "clock" => Ok(Self::Clock),
            _ => Err("unknown time unit"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A validated temporal fragment.
///
/// For `npt` ranges with both ends present, `start` and `end` are
/// canonicalized to seconds (`10:00` becomes `600`, fractions are carried
/// over verbatim). A one-sided range keeps its single value as written.
/// SMPTE values have their unit prefix stripped; wall-clock values have
/// `clock:` stripped.
///
/// # Examples
///
/// ```
/// use media_fragments::{TimeFragment, TimeUnit};
///
/// let t = TimeFragment::parse("npt:10:00,npt:20:00").unwrap();
/// assert_eq!(t.unit(), TimeUnit::Npt);
/// assert_eq!(t.start(), "600");
/// assert_eq!(t.end(), "1200");
///
/// let t = TimeFragment::parse("smpte-25:0:00:01:00,0:00:05:00").unwrap();
/// assert_eq!(t.unit(), TimeUnit::Smpte25);
/// assert_eq!(t.start(), "0:00:01:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeFragment {
    value: String,
    unit: TimeUnit,
    start: String,
    end: String,
}

impl TimeFragment {
    /// Validates and normalizes a decoded `t` value.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError` if:
    /// - No time scheme accepts both sides ([`DimensionError::InvalidTime`])
    /// - Both sides are present for `npt` or `clock` and start is not
    ///   strictly before end ([`DimensionError::StartNotBeforeEnd`])
    /// - A wall-clock side is not a real calendar instant
    ///   ([`DimensionError::InvalidClockTime`])
    pub fn parse(input: &str) -> Result<Self, DimensionError> {
        // Only the first comma separates; `10,20,30` leaves `20,30` as the end
        // and is rejected rather than truncated.
        let (start, end) = input.split_once(RANGE_SEPARATOR).unwrap_or((input, ""));

        if is_npt(start) && is_npt(end) {
            return Self::npt(input, start, end);
        }

        let (unit, smpte_start) = match SMPTE_PREFIX.captures(start) {
            Some(caps) => {
                let unit = caps[1]
                    .parse::<TimeUnit>()
                    .map_err(|_| DimensionError::InvalidTime)?;
                (unit, &start[caps[0].len()..])
            }
            None => (TimeUnit::Smpte, start),
        };
        if is_smpte(smpte_start) && is_smpte(end) {
            // Timecodes are not checked for ordering.
            return Ok(Self::new(input, unit, smpte_start, end));
        }

        let clock_start = start.strip_prefix(CLOCK_PREFIX).unwrap_or(start);
        if is_wall_clock(clock_start) && is_wall_clock(end) {
            return Self::clock(input, clock_start, end);
        }

        Err(DimensionError::InvalidTime)
    }

    fn new(value: &str, unit: TimeUnit, start: &str, end: &str) -> Self {
        Self {
            value: value.to_string(),
            unit,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    fn npt(value: &str, start: &str, end: &str) -> Result<Self, DimensionError> {
        if start.is_empty() || end.is_empty() {
            return Ok(Self::new(value, TimeUnit::Npt, start, end));
        }

        let start = npt_to_seconds(start).ok_or(DimensionError::InvalidTime)?;
        let end = npt_to_seconds(end).ok_or(DimensionError::InvalidTime)?;
        let (Ok(from), Ok(to)) = (start.parse::<f64>(), end.parse::<f64>()) else {
            return Err(DimensionError::InvalidTime);
        };

        if from < to {
            Ok(Self::new(value, TimeUnit::Npt, &start, &end))
        } else {
            Err(DimensionError::StartNotBeforeEnd { start, end })
        }
    }

    fn clock(value: &str, start: &str, end: &str) -> Result<Self, DimensionError> {
        if !start.is_empty() && !end.is_empty() {
            let from = wall_clock_instant(start)?;
            let to = wall_clock_instant(end)?;
            if from >= to {
                return Err(DimensionError::StartNotBeforeEnd {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
        Ok(Self::new(value, TimeUnit::Clock, start, end))
    }

    /// Returns the decoded value this fragment was parsed from.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the time scheme.
    #[must_use]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns the normalized start, empty when the range is open at the start.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the normalized end, empty when the range is open at the end.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Parses the start as a chronological instant, for `clock` fragments.
    #[must_use]
    pub fn start_instant(&self) -> Option<DateTime<FixedOffset>> {
        self.instant(&self.start)
    }

    /// Parses the end as a chronological instant, for `clock` fragments.
    #[must_use]
    pub fn end_instant(&self) -> Option<DateTime<FixedOffset>> {
        self.instant(&self.end)
    }

    fn instant(&self, side: &str) -> Option<DateTime<FixedOffset>> {
        if self.unit == TimeUnit::Clock && !side.is_empty() {
            wall_clock_instant(side).ok()
        } else {
            None
        }
    }
}

/// Writes the normalized value, which parses back to an equal fragment.
impl fmt::Display for TimeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit != TimeUnit::Npt {
            write!(f, "{}:", self.unit)?;
        }
        if self.end.is_empty() && !self.start.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{},{}", self.start, self.end)
        }
    }
}

impl FromStr for TimeFragment {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_npt(side: &str) -> bool {
    side.is_empty() || NPT_SECONDS.is_match(side) || NPT_CLOCK.is_match(side)
}

fn is_smpte(side: &str) -> bool {
    side.is_empty() || SMPTE.is_match(side)
}

fn is_wall_clock(side: &str) -> bool {
    side.is_empty() || WALL_CLOCK.is_match(side)
}

/// Converts an npt value to `seconds[.fraction]`.
///
/// The fraction is appended textually, never re-parsed.
fn npt_to_seconds(side: &str) -> Option<String> {
    let Some(caps) = NPT_CLOCK.captures(side) else {
        return Some(side.strip_prefix(NPT_PREFIX).unwrap_or(side).to_string());
    };

    let hours = match caps.get(1) {
        Some(m) => m.as_str().parse::<u64>().ok()?,
        None => 0,
    };
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60)?
        .checked_add(seconds)?;
    let fraction = caps.get(4).map_or("", |m| m.as_str());

    Some(format!("{total}{fraction}"))
}

fn capture_u32(caps: &Captures<'_>, index: usize, default: u32) -> u32 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(default)
}

/// Resolves a wall-clock value to an instant.
///
/// Missing date parts default to the first month/day, missing time to
/// midnight and a missing offset to UTC.
fn wall_clock_instant(side: &str) -> Result<DateTime<FixedOffset>, DimensionError> {
    let invalid = || DimensionError::InvalidClockTime {
        value: side.to_string(),
    };
    let caps = WALL_CLOCK.captures(side).ok_or_else(invalid)?;

    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month = capture_u32(&caps, 2, 1);
    let day = capture_u32(&caps, 3, 1);
    let hour = capture_u32(&caps, 4, 0);
    let minute = capture_u32(&caps, 5, 0);
    let second = capture_u32(&caps, 6, 0);
    let nanos = caps.get(7).map_or(0, |m| fraction_to_nanos(m.as_str()));

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_nano_opt(hour, minute, second, nanos))
        .ok_or_else(invalid)?;

    let offset_seconds = match caps.get(8) {
        Some(sign) => {
            let hours = capture_u32(&caps, 9, 0);
            let minutes = capture_u32(&caps, 10, 0);
            let magnitude = i32::try_from(hours * 3600 + minutes * 60).map_err(|_| invalid())?;
            if sign.as_str() == "-" { -magnitude } else { magnitude }
        }
        None => 0,
    };
    let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(invalid)?;

    offset.from_local_datetime(&naive).single().ok_or_else(invalid)
}

/// Scales a decimal fraction to nanoseconds, ignoring digits past the ninth.
fn fraction_to_nanos(digits: &str) -> u32 {
    let mut nanos = 0;
    let mut scale = 100_000_000;
    for digit in digits.bytes().take(9) {
        nanos += u32::from(digit - b'0') * scale;
        scale /= 10;
    }
    nanos
}
