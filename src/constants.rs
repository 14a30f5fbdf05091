//! Constants for media fragment parsing.

/// Separator between key-value pairs in an octet string.
pub const PAIR_SEPARATOR: char = '&';

/// Separator between a key and its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Separator between the start and end of a temporal range.
pub const RANGE_SEPARATOR: char = ',';

/// Dimension name for temporal fragments.
pub const TIME_DIMENSION: &str = "t";

/// Dimension name for spatial fragments.
pub const SPATIAL_DIMENSION: &str = "xywh";

/// Dimension name for track fragments.
pub const TRACK_DIMENSION: &str = "track";

/// Dimension name for chapter fragments.
pub const CHAPTER_DIMENSION: &str = "chapter";

/// Upper bound for each field of a percent selection.
pub const MAX_PERCENT: f64 = 100.0;
