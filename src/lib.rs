//! Parser and validator for W3C Media Fragments URIs.
//!
//! Media fragments select part of a media resource through the query or
//! hash component of its URI:
//!
//! ```text
//! http://example.com/video.ogv?track=audio#t=10,20&xywh=percent:25,25,50,50
//! ```
//!
//! Each `key=value` pair whose key names a supported dimension is checked
//! against that dimension's grammar and normalized. Everything else is left
//! out of the result; parsing a URI never fails.
//!
//! # Quick Start
//!
//! ```rust
//! use media_fragments::{TimeUnit, SpatialUnit};
//!
//! let result = media_fragments::parse(
//!     "http://example.com/video.ogv?track=audio#t=npt:10:00,npt:20:00&xywh=160,120,320,240"
//! );
//!
//! let t = result.hash().times().next().unwrap();
//! assert_eq!(t.unit(), TimeUnit::Npt);
//! assert_eq!((t.start(), t.end()), ("600", "1200"));
//!
//! let area = result.hash().spatials().next().unwrap();
//! assert_eq!(area.unit(), SpatialUnit::Pixel);
//!
//! assert_eq!(result.query().tracks().next().unwrap().name(), "audio");
//! ```
//!
//! # Dimensions
//!
//! | Key | Value grammar | Checks |
//! |-----|---------------|--------|
//! | `t` | `[npt:]start,end`, `smpte[-25\|-30\|-30-drop]:start,end`, `clock:start,end` | start < end (npt, clock) |
//! | `xywh` | `[pixel:]x,y,w,h`, `percent:x,y,w,h` | percent fields in 0..=100 |
//! | `track` | any non-empty name | none |
//! | `chapter` | any non-empty name | none |
//!
//! # Diagnostics
//!
//! Malformed pairs and unknown keys are dropped silently. Values rejected by
//! a dimension's validator are dropped as well, and reported through
//! [`tracing`] when [`ParserConfig::verbose`] is set:
//!
//! ```rust
//! use media_fragments::{Parser, ParserConfig};
//!
//! let parser = Parser::new(ParserConfig::new().with_verbose(true));
//! let result = parser.parse(Some("video.ogv#t=20,10"));
//! assert!(result.hash().is_empty());
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod chapter;
mod config;
mod constants;
mod dimension;
mod error;
mod fragment;
mod fragment_set;
mod location;
mod parser;
pub mod percent;
pub mod prelude;
mod spatial;
mod time;
mod track;

pub use chapter::ChapterFragment;
pub use config::{LOCATION_ENV, ParserConfig, VERBOSE_ENV};
pub use constants::{
    CHAPTER_DIMENSION, KEY_VALUE_SEPARATOR, MAX_PERCENT, PAIR_SEPARATOR, RANGE_SEPARATOR,
    SPATIAL_DIMENSION, TIME_DIMENSION, TRACK_DIMENSION,
};
pub use dimension::Dimension;
pub use error::{DecodeError, DimensionError};
pub use fragment::MediaFragment;
pub use fragment_set::FragmentSet;
pub use location::Location;
pub use parser::{ParseResult, Parser, parse};
pub use spatial::{SpatialFragment, SpatialUnit};
pub use time::{TimeFragment, TimeUnit};
pub use track::TrackFragment;
