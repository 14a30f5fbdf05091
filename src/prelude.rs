//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use media_fragments::prelude::*;
//!
//! let result = Parser::default().parse(Some("video.ogv#track=audio"));
//! assert!(result.hash().contains(Dimension::Track));
//! ```

pub use crate::{
    // Entry points
    Location, ParseResult, Parser, ParserConfig, parse,
    // Results
    ChapterFragment, Dimension, FragmentSet, MediaFragment, SpatialFragment, SpatialUnit,
    TimeFragment, TimeUnit, TrackFragment,
    // Errors
    DecodeError, DimensionError,
};
