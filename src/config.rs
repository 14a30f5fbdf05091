//! Parser configuration.

use std::env;

/// Environment variable enabling diagnostics for rejected values.
pub const VERBOSE_ENV: &str = "MEDIA_FRAGMENTS_VERBOSE";

/// Environment variable holding the default current-location URI.
pub const LOCATION_ENV: &str = "MEDIA_FRAGMENTS_LOCATION";

/// Configuration attached to a [`Parser`](crate::Parser) at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Whether values rejected by a dimension validator are reported as
    /// `tracing` warnings.
    ///
    /// Structurally malformed pairs and unknown keys are never reported.
    /// Default: false
    pub verbose: bool,

    /// URI parsed when no URI is given to the parser.
    ///
    /// Stands in for the "current location" of the hosting document.
    /// Default: None
    pub default_location: Option<String>,
}

impl ParserConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from `MEDIA_FRAGMENTS_VERBOSE` and
    /// `MEDIA_FRAGMENTS_LOCATION`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let verbose = lookup(VERBOSE_ENV).is_some_and(|v| is_truthy(&v));
        let default_location = lookup(LOCATION_ENV).filter(|v| !v.is_empty());
        Self {
            verbose,
            default_location,
        }
    }

    /// Enables or disables diagnostics.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the default location.
    #[must_use]
    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = Some(location.into());
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
