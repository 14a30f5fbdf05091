//! URI-level parsing into query and hash fragment sets.

use std::fmt;

use crate::config::ParserConfig;
use crate::fragment_set::FragmentSet;
use crate::location::Location;

/// Parses Media Fragments URIs with a fixed configuration.
///
/// # Examples
///
/// ```
/// use media_fragments::{Parser, ParserConfig};
///
/// let parser = Parser::new(ParserConfig::new().with_verbose(true));
/// let result = parser.parse(Some("http://x/y?track=audio#t=10,20"));
///
/// assert_eq!(result.query().tracks().next().unwrap().name(), "audio");
/// assert_eq!(result.hash().times().next().unwrap().end(), "20");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser's configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses the media fragments of a URI.
    ///
    /// With `None`, the configured default location is parsed instead; if
    /// there is none, both sets are empty. Parsing never fails: anything
    /// that is not a valid media fragment is left out of the result.
    #[must_use]
    pub fn parse(&self, uri: Option<&str>) -> ParseResult {
        match uri {
            Some(uri) => self.parse_uri(uri),
            None => self.parse_location(&self.config),
        }
    }

    /// Parses the URI supplied by a [`Location`].
    #[must_use]
    pub fn parse_location<L: Location + ?Sized>(&self, location: &L) -> ParseResult {
        self.parse_uri(&location.href())
    }

    fn parse_uri(&self, uri: &str) -> ParseResult {
        let (query, hash) = split_uri(uri);
        ParseResult {
            query: FragmentSet::parse(query, &self.config),
            hash: FragmentSet::parse(hash, &self.config),
        }
    }
}

/// Parses the media fragments of a URI with the default configuration.
///
/// # Examples
///
/// ```
/// let result = media_fragments::parse("video.ogv#xywh=percent:25,25,50,50");
/// assert!(result.query().is_empty());
/// assert_eq!(result.hash().spatials().count(), 1);
/// ```
#[must_use]
pub fn parse(uri: &str) -> ParseResult {
    Parser::default().parse(Some(uri))
}

/// Returns the query component (between the first `?` and the first `#`)
/// and the hash component (after the first `#`), each empty when absent.
///
/// A `?` after the first `#` belongs to the hash.
fn split_uri(uri: &str) -> (&str, &str) {
    let (before_hash, hash) = uri.split_once('#').unwrap_or((uri, ""));
    let query = before_hash.split_once('?').map_or("", |(_, query)| query);
    (query, hash)
}

/// Media fragments from the query and hash components of one URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseResult {
    query: FragmentSet,
    hash: FragmentSet,
}

impl ParseResult {
    /// Returns the fragments from the query component.
    #[must_use]
    pub const fn query(&self) -> &FragmentSet {
        &self.query
    }

    /// Returns the fragments from the hash component.
    #[must_use]
    pub const fn hash(&self) -> &FragmentSet {
        &self.hash
    }

    /// Returns true if neither component holds a fragment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.hash.is_empty()
    }

    /// Splits the result into its query and hash sets.
    #[must_use]
    pub fn into_parts(self) -> (FragmentSet, FragmentSet) {
        (self.query, self.hash)
    }
}

/// Human-readable dump of both components.
impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Query", &self.query)?;
        write_section(f, "Hash", &self.hash)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, name: &str, set: &FragmentSet) -> fmt::Result {
    writeln!(f, "\n[{name}]:")?;
    for (dimension, fragments) in set.iter() {
        writeln!(f, "  * {dimension}:")?;
        for fragment in fragments {
            writeln!(f, "    [")?;
            for (field, value) in fragment.fields() {
                writeln!(f, "      - {field}: {value}")?;
            }
            writeln!(f, "   ]")?;
        }
    }
    Ok(())
}
