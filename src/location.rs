//! Source of the URI parsed when none is given explicitly.

use std::borrow::Cow;

use crate::config::ParserConfig;

/// Supplies the "current location" URI.
///
/// Outside a browser there is no ambient document location, so the hosting
/// application provides one: a fixed string, a configured default, or any
/// type that knows where its media lives.
///
/// # Examples
///
/// ```
/// use media_fragments::{Location, Parser};
///
/// struct Player {
///     src: String,
/// }
///
/// impl Location for Player {
///     fn href(&self) -> std::borrow::Cow<'_, str> {
///         self.src.as_str().into()
///     }
/// }
///
/// let player = Player { src: "video.ogv#t=10,20".to_string() };
/// let result = Parser::default().parse_location(&player);
/// assert_eq!(result.hash().times().count(), 1);
/// ```
pub trait Location {
    /// Returns the full URI, or an empty string when there is none.
    fn href(&self) -> Cow<'_, str>;
}

impl Location for str {
    fn href(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Location for String {
    fn href(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Location for ParserConfig {
    fn href(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.default_location.as_deref().unwrap_or(""))
    }
}
