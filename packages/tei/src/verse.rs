//! Verse-key extraction and ordering.
//!
//! Element identifiers in the editions end in a "book.line" pair
//! (e.g. `Theb.5.335`, `la.5.335`, `it.5.335`). That trailing pair is the
//! shared addressing scheme that lines source, translation, and commentary
//! up against one another.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Trailing ".<book>.<line>" pattern at the end of an identifier.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VERSE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\d+)\.(\d+)$").expect("valid regex"));

/// A "book.line" address extracted from an element identifier.
///
/// Kept as two integers rather than a string so that ordering is numeric:
/// verse 10.2 sorts after 2.5, where the string form would not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseKey {
    /// Book number within the work.
    pub book: u32,

    /// Line number within the book.
    pub line: u32,
}

impl VerseKey {
    /// Create a verse key from its two components.
    #[must_use]
    pub fn new(book: u32, line: u32) -> Self {
        Self { book, line }
    }

    /// Extract the verse key from an element identifier.
    ///
    /// Matches two dot-separated integer groups at the end of the
    /// identifier, whatever precedes them. Identifiers without the trailing
    /// pair yield `None`; so do groups too large for a line number.
    ///
    /// # Examples
    /// ```
    /// use synopsis_tei::VerseKey;
    ///
    /// assert_eq!(
    ///     VerseKey::from_identifier("Theb.5.335"),
    ///     Some(VerseKey::new(5, 335))
    /// );
    /// assert_eq!(VerseKey::from_identifier("la.intro"), None);
    /// ```
    #[must_use]
    pub fn from_identifier(id: &str) -> Option<Self> {
        let caps = VERSE_ID_PATTERN.captures(id)?;
        let book = caps.get(1)?.as_str().parse().ok()?;
        let line = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { book, line })
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.book, self.line)
    }
}

/// Error returned when a string is not a "book.line" pair.
#[derive(Debug, Error)]
#[error("not a book.line pair: {0:?}")]
pub struct ParseVerseKeyError(String);

impl FromStr for VerseKey {
    type Err = ParseVerseKeyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (book, line) = s
            .split_once('.')
            .ok_or_else(|| ParseVerseKeyError(s.to_string()))?;
        let book = book
            .parse()
            .map_err(|_| ParseVerseKeyError(s.to_string()))?;
        let line = line
            .parse()
            .map_err(|_| ParseVerseKeyError(s.to_string()))?;
        Ok(Self { book, line })
    }
}

// Serialized as the "book.line" string so JSON output matches the number
// form used in the markup identifiers.
impl Serialize for VerseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VerseKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
