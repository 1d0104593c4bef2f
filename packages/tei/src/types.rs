//! Domain model for parsed TEI critical editions.
//!
//! Every entity is an immutable value object produced by one parse call and
//! owned by the resulting [`ParsedTeiDocument`]. The whole tree serializes to
//! JSON for export and fixture comparison.

use serde::{Deserialize, Serialize};

use crate::verse::VerseKey;

/// A critical-apparatus note attached to a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Identifier of the note, empty when the markup carries none.
    pub id: String,

    /// Note text, exactly as it appears in the markup (not normalized).
    pub content: String,
}

/// A single lexical token eligible for apparatus annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Identifier from the markup, empty when absent.
    pub id: String,

    /// Normalized text content of the word.
    pub content: String,

    /// Apparatus notes in document order.
    pub anchors: Vec<Anchor>,
}

/// One verse of source text, addressable by its book.line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Raw identifier (e.g. "Theb.5.335").
    pub id: String,

    /// Verse number extracted from the identifier.
    pub number: VerseKey,

    /// Normalized text of the whole line.
    pub content: String,

    /// Words scoped to this line, in document order.
    pub words: Vec<Word>,
}

/// A span of aligned text sharing one identifier within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Identifier from the markup, empty when absent.
    pub id: String,

    /// Normalized text of the whole segment.
    pub content: String,

    /// Every word anywhere in the segment subtree, including words outside
    /// `l` elements. Words inside lines appear both here and in their line;
    /// the two lists serve different display contexts.
    pub words: Vec<Word>,

    /// Verse numbers of the contained lines, in document order.
    pub line_numbers: Vec<VerseKey>,

    /// Contained lines whose identifier carries a verse number.
    pub lines: Vec<Line>,
}

impl Segment {
    /// Verse key derived from the segment's own identifier.
    #[must_use]
    pub fn verse_key(&self) -> Option<VerseKey> {
        VerseKey::from_identifier(&self.id)
    }
}

/// The role a text layer plays in the edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// The original-language text.
    Source,

    /// A translation layer.
    Translation,

    /// A commentary layer.
    Commentary,

    /// Anything else, including sections without a `type` attribute.
    Unknown,
}

impl SectionKind {
    /// Parse from the `type` attribute of a `text` element.
    #[must_use]
    pub fn from_type_attr(value: &str) -> Self {
        match value {
            "source" => Self::Source,
            "translation" => Self::Translation,
            "commentary" => Self::Commentary,
            _ => Self::Unknown,
        }
    }

    /// The lowercase string form used in the markup and in JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Translation => "translation",
            Self::Commentary => "commentary",
            Self::Unknown => "unknown",
        }
    }
}

/// One text-layer view of the work (e.g. Latin source, Italian translation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Layer role, `Unknown` when the markup does not say.
    pub kind: SectionKind,

    /// Language code, "unknown" when absent.
    pub language: String,

    /// Identifier, "unknown" when absent.
    pub id: String,

    /// Segments in document order.
    pub segments: Vec<Segment>,
}

/// Bibliographic description of the whole document.
///
/// Each field falls back to its literal "Unknown …" placeholder when the
/// header lacks the element; the placeholders are part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub editor: String,
    pub date: String,
    pub language: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "Unknown Title".to_string(),
            author: "Unknown Author".to_string(),
            editor: "Unknown Editor".to_string(),
            date: "Unknown Date".to_string(),
            language: "Unknown Language".to_string(),
        }
    }
}

/// The top-level parse result: sections in document order plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTeiDocument {
    pub sections: Vec<Section>,
    pub metadata: Metadata,
}

impl ParsedTeiDocument {
    /// Every segment whose identifier contains `fragment`, across sections
    /// in document order.
    #[must_use]
    pub fn segments_by_id_fragment(&self, fragment: &str) -> Vec<&Segment> {
        self.sections
            .iter()
            .flat_map(|section| &section.segments)
            .filter(|segment| segment.id.contains(fragment))
            .collect()
    }

    /// Segments across all sections that share a verse key with
    /// `segment_id`, in document order. Empty when the identifier carries
    /// no verse number.
    #[must_use]
    pub fn corresponding_segments(&self, segment_id: &str) -> Vec<&Segment> {
        let Some(key) = VerseKey::from_identifier(segment_id) else {
            return Vec::new();
        };
        self.sections
            .iter()
            .flat_map(|section| &section.segments)
            .filter(|segment| segment.verse_key() == Some(key))
            .collect()
    }
}
