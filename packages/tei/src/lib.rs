//! Synopsis TEI engine - parse TEI critical editions and align their layers.
//!
//! A critical edition carries several parallel text layers (source text,
//! translation, commentary) plus word-level apparatus notes. This crate turns
//! the raw TEI XML into a typed document tree and derives a verse-keyed index
//! that lines the layers up for synchronized display.
//!
//! # Example
//!
//! ```
//! use synopsis_tei::{group_by_verse, parse, VerseKey};
//!
//! let xml = r#"<TEI>
//!     <text type="source" xml:lang="la" xml:id="la">
//!         <seg xml:id="la.5.335">pectora nuda</seg>
//!     </text>
//!     <text type="translation" xml:lang="it" xml:id="it">
//!         <seg xml:id="it.5.335">il petto nudo</seg>
//!     </text>
//! </TEI>"#;
//!
//! let doc = parse(xml).unwrap();
//! assert_eq!(doc.sections.len(), 2);
//!
//! let index = group_by_verse(&doc.sections);
//! let key: VerseKey = "5.335".parse().unwrap();
//! assert_eq!(index[&key].len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`parser`]: document parsing (sections, segments, lines, words, anchors)
//! - [`metadata`]: bibliographic metadata extraction from the TEI header
//! - [`normalize`]: text content normalization (line-break markers, whitespace)
//! - [`verse`]: the "book.line" verse-key value type
//! - [`align`]: verse-keyed grouping of segments across sections
//! - [`types`]: the parsed document model
//! - [`error`]: error types and Result alias
//! - [`xml`]: XML tree helpers
//!
//! Parsing is synchronous and side-effect-free: one call, one independent
//! output tree, no shared state between calls.

pub mod align;
pub mod error;
pub mod metadata;
pub mod normalize;
pub mod parser;
pub mod types;
pub mod verse;
pub mod xml;

// Re-export main functions
pub use parser::parse;

// Re-export commonly used items
pub use align::{group_by_verse, VerseIndex};
pub use error::{Result, TeiError};
pub use types::{
    Anchor, Line, Metadata, ParsedTeiDocument, Section, SectionKind, Segment, Word,
};
pub use verse::VerseKey;
