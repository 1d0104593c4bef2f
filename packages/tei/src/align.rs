//! Verse alignment across parallel sections.
//!
//! Parallel layers carry segments with identifiers like `la.5.335` and
//! `it.5.335`; grouping them by the trailing verse number yields the rows of
//! a synchronized multi-column display.

use std::collections::BTreeMap;

use crate::types::{Section, Segment};
use crate::verse::VerseKey;

/// Verse-keyed view over the segments of a parsed document.
///
/// Borrows the segments it groups and owns nothing; there is no incremental
/// update path. Recompute after reparsing.
pub type VerseIndex<'a> = BTreeMap<VerseKey, Vec<&'a Segment>>;

/// Group segments from all sections by the verse key of their identifier.
///
/// Sections are visited in document order and segments in section order, so
/// parallel layers land in each key's list in encounter order (the source
/// layer first when its section precedes the translation in the document).
/// Segments whose identifier yields no verse key are skipped silently.
///
/// Keys iterate in numeric `(book, line)` order, the natural display order
/// for synchronized columns (verse 2.5 before 10.2).
#[must_use]
pub fn group_by_verse(sections: &[Section]) -> VerseIndex<'_> {
    let mut index = VerseIndex::new();
    for section in sections {
        for segment in &section.segments {
            let Some(key) = segment.verse_key() else {
                tracing::debug!(
                    id = %segment.id,
                    "segment identifier carries no verse number, skipping"
                );
                continue;
            };
            index.entry(key).or_default().push(segment);
        }
    }
    index
}
