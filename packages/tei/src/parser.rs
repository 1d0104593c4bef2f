//! TEI document parsing.
//!
//! One synchronous pass over the XML tree assembles the section → segment →
//! line → word → anchor hierarchy. The input tree is never mutated; every
//! element of interest is matched by local tag name, so documents with and
//! without the TEI namespace declaration parse the same.

use roxmltree::{Document, Node};

use crate::error::Result;
use crate::metadata::parse_metadata;
use crate::normalize::normalize;
use crate::types::{Anchor, Line, ParsedTeiDocument, Section, SectionKind, Segment, Word};
use crate::verse::VerseKey;
use crate::xml::{descendants_with_tag, raw_text, tag_name, xml_id, xml_lang};

/// Tag of a text-layer section.
const SECTION_TAG: &str = "text";

/// Tag of an aligned segment.
const SEGMENT_TAG: &str = "seg";

/// Tag of a verse line.
const LINE_TAG: &str = "l";

/// Tag of a word token.
const WORD_TAG: &str = "w";

/// Tag of an apparatus note.
const ANCHOR_TAG: &str = "anchor";

/// Parse a TEI document from raw XML text.
///
/// A document without any `text` element yields an empty section list, and
/// absent attributes or header elements fall back to documented defaults;
/// neither is an error.
///
/// # Errors
/// Returns [`crate::TeiError::MalformedMarkup`] when the input is not
/// well-formed XML. No partial document is produced in that case.
pub fn parse(xml_text: &str) -> Result<ParsedTeiDocument> {
    let doc = Document::parse(xml_text)?;

    let sections = doc
        .descendants()
        .filter(|n| n.is_element() && tag_name(*n) == SECTION_TAG)
        .map(parse_section)
        .collect();

    let metadata = parse_metadata(&doc);

    Ok(ParsedTeiDocument { sections, metadata })
}

/// Parse one `text` element into a section.
fn parse_section(node: Node<'_, '_>) -> Section {
    let kind = node
        .attribute("type")
        .map(SectionKind::from_type_attr)
        .unwrap_or(SectionKind::Unknown);
    let language = xml_lang(node)
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
        .to_string();
    let id = xml_id(node)
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
        .to_string();

    let segments = descendants_with_tag(node, SEGMENT_TAG)
        .map(parse_segment)
        .collect();

    Section {
        kind,
        language,
        id,
        segments,
    }
}

/// Parse one `seg` element.
fn parse_segment(node: Node<'_, '_>) -> Segment {
    let id = xml_id(node).unwrap_or_default().to_string();
    let content = normalize(node);

    // Every word in the subtree, before any line filtering. Words inside
    // lines are collected again per line below.
    let words = descendants_with_tag(node, WORD_TAG)
        .map(parse_word)
        .collect();

    let mut line_numbers = Vec::new();
    let mut lines = Vec::new();
    for line_node in descendants_with_tag(node, LINE_TAG) {
        match parse_line(line_node) {
            Some(line) => {
                line_numbers.push(line.number);
                lines.push(line);
            }
            None => {
                tracing::debug!(
                    id = xml_id(line_node).unwrap_or_default(),
                    "line identifier carries no verse number, dropping"
                );
            }
        }
    }

    Segment {
        id,
        content,
        words,
        line_numbers,
        lines,
    }
}

/// Parse one `l` element. Lines whose identifier does not end in a
/// book.line pair are excluded entirely.
fn parse_line(node: Node<'_, '_>) -> Option<Line> {
    let id = xml_id(node).unwrap_or_default();
    let number = VerseKey::from_identifier(id)?;

    let words = descendants_with_tag(node, WORD_TAG)
        .map(parse_word)
        .collect();

    Some(Line {
        id: id.to_string(),
        number,
        content: normalize(node),
        words,
    })
}

/// Parse one `w` element with its apparatus anchors.
fn parse_word(node: Node<'_, '_>) -> Word {
    let id = xml_id(node).unwrap_or_default().to_string();
    let content = normalize(node);

    let anchors = descendants_with_tag(node, ANCHOR_TAG)
        .map(|anchor| Anchor {
            id: xml_id(anchor).unwrap_or_default().to_string(),
            // Apparatus text is kept verbatim, whitespace and all.
            content: raw_text(anchor),
        })
        .collect();

    Word { id, content, anchors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TeiError;
    use crate::types::Metadata;

    #[test]
    fn test_malformed_markup_is_fatal() {
        let err = parse("<TEI><text>").expect_err("unclosed tag must fail");
        assert!(matches!(err, TeiError::MalformedMarkup(_)));
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("<TEI></TEI>").expect("well-formed input");
        assert!(doc.sections.is_empty());
        assert_eq!(doc.metadata, Metadata::default());
    }

    #[test]
    fn test_sections_in_document_order() {
        let xml = r#"<TEI>
            <text type="source" xml:lang="la" xml:id="la"/>
            <text type="translation" xml:lang="it" xml:id="it"/>
            <text type="commentary" xml:lang="it" xml:id="comm"/>
        </TEI>"#;
        let doc = parse(xml).expect("well-formed input");

        let ids: Vec<_> = doc.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["la", "it", "comm"]);
        assert_eq!(doc.sections[0].kind, SectionKind::Source);
        assert_eq!(doc.sections[1].kind, SectionKind::Translation);
        assert_eq!(doc.sections[2].kind, SectionKind::Commentary);
        assert_eq!(doc.sections[0].language, "la");
    }

    #[test]
    fn test_section_attribute_defaults() {
        let doc = parse("<TEI><text/></TEI>").expect("well-formed input");
        let section = &doc.sections[0];

        assert_eq!(section.kind, SectionKind::Unknown);
        assert_eq!(section.language, "unknown");
        assert_eq!(section.id, "unknown");
    }

    #[test]
    fn test_segments_found_at_any_depth() {
        let xml = r#"<TEI><text xml:id="la">
            <body><div>
                <seg xml:id="la.5.335">alpha</seg>
                <div><seg xml:id="la.5.336">beta</seg></div>
            </div></body>
        </text></TEI>"#;
        let doc = parse(xml).expect("well-formed input");

        let ids: Vec<_> = doc.sections[0]
            .segments
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["la.5.335", "la.5.336"]);
        assert_eq!(doc.sections[0].segments[0].content, "alpha");
    }

    #[test]
    fn test_segment_collects_lines_and_numbers() {
        let xml = r#"<TEI><text xml:id="la"><seg xml:id="la.5.335">
            <l xml:id="Theb.5.335">arma</l>
            <l xml:id="Theb.5.336">virum</l>
            <l xml:id="la.praefatio">excluded</l>
        </seg></text></TEI>"#;
        let doc = parse(xml).expect("well-formed input");
        let segment = &doc.sections[0].segments[0];

        assert_eq!(
            segment.line_numbers,
            vec![VerseKey::new(5, 335), VerseKey::new(5, 336)]
        );
        assert_eq!(segment.lines.len(), 2);
        assert_eq!(segment.lines[0].id, "Theb.5.335");
        assert_eq!(segment.lines[0].number, VerseKey::new(5, 335));
        // The unmatched line's text survives only in the segment content.
        assert!(segment.content.contains("excluded"));
    }

    #[test]
    fn test_segment_words_include_words_outside_lines() {
        let xml = r#"<TEI><text xml:id="la"><seg xml:id="la.5.335">
            <w xml:id="w.intro">heading</w>
            <l xml:id="Theb.5.335"><w xml:id="w.1">pectora</w> <w xml:id="w.2">nuda</w></l>
        </seg></text></TEI>"#;
        let doc = parse(xml).expect("well-formed input");
        let segment = &doc.sections[0].segments[0];

        // Segment-level list holds all three; the line repeats its own two.
        let segment_ids: Vec<_> = segment.words.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(segment_ids, vec!["w.intro", "w.1", "w.2"]);

        let line_ids: Vec<_> = segment.lines[0]
            .words
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(line_ids, vec!["w.1", "w.2"]);
    }

    #[test]
    fn test_word_anchors_preserve_order_and_raw_text() {
        let xml = r#"<TEI><text xml:id="la"><seg xml:id="la.5.335">
            <w xml:id="w.1">pectora<anchor xml:id="app.1">pectora MSS :  tempora recc.</anchor><anchor xml:id="app.2"> del. Housman</anchor></w>
        </seg></text></TEI>"#;
        let doc = parse(xml).expect("well-formed input");
        let word = &doc.sections[0].segments[0].words[0];

        assert_eq!(word.anchors.len(), 2);
        assert_eq!(word.anchors[0].id, "app.1");
        // Raw apparatus text, internal whitespace intact.
        assert_eq!(word.anchors[0].content, "pectora MSS :  tempora recc.");
        assert_eq!(word.anchors[1].id, "app.2");
        assert_eq!(word.anchors[1].content, " del. Housman");
    }

    #[test]
    fn test_word_content_is_normalized() {
        let xml = r#"<TEI><text xml:id="la"><seg xml:id="s">
            <w xml:id="w.1">  pectora
            </w>
        </seg></text></TEI>"#;
        let doc = parse(xml).expect("well-formed input");
        assert_eq!(doc.sections[0].segments[0].words[0].content, "pectora");
    }

    #[test]
    fn test_word_without_id() {
        let xml = r#"<TEI><text xml:id="la"><seg xml:id="s"><w>vox</w></seg></text></TEI>"#;
        let doc = parse(xml).expect("well-formed input");
        let word = &doc.sections[0].segments[0].words[0];

        assert_eq!(word.id, "");
        assert_eq!(word.content, "vox");
        assert!(word.anchors.is_empty());
    }

    #[test]
    fn test_segment_content_uses_line_break_markers() {
        let xml = r#"<TEI><text xml:id="it">
            <seg xml:id="it.5.335">prima riga <lb/> seconda riga</seg>
        </text></TEI>"#;
        let doc = parse(xml).expect("well-formed input");
        assert_eq!(
            doc.sections[0].segments[0].content,
            "prima riga\nseconda riga"
        );
    }
}
