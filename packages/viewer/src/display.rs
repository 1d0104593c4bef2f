//! Terminal rendering for parsed documents.
//!
//! Pure string builders; the CLI decides where they go. Styling degrades to
//! plain text when stdout is not a terminal.

use console::style;
use synopsis_tei::{group_by_verse, ParsedTeiDocument, Segment};
use textwrap::fill;

/// Wrap width for document text.
pub const WRAP_WIDTH: usize = 100;

/// Render the bibliographic header block.
#[must_use]
pub fn render_metadata(doc: &ParsedTeiDocument) -> String {
    let metadata = &doc.metadata;
    let mut out = String::new();
    out.push_str(&format!("{}\n", style(&metadata.title).bold()));
    out.push_str(&format!("  author    {}\n", metadata.author));
    out.push_str(&format!("  editor    {}\n", metadata.editor));
    out.push_str(&format!("  date      {}\n", metadata.date));
    out.push_str(&format!("  language  {}\n", metadata.language));
    out
}

/// Render every section with its segments and apparatus notes.
#[must_use]
pub fn render_sections(doc: &ParsedTeiDocument) -> String {
    let mut out = String::new();
    for section in &doc.sections {
        out.push_str(&format!(
            "\n{} {} [{}] - {} segment(s)\n",
            style(section.kind.as_str()).cyan().bold(),
            section.id,
            section.language,
            section.segments.len()
        ));
        for segment in &section.segments {
            out.push_str(&render_segment(segment));
        }
    }
    out
}

/// Render verse-aligned rows across all layers, in numeric verse order.
#[must_use]
pub fn render_alignment(doc: &ParsedTeiDocument) -> String {
    let index = group_by_verse(&doc.sections);
    let mut out = String::new();
    for (key, segments) in &index {
        out.push_str(&format!("\n{}\n", style(key).bold()));
        for segment in segments {
            out.push_str(&format!("  {}\n", style(&segment.id).green()));
            if !segment.content.is_empty() {
                out.push_str(&wrapped_block(&segment.content, "    "));
            }
        }
    }
    out
}

fn render_segment(segment: &Segment) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n  {}\n", style(&segment.id).green()));
    if !segment.content.is_empty() {
        out.push_str(&wrapped_block(&segment.content, "    "));
    }
    for anchor in segment.words.iter().flat_map(|w| &w.anchors) {
        out.push_str(&format!(
            "    {} {}\n",
            style(&anchor.id).dim(),
            anchor.content.trim()
        ));
    }
    out
}

/// Wrap a text block and indent every line.
fn wrapped_block(text: &str, prefix: &str) -> String {
    let mut block = textwrap::indent(&fill(text, WRAP_WIDTH), prefix);
    if !block.ends_with('\n') {
        block.push('\n');
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use synopsis_tei::parse;

    const SAMPLE: &str = r#"<TEI>
        <title type="main">Thebaid</title>
        <text type="source" xml:lang="la" xml:id="la">
            <seg xml:id="la.5.335"><w xml:id="w.1">pectora<anchor xml:id="app.1">pectora P</anchor></w></seg>
        </text>
        <text type="translation" xml:lang="it" xml:id="it">
            <seg xml:id="it.5.335">il petto</seg>
        </text>
    </TEI>"#;

    #[test]
    fn test_render_metadata_names_fields() {
        let doc = parse(SAMPLE).expect("sample parses");
        let out = render_metadata(&doc);

        assert!(out.contains("Thebaid"));
        assert!(out.contains("author    Unknown Author"));
        assert!(out.contains("language  Unknown Language"));
    }

    #[test]
    fn test_render_sections_lists_segments_and_apparatus() {
        let doc = parse(SAMPLE).expect("sample parses");
        let out = render_sections(&doc);

        assert!(out.contains("source la [la] - 1 segment(s)"));
        assert!(out.contains("la.5.335"));
        assert!(out.contains("app.1 pectora P"));
    }

    #[test]
    fn test_render_alignment_groups_by_verse() {
        let doc = parse(SAMPLE).expect("sample parses");
        let out = render_alignment(&doc);

        assert!(out.contains("5.335"));
        assert!(out.contains("la.5.335"));
        assert!(out.contains("it.5.335"));
        assert!(out.contains("il petto"));
    }

    #[test]
    fn test_wrapped_block_ends_with_newline() {
        let block = wrapped_block("pectora nuda", "  ");
        assert_eq!(block, "  pectora nuda\n");
    }
}
