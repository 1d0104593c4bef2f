//! Bibliographic metadata extraction from the TEI header.
//!
//! Metadata comes from fixed, first-occurrence lookups: the main title, the
//! author, the editor, the date, and the language marked as the source
//! language. A missing element is not an error; the field takes its literal
//! "Unknown …" placeholder.

use roxmltree::{Document, Node};

use crate::types::Metadata;
use crate::xml::{raw_text, tag_name};

/// Extract document metadata from a parsed TEI tree.
pub fn parse_metadata(doc: &Document<'_>) -> Metadata {
    Metadata {
        title: find_main_title(doc).unwrap_or_else(|| "Unknown Title".to_string()),
        author: find_first_text(doc, "author").unwrap_or_else(|| "Unknown Author".to_string()),
        editor: find_first_text(doc, "editor").unwrap_or_else(|| "Unknown Editor".to_string()),
        date: find_first_text(doc, "date").unwrap_or_else(|| "Unknown Date".to_string()),
        language: find_source_language(doc)
            .unwrap_or_else(|| "Unknown Language".to_string()),
    }
}

/// Trimmed text content of an element, `None` when blank.
fn element_text(node: Node<'_, '_>) -> Option<String> {
    let text = raw_text(node).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// First `title` element marked `type="main"`.
fn find_main_title(doc: &Document<'_>) -> Option<String> {
    doc.descendants()
        .find(|n| {
            n.is_element() && tag_name(*n) == "title" && n.attribute("type") == Some("main")
        })
        .and_then(element_text)
}

/// First occurrence of `tag` anywhere in the document.
fn find_first_text(doc: &Document<'_>, tag: &str) -> Option<String> {
    doc.descendants()
        .find(|n| n.is_element() && tag_name(*n) == tag)
        .and_then(element_text)
}

/// The `language` element marked `ana="source"` inside a `langUsage` block.
fn find_source_language(doc: &Document<'_>) -> Option<String> {
    doc.descendants()
        .filter(|n| n.is_element() && tag_name(*n) == "langUsage")
        .flat_map(|n| n.descendants())
        .find(|n| {
            n.is_element() && tag_name(*n) == "language" && n.attribute("ana") == Some("source")
        })
        .and_then(element_text)
}
