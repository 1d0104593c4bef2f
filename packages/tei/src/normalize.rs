//! Text content normalization.
//!
//! TEI text content interleaves prose with `lb` line-break markers and the
//! incidental whitespace of pretty-printed XML. Normalization flattens a
//! subtree into display text: markers become real newlines, whitespace runs
//! collapse to single spaces, and blank-line runs cap at one empty line.
//!
//! The transform is pure: the tree is walked, never cloned or mutated.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;

use crate::xml::tag_name;

/// Tag of the inline line-break marker.
const LINE_BREAK_TAG: &str = "lb";

/// Whitespace runs that contain no newline.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("valid regex"));

/// Spaces immediately following a newline.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_AFTER_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n +").expect("valid regex"));

/// Spaces immediately preceding a newline.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +\n").expect("valid regex"));

/// Three or more consecutive newlines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Normalized display text of an element subtree.
///
/// Total function: any subtree yields a string, possibly empty.
#[must_use]
pub fn normalize(node: Node<'_, '_>) -> String {
    normalize_text(&flatten_with_breaks(node))
}

/// Flatten a subtree to its text runs, substituting a newline for each
/// line-break marker at the position where the marker occurs.
fn flatten_with_breaks(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    for n in node.descendants() {
        if n.is_text() {
            if let Some(t) = n.text() {
                out.push_str(t);
            }
        } else if n.is_element() && tag_name(n) == LINE_BREAK_TAG {
            out.push('\n');
        }
    }
    out
}

/// Apply the whitespace rules to already-flattened text.
///
/// In order: trim the ends, collapse whitespace runs without a newline to a
/// single space, drop spaces adjacent to newlines, cap newline runs at two.
/// Idempotent, so re-normalizing display text is a no-op.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    let collapsed = SPACE_RUN.replace_all(trimmed, " ");
    let after = SPACE_AFTER_NEWLINE.replace_all(&collapsed, "\n");
    let before = SPACE_BEFORE_NEWLINE.replace_all(&after, "\n");
    NEWLINE_RUN.replace_all(&before, "\n\n").into_owned()
}
