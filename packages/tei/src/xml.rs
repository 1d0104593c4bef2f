//! XML helpers for navigating roxmltree node trees.
//!
//! TEI uses a default namespace plus the reserved `xml:` attributes, so tag
//! matching goes by local name and the identifier helpers resolve against the
//! XML namespace explicitly.

use roxmltree::Node;

/// The XML namespace URI, home of the `xml:id` and `xml:lang` attributes.
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use synopsis_tei::xml::tag_name;
///
/// let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text/></TEI>"#;
/// let doc = Document::parse(xml).unwrap();
/// let text = doc.root_element().first_element_child().unwrap();
/// assert_eq!(tag_name(text), "text");
/// ```
pub fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// The `xml:id` attribute of an element, if present.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use synopsis_tei::xml::xml_id;
///
/// let doc = Document::parse(r#"<seg xml:id="la.5.335"/>"#).unwrap();
/// assert_eq!(xml_id(doc.root_element()), Some("la.5.335"));
/// ```
pub fn xml_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((XML_NS, "id"))
}

/// The `xml:lang` attribute of an element, if present.
pub fn xml_lang<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((XML_NS, "lang"))
}

/// All descendant elements with the given tag name, in document order.
///
/// The node itself is never included. Matching ignores namespaces, so the
/// helpers work the same on documents with and without the TEI namespace
/// declaration.
pub fn descendants_with_tag<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| n.is_element() && *n != node && n.tag_name().name() == tag)
}

/// Full text content of a subtree, untouched.
///
/// Concatenates every text run in document order, including text that
/// follows child elements. The DOM `textContent` equivalent.
#[must_use]
pub fn raw_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_tag_name_strips_namespace() {
        let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text/></TEI>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(tag_name(doc.root_element()), "TEI");
        let text = doc
            .root_element()
            .first_element_child()
            .expect("child element");
        assert_eq!(tag_name(text), "text");
    }

    #[test]
    fn test_xml_id_and_lang() {
        let xml = r#"<text xml:id="la" xml:lang="la" type="source"/>"#;
        let doc = Document::parse(xml).unwrap();
        let node = doc.root_element();

        assert_eq!(xml_id(node), Some("la"));
        assert_eq!(xml_lang(node), Some("la"));
    }

    #[test]
    fn test_xml_id_absent() {
        let doc = Document::parse("<seg/>").unwrap();
        assert_eq!(xml_id(doc.root_element()), None);
    }

    #[test]
    fn test_plain_id_attribute_is_not_xml_id() {
        let doc = Document::parse(r#"<seg id="plain"/>"#).unwrap();
        assert_eq!(xml_id(doc.root_element()), None);
    }

    #[test]
    fn test_descendants_with_tag_document_order() {
        let xml = r#"<text><body><seg xml:id="a"><seg xml:id="b"/></seg><seg xml:id="c"/></body></text>"#;
        let doc = Document::parse(xml).unwrap();

        let ids: Vec<_> = descendants_with_tag(doc.root_element(), "seg")
            .filter_map(xml_id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_descendants_with_tag_excludes_self() {
        let xml = r#"<seg xml:id="outer"><seg xml:id="inner"/></seg>"#;
        let doc = Document::parse(xml).unwrap();

        let ids: Vec<_> = descendants_with_tag(doc.root_element(), "seg")
            .filter_map(xml_id)
            .collect();
        assert_eq!(ids, vec!["inner"]);
    }

    #[test]
    fn test_raw_text_includes_tails() {
        let xml = "<w>pectora<anchor>note</anchor> nuda</w>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(raw_text(doc.root_element()), "pectoranote nuda");
    }

    #[test]
    fn test_raw_text_empty_element() {
        let doc = Document::parse("<w/>").unwrap();
        assert_eq!(raw_text(doc.root_element()), "");
    }
}
