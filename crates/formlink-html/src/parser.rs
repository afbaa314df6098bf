//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the arena tree.

use formlink_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        self.convert_node(&dom.document, document.tree_mut(), NodeId::ROOT)?;
        document.finalize();

        tracing::debug!("Parsed {} nodes from {}", document.tree().len(), url);
        Ok(document)
    }

    /// Convert an RcDom node and its subtree, appending under `parent`.
    ///
    /// Walks with an explicit stack so nesting depth is bounded by the heap,
    /// not the call stack.
    fn convert_node(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> Result<(), ParseError> {
        let mut stack: Vec<(Handle, NodeId)> = vec![(handle.clone(), parent)];

        while let Some((handle, parent)) = stack.pop() {
            let children_parent = match &handle.data {
                RcNodeData::Document => parent,
                RcNodeData::Doctype { name, .. } => {
                    let id = tree.create_doctype(name);
                    tree.append_child(parent, id)?;
                    continue;
                }
                RcNodeData::Text { contents } => {
                    let text = contents.borrow();
                    if !text.trim().is_empty() {
                        let id = tree.create_text(&text);
                        tree.append_child(parent, id)?;
                    }
                    continue;
                }
                RcNodeData::Comment { contents } => {
                    let id = tree.create_comment(contents);
                    tree.append_child(parent, id)?;
                    continue;
                }
                RcNodeData::Element { name, attrs, .. } => {
                    let id = tree.create_element(&name.local);
                    for attr in attrs.borrow().iter() {
                        tree.set_attribute(id, &attr.name.local, &attr.value)?;
                    }
                    tree.append_child(parent, id)?;
                    id
                }
                RcNodeData::ProcessingInstruction { .. } => continue,
            };

            // reversed so siblings pop in document order; template contents
            // live in a separate fragment and stay inert
            stack.extend(
                handle
                    .children
                    .borrow()
                    .iter()
                    .rev()
                    .map(|child| (child.clone(), children_parent)),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        assert!(doc.tree().len() > 1, "Expected more than 1 node, got {}", doc.tree().len());
        assert_eq!(doc.tree().tag_name(doc.body()), Some("body"));
    }

    #[test]
    fn test_parse_fragment_gets_skeleton() {
        let doc = HtmlParser::new()
            .parse("<label for=x>Name</label><input id=x>")
            .unwrap();

        let label = doc.tree().children(doc.body()).next().map(|(id, _)| id).unwrap();
        assert_eq!(doc.tree().tag_name(label), Some("label"));
        assert_eq!(doc.tree().get_attribute(label, "for"), Some("x"));
        assert!(doc.get_element_by_id("x").is_some());
    }

    #[test]
    fn test_whitespace_text_dropped() {
        let doc = HtmlParser::new().parse("<div>  \n  </div>").unwrap();
        let div = doc.tree().children(doc.body()).next().map(|(id, _)| id).unwrap();
        assert_eq!(doc.tree().children(div).count(), 0);
    }

    #[test]
    fn test_sibling_and_nesting_order_kept() {
        let doc = HtmlParser::new()
            .parse("<form id=f><label id=a><input id=a1><input id=a2></label><label id=b></label></form>")
            .unwrap();
        let tree = doc.tree();
        let form = doc.get_element_by_id("f").unwrap();
        let order: Vec<&str> = tree
            .descendants(form)
            .filter_map(|n| tree.get_attribute(n, "id"))
            .collect();
        assert_eq!(order, ["a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_url_kept() {
        let doc = HtmlParser::new()
            .parse_with_url("<p>x</p>", "https://forms.test/a")
            .unwrap();
        assert_eq!(doc.url(), "https://forms.test/a");
    }
}
