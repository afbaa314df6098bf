//! Label and Form element views
//!
//! Typed, borrowed views over tree elements. Constructing a view checks the
//! element's tag, so code holding one never has to re-validate it.

use crate::{Document, DomError, DomResult, NodeId};

fn check_tag(doc: &Document, node: NodeId, expected: &'static str) -> DomResult<()> {
    let tree = doc.tree();
    if !tree.contains(node) {
        return Err(DomError::NotFound(node));
    }
    let tag = tree.tag_name(node).ok_or(DomError::NotAnElement(node))?;
    if tag != expected {
        return Err(DomError::WrongElement {
            node,
            expected,
            found: tag.to_string(),
        });
    }
    Ok(())
}

/// A connected `<label>` element
#[derive(Debug, Clone, Copy)]
pub struct LabelElement<'a> {
    doc: &'a Document,
    node: NodeId,
}

impl<'a> LabelElement<'a> {
    /// View `node` as a label.
    ///
    /// Fails if the node does not exist, is not a `<label>`, or is not
    /// connected to the document.
    pub fn new(doc: &'a Document, node: NodeId) -> DomResult<Self> {
        check_tag(doc, node, "label")?;
        if !doc.tree().is_connected(node) {
            return Err(DomError::Detached(node));
        }
        Ok(Self { doc, node })
    }

    /// Underlying node
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Owning document
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Raw `for` attribute, `None` if unset
    pub fn for_attribute(&self) -> Option<&'a str> {
        self.doc.tree().get_attribute(self.node, "for")
    }
}

/// A `<form>` element
#[derive(Debug, Clone, Copy)]
pub struct FormElement<'a> {
    doc: &'a Document,
    node: NodeId,
}

impl<'a> FormElement<'a> {
    /// View `node` as a form
    pub fn new(doc: &'a Document, node: NodeId) -> DomResult<Self> {
        check_tag(doc, node, "form")?;
        Ok(Self { doc, node })
    }

    /// Underlying node
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn id(&self) -> Option<&'a str> {
        self.doc.tree().get_attribute(self.node, "id")
    }
}

impl PartialEq for FormElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.node == other.node
    }
}

impl Eq for FormElement<'_> {}
