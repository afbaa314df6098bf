//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId`s (4 bytes) instead of pointers,
//! so the tree can be borrowed freely while being walked.

use crate::{InternedString, NodeId};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn unlinked(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: InternedString) -> Self {
        Self::unlinked(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::unlinked(NodeData::Text(content))
    }

    /// Create a comment node
    pub fn comment(content: String) -> Self {
        Self::unlinked(NodeData::Comment(content))
    }

    /// Create a DOCTYPE node
    pub fn doctype(name: String) -> Self {
        Self::unlinked(NodeData::Doctype { name })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::unlinked(NodeData::Document)
    }

    /// Whether this node may have children
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.data, NodeData::Document | NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name (lowercase)
    pub tag: InternedString,
    /// Attributes in insertion order, names unique
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(tag: InternedString) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: InternedString) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, returning the previous value
    pub fn set_attr(&mut self, name: InternedString, value: String) -> Option<String> {
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            return Some(std::mem::replace(&mut attr.value, value));
        }
        self.attrs.push(Attribute { name, value });
        None
    }

    /// Remove an attribute, returning its value
    pub fn remove_attr(&mut self, name: InternedString) -> Option<String> {
        let index = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(index).value)
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: InternedString,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut elem = ElementData::new(InternedString(1));
        assert_eq!(elem.set_attr(InternedString(2), "a".into()), None);
        assert_eq!(elem.set_attr(InternedString(3), "b".into()), None);
        assert_eq!(elem.set_attr(InternedString(2), "c".into()), Some("a".into()));

        assert_eq!(elem.attrs.len(), 2);
        assert_eq!(elem.attrs[0].value, "c");
        assert_eq!(elem.get_attr(InternedString(3)), Some("b"));
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new(InternedString(1));
        elem.set_attr(InternedString(2), String::new());

        assert_eq!(elem.remove_attr(InternedString(2)), Some(String::new()));
        assert_eq!(elem.remove_attr(InternedString(2)), None);
        assert!(elem.attrs.is_empty());
    }

    #[test]
    fn test_containers() {
        assert!(Node::document().is_container());
        assert!(Node::element(InternedString(1)).is_container());
        assert!(!Node::text("x".into()).is_container());
        assert!(!Node::comment("x".into()).is_container());
    }
}
