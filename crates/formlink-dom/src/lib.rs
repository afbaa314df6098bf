//! formlink DOM - Document Object Model
//!
//! Arena-based document tree carrying just enough HTML form vocabulary to
//! answer label and form-owner questions: id lookup, ancestor walks,
//! document-order descendant search and the enclosing-form relation.

mod document;
mod error;
mod forms;
mod interner;
mod node;
pub mod taxonomy;
mod tree;

pub use document::Document;
pub use error::{DomError, DomResult};
pub use forms::{FormElement, LabelElement};
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use taxonomy::ControlKind;
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Null link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node slot
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
