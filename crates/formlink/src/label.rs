//! Label Resolver
//!
//! Maps a label to its associated control. Explicit association (`for`
//! naming an element id) wins; implicit association picks the first
//! labelable descendant in document order. Nothing is cached: every call
//! reads the current tree.

use formlink_dom::{LabelElement, NodeId};
use serde::{Deserialize, Serialize};

/// What to do when `for` names an id that no element carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DanglingForPolicy {
    /// Try implicit association through the label's descendants
    #[default]
    #[serde(rename = "fallback")]
    FallBackToDescendants,
    /// The label has no control
    #[serde(rename = "strict")]
    Strict,
}

/// Resolves a label's associated control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelResolver {
    dangling_for: DanglingForPolicy,
}

impl LabelResolver {
    pub fn new(dangling_for: DanglingForPolicy) -> Self {
        Self { dangling_for }
    }

    pub fn dangling_for(&self) -> DanglingForPolicy {
        self.dangling_for
    }

    /// The element `label` is associated with, if any.
    ///
    /// An explicit `for` target is returned whatever its tag.
    pub fn resolve_control(&self, label: LabelElement<'_>) -> Option<NodeId> {
        let tree = label.document().tree();

        if let Some(target) = label.for_attribute().filter(|value| !value.is_empty()) {
            if let Some(control) = tree.lookup_by_id(target) {
                tracing::trace!("label {} -> {} via for={:?}", label.node(), control, target);
                return Some(control);
            }
            if self.dangling_for == DanglingForPolicy::Strict {
                tracing::trace!("label {} has dangling for={:?}", label.node(), target);
                return None;
            }
        }

        let control = tree
            .descendants(label.node())
            .find(|&node| tree.is_labelable_control(node));
        tracing::trace!("label {} -> {:?} via descendants", label.node(), control);
        control
    }
}

/// Resolve with the default dangling-`for` policy
pub fn resolve_control(label: LabelElement<'_>) -> Option<NodeId> {
    LabelResolver::default().resolve_control(label)
}
