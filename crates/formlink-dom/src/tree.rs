//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: removing a node only unlinks it, leaving a
//! detached subtree that can be re-inserted later. Queries that model
//! document scope (id lookup, enclosing form) only ever see nodes connected
//! to the root.

use crate::taxonomy;
use crate::{DomError, DomResult, InternedString, Node, NodeData, NodeId, StringInterner};

/// Arena-based DOM tree
///
/// Links are only rewired through [`DomTree::append_child`] and
/// [`DomTree::remove_child`]; nodes are handed out read-only.
///
/// ```compile_fail
/// let mut tree = formlink_dom::DomTree::new();
/// tree.get_mut(formlink_dom::NodeId::ROOT);
/// ```
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Check that an ID names a node of this tree
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    // ---------------------------------------------------------------------
    // Node creation
    // ---------------------------------------------------------------------

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn intern_name(&mut self, name: &str) -> InternedString {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.interner.intern(&name.to_ascii_lowercase())
        } else {
            self.interner.intern(name)
        }
    }

    fn lookup_name(&self, name: &str) -> Option<InternedString> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.interner.lookup(&name.to_ascii_lowercase())
        } else {
            self.interner.lookup(name)
        }
    }

    /// Create a detached element; the tag is stored ASCII-lowercased
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let tag = self.intern_name(tag);
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text.to_string()))
    }

    /// Create a detached DOCTYPE node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::doctype(name.to_string()))
    }

    // ---------------------------------------------------------------------
    // Structure
    // ---------------------------------------------------------------------

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    /// Append `child` as the last child of `parent`, moving it if it is
    /// already attached elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.is_container() {
            return Err(DomError::InvalidNodeType(parent));
        }
        if matches!(self.node(child)?.data, NodeData::Document) {
            return Err(DomError::InvalidNodeType(child));
        }
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.unlink(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        tracing::trace!("appended {} under {}", child, parent);
        Ok(child)
    }

    /// Detach `child` from `parent`. The node stays in the arena.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.node(parent)?;
        if self.node(child)?.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }

        self.unlink(child);
        tracing::trace!("removed {} from {}", child, parent);
        Ok(child)
    }

    fn unlink(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_valid().then_some(parent)
    }

    /// Whether the node is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(id) && (id == NodeId::ROOT || self.ancestors(id).any(|a| a == NodeId::ROOT))
    }

    /// Direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Ancestors from the parent upwards, excluding `id` itself
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.parent),
        }
    }

    /// Descendants in document order (pre-order), excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root: id,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    fn next_in_subtree(&self, from: NodeId, root: NodeId) -> NodeId {
        let mut cursor = from;
        while cursor != root {
            let Some(node) = self.get(cursor) else {
                break;
            };
            if node.next_sibling.is_valid() {
                return node.next_sibling;
            }
            cursor = node.parent;
        }
        NodeId::NONE
    }

    // ---------------------------------------------------------------------
    // Attributes
    // ---------------------------------------------------------------------

    /// Set an attribute verbatim; the name is stored ASCII-lowercased
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let name = self.intern_name(name);
        let elem = self
            .nodes
            .get_mut(id.index())
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?;
        elem.set_attr(name, value.to_string());
        Ok(())
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        let name = self.lookup_name(name);
        let elem = self
            .nodes
            .get_mut(id.index())
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?;
        Ok(name.and_then(|n| elem.remove_attr(n)))
    }

    /// Get an attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.lookup_name(name)?;
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Check if an attribute is present
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.interner.get(elem.tag))
    }

    /// Check an element's tag
    pub fn has_tag(&self, id: NodeId, tag: &str) -> bool {
        self.tag_name(id).is_some_and(|t| t.eq_ignore_ascii_case(tag))
    }

    /// First connected element in document order whose `id` equals `id`.
    ///
    /// Matching is exact; an empty `id` never matches.
    pub fn lookup_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        let key = self.interner.lookup("id")?;
        self.descendants(NodeId::ROOT).find(|&node| {
            self.nodes[node.index()]
                .as_element()
                .and_then(|e| e.get_attr(key))
                == Some(id)
        })
    }

    /// Whether the element can be the associated control of a label
    pub fn is_labelable_control(&self, id: NodeId) -> bool {
        let Some(tag) = self.tag_name(id) else {
            return false;
        };
        taxonomy::is_labelable(tag, self.get_attribute(id, "type"))
    }

    /// The form owning an element.
    ///
    /// A form-associated element with a `form` attribute is owned by the
    /// form that attribute names, or by nothing if it names no form.
    /// Every other element is owned by its nearest form ancestor.
    pub fn enclosing_form(&self, id: NodeId) -> Option<NodeId> {
        let tag = self.tag_name(id)?;

        if taxonomy::is_form_associated(tag) {
            if let Some(form_ref) = self.get_attribute(id, "form") {
                let owner = self
                    .lookup_by_id(form_ref)
                    .filter(|&candidate| self.has_tag(candidate, "form"));
                tracing::trace!("{} names form {:?}: owner {:?}", id, form_ref, owner);
                return owner;
            }
        }

        self.ancestors(id).find(|&a| self.has_tag(a, "form"))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Iterator over ancestors, nearest first
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next;
        self.next = self.tree.get(id)?.parent;
        Some(id)
    }
}

/// Pre-order iterator bounded to one subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            self.tree.next_in_subtree(id, self.root)
        };
        Some(id)
    }
}
