//! Label property binding
//!
//! The script-facing surface of a `<label>`: `htmlFor` reflects the `for`
//! attribute, while `control` and `form` are derived from the resolvers and
//! read-only. Writes to the read-only pair are accepted and discarded, so a
//! script assigning them keeps running instead of failing.

use formlink_dom::{Document, DomError, DomTree, LabelElement, NodeId};

use crate::{BrowserFeature, LabelError, Session};

/// `htmlFor` property name
pub const HTML_FOR: &str = "htmlFor";
/// `control` property name
pub const CONTROL: &str = "control";
/// `form` property name
pub const FORM: &str = "form";

/// Value crossing the binding boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Null,
    String(String),
    Element(NodeId),
}

impl PropertyValue {
    fn from_node(node: Option<NodeId>) -> Self {
        node.map_or(Self::Null, Self::Element)
    }

    /// Node carried by the value, if any
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Element(node) => Some(*node),
            _ => None,
        }
    }
}

fn ensure_label(tree: &DomTree, node: NodeId) -> Result<(), LabelError> {
    match tree.tag_name(node) {
        Some("label") => Ok(()),
        Some(found) => Err(DomError::WrongElement {
            node,
            expected: "label",
            found: found.to_string(),
        }
        .into()),
        None if tree.contains(node) => Err(DomError::NotAnElement(node).into()),
        None => Err(DomError::NotFound(node).into()),
    }
}

/// Label properties as seen under one session
#[derive(Debug, Clone, Copy)]
pub struct LabelBinding<'s> {
    session: &'s Session,
}

impl<'s> LabelBinding<'s> {
    pub(crate) fn new(session: &'s Session) -> Self {
        Self { session }
    }

    /// Whether scripts can see the named property under this session
    pub fn exposes(&self, name: &str) -> bool {
        match name {
            HTML_FOR | FORM => true,
            CONTROL => self
                .session
                .flags()
                .is_enabled(BrowserFeature::LabelControlProperty),
            _ => false,
        }
    }

    /// Exposed property names
    pub fn property_names(&self) -> Vec<&'static str> {
        [HTML_FOR, CONTROL, FORM]
            .into_iter()
            .filter(|name| self.exposes(name))
            .collect()
    }

    /// Raw `for` attribute, or an empty string when unset
    pub fn html_for(&self, doc: &Document, label: NodeId) -> Result<String, LabelError> {
        ensure_label(doc.tree(), label)?;
        Ok(doc
            .tree()
            .get_attribute(label, "for")
            .unwrap_or_default()
            .to_string())
    }

    /// Write the `for` attribute verbatim
    pub fn set_html_for(
        &self,
        doc: &mut Document,
        label: NodeId,
        value: &str,
    ) -> Result<(), LabelError> {
        ensure_label(doc.tree(), label)?;
        doc.tree_mut().set_attribute(label, "for", value)?;
        Ok(())
    }

    /// Associated control of a connected label
    pub fn control(&self, doc: &Document, label: NodeId) -> Result<Option<NodeId>, LabelError> {
        let label = LabelElement::new(doc, label)?;
        Ok(self.session.label_resolver().resolve_control(label))
    }

    /// `control` is read-only; the write is discarded
    pub fn set_control(&self, label: NodeId, value: Option<NodeId>) {
        tracing::trace!("ignored write of {:?} to {}.control", value, label);
    }

    /// Owning form of a connected label
    pub fn form(&self, doc: &Document, label: NodeId) -> Result<Option<NodeId>, LabelError> {
        let label = LabelElement::new(doc, label)?;
        Ok(self
            .session
            .form_owner_resolver()
            .resolve_owning_form(label)
            .map(|form| form.node()))
    }

    /// `form` is read-only; the write is discarded
    pub fn set_form(&self, label: NodeId, value: Option<NodeId>) {
        tracing::trace!("ignored write of {:?} to {}.form", value, label);
    }

    /// Read a property by name. `None` if the session does not expose it.
    pub fn get(
        &self,
        doc: &Document,
        label: NodeId,
        name: &str,
    ) -> Result<Option<PropertyValue>, LabelError> {
        if !self.exposes(name) {
            return Ok(None);
        }
        let value = match name {
            HTML_FOR => PropertyValue::String(self.html_for(doc, label)?),
            CONTROL => PropertyValue::from_node(self.control(doc, label)?),
            FORM => PropertyValue::from_node(self.form(doc, label)?),
            _ => return Ok(None),
        };
        Ok(Some(value))
    }

    /// Write a property by name. Returns whether the property is exposed;
    /// writes to unexposed properties are left to the caller.
    pub fn set(
        &self,
        doc: &mut Document,
        label: NodeId,
        name: &str,
        value: PropertyValue,
    ) -> Result<bool, LabelError> {
        if !self.exposes(name) {
            return Ok(false);
        }
        match name {
            HTML_FOR => match value {
                PropertyValue::String(value) => self.set_html_for(doc, label, &value)?,
                _ => return Err(LabelError::TypeMismatch { property: HTML_FOR }),
            },
            CONTROL => self.set_control(label, value.as_node()),
            FORM => self.set_form(label, value.as_node()),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BrowserProfile;

    struct Page {
        doc: Document,
        form: NodeId,
        label: NodeId,
        input: NodeId,
    }

    /// `<form><label for=name></label></form><input id=name>`
    fn page() -> Page {
        let mut doc = Document::default();
        let body = doc.body();
        let tree = doc.tree_mut();
        let form = tree.create_element("form");
        let label = tree.create_element("label");
        let input = tree.create_element("input");
        tree.set_attribute(label, "for", "name").unwrap();
        tree.set_attribute(input, "id", "name").unwrap();
        tree.append_child(body, form).unwrap();
        tree.append_child(form, label).unwrap();
        tree.append_child(body, input).unwrap();
        Page { doc, form, label, input }
    }

    #[test]
    fn test_html_for_reflects_attribute() {
        let mut p = page();
        let session = Session::default();
        let binding = session.binding();

        assert_eq!(binding.html_for(&p.doc, p.label).unwrap(), "name");

        binding.set_html_for(&mut p.doc, p.label, "").unwrap();
        assert_eq!(p.doc.tree().get_attribute(p.label, "for"), Some(""));

        p.doc.tree_mut().remove_attribute(p.label, "for").unwrap();
        assert_eq!(binding.html_for(&p.doc, p.label).unwrap(), "");
    }

    #[test]
    fn test_html_for_writes_verbatim() {
        let mut p = page();
        let session = Session::default();
        let binding = session.binding();

        binding.set_html_for(&mut p.doc, p.label, "  not an id!  ").unwrap();
        assert_eq!(binding.html_for(&p.doc, p.label).unwrap(), "  not an id!  ");
        assert_eq!(binding.control(&p.doc, p.label).unwrap(), None);
    }

    #[test]
    fn test_read_only_writes_discarded() {
        let mut p = page();
        let session = Session::default();
        let binding = session.binding();

        assert!(binding
            .set(&mut p.doc, p.label, CONTROL, PropertyValue::Element(p.form))
            .unwrap());
        assert!(binding
            .set(&mut p.doc, p.label, FORM, PropertyValue::Null)
            .unwrap());

        assert_eq!(binding.control(&p.doc, p.label).unwrap(), Some(p.input));
        assert_eq!(binding.form(&p.doc, p.label).unwrap(), None);
    }

    #[test]
    fn test_form_follows_profile() {
        let p = page();
        let chrome = Session::new(BrowserProfile::Chrome);
        let ie = Session::new(BrowserProfile::InternetExplorer);

        assert_eq!(chrome.binding().form(&p.doc, p.label).unwrap(), None);
        assert_eq!(ie.binding().form(&p.doc, p.label).unwrap(), Some(p.form));
    }

    #[test]
    fn test_control_hidden_for_ie() {
        let mut p = page();
        let ie = Session::new(BrowserProfile::InternetExplorer);
        let binding = ie.binding();

        assert_eq!(binding.property_names(), vec![HTML_FOR, FORM]);
        assert_eq!(binding.get(&p.doc, p.label, CONTROL).unwrap(), None);
        assert!(!binding
            .set(&mut p.doc, p.label, CONTROL, PropertyValue::Null)
            .unwrap());
    }

    #[test]
    fn test_get_by_name() {
        let p = page();
        let session = Session::new(BrowserProfile::Firefox);
        let binding = session.binding();

        assert_eq!(
            binding.get(&p.doc, p.label, HTML_FOR).unwrap(),
            Some(PropertyValue::String("name".into()))
        );
        assert_eq!(
            binding.get(&p.doc, p.label, CONTROL).unwrap(),
            Some(PropertyValue::Element(p.input))
        );
        assert_eq!(
            binding.get(&p.doc, p.label, FORM).unwrap(),
            Some(PropertyValue::Null)
        );
        assert_eq!(binding.get(&p.doc, p.label, "htmlfor").unwrap(), None);
    }

    #[test]
    fn test_set_html_for_type_mismatch() {
        let mut p = page();
        let session = Session::default();
        let err = session
            .binding()
            .set(&mut p.doc, p.label, HTML_FOR, PropertyValue::Element(p.input))
            .unwrap_err();
        assert_eq!(err, LabelError::TypeMismatch { property: HTML_FOR });
    }

    #[test]
    fn test_set_html_for_by_name() {
        let mut p = page();
        let session = Session::default();
        let binding = session.binding();

        assert!(binding
            .set(&mut p.doc, p.label, HTML_FOR, PropertyValue::String("other".into()))
            .unwrap());
        assert_eq!(p.doc.tree().get_attribute(p.label, "for"), Some("other"));
    }

    #[test]
    fn test_non_label_rejected() {
        let p = page();
        let session = Session::default();
        let binding = session.binding();

        assert!(matches!(
            binding.html_for(&p.doc, p.input),
            Err(LabelError::Dom(DomError::WrongElement { .. }))
        ));
        assert!(matches!(
            binding.control(&p.doc, p.form),
            Err(LabelError::Dom(DomError::WrongElement { .. }))
        ));
    }

    #[test]
    fn test_detached_label_fails_fast() {
        let mut p = page();
        let session = Session::default();
        p.doc.tree_mut().remove_child(p.form, p.label).unwrap();
        let binding = session.binding();

        assert_eq!(
            binding.control(&p.doc, p.label),
            Err(LabelError::Dom(DomError::Detached(p.label)))
        );
        assert_eq!(
            binding.form(&p.doc, p.label),
            Err(LabelError::Dom(DomError::Detached(p.label)))
        );
        // plain attribute access still works off-document
        assert_eq!(binding.html_for(&p.doc, p.label).unwrap(), "name");
    }
}
