//! Tag taxonomy for form controls
//!
//! Classifies tags into labelable controls and form-associated elements.
//! Tags are expected in lowercase, as the tree stores them.

/// Labelable form control kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Button,
    Input,
    Meter,
    Output,
    Progress,
    Select,
    TextArea,
}

impl ControlKind {
    /// Classify a tag name
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "button" => Some(Self::Button),
            "input" => Some(Self::Input),
            "meter" => Some(Self::Meter),
            "output" => Some(Self::Output),
            "progress" => Some(Self::Progress),
            "select" => Some(Self::Select),
            "textarea" => Some(Self::TextArea),
            _ => None,
        }
    }

    /// Whether a control of this kind can be labeled.
    ///
    /// `input_type` is the raw `type` attribute; only inputs consult it.
    pub fn is_labelable(self, input_type: Option<&str>) -> bool {
        match self {
            Self::Input => !input_type.is_some_and(|t| t.eq_ignore_ascii_case("hidden")),
            _ => true,
        }
    }
}

/// Whether an element with this tag can be the target of implicit label
/// association
pub fn is_labelable(tag: &str, input_type: Option<&str>) -> bool {
    ControlKind::from_tag(tag).is_some_and(|kind| kind.is_labelable(input_type))
}

/// Whether an element with this tag honours a `form` content attribute
pub fn is_form_associated(tag: &str) -> bool {
    matches!(
        tag,
        "button" | "fieldset" | "input" | "object" | "output" | "select" | "textarea"
    )
}
