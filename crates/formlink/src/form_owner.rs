//! Form Owner Resolver
//!
//! Browsers disagree on which form owns a label. Some treat the label like
//! any other element and report its own enclosing form; others report the
//! form of the label's associated control and nothing when there is no
//! control. `BrowserFeature::LabelFormOfSelf` selects between the two.

use formlink_dom::{FormElement, LabelElement};

use crate::{BrowserFeature, FeatureFlags, LabelResolver};

/// Strategy for computing a label's owning form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormOwnerPolicy {
    /// Enclosing form of the label itself
    FormOfSelf,
    /// Enclosing form of the label's associated control
    FormOfControl,
}

impl FormOwnerPolicy {
    pub fn from_flags(flags: FeatureFlags) -> Self {
        if flags.is_enabled(BrowserFeature::LabelFormOfSelf) {
            Self::FormOfSelf
        } else {
            Self::FormOfControl
        }
    }
}

/// Resolves a label's owning form under a fixed policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOwnerResolver {
    policy: FormOwnerPolicy,
    labels: LabelResolver,
}

impl FormOwnerResolver {
    pub fn new(policy: FormOwnerPolicy, labels: LabelResolver) -> Self {
        Self { policy, labels }
    }

    /// Pick the policy from session flags
    pub fn from_flags(flags: FeatureFlags, labels: LabelResolver) -> Self {
        Self::new(FormOwnerPolicy::from_flags(flags), labels)
    }

    pub fn policy(&self) -> FormOwnerPolicy {
        self.policy
    }

    /// The form owning `label`, if any
    pub fn resolve_owning_form<'a>(&self, label: LabelElement<'a>) -> Option<FormElement<'a>> {
        let doc = label.document();
        let subject = match self.policy {
            FormOwnerPolicy::FormOfSelf => label.node(),
            FormOwnerPolicy::FormOfControl => self.labels.resolve_control(label)?,
        };

        let form = doc.tree().enclosing_form(subject)?;
        tracing::trace!("label {} owned by form {} ({:?})", label.node(), form, self.policy);
        // enclosing_form only ever yields <form> elements
        FormElement::new(doc, form).ok()
    }
}

/// Resolve with the policy selected by `flags` and the default
/// dangling-`for` policy
pub fn resolve_owning_form<'a>(
    label: LabelElement<'a>,
    flags: &FeatureFlags,
) -> Option<FormElement<'a>> {
    FormOwnerResolver::from_flags(*flags, LabelResolver::default()).resolve_owning_form(label)
}
