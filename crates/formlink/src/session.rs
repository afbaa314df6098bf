//! Session - immutable browser emulation settings
//!
//! A session is built once from a profile or configuration and never
//! changes afterwards, so every resolver created from it sees the same
//! feature flags for its whole lifetime.

use crate::{
    BrowserProfile, ConfigError, FeatureFlags, FormOwnerResolver, LabelBinding, LabelResolver,
    SessionConfig,
};

/// Emulation session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    profile: BrowserProfile,
    flags: FeatureFlags,
    labels: LabelResolver,
}

impl Session {
    /// Session with a profile's stock features
    pub fn new(profile: BrowserProfile) -> Self {
        Self {
            profile,
            flags: profile.features(),
            labels: LabelResolver::default(),
        }
    }

    /// Session from a configuration
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        let session = Self {
            profile: config.browser,
            flags: config.flags()?,
            labels: LabelResolver::new(config.dangling_for),
        };
        tracing::debug!(
            "Session for {} with features [{}]",
            session.profile,
            session
                .flags
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(session)
    }

    pub fn profile(&self) -> BrowserProfile {
        self.profile
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags
    }

    pub fn label_resolver(&self) -> LabelResolver {
        self.labels
    }

    pub fn form_owner_resolver(&self) -> FormOwnerResolver {
        FormOwnerResolver::from_flags(self.flags, self.labels)
    }

    /// Script-facing property access for labels
    pub fn binding(&self) -> LabelBinding<'_> {
        LabelBinding::new(self)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BrowserProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BrowserFeature, DanglingForPolicy, FormOwnerPolicy};

    #[test]
    fn test_new_uses_profile_features() {
        let session = Session::new(BrowserProfile::InternetExplorer);
        assert_eq!(session.flags(), BrowserProfile::InternetExplorer.features());
        assert_eq!(session.form_owner_resolver().policy(), FormOwnerPolicy::FormOfSelf);
        assert_eq!(
            session.label_resolver().dangling_for(),
            DanglingForPolicy::FallBackToDescendants
        );
    }

    #[test]
    fn test_from_config_applies_overrides() {
        let config = SessionConfig::from_json(
            r#"{ "browser": "chrome", "features": { "LabelFormOfSelf": true }, "dangling_for": "strict" }"#,
        )
        .unwrap();
        let session = Session::from_config(&config).unwrap();

        assert_eq!(session.profile(), BrowserProfile::Chrome);
        assert!(session.flags().is_enabled(BrowserFeature::LabelFormOfSelf));
        assert!(session.flags().is_enabled(BrowserFeature::LabelControlProperty));
        assert_eq!(session.form_owner_resolver().policy(), FormOwnerPolicy::FormOfSelf);
        assert_eq!(session.label_resolver().dangling_for(), DanglingForPolicy::Strict);
    }

    #[test]
    fn test_from_config_rejects_bad_override() {
        let mut config = SessionConfig::default();
        config.features.insert("Nope".into(), true);
        assert!(matches!(
            Session::from_config(&config),
            Err(ConfigError::UnknownFeature(_))
        ));
    }

    #[test]
    fn test_default_is_chrome() {
        assert_eq!(Session::default().profile(), BrowserProfile::Chrome);
        assert_eq!(
            Session::default().form_owner_resolver().policy(),
            FormOwnerPolicy::FormOfControl
        );
    }
}
