//! Session Configuration
//!
//! ```json
//! { "browser": "ie", "features": { "LabelFormOfSelf": false }, "dangling_for": "strict" }
//! ```
//!
//! Every field is optional. `features` overrides the profile's defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BrowserProfile, ConfigError, DanglingForPolicy, FeatureFlags};

/// Session configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Emulated browser
    pub browser: BrowserProfile,

    /// Per-feature overrides, keyed by feature name
    pub features: BTreeMap<String, bool>,

    /// Handling of `for` values that name no element
    pub dangling_for: DanglingForPolicy,
}

impl SessionConfig {
    /// Configuration for a browser with its stock features
    pub fn for_browser(browser: BrowserProfile) -> Self {
        Self {
            browser,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.flags()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("Loading session configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Profile features with overrides applied
    pub fn flags(&self) -> Result<FeatureFlags, ConfigError> {
        self.features
            .iter()
            .try_fold(
                self.browser.features(),
                |flags, (name, &enabled)| -> Result<FeatureFlags, ConfigError> {
                    Ok(flags.set(name.parse()?, enabled))
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BrowserFeature;

    #[test]
    fn test_empty_json_is_default() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.browser, BrowserProfile::Chrome);
        assert_eq!(config.dangling_for, DanglingForPolicy::FallBackToDescendants);
    }

    #[test]
    fn test_full_json() {
        let config = SessionConfig::from_json(
            r#"{ "browser": "ie", "features": { "LabelFormOfSelf": false, "LabelControlProperty": true }, "dangling_for": "strict" }"#,
        )
        .unwrap();

        assert_eq!(config.browser, BrowserProfile::InternetExplorer);
        assert_eq!(config.dangling_for, DanglingForPolicy::Strict);

        let flags = config.flags().unwrap();
        assert!(!flags.is_enabled(BrowserFeature::LabelFormOfSelf));
        assert!(flags.is_enabled(BrowserFeature::LabelControlProperty));
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let err = SessionConfig::from_json(r#"{ "features": { "LabelTeleport": true } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFeature(name) if name == "LabelTeleport"));
    }

    #[test]
    fn test_unknown_browser_rejected() {
        let err = SessionConfig::from_json(r#"{ "browser": "mosaic" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_browser_name_case_insensitive() {
        let config = SessionConfig::from_json(r#"{ "browser": "IE" }"#).unwrap();
        assert_eq!(config.browser, BrowserProfile::InternetExplorer);
        assert_eq!(config.browser, "IE".parse().unwrap());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SessionConfig::from_json(r#"{ "browsr": "ie" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SessionConfig::load("/nonexistent/formlink/session.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_serializes_names() {
        let json = serde_json::to_string(&SessionConfig::for_browser(BrowserProfile::Firefox60)).unwrap();
        assert!(json.contains(r#""browser":"firefox60""#), "{json}");
        assert!(json.contains(r#""dangling_for":"fallback""#), "{json}");
    }
}
