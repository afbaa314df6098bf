//! Browser feature flags
//!
//! Emulated browsers disagree on a handful of label behaviors. Each
//! disagreement is one `BrowserFeature`; a `BrowserProfile` only picks
//! which features are switched on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A boolean compatibility switch, named in configuration by
/// [`BrowserFeature::name`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BrowserFeature {
    /// `label.form` is the label's own enclosing form rather than the
    /// enclosing form of its associated control
    LabelFormOfSelf,
    /// `label.control` is exposed to scripts
    LabelControlProperty,
}

impl BrowserFeature {
    /// Every known feature
    pub const ALL: [BrowserFeature; 2] = [Self::LabelFormOfSelf, Self::LabelControlProperty];

    /// Stable feature name
    pub fn name(self) -> &'static str {
        match self {
            Self::LabelFormOfSelf => "LabelFormOfSelf",
            Self::LabelControlProperty => "LabelControlProperty",
        }
    }

    #[inline]
    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for BrowserFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrowserFeature {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| ConfigError::UnknownFeature(s.to_string()))
    }
}

/// Set of enabled features, fixed once a session is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FeatureFlags(u32);

impl FeatureFlags {
    /// No features enabled
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Check whether a feature is enabled
    #[inline]
    pub fn is_enabled(self, feature: BrowserFeature) -> bool {
        self.0 & feature.bit() != 0
    }

    /// Copy with `feature` enabled
    pub fn with(self, feature: BrowserFeature) -> Self {
        Self(self.0 | feature.bit())
    }

    /// Copy with `feature` disabled
    pub fn without(self, feature: BrowserFeature) -> Self {
        Self(self.0 & !feature.bit())
    }

    /// Copy with `feature` set to `enabled`
    pub fn set(self, feature: BrowserFeature, enabled: bool) -> Self {
        if enabled {
            self.with(feature)
        } else {
            self.without(feature)
        }
    }

    /// Enabled features in declaration order
    pub fn iter(self) -> impl Iterator<Item = BrowserFeature> {
        BrowserFeature::ALL
            .into_iter()
            .filter(move |&feature| self.is_enabled(feature))
    }
}

impl FromIterator<BrowserFeature> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = BrowserFeature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Emulated browser identity. Names match ASCII case-insensitively,
/// whether parsed or deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum BrowserProfile {
    #[default]
    #[serde(rename = "chrome")]
    Chrome,
    #[serde(rename = "firefox")]
    Firefox,
    #[serde(rename = "firefox68")]
    Firefox68,
    #[serde(rename = "firefox60")]
    Firefox60,
    #[serde(rename = "ie")]
    InternetExplorer,
}

impl BrowserProfile {
    /// Every known profile
    pub const ALL: [BrowserProfile; 5] = [
        Self::Chrome,
        Self::Firefox,
        Self::Firefox68,
        Self::Firefox60,
        Self::InternetExplorer,
    ];

    /// Configuration name
    pub fn name(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Firefox68 => "firefox68",
            Self::Firefox60 => "firefox60",
            Self::InternetExplorer => "ie",
        }
    }

    /// Features this browser ships with
    pub fn features(self) -> FeatureFlags {
        match self {
            Self::Chrome | Self::Firefox | Self::Firefox68 | Self::Firefox60 => {
                FeatureFlags::empty().with(BrowserFeature::LabelControlProperty)
            }
            Self::InternetExplorer => FeatureFlags::empty().with(BrowserFeature::LabelFormOfSelf),
        }
    }
}

impl fmt::Display for BrowserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrowserProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownBrowser(s.to_string()))
    }
}

impl TryFrom<String> for BrowserProfile {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
