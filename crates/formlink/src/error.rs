//! Error types

use formlink_dom::DomError;

/// Session configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid session configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read session configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown browser profile: {0}")]
    UnknownBrowser(String),

    #[error("unknown browser feature: {0}")]
    UnknownFeature(String),
}

/// Binding layer errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// The label handle could not be built
    #[error(transparent)]
    Dom(#[from] DomError),

    /// A value of the wrong kind was assigned to a property
    #[error("property {property} expects a string value")]
    TypeMismatch { property: &'static str },
}
