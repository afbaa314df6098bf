//! formlink
//!
//! Label-to-control association and form-owner resolution, with the
//! behaviour differences between emulated browsers selected by feature
//! flags.
//!
//! # Example
//! ```rust,ignore
//! use formlink::{BrowserProfile, Session};
//!
//! let doc = formlink::html::parse(r#"<form id="f"><label id="l">Name <input></label></form>"#)?;
//! let label = doc.get_element_by_id("l").ok_or("no label")?;
//!
//! let session = Session::new(BrowserProfile::InternetExplorer);
//! let form = session.binding().form(&doc, label)?;
//! assert_eq!(form, doc.get_element_by_id("f"));
//! ```

mod binding;
mod config;
mod error;
mod flags;
mod form_owner;
mod label;
mod session;

pub use binding::{LabelBinding, PropertyValue, CONTROL, FORM, HTML_FOR};
pub use config::SessionConfig;
pub use error::{ConfigError, LabelError};
pub use flags::{BrowserFeature, BrowserProfile, FeatureFlags};
pub use form_owner::{resolve_owning_form, FormOwnerPolicy, FormOwnerResolver};
pub use label::{resolve_control, DanglingForPolicy, LabelResolver};
pub use session::Session;

// Re-export sub-crates for advanced usage
pub use formlink_dom as dom;
pub use formlink_html as html;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
