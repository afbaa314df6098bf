//! formlink HTML loader
//!
//! Builds formlink documents from markup with html5ever, so label and form
//! relationships can be set up the way a page author writes them.

mod parser;

pub use formlink_dom::Document;
pub use parser::HtmlParser;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build document tree: {0}")]
    Tree(#[from] formlink_dom::DomError),
}
