//! Error types for the site core

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the site core.
///
/// Navigation itself cannot fail: pages are a closed enum. The only fallible
/// entry point is turning free text (a link label, an id) into a [`Page`].
///
/// [`Page`]: crate::page::Page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown page id: {id:?}")]
    UnknownPage { id: String },
}

impl Error {
    pub fn unknown_page(id: impl Into<String>) -> Self {
        Self::UnknownPage { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_page_message() {
        let err = Error::unknown_page("blog");
        assert_eq!(err.to_string(), "Unknown page id: \"blog\"");
    }

    #[test]
    fn test_unknown_page_keeps_id() {
        match Error::unknown_page(String::from("careers")) {
            Error::UnknownPage { id } => assert_eq!(id, "careers"),
        }
    }
}
