//! Opaque provider credentials, validated at construction.
//!
//! Missing or blank keys are a construction-time fatal error: the
//! engine cannot be built without both providers' credentials. Key
//! material is redacted from `Debug` output.

use crate::error::SearchError;
use std::fmt;

/// API keys for both search providers.
#[derive(Clone)]
pub struct Credentials {
    pub(crate) brave_api_key: String,
    pub(crate) serper_api_key: String,
}

impl Credentials {
    /// Build credentials from opaque key strings.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if either key is empty or
    /// whitespace-only.
    pub fn new(
        brave_api_key: impl Into<String>,
        serper_api_key: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let brave_api_key = brave_api_key.into();
        let serper_api_key = serper_api_key.into();
        if brave_api_key.trim().is_empty() {
            return Err(SearchError::Config("missing Brave API key".into()));
        }
        if serper_api_key.trim().is_empty() {
            return Err(SearchError::Config("missing Serper API key".into()));
        }
        Ok(Self {
            brave_api_key,
            serper_api_key,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("brave_api_key", &"<redacted>")
            .field("serper_api_key", &"<redacted>")
            .finish()
    }
}
