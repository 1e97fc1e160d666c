//! `ApiToken` - the credential attached to every request.

use std::fmt;
use std::sync::Arc;

/// TMDB credential (v3 API key or v4 read access token).
///
/// Cloning shares the underlying string. The value is never validated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiToken(Arc<str>);

impl ApiToken {
    /// Creates a token from its raw value.
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replaces the raw token value.
    pub fn set(&mut self, token: impl Into<Arc<str>>) -> &mut Self {
        self.0 = token.into();
        self
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

impl From<&str> for ApiToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
