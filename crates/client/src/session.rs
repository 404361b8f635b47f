//! Explicit authentication context for API requests.

use std::sync::{Arc, PoisonError, RwLock};

use secrecy::SecretString;

/// Holds the bearer token sent with every request.
///
/// Clones share the same token, so a 401 seen by one client clears it for
/// every holder of the session.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<SecretString>>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.is_authenticated() {
            "[REDACTED]"
        } else {
            "None"
        };
        f.debug_struct("Session").field("token", &token).finish()
    }
}

impl Session {
    /// A session without credentials.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session authenticated with the given bearer token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the token, e.g. after logging in.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) =
            Some(SecretString::from(token.into()));
    }

    /// Forget the token.
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_clear_is_shared_between_clones() {
        let session = Session::with_token("abc123");
        let other = session.clone();
        assert_eq!(
            other.token().map(|t| t.expose_secret().to_string()),
            Some("abc123".to_string())
        );

        session.clear();
        assert!(!other.is_authenticated());
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::with_token("super-secret");
        let debug = format!("{session:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }
}
