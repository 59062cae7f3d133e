//! Bearer-token session state

use std::sync::{Arc, RwLock};

/// Shared holder for the bearer token obtained from the OAuth2 password grant.
///
/// The token is absent until the first successful login, is overwritten on
/// each later login, and never expires proactively. Calls are expected from
/// one control flow at a time; the lock only makes the handle safe to share,
/// it does not serialize logins.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create a session with no token
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the bearer token, replacing any previous one
    pub fn set_token(&self, token: String) {
        *self.token.write().unwrap() = Some(token);
    }

    /// Get a copy of the current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Whether a token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    /// Drop the token, forcing a login before the next request
    pub fn clear(&self) {
        *self.token.write().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_lifecycle() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.set_token("token_123".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("token_123"));

        // A later login overwrites the token
        session.set_token("token_456".to_string());
        assert_eq!(session.token().as_deref(), Some("token_456"));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_session_clones_share_state() {
        let session = Session::new();
        let clone = session.clone();

        session.set_token("shared".to_string());
        assert_eq!(clone.token().as_deref(), Some("shared"));
    }
}
