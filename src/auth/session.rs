use crate::types::{ClientError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Failure reported by a [`TokenStore`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Token storage error: {0}")]
pub struct StoreError(pub String);

/// Persistence for the session token
///
/// Implemented over `localStorage` in the browser and in memory for tests.
pub trait TokenStore {
    /// Read the persisted token, if any
    fn load(&self) -> std::result::Result<Option<String>, StoreError>;

    fn save(&self, token: &str) -> std::result::Result<(), StoreError>;

    fn clear(&self) -> std::result::Result<(), StoreError>;
}

/// In-memory [`TokenStore`]; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, token: &str) -> std::result::Result<(), StoreError> {
        *self.slot.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::result::Result<(), StoreError> {
        *self.slot.lock() = None;
        Ok(())
    }
}

/// Client-side authentication state
///
/// Created once at start-up from the persisted token and then passed to
/// whatever needs it; nothing reads the store behind its back.
#[derive(Debug, Clone)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Restore the session from `store`
    ///
    /// A store that cannot be read, or holds a blank token, yields an
    /// unauthenticated session.
    pub fn initialize(store: S) -> Self {
        let token = match store.load() {
            Ok(token) => token.filter(|t| is_valid_token(t)),
            Err(e) => {
                tracing::warn!("Could not read stored token, starting signed out: {}", e);
                None
            }
        };
        Self { store, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token for an authenticated API call
    pub fn require_token(&self) -> Result<&str> {
        self.token().ok_or(ClientError::Unauthenticated)
    }

    /// Record a freshly issued token
    pub fn login(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        if !is_valid_token(&token) {
            return Err(ClientError::MalformedResponse(
                "server returned an empty token".to_string(),
            ));
        }
        if let Err(e) = self.store.save(&token) {
            tracing::warn!("Token not persisted, session will end with this tab: {}", e);
        }
        self.token = Some(token);
        Ok(())
    }

    /// Forget the token here and in the store
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear stored token: {}", e);
        }
        self.token = None;
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn is_valid_token(token: &str) -> bool {
    !token.trim().is_empty()
}
