//! Global application state

use chatbot::api::HttpChatApi;
use chatbot::auth::Session;
use chatbot::utils::config::ClientConfig;
use leptos::prelude::*;

use crate::storage::LocalStorageTokenStore;

/// Global application state
///
/// Every field is an arena handle, so the state is `Copy` and can be moved
/// into any number of closures.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Resolved client configuration
    pub config: StoredValue<ClientConfig>,
    /// Authentication state, restored from `localStorage` on start-up
    pub session: RwSignal<Session<LocalStorageTokenStore>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = load_config();
        let store = LocalStorageTokenStore::new(config.session.storage_key.clone());
        let session = Session::initialize(store);

        tracing::info!(
            "Client started against {} (signed in: {})",
            config.api.base_url,
            session.is_authenticated()
        );

        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(session),
        }
    }

    /// HTTP client for the configured backend
    pub fn api(&self) -> HttpChatApi {
        self.config.with_value(|config| HttpChatApi::from_config(&config.api))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|session| session.is_authenticated())
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.session
            .with_untracked(|session| session.is_authenticated())
    }

    /// Current bearer token, read without subscribing
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.token().map(String::from))
    }

    pub fn logout(&self) {
        self.session.update(|session| session.logout());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Defaults, overridden by `CHATBOT_*` variables present at build time
fn load_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    config.apply_env_overrides(|name| {
        match name {
            "CHATBOT_API_BASE" => option_env!("CHATBOT_API_BASE"),
            "CHATBOT_STORAGE_KEY" => option_env!("CHATBOT_STORAGE_KEY"),
            _ => None,
        }
        .map(String::from)
    });

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            tracing::error!("Invalid build-time configuration, using defaults: {}", e);
            ClientConfig::default()
        }
    }
}
