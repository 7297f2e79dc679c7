//! # Chatbot client core
//!
//! Framework-independent core of the chatbot web client. Everything the UI
//! decides (which view to show, what the sidebar says, what happens when a
//! login or a message send completes) lives here as plain Rust and is tested
//! natively; the Leptos front end in `ui/` only renders it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chatbot::api::HttpChatApi;
//! use chatbot::auth::{guard, MemoryTokenStore, Session};
//! use chatbot::chat::ChatShell;
//!
//! let api = HttpChatApi::new("http://localhost:8080");
//! let mut session = Session::initialize(MemoryTokenStore::new());
//!
//! match guard::resolve("/chat", session.is_authenticated()) {
//!     guard::RouteDecision::Redirect(route) => println!("go to {}", route.path()),
//!     guard::RouteDecision::Render(view) => println!("render {:?}", view),
//! }
//!
//! let mut shell = ChatShell::new();
//! shell.refresh(&api, session.require_token()?).await;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Typed client for the chatbot HTTP API
//! - [`auth`] - Session, route guard and login/register form
//! - [`chat`] - Conversation sidebar and chat shell state
//! - [`types`] - Wire types and error handling
//! - [`utils`] - Configuration and cancellable tasks

#![warn(rustdoc::missing_crate_level_docs)]

/// Chatbot HTTP API client.
pub mod api;
/// Client-side authentication.
pub mod auth;
/// Chat screen state.
pub mod chat;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration and task utilities.
pub mod utils;

// Re-export commonly used types
pub use api::{ChatApi, HttpChatApi};
pub use auth::{AuthForm, MemoryTokenStore, Route, RouteDecision, Session, TokenStore, View};
pub use chat::{ChatShell, SidebarEvent, SidebarView};
pub use types::{ClientError, Conversation, ConversationId, Message, Result};
pub use utils::config::{ClientConfig, ConfigError};
pub use utils::task::{cancellable, TaskHandle, TaskScope};
