//! Authentication on the client
//!
//! # Module Structure
//!
//! - [`auth::session`](crate::auth::session) - Session state and token persistence
//! - [`auth::guard`](crate::auth::guard) - Route guard deciding between auth and chat views
//! - [`auth::form`](crate::auth::form) - Login/register form state machine
//!
//! # Usage
//!
//! ```ignore
//! use chatbot::auth::{form, guard, session::{MemoryTokenStore, Session}};
//!
//! let mut session = Session::initialize(MemoryTokenStore::new());
//! let decision = guard::resolve("/chat", session.is_authenticated());
//! // -> RouteDecision::Redirect(Route::Auth)
//!
//! let mut form = form::AuthForm::new();
//! form.email = "a@b.com".into();
//! form.password = "secret".into();
//! if let Some(route) = form::submit(&mut form, &mut session, &api).await {
//!     navigate(route.path());
//! }
//! ```

/// Login/register form state.
pub mod form;
/// Route guard.
pub mod guard;
/// Session state and token storage.
pub mod session;

pub use form::{AuthForm, AuthMode};
pub use guard::{resolve, Route, RouteDecision, View};
pub use session::{MemoryTokenStore, Session, StoreError, TokenStore};
