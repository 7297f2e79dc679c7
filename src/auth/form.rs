//! Login / register form state
//!
//! The form is driven in three steps so it can live inside a reactive signal
//! without holding a borrow across the network call:
//!
//! 1. [`AuthForm::begin_submit`] validates and marks the form busy
//! 2. [`Submission::execute`] talks to the API
//! 3. [`AuthForm::finish_submit`] applies the outcome to the form and session
//!
//! [`submit`] chains the three for callers that own the form outright.

use super::guard::Route;
use super::session::{Session, TokenStore};
use crate::api::ChatApi;
use crate::types::{ClientError, LoginRequest, RegisterRequest, Result};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const REGISTERED_NOTICE: &str = "Registration successful. Please sign in.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    /// A request is outstanding; the submit control is disabled
    pub submitting: bool,
    pub error: Option<String>,
    /// Informational banner (shown after registering)
    pub notice: Option<String>,
}

/// A validated request ready to send
#[derive(Debug, Clone)]
pub enum Submission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// Raw result of a [`Submission`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    LoggedIn(Result<String>),
    Registered(Result<()>),
}

impl Submission {
    pub async fn execute<A: ChatApi + ?Sized>(self, api: &A) -> SubmissionResult {
        match self {
            Submission::Login(req) => SubmissionResult::LoggedIn(api.login(&req).await),
            Submission::Register(req) => SubmissionResult::Registered(api.register(&req).await),
        }
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_register(&self) -> bool {
        self.mode == AuthMode::Register
    }

    /// Flip between login and register; clears any error
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error = None;
        self.notice = None;
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Sign in to continue your conversations",
            AuthMode::Register => "Sign up to start chatting",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (AuthMode::Login, false) => "Sign In",
            (AuthMode::Login, true) => "Signing in...",
            (AuthMode::Register, false) => "Sign Up",
            (AuthMode::Register, true) => "Creating account...",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Don't have an account? Sign up now",
            AuthMode::Register => "Already have an account? Sign in",
        }
    }

    /// Validate and mark the form busy
    ///
    /// Returns `None` (with `error` set) when a required field is blank, or
    /// when a submission is already outstanding.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }

        let email = self.email.trim();
        let name = self.name.trim();
        let submission = match self.mode {
            AuthMode::Login => {
                if email.is_empty() || self.password.is_empty() {
                    self.error = Some("Email and password are required".to_string());
                    return None;
                }
                Submission::Login(LoginRequest {
                    email: email.to_string(),
                    password: self.password.clone(),
                })
            }
            AuthMode::Register => {
                if name.is_empty() || email.is_empty() || self.password.is_empty() {
                    self.error = Some("Please fill in all fields".to_string());
                    return None;
                }
                Submission::Register(RegisterRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: self.password.clone(),
                })
            }
        };

        self.submitting = true;
        self.error = None;
        self.notice = None;
        Some(submission)
    }

    /// Apply the outcome of a submission
    ///
    /// Returns the route to navigate to after a successful login.
    pub fn finish_submit<S: TokenStore>(
        &mut self,
        result: SubmissionResult,
        session: &mut Session<S>,
    ) -> Option<Route> {
        self.submitting = false;

        match result {
            SubmissionResult::LoggedIn(Ok(token)) => match session.login(token) {
                Ok(()) => {
                    self.password.clear();
                    Some(Route::Chat)
                }
                Err(e) => {
                    tracing::warn!("Login response unusable: {}", e);
                    self.error = Some(LOGIN_FAILED.to_string());
                    None
                }
            },
            SubmissionResult::LoggedIn(Err(e)) => {
                self.fail(&e, LOGIN_FAILED);
                None
            }
            SubmissionResult::Registered(Ok(())) => {
                self.mode = AuthMode::Login;
                self.name.clear();
                self.password.clear();
                self.notice = Some(REGISTERED_NOTICE.to_string());
                None
            }
            SubmissionResult::Registered(Err(e)) => {
                self.fail(&e, REGISTER_FAILED);
                None
            }
        }
    }

    fn fail(&mut self, error: &ClientError, fallback: &str) {
        if *error == ClientError::Cancelled {
            return;
        }
        tracing::debug!("Auth request failed: {}", error);
        self.error = Some(error.user_message(fallback));
    }
}

/// Run a whole submission against `api`
pub async fn submit<A, S>(
    form: &mut AuthForm,
    session: &mut Session<S>,
    api: &A,
) -> Option<Route>
where
    A: ChatApi + ?Sized,
    S: TokenStore,
{
    let submission = form.begin_submit()?;
    let result = submission.execute(api).await;
    form.finish_submit(result, session)
}
