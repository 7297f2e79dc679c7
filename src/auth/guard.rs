//! Route guard
//!
//! Maps a requested path plus the session's authentication state to either a
//! view to render or a route to redirect to. Pure; the UI's router calls it on
//! every navigation.

/// Routes the client knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Auth,
    Chat,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Auth => "/auth",
            Route::Chat => "/chat",
        }
    }

    /// Match a browser path; query string, fragment and trailing slash are ignored
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(Route::Root),
            "/auth" | "/login" => Some(Route::Auth),
            "/chat" => Some(Route::Chat),
            _ => None,
        }
    }
}

/// What the router should put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Auth,
    Chat,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(View),
    Redirect(Route),
}

/// Decide what to do with a request for `path`
pub fn resolve(path: &str, authenticated: bool) -> RouteDecision {
    match Route::from_path(path) {
        Some(route) => guard(route, authenticated),
        None => RouteDecision::Render(View::NotFound),
    }
}

/// Decide what to do with a request for a known route
pub fn guard(route: Route, authenticated: bool) -> RouteDecision {
    match (route, authenticated) {
        (Route::Root, true) => RouteDecision::Redirect(Route::Chat),
        (Route::Root, false) => RouteDecision::Redirect(Route::Auth),
        (Route::Auth, true) => RouteDecision::Redirect(Route::Chat),
        (Route::Auth, false) => RouteDecision::Render(View::Auth),
        (Route::Chat, true) => RouteDecision::Render(View::Chat),
        (Route::Chat, false) => RouteDecision::Redirect(Route::Auth),
    }
}
