//! Chatbot web client - Leptos frontend
//!
//! Routing, session restore and the chat screens. All state transitions
//! live in the `chatbot` core crate; this crate renders them.

pub mod components;
pub mod pages;
pub mod state;
pub mod storage;

use chatbot::auth::guard::{self, Route as AppRoute, RouteDecision, View};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use pages::{auth::AuthPage, chat::ChatPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restores the session from localStorage before the first route renders
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Title text="Chatbot" />
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Guarded route=AppRoute::Root /> } />
                    <Route path=path!("/auth") view=|| view! { <Guarded route=AppRoute::Auth /> } />
                    <Route path=path!("/login") view=|| view! { <Guarded route=AppRoute::Auth /> } />
                    <Route path=path!("/chat") view=|| view! { <Guarded route=AppRoute::Chat /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Renders `route` or redirects, depending on the session at mount time
///
/// Login and logout navigate explicitly, which remounts this component, so
/// the decision does not need to track the session.
#[component]
fn Guarded(route: AppRoute) -> impl IntoView {
    let state = expect_context::<AppState>();

    match guard::guard(route, state.is_authenticated_untracked()) {
        RouteDecision::Render(View::Auth) => view! { <AuthPage /> }.into_any(),
        RouteDecision::Render(View::Chat) => view! { <ChatPage /> }.into_any(),
        RouteDecision::Render(View::NotFound) => view! { <NotFound /> }.into_any(),
        RouteDecision::Redirect(target) => {
            tracing::debug!("Redirecting {} -> {}", route.path(), target.path());
            view! { <Redirect path=target.path() /> }.into_any()
        }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
