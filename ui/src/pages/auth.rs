//! Login/Register page

use chatbot::auth::{AuthForm, AuthMode};
use chatbot::types::ClientError;
use chatbot::utils::task::TaskScope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::{Header, LoadingSpinner};
use crate::state::AppState;

/// Login/Register page
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let form = RwSignal::new(AuthForm::new());

    // Requests still running when the page goes away must not touch its state
    let scope = TaskScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel_all()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let api = state.api();
        let navigate = navigate.clone();
        let request = scope.wrap(async move { Ok::<_, ClientError>(submission.execute(&api).await) });

        spawn_local(async move {
            let Ok(result) = request.await else {
                tracing::debug!("Auth request cancelled");
                return;
            };

            let target = state
                .session
                .try_update(|session| form.try_update(|f| f.finish_submit(result, session)))
                .flatten()
                .flatten();

            if let Some(route) = target {
                navigate(route.path(), Default::default());
            }
        });
    };

    let is_register = move || form.with(|f| f.mode == AuthMode::Register);
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <Title text=move || form.with(|f| f.title()) />
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />

            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card">
                        <div class="auth-header">
                            <h1 class="auth-title text-gradient">
                                {move || form.with(|f| f.title())}
                            </h1>
                            <p class="auth-subtitle">
                                {move || form.with(|f| f.subtitle())}
                            </p>
                        </div>

                        <Show when=move || form.with(|f| f.notice.is_some())>
                            <div class="mb-6 p-4 bg-[var(--accent-success)]/10 border border-[var(--accent-success)]/50
                                        rounded-[var(--radius-md)] text-[var(--accent-success)] text-sm animate-fade-in">
                                {move || form.with(|f| f.notice.clone().unwrap_or_default())}
                            </div>
                        </Show>

                        <Show when=move || form.with(|f| f.error.is_some())>
                            <div class="mb-6 p-4 bg-[var(--accent-error)]/10 border border-[var(--accent-error)]/50
                                        rounded-[var(--radius-md)] text-[var(--accent-error)] text-sm animate-fade-in">
                                {move || form.with(|f| f.error.clone().unwrap_or_default())}
                            </div>
                        </Show>

                        <form on:submit=on_submit class="auth-form">
                            // Name field (register only)
                            <Show when=is_register>
                                <div class="auth-input-group animate-fade-in-down">
                                    <label class="auth-label">"Name"</label>
                                    <input
                                        type="text"
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                        placeholder="Your name"
                                        disabled=submitting
                                        class="input"
                                    />
                                </div>
                            </Show>

                            <div class="auth-input-group">
                                <label class="auth-label">"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                    placeholder="you@example.com"
                                    disabled=submitting
                                    class="input"
                                />
                            </div>

                            <div class="auth-input-group">
                                <label class="auth-label">"Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                    placeholder="••••••••"
                                    disabled=submitting
                                    class="input"
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=submitting
                                class="btn btn-primary w-full py-3"
                            >
                                <Show when=submitting>
                                    <LoadingSpinner />
                                </Show>
                                {move || form.with(|f| f.submit_label())}
                            </button>
                        </form>

                        <div class="auth-footer">
                            <button
                                type="button"
                                disabled=submitting
                                on:click=move |_| form.update(|f| f.toggle_mode())
                                class="auth-link"
                            >
                                {move || form.with(|f| f.toggle_label())}
                            </button>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
