//! Header component

use leptos::prelude::*;

/// Brand bar shown above the sign-in card
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header h-16 sticky top-0 z-40">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center">
                <a href="/" class="logo hover:opacity-80 transition-opacity">
                    <span class="logo-image text-2xl">"💬"</span>
                    <div>
                        <h1 class="text-xl font-bold text-gradient">"Chatbot"</h1>
                        <p class="text-xs text-[var(--text-muted)] -mt-0.5">"Ask anything"</p>
                    </div>
                </a>
            </div>
        </header>
    }
}
