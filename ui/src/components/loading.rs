//! Busy indicators for the auth card and the chat thread

use leptos::prelude::*;

/// Three bouncing dots; the animation classes come from the stylesheet
#[component]
pub fn LoadingDots() -> impl IntoView {
    let dot = |n: u8| format!("w-2 h-2 rounded-full bg-violet-300 dot-bounce-{}", n);

    view! {
        <div class="flex items-center gap-1" aria-hidden="true">
            <span class=dot(1)></span>
            <span class=dot(2)></span>
            <span class=dot(3)></span>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(
    /// Tailwind size classes
    #[prop(default = "w-5 h-5")]
    size: &'static str,
    #[prop(default = "Loading")] label: &'static str,
) -> impl IntoView {
    view! {
        <span role="status" class="inline-flex items-center">
            <span class=format!("{} inline-block rounded-full border-2 border-current border-r-transparent animate-spin", size)></span>
            <span class="sr-only">{label}</span>
        </span>
    }
}

/// Assistant-side bubble shown while a reply is outstanding
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 message-appear" aria-live="polite">
            <div class="w-8 h-8 shrink-0 rounded-full bg-violet-600 flex items-center justify-center text-sm">
                "🤖"
            </div>
            <div class="px-4 py-3 bg-slate-800 rounded-2xl rounded-tl-sm">
                <LoadingDots />
                <span class="sr-only">"Assistant is typing"</span>
            </div>
        </div>
    }
}
