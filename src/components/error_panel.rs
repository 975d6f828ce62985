//! Error Panel Component
//!
//! Failed-load message with a manual retry.

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(
    #[prop(into)] message: Signal<String>,
    /// Shows a "Try Again" button when set
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-panel">
            <span class="error-icon">"⚠"</span>
            <p class="error-message">{move || message.get()}</p>
            {on_retry.map(|retry| view! {
                <button class="btn retry-btn" on:click=move |_| retry.run(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}
