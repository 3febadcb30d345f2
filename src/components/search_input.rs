//! Search Input Component

use leptos::prelude::*;

/// Text input that reports every keystroke
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-icon">"⌕"</span>
            <input
                type="search"
                placeholder=placeholder.unwrap_or_else(|| "Search...".to_string())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
