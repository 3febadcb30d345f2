//! Sidebar Component
//!
//! Left pane: searchable navigation list with notification badges and the
//! signed-in user card.

use leptos::prelude::*;
use pane_core::fixtures::CURRENT_USER;
use pane_core::{filter_navigation, ShellAction};

use crate::components::SearchInput;
use crate::context::use_shell_context;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_shell_context();
    let (query, set_query) = signal(String::new());

    let entries = Memo::new(move |_| {
        query.with(|q| ctx.navigation.with_value(|all| filter_navigation(all, q)))
    });

    view! {
        <div class="sidebar">
            <div class="sidebar-header">
                <h2>"Application"</h2>
            </div>

            <div class="sidebar-search">
                <SearchInput value=query on_input=move |text: String| set_query.set(text) />
            </div>

            <nav class="nav-list">
                <For
                    each=move || entries.get()
                    key=|entry| entry.id.clone()
                    children=move |entry| {
                        let id = entry.id.clone();
                        let selected_id = id.clone();
                        let is_selected = move || ctx.selected_id().as_deref() == Some(selected_id.as_str());
                        let count = entry.notification_count;
                        let has_badge = entry.has_notifications();
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "nav-item selected" } else { "nav-item" }
                                on:click=move |_| ctx.dispatch(ShellAction::Select(id.clone()))
                            >
                                <span class="nav-label">{entry.label}</span>
                                <Show when=move || has_badge>
                                    <span class="badge badge-secondary nav-badge">{count}</span>
                                </Show>
                            </button>
                        }
                    }
                />

                <Show when=move || entries.with(|e| e.is_empty())>
                    <div class="nav-empty">"No matches"</div>
                </Show>

                // Present but inert
                <button type="button" class="nav-item nav-add">"+ Add New"</button>
            </nav>

            <div class="sidebar-footer">
                <div class="user-card">
                    <div class="avatar avatar-placeholder"></div>
                    <div class="user-meta">
                        <p class="user-name">{CURRENT_USER.name}</p>
                        <p class="user-email">{CURRENT_USER.email}</p>
                    </div>
                </div>
                <button type="button" class="icon-btn" title="Notifications">"🔔"</button>
            </div>
        </div>
    }
}
