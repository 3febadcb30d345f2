//! Record Card Component
//!
//! One content list entry. The chevron toggles the detail pane without
//! touching the selection; clicking the card body selects the record.

use leptos::prelude::*;
use pane_core::{Record, ShellAction};

use crate::context::use_shell_context;

pub fn badge_class(variant: &str) -> String {
    format!("badge badge-{variant}")
}

#[component]
pub fn RecordCard(record: Record) -> impl IntoView {
    let ctx = use_shell_context();
    let id = record.id.clone();
    let selected_id = id.clone();
    let is_selected = move || ctx.selected_id().as_deref() == Some(selected_id.as_str());

    let card_class = move || {
        if is_selected() {
            "record-card selected"
        } else {
            "record-card"
        }
    };

    view! {
        <article
            class=card_class
            on:click=move |_| ctx.dispatch(ShellAction::Select(id.clone()))
        >
            <header class="record-card-header">
                <div class="record-card-title">
                    <h3>{record.title.clone()}</h3>
                    <span class=badge_class(record.priority.badge_variant())>{record.priority.label()}</span>
                </div>
                <button
                    type="button"
                    class="icon-btn detail-toggle"
                    title="View details"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(ShellAction::ToggleDetail);
                    }
                >
                    "›"
                </button>
            </header>
            <p class="record-card-date">{record.date.clone()}</p>
            <p class="record-card-description">{record.description.clone()}</p>
            <footer class="record-card-footer">
                <div class="assignee">
                    <div class="avatar avatar-placeholder small"></div>
                    <span>"Assigned to you"</span>
                </div>
                <span class=badge_class("outline")>{record.status.label()}</span>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pane_core::Priority;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(Priority::High.badge_variant()), "badge badge-destructive");
        assert_eq!(badge_class("outline"), "badge badge-outline");
    }
}
