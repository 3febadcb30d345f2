//! Main Content Component
//!
//! Middle pane: searchable, filterable, sortable record list. The query is
//! local to this pane; only intents on records reach the root state.

use leptos::prelude::*;
use pane_core::{evaluate, ListQuery, Priority, QueryOutcome, SortDirection, StatusFilter};

use crate::components::{RecordCard, SearchInput};
use crate::context::use_shell_context;

/// Sort and priority menu behind the filter button
#[component]
fn FilterMenu(query: ReadSignal<ListQuery>, set_query: WriteSignal<ListQuery>) -> impl IntoView {
    let (open, set_open) = signal(false);

    let choose_sort = move |direction: SortDirection| {
        set_query.update(|q| q.sort_direction = direction);
        set_open.set(false);
    };
    let choose_priority = move |priority: Option<Priority>| {
        set_query.update(|q| q.priority_filter = priority);
        set_open.set(false);
    };

    view! {
        <div class="filter-menu">
            <button
                type="button"
                class=move || if query.with(|q| q.priority_filter.is_some()) { "icon-btn outline active" } else { "icon-btn outline" }
                title="Filter and sort"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                "⚲"
            </button>
            <Show when=move || open.get()>
                <div class="dropdown">
                    {[SortDirection::Ascending, SortDirection::Descending].into_iter().map(|direction| {
                        let is_active = move || query.with(|q| q.sort_direction == direction);
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "dropdown-item active" } else { "dropdown-item" }
                                on:click=move |_| choose_sort(direction)
                            >
                                {direction.menu_label()}
                            </button>
                        }
                    }).collect_view()}
                    <div class="dropdown-separator"></div>
                    {Priority::ALL.into_iter().map(|priority| {
                        let is_active = move || query.with(|q| q.priority_filter == Some(priority));
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "dropdown-item active" } else { "dropdown-item" }
                                on:click=move |_| choose_priority(Some(priority))
                            >
                                {format!("{} Priority", priority.label())}
                            </button>
                        }
                    }).collect_view()}
                    <button type="button" class="dropdown-item" on:click=move |_| choose_priority(None)>
                        "Any Priority"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Shown when the query matches nothing; offers to clear the search text
#[component]
fn NoResults(set_query: WriteSignal<ListQuery>) -> impl IntoView {
    view! {
        <div class="no-results">
            <div class="no-results-icon">"⌕"</div>
            <h3>"No results found"</h3>
            <p>"We couldn't find any items matching your search. Try adjusting your filters or search terms."</p>
            <button
                type="button"
                class="primary-btn"
                on:click=move |_| {
                    log::debug!("clearing search text");
                    set_query.update(ListQuery::clear_search);
                }
            >
                "Clear filters"
            </button>
        </div>
    }
}

#[component]
pub fn MainContent() -> impl IntoView {
    let ctx = use_shell_context();
    let (query, set_query) = signal(ListQuery::default());

    let outcome =
        Memo::new(move |_| query.with(|q| ctx.records.with_value(|all| evaluate(all, q))));
    let search_text = Signal::derive(move || query.with(|q| q.search_text.clone()));
    let visible_records = move || match outcome.get() {
        QueryOutcome::Results(records) => records,
        QueryOutcome::NoResults => Vec::new(),
    };

    view! {
        <div class="main-content">
            <div class="main-header">
                <div class="main-header-row">
                    <h2>{move || ctx.section_label()}</h2>
                    <div class="main-actions">
                        <FilterMenu query=query set_query=set_query />
                        // Present but inert
                        <button type="button" class="icon-btn outline" title="New">"+"</button>
                    </div>
                </div>

                <SearchInput
                    value=search_text
                    on_input=move |text: String| set_query.update(|q| q.search_text = text)
                />

                <div class="status-tabs" role="tablist">
                    {StatusFilter::TABS.into_iter().map(|filter| {
                        let is_active = move || query.with(|q| q.status_filter == filter);
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if is_active() { "status-tab active" } else { "status-tab" }
                                on:click=move |_| set_query.update(|q| q.status_filter = filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="record-list">
                <For
                    each=visible_records
                    key=|record| record.id.clone()
                    children=move |record| view! { <RecordCard record=record /> }
                />
                <Show when=move || outcome.with(QueryOutcome::is_empty)>
                    <NoResults set_query=set_query />
                </Show>
            </div>
        </div>
    }
}
