//! Detail Panel Component
//!
//! Third pane for the selected id, which may name a record or a sidebar
//! section. Mounted fresh for every selection, so the comment draft, progress
//! and star never carry over between subjects.

use leptos::prelude::*;
use pane_core::fixtures::DetailFixture;
use pane_core::{project_code, DetailLocalState, DetailTab, ShellAction};

use crate::components::detail_tabs::{ActivityTab, FilesTab, OverviewTab, PeopleTab};
use crate::context::use_shell_context;

#[component]
pub fn DetailPanel(item_id: String) -> impl IntoView {
    let ctx = use_shell_context();
    let subject = ctx.resolve_subject(&item_id);
    if subject.is_none() {
        log::debug!("nothing known for selection `{}`, showing empty detail", item_id);
    }

    let local = RwSignal::new(ctx.config.with_value(DetailLocalState::from_config));
    let (tab, set_tab) = signal(DetailTab::default());
    let fixture = StoredValue::new(DetailFixture::sample());

    let panel_class = move || {
        if ctx.viewport().is_narrow() {
            "detail-panel narrow"
        } else {
            "detail-panel"
        }
    };

    view! {
        <div class=panel_class>
            <div class="detail-header">
                <div class="detail-heading">
                    <h2>"Project Details"</h2>
                    <span class="badge badge-outline">{project_code(&item_id)}</span>
                </div>
                <div class="detail-controls">
                    <button
                        type="button"
                        class=move || if local.with(|s| s.is_starred()) { "icon-btn star starred" } else { "icon-btn star" }
                        title=move || if local.with(|s| s.is_starred()) { "Unstar project" } else { "Star project" }
                        on:click=move |_| local.update(|s| {
                            s.toggle_star();
                        })
                    >
                        "★"
                    </button>
                    // Present but inert
                    <button type="button" class="icon-btn" title="Share">"⇪"</button>
                    <button
                        type="button"
                        class="icon-btn close-btn"
                        title="Close panel"
                        on:click=move |_| ctx.dispatch(ShellAction::CloseDetail)
                    >
                        "×"
                    </button>
                </div>
            </div>

            {match subject {
                Some(subject) => view! {
                    <div class="detail-tabs" role="tablist">
                        {DetailTab::ALL.into_iter().map(|t| view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if tab.get() == t { "detail-tab-btn active" } else { "detail-tab-btn" }
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }).collect_view()}
                    </div>

                    <div class="detail-body">
                        {move || match tab.get() {
                            DetailTab::Overview => view! {
                                <OverviewTab subject=subject.clone() fixture=fixture.get_value() local=local />
                            }.into_any(),
                            DetailTab::Activity => view! {
                                <ActivityTab fixture=fixture.get_value() local=local />
                            }.into_any(),
                            DetailTab::Files => view! { <FilesTab fixture=fixture.get_value() /> }.into_any(),
                            DetailTab::People => view! { <PeopleTab fixture=fixture.get_value() /> }.into_any(),
                        }}
                    </div>
                }.into_any(),
                None => view! {
                    <div class="detail-empty">
                        <h3>"Nothing to show"</h3>
                        <p class="muted">"The current selection has no details."</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
