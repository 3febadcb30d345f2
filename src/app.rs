//! Pane Shell App
//!
//! Root component: owns the store, wires the viewport signal into it and
//! composes the three panes through the layout arbiter.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_viewport::create_width_class_signal;
use pane_core::{
    LayoutArbiter, NavigationEntry, ReadRepository, Record, ShellConfig, ViewportClass,
};
use reactive_stores::Store;

use crate::components::{DetailPanel, MainContent, PanelLayout, Sidebar};
use crate::context::{load_or_empty, ShellContext};
use crate::store::{store_set_viewport, ShellState, ShellStateStoreFields};

#[component]
pub fn App(
    config: ShellConfig,
    records: Arc<dyn ReadRepository<Record>>,
    navigation: Arc<dyn ReadRepository<NavigationEntry>>,
) -> impl IntoView {
    let records = load_or_empty("records", records.as_ref());
    let navigation = load_or_empty("navigation entries", navigation.as_ref());

    // Viewport signal (media query equivalent)
    let breakpoint_px = config.narrow_breakpoint_px;
    let viewport = create_width_class_signal(ViewportClass::default(), move |width| {
        ViewportClass::classify(width, breakpoint_px)
    });

    // State
    let store = Store::new(ShellState::new(viewport.get_untracked()));
    provide_context(store);

    let arbiter = LayoutArbiter::new(config.sidebar_width_px);
    let ctx = ShellContext::new(store, records, navigation, config);
    provide_context(ctx);

    Effect::new(move |_| {
        store_set_viewport(&store, viewport.get());
    });

    let layout = Memo::new(move |_| {
        let is_open = store.ui().with(|ui| ui.is_detail_open());
        arbiter.arrange(is_open, store.viewport().get())
    });

    // Detail pane content is keyed on the selected id so its local state starts fresh per record
    let subject = Memo::new(move |_| ctx.detail_subject());

    view! {
        <div class="app-shell">
            <PanelLayout
                layout=layout
                sidebar=|| view! { <Sidebar /> }
                main=|| view! { <MainContent /> }
                detail=move || subject.get().map(|id| view! { <DetailPanel item_id=id /> })
            />
        </div>
    }
}
