//! Shell Context
//!
//! Shared handles provided via the Leptos Context API: the store, the loaded
//! data and the configuration. Panes send intents through `dispatch`.

use leptos::prelude::*;
use pane_core::{
    section_label, DetailSubject, NavigationEntry, ReadRepository, Record, ShellAction,
    ShellConfig, ViewportClass,
};

use crate::store::{store_dispatch, ShellStateStoreFields, ShellStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ShellContext {
    store: ShellStore,
    /// Content list records, in source order
    pub records: StoredValue<Vec<Record>>,
    /// Sidebar destinations, in source order
    pub navigation: StoredValue<Vec<NavigationEntry>>,
    pub config: StoredValue<ShellConfig>,
}

impl ShellContext {
    pub fn new(
        store: ShellStore,
        records: Vec<Record>,
        navigation: Vec<NavigationEntry>,
        config: ShellConfig,
    ) -> Self {
        Self {
            store,
            records: StoredValue::new(records),
            navigation: StoredValue::new(navigation),
            config: StoredValue::new(config),
        }
    }

    /// Single mutation path for selection and detail visibility
    pub fn dispatch(&self, action: ShellAction) {
        store_dispatch(&self.store, action);
    }

    pub fn selected_id(&self) -> Option<String> {
        self.store.ui().with(|ui| ui.selected_id().map(str::to_owned))
    }

    /// Id shown in the detail pane, `None` while it is closed
    pub fn detail_subject(&self) -> Option<String> {
        self.store.ui().with(|ui| ui.detail_subject().map(str::to_owned))
    }

    pub fn viewport(&self) -> ViewportClass {
        self.store.viewport().get()
    }

    /// Main pane heading for the current selection
    pub fn section_label(&self) -> String {
        let selected = self.selected_id();
        self.navigation
            .with_value(|entries| section_label(entries, selected.as_deref()).to_string())
    }

    /// Record or navigation entry behind `id`, if any
    pub fn resolve_subject(&self, id: &str) -> Option<DetailSubject> {
        self.records.with_value(|records| {
            self.navigation
                .with_value(|navigation| DetailSubject::resolve(id, records, navigation))
        })
    }
}

pub fn use_shell_context() -> ShellContext {
    expect_context::<ShellContext>()
}

/// Load a repository's contents, logging and degrading to empty on failure
pub fn load_or_empty<T, R>(what: &str, repo: &R) -> Vec<T>
where
    T: pane_core::Entity,
    R: ReadRepository<T> + ?Sized,
{
    match repo.list() {
        Ok(entries) => {
            log::debug!("loaded {} {}", entries.len(), what);
            entries
        }
        Err(err) => {
            log::error!("failed to load {}: {}", what, err);
            Vec::new()
        }
    }
}
