//! Pane Shell Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;

use std::sync::Arc;

use app::App;
use leptos::prelude::*;
use pane_core::{fixtures, NavigationEntry, ReadRepository, Record};

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let shell_config = loaded.as_ref().ok().cloned().unwrap_or_default();
    logging::init(shell_config.level_filter());
    if let Err(err) = &loaded {
        log::warn!("ignoring embedded config, using defaults: {}", err);
    }

    let records: Arc<dyn ReadRepository<Record>> = Arc::new(fixtures::record_repository());
    let navigation: Arc<dyn ReadRepository<NavigationEntry>> =
        Arc::new(fixtures::navigation_repository());

    mount_to_body(move || {
        view! {
            <App
                config=shell_config
                records=records
                navigation=navigation
            />
        }
    });
}
