//! Pane Shell Core
//!
//! Layered the same way as the UI consumes it:
//! - domain: records, navigation entries, errors
//! - repository: read-only data access
//! - state: selection / detail visibility reducer
//! - query: search, filter and sort pipeline
//! - layout: pane arbitration per viewport class
//! - detail: detail panel tabs and local state
//!
//! Nothing here touches the DOM, so it all runs under plain `cargo test`.

pub mod config;
pub mod detail;
pub mod domain;
pub mod fixtures;
pub mod layout;
pub mod query;
pub mod repository;
pub mod state;

pub use config::{ConfigError, ShellConfig};
pub use detail::{project_code, DetailLocalState, DetailSubject, DetailTab};
pub use domain::{
    section_label, DomainError, DomainResult, Entity, NavigationEntry, Priority, Record, Status,
};
pub use layout::{LayoutArbiter, PaneLayout, PaneSize, ViewportClass};
pub use query::{
    evaluate, filter_navigation, run_query, ListQuery, QueryOutcome, SortDirection, StatusFilter,
};
pub use repository::{ReadRepository, StaticRepository};
pub use state::{Phase, ShellAction, UiState};
