//! Domain Layer
//!
//! Entities displayed by the shell and the shared error type.

mod entity;
mod navigation;
mod record;

pub use entity::{DomainError, DomainResult, Entity};
pub use navigation::{section_label, NavigationEntry, DEFAULT_SECTION_LABEL};
pub use record::{Priority, Record, Status};
