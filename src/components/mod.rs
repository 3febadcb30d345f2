//! UI Components
//!
//! Leptos components for the three-pane shell.

mod detail_panel;
mod detail_tabs;
mod main_content;
mod panel_layout;
mod record_card;
mod search_input;
mod sidebar;

pub use detail_panel::DetailPanel;
pub use main_content::MainContent;
pub use panel_layout::PanelLayout;
pub use record_card::RecordCard;
pub use search_input::SearchInput;
pub use sidebar::Sidebar;
