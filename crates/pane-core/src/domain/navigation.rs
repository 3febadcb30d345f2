//! Navigation Entry
//!
//! Named destinations listed in the sidebar.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Header label used when the selection names no navigation entry
pub const DEFAULT_SECTION_LABEL: &str = "Dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub id: String,
    pub label: String,
    /// Unread count, badge hidden at zero
    pub notification_count: u32,
}

impl NavigationEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, notification_count: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            notification_count,
        }
    }

    pub fn has_notifications(&self) -> bool {
        self.notification_count > 0
    }
}

impl Entity for NavigationEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Header label for the main content pane
pub fn section_label<'a>(entries: &'a [NavigationEntry], selected_id: Option<&str>) -> &'a str {
    selected_id
        .and_then(|id| entries.iter().find(|entry| entry.id == id))
        .map_or(DEFAULT_SECTION_LABEL, |entry| entry.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<NavigationEntry> {
        vec![
            NavigationEntry::new("inbox", "Inbox", 5),
            NavigationEntry::new("help", "Help & Support", 0),
        ]
    }

    #[test]
    fn test_section_label_for_known_entry() {
        assert_eq!(section_label(&entries(), Some("help")), "Help & Support");
    }

    #[test]
    fn test_section_label_falls_back() {
        assert_eq!(section_label(&entries(), None), DEFAULT_SECTION_LABEL);
        assert_eq!(section_label(&entries(), Some("item3")), DEFAULT_SECTION_LABEL);
    }

    #[test]
    fn test_notification_badge() {
        let all = entries();
        assert!(all[0].has_notifications());
        assert!(!all[1].has_notifications());
    }
}
