//! Detail Panel State
//!
//! Tabs and the panel-local state (comment draft, progress, star). None of
//! it is written back to the record.

use crate::config::ShellConfig;
use crate::domain::{NavigationEntry, Record, Status};
use crate::fixtures::DetailFixture;

/// What the detail panel shows for the selected id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailSubject {
    Record(Record),
    /// A sidebar destination, filled in from the shared fixture
    Section(NavigationEntry),
}

impl DetailSubject {
    /// Records take precedence over navigation entries with the same id
    pub fn resolve(id: &str, records: &[Record], navigation: &[NavigationEntry]) -> Option<Self> {
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .map(DetailSubject::Record)
            .or_else(|| {
                navigation
                    .iter()
                    .find(|entry| entry.id == id)
                    .cloned()
                    .map(DetailSubject::Section)
            })
    }

    pub fn id(&self) -> &str {
        match self {
            DetailSubject::Record(record) => &record.id,
            DetailSubject::Section(entry) => &entry.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DetailSubject::Record(record) => &record.title,
            DetailSubject::Section(entry) => &entry.label,
        }
    }

    pub fn status(&self, fixture: &DetailFixture) -> Status {
        match self {
            DetailSubject::Record(record) => record.status,
            DetailSubject::Section(_) => fixture.section_status,
        }
    }

    pub fn description<'a>(&'a self, fixture: &'a DetailFixture) -> &'a str {
        match self {
            DetailSubject::Record(record) => &record.description,
            DetailSubject::Section(_) => fixture.section_description,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    #[default]
    Overview,
    Activity,
    Files,
    People,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Activity,
        DetailTab::Files,
        DetailTab::People,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Details",
            DetailTab::Activity => "Activity",
            DetailTab::Files => "Files",
            DetailTab::People => "People",
        }
    }
}

pub const MAX_PROGRESS: u8 = 100;

/// Local state of one open detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLocalState {
    comment: String,
    progress: u8,
    progress_step: u8,
    starred: bool,
}

impl DetailLocalState {
    pub fn new(initial_progress: u8, progress_step: u8) -> Self {
        Self {
            comment: String::new(),
            progress: initial_progress.min(MAX_PROGRESS),
            progress_step,
            starred: false,
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(config.initial_progress, config.progress_step)
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.comment = text.into();
    }

    /// Whitespace-only drafts cannot be submitted
    pub fn can_submit(&self) -> bool {
        !self.comment.trim().is_empty()
    }

    /// Clears the draft and bumps progress. Returns `false` for a blank draft.
    pub fn submit_comment(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.comment.clear();
        self.progress = self.progress.saturating_add(self.progress_step).min(MAX_PROGRESS);
        true
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_starred(&self) -> bool {
        self.starred
    }

    /// Returns the new flag
    pub fn toggle_star(&mut self) -> bool {
        self.starred = !self.starred;
        self.starred
    }
}

/// Badge text for the panel header
pub fn project_code(id: &str) -> String {
    format!("PRJ-{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_defaults_from_config() {
        let state = DetailLocalState::from_config(&ShellConfig::default());
        assert_eq!(state.progress(), 65);
        assert!(!state.is_starred());
        assert_eq!(state.comment(), "");
    }

    #[test]
    fn test_blank_comment_is_noop() {
        let mut state = DetailLocalState::new(65, 5);
        state.set_comment("   \n\t");
        assert!(!state.can_submit());
        assert!(!state.submit_comment());
        assert_eq!(state.progress(), 65);
        assert_eq!(state.comment(), "   \n\t");
    }

    #[test]
    fn test_submit_clears_and_increments() {
        let mut state = DetailLocalState::new(65, 5);
        state.set_comment("Looks good");
        assert!(state.submit_comment());
        assert_eq!(state.comment(), "");
        assert_eq!(state.progress(), 70);
    }

    #[test]
    fn test_progress_caps_at_100() {
        let mut state = DetailLocalState::new(98, 5);
        state.set_comment("one");
        state.submit_comment();
        assert_eq!(state.progress(), 100);
        state.set_comment("two");
        assert!(state.submit_comment());
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn test_star_toggle() {
        let mut state = DetailLocalState::new(0, 5);
        assert!(state.toggle_star());
        assert!(!state.toggle_star());
    }

    #[test]
    fn test_resolves_records_first() {
        let records = fixtures::records();
        let navigation = fixtures::navigation();
        let subject = DetailSubject::resolve("item3", &records, &navigation).unwrap();
        assert!(matches!(subject, DetailSubject::Record(_)));
        assert_eq!(subject.title(), "Design Review");
        assert_eq!(subject.id(), "item3");
    }

    #[test]
    fn test_navigation_selection_is_renderable() {
        let fixture = DetailFixture::sample();
        let subject =
            DetailSubject::resolve("help", &fixtures::records(), &fixtures::navigation()).unwrap();
        assert_eq!(subject.title(), "Help & Support");
        assert_eq!(subject.status(&fixture), Status::InProgress);
        assert!(subject.description(&fixture).starts_with("This project involves"));
        assert_eq!(project_code(subject.id()), "PRJ-help");
    }

    #[test]
    fn test_unmatched_id_has_no_subject() {
        assert_eq!(
            DetailSubject::resolve("zzz", &fixtures::records(), &fixtures::navigation()),
            None
        );
    }

    #[test]
    fn test_tab_defaults() {
        assert_eq!(DetailTab::default(), DetailTab::Overview);
        assert_eq!(DetailTab::Overview.label(), "Details");
        assert_eq!(project_code("item1"), "PRJ-item1");
    }
}
