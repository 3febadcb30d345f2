//! List Query Pipeline
//!
//! Pure search / filter / sort stages for the content list, plus the
//! sidebar's label filter. Everything is recomputed from scratch on each
//! query change; the lists involved are small.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::{NavigationEntry, Priority, Record, Status};

/// Status tab of the content list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    InProgress,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Tab order
    pub const TABS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::InProgress,
        StatusFilter::Pending,
        StatusFilter::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::InProgress => "In Progress",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Label comparison is case-insensitive
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            _ => status.label().to_lowercase() == self.label().to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// A to Z
    Ascending,
    /// Z to A
    #[default]
    Descending,
}

impl SortDirection {
    pub fn menu_label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "Sort A-Z",
            SortDirection::Descending => "Sort Z-A",
        }
    }
}

/// Content list query, owned by the main pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub priority_filter: Option<Priority>,
    pub sort_direction: SortDirection,
}

impl ListQuery {
    /// Recovery action of the "no results" state. Other filters stay.
    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }
}

/// Result of running a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Results(Vec<Record>),
    NoResults,
}

impl QueryOutcome {
    pub fn len(&self) -> usize {
        match self {
            QueryOutcome::Results(records) => records.len(),
            QueryOutcome::NoResults => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Keep records whose title or description contains `text`, ignoring case
pub fn search_filter(mut records: Vec<Record>, text: &str) -> Vec<Record> {
    if text.is_empty() {
        return records;
    }
    let needle = text.to_lowercase();
    records.retain(|record| {
        contains_folded(&record.title, &needle) || contains_folded(&record.description, &needle)
    });
    records
}

pub fn status_filter(mut records: Vec<Record>, filter: StatusFilter) -> Vec<Record> {
    if filter != StatusFilter::All {
        records.retain(|record| filter.matches(record.status));
    }
    records
}

pub fn priority_filter(mut records: Vec<Record>, priority: Option<Priority>) -> Vec<Record> {
    if let Some(priority) = priority {
        records.retain(|record| record.priority == priority);
    }
    records
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn case_marks(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Collation for titles, compared level by level: base letters with accents
/// and case folded away, then accents, then case with lowercase first.
///
/// Only identical titles compare equal, and a stable sort keeps their order.
pub fn title_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

/// Stable sort by title
pub fn sort_by_title(records: &mut [Record], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| title_cmp(&a.title, &b.title)),
        SortDirection::Descending => records.sort_by(|a, b| title_cmp(&b.title, &a.title)),
    }
}

/// Run every stage of the pipeline over `records`
pub fn run_query(records: &[Record], query: &ListQuery) -> Vec<Record> {
    let matched = search_filter(records.to_vec(), &query.search_text);
    let matched = status_filter(matched, query.status_filter);
    let mut matched = priority_filter(matched, query.priority_filter);
    sort_by_title(&mut matched, query.sort_direction);
    matched
}

pub fn evaluate(records: &[Record], query: &ListQuery) -> QueryOutcome {
    let matched = run_query(records, query);
    if matched.is_empty() {
        QueryOutcome::NoResults
    } else {
        QueryOutcome::Results(matched)
    }
}

/// Sidebar filter: label substring, ignoring case, input order kept
pub fn filter_navigation(entries: &[NavigationEntry], query: &str) -> Vec<NavigationEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| contains_folded(&entry.label, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_status_filter_compares_labels() {
        assert!(StatusFilter::InProgress.matches(Status::InProgress));
        assert!(!StatusFilter::Pending.matches(Status::Scheduled));
        assert!(StatusFilter::All.matches(Status::Scheduled));
    }

    #[test]
    fn test_search_matches_description() {
        let matched = search_filter(fixtures::records(), "CLIENT");
        assert_eq!(titles(&matched), vec!["Client Meeting"]);
        let matched = search_filter(fixtures::records(), "production");
        assert_eq!(titles(&matched), vec!["Bug Fixes"]);
    }

    #[test]
    fn test_priority_filter() {
        let matched = priority_filter(fixtures::records(), Some(Priority::Medium));
        assert_eq!(titles(&matched), vec!["Client Meeting", "Sprint Planning"]);
        assert_eq!(priority_filter(fixtures::records(), None).len(), 5);
    }

    #[test]
    fn test_title_cmp_ignores_case_first() {
        assert_eq!(title_cmp("alpha", "Beta"), Ordering::Less);
        assert_eq!(title_cmp("bug", "Bug Fixes"), Ordering::Less);
        assert_eq!(title_cmp("alpha", "Alpha"), Ordering::Less);
        assert_eq!(title_cmp("Alpha", "Alpha"), Ordering::Equal);
    }

    #[test]
    fn test_title_cmp_folds_accents() {
        assert_eq!(title_cmp("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(title_cmp("eclair", "Éclair"), Ordering::Less);
        assert_eq!(title_cmp("résumé", "resumes"), Ordering::Less);

        let mut records = vec![
            Record::new("1", "Zebra", "", "", Priority::Low, Status::Pending),
            Record::new("2", "Éclair", "", "", Priority::Low, Status::Pending),
            Record::new("3", "apple", "", "", Priority::Low, Status::Pending),
        ];
        sort_by_title(&mut records, SortDirection::Ascending);
        assert_eq!(titles(&records), vec!["apple", "Éclair", "Zebra"]);
        sort_by_title(&mut records, SortDirection::Descending);
        assert_eq!(titles(&records), vec!["Zebra", "Éclair", "apple"]);
    }

    #[test]
    fn test_sort_keeps_order_of_equal_titles() {
        let mut records = vec![
            Record::new("1", "Same", "", "", Priority::Low, Status::Pending),
            Record::new("2", "Same", "", "", Priority::Low, Status::Pending),
            Record::new("3", "Other", "", "", Priority::Low, Status::Pending),
        ];
        sort_by_title(&mut records, SortDirection::Descending);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        sort_by_title(&mut records, SortDirection::Ascending);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_ascending_order() {
        let query = ListQuery {
            sort_direction: SortDirection::Ascending,
            ..ListQuery::default()
        };
        let matched = run_query(&fixtures::records(), &query);
        assert_eq!(
            titles(&matched),
            vec!["Bug Fixes", "Client Meeting", "Design Review", "Project Alpha", "Sprint Planning"]
        );
    }

    #[test]
    fn test_clear_search_keeps_other_filters() {
        let mut query = ListQuery {
            search_text: "zzz".to_string(),
            status_filter: StatusFilter::Pending,
            priority_filter: Some(Priority::High),
            sort_direction: SortDirection::Ascending,
        };
        query.clear_search();
        assert!(query.search_text.is_empty());
        assert_eq!(query.status_filter, StatusFilter::Pending);
        assert_eq!(query.priority_filter, Some(Priority::High));
        assert_eq!(query.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_navigation_filter() {
        let entries = fixtures::navigation();
        let ids: Vec<String> = filter_navigation(&entries, "S")
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["contacts", "documents", "settings", "help"]);
        assert_eq!(filter_navigation(&entries, ""), entries);
        assert!(filter_navigation(&entries, "nothing").is_empty());
    }
}
