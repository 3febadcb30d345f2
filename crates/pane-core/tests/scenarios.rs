//! End-to-end scenarios over the built-in data set.

use pane_core::fixtures;
use pane_core::{
    evaluate, run_query, DetailSubject, LayoutArbiter, ListQuery, PaneSize, QueryOutcome,
    ReadRepository, ShellAction, ShellConfig, SortDirection, StatusFilter, UiState, ViewportClass,
};

fn titles(outcome: &QueryOutcome) -> Vec<String> {
    match outcome {
        QueryOutcome::Results(records) => records.iter().map(|r| r.title.clone()).collect(),
        QueryOutcome::NoResults => Vec::new(),
    }
}

#[test]
fn default_query_lists_everything_z_to_a() {
    let records = fixtures::record_repository().list().expect("static list");
    let outcome = evaluate(&records, &ListQuery::default());
    assert_eq!(
        titles(&outcome),
        vec!["Sprint Planning", "Project Alpha", "Design Review", "Client Meeting", "Bug Fixes"]
    );
}

#[test]
fn search_design_finds_one_record() {
    let query = ListQuery {
        search_text: "design".to_string(),
        ..ListQuery::default()
    };
    let outcome = evaluate(&fixtures::records(), &query);
    assert_eq!(titles(&outcome), vec!["Design Review"]);
}

#[test]
fn in_progress_tab_follows_sort_direction() {
    let mut query = ListQuery {
        status_filter: StatusFilter::InProgress,
        ..ListQuery::default()
    };
    assert_eq!(
        titles(&evaluate(&fixtures::records(), &query)),
        vec!["Project Alpha", "Bug Fixes"]
    );

    query.sort_direction = SortDirection::Ascending;
    assert_eq!(
        titles(&evaluate(&fixtures::records(), &query)),
        vec!["Bug Fixes", "Project Alpha"]
    );
}

#[test]
fn no_match_then_clear_restores_filtered_list() {
    let records = fixtures::records();
    let mut query = ListQuery {
        search_text: "zzz".to_string(),
        status_filter: StatusFilter::InProgress,
        ..ListQuery::default()
    };
    let outcome = evaluate(&records, &query);
    assert_eq!(outcome, QueryOutcome::NoResults);
    assert!(outcome.is_empty());

    query.clear_search();
    assert_eq!(titles(&evaluate(&records, &query)), vec!["Project Alpha", "Bug Fixes"]);

    query.status_filter = StatusFilter::All;
    assert_eq!(run_query(&records, &query).len(), 5);
}

#[test]
fn selecting_then_toggling_drives_the_layout() {
    let config = ShellConfig::default();
    let arbiter = LayoutArbiter::new(config.sidebar_width_px);
    let mut ui = UiState::new();

    // Detail affordance before any selection does nothing
    ui.apply(ShellAction::ToggleDetail);
    let layout = arbiter.arrange(ui.is_detail_open(), ViewportClass::Wide);
    assert_eq!(layout.detail, PaneSize::Hidden);

    ui.apply(ShellAction::Select("item3".to_string()));
    let layout = arbiter.arrange(ui.is_detail_open(), ViewportClass::Wide);
    assert_eq!(layout.detail, PaneSize::Percent(33));
    let layout = arbiter.arrange(ui.is_detail_open(), ViewportClass::Narrow);
    assert_eq!(layout.detail, PaneSize::Overlay);

    ui.apply(ShellAction::ToggleDetail);
    let layout = arbiter.arrange(ui.is_detail_open(), ViewportClass::Wide);
    assert_eq!(layout.main, PaneSize::Remaining);
    assert_eq!(ui.selected_id(), Some("item3"));
}

#[test]
fn sidebar_selection_opens_section_detail() {
    let records = fixtures::record_repository().list().expect("static list");
    let navigation = fixtures::navigation();
    let mut ui = UiState::new();
    ui.apply(ShellAction::Select("inbox".to_string()));
    let id = ui.detail_subject().expect("panel open");
    let subject = DetailSubject::resolve(id, &records, &navigation).expect("nav id resolves");
    assert!(matches!(subject, DetailSubject::Section(_)));
    assert_eq!(subject.title(), "Inbox");
}

#[test]
fn unknown_selection_resolves_to_nothing() {
    let mut ui = UiState::new();
    ui.apply(ShellAction::Select("missing".to_string()));
    let id = ui.detail_subject().expect("panel open");
    assert_eq!(
        DetailSubject::resolve(id, &fixtures::records(), &fixtures::navigation()),
        None
    );
}
