//! Sanity checks over the embedded demo catalog.

use ui::core::spreadsheet::file_as_csv;
use ui::insights::{InsightsState, CATEGORY_FILTERS};

#[test]
fn catalog_parses_without_errors() {
    let state = InsightsState::load();
    assert!(state.error.is_none(), "catalog error: {:?}", state.error);
    assert!(!state.records.is_empty());
}

#[test]
fn slugs_are_unique() {
    let state = InsightsState::load();
    let mut slugs: Vec<&str> = state.records.iter().map(|r| r.slug.as_str()).collect();
    slugs.sort_unstable();
    let before = slugs.len();
    slugs.dedup();
    assert_eq!(before, slugs.len());
}

#[test]
fn every_category_has_a_filter_button() {
    let state = InsightsState::load();
    for record in &state.records {
        assert!(
            CATEGORY_FILTERS
                .iter()
                .any(|(value, _)| *value == record.category.slug()),
            "no filter button for category {:?}",
            record.category
        );
    }
}

#[test]
fn attachments_resolve_to_stored_files() {
    let state = InsightsState::load();
    for record in &state.records {
        if let Some(name) = record.attachment.as_ref() {
            assert!(
                state.files.get(name).is_some(),
                "{} points at a missing file {name}",
                record.slug
            );
            assert!(
                !file_as_csv(&state.files, name).is_empty(),
                "{name} renders as empty"
            );
        }
    }
}

#[test]
fn records_are_sorted_newest_first() {
    let state = InsightsState::load();
    for pair in state.records.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}
