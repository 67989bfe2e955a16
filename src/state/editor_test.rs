use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: String,
    label: String,
}

impl Record for Item {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.label.to_lowercase().contains(needle)
    }
}

/// Draft over the non-identifying field.
#[derive(Clone, Debug, PartialEq)]
struct LabelDraft {
    label: String,
}

impl Draft for LabelDraft {
    type Record = Item;

    fn from_record(record: &Item) -> Self {
        Self {
            label: record.label.clone(),
        }
    }

    fn apply_to(&self, record: &mut Item) {
        record.label = self.label.clone();
    }
}

/// Draft that rewrites the record key, like the domain-id rename tool.
#[derive(Clone, Debug, PartialEq)]
struct IdDraft {
    id: String,
}

impl Draft for IdDraft {
    type Record = Item;

    fn from_record(record: &Item) -> Self {
        Self {
            id: record.id.clone(),
        }
    }

    fn apply_to(&self, record: &mut Item) {
        record.id = self.id.clone();
    }
}

fn item(id: &str, label: &str) -> Item {
    Item {
        id: id.to_owned(),
        label: label.to_owned(),
    }
}

fn loaded() -> EditorState<LabelDraft> {
    let mut state = EditorState::default();
    state.set_records(vec![
        item("alpha", "First record"),
        item("beta", "Second record"),
        item("gamma", "Third record"),
    ]);
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn starts_loading_with_nothing_selected() {
    let state = EditorState::<LabelDraft>::default();
    assert!(state.loading);
    assert!(state.records.is_empty());
    assert!(state.selected_key.is_none());
    assert!(!state.edited_once());
}

#[test]
fn set_records_clears_loading_and_error() {
    let mut state = EditorState::<LabelDraft>::default();
    state.fail_load("network down");
    state.set_records(vec![item("alpha", "First")]);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.records.len(), 1);
}

#[test]
fn fail_load_records_message_and_clears() {
    let mut state = loaded();
    state.select("alpha");
    state.fail_load("boom");
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(state.records.is_empty());
    assert!(state.selected_key.is_none());
}

// =============================================================
// Search filtering
// =============================================================

#[test]
fn empty_search_shows_everything() {
    let state = loaded();
    assert_eq!(state.filtered().len(), 3);
    assert_eq!(state.shown_total(), (3, 3));
}

#[test]
fn whitespace_search_shows_everything() {
    let mut state = loaded();
    state.set_search("   ");
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut state = loaded();
    state.set_search("SECOND");
    let shown = state.filtered();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "beta");
    assert_eq!(state.shown_total(), (1, 3));
}

#[test]
fn search_preserves_fetch_order() {
    let mut state = loaded();
    state.set_search("record");
    let ids: Vec<&str> = state.filtered().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["alpha", "beta", "gamma"]);
}

// =============================================================
// Selection and drafts
// =============================================================

#[test]
fn select_sets_baseline_draft() {
    let mut state = loaded();
    state.select("beta");
    assert_eq!(state.selected().unwrap().id, "beta");
    assert_eq!(state.draft.as_ref().unwrap().label, "Second record");
    assert!(!state.editing);
    assert!(!state.dirty);
}

#[test]
fn select_unknown_key_clears_selection() {
    let mut state = loaded();
    state.select("beta");
    state.select("missing");
    assert!(state.selected_key.is_none());
    assert!(state.draft.is_none());
}

#[test]
fn update_draft_tracks_dirty_against_baseline() {
    let mut state = loaded();
    state.select("alpha");
    state.begin_edit();

    state.update_draft(|d| d.label = "Changed".to_owned());
    assert!(state.dirty);

    // Reverting text clears the flag again.
    state.update_draft(|d| d.label = "First record".to_owned());
    assert!(!state.dirty);
}

#[test]
fn update_draft_without_selection_is_noop() {
    let mut state = loaded();
    state.update_draft(|d| d.label = "ghost".to_owned());
    assert!(state.draft.is_none());
    assert!(!state.dirty);
}

#[test]
fn cancel_edit_restores_baseline() {
    let mut state = loaded();
    state.select("alpha");
    state.begin_edit();
    state.update_draft(|d| d.label = "Changed".to_owned());

    state.cancel_edit();
    assert!(!state.editing);
    assert!(!state.dirty);
    assert_eq!(state.draft.as_ref().unwrap().label, "First record");
}

#[test]
fn begin_edit_requires_selection() {
    let mut state = loaded();
    state.begin_edit();
    assert!(!state.editing);
}

// =============================================================
// Commit reconciliation
// =============================================================

#[test]
fn commit_applies_draft_to_stored_record() {
    let mut state = loaded();
    state.select("alpha");
    state.begin_edit();
    state.update_draft(|d| d.label = "Rewritten".to_owned());

    let first = state.commit();
    assert!(first);
    assert!(!state.editing);
    assert!(!state.dirty);
    assert_eq!(state.records[0].label, "Rewritten");
    assert_eq!(state.selected().unwrap().label, "Rewritten");
}

#[test]
fn commit_reports_first_edit_only_once() {
    let mut state = loaded();
    state.select("alpha");
    state.update_draft(|d| d.label = "One".to_owned());
    assert!(state.commit());

    state.update_draft(|d| d.label = "Two".to_owned());
    assert!(!state.commit());
    assert!(state.edited_once());
}

#[test]
fn commit_without_selection_returns_false() {
    let mut state = loaded();
    assert!(!state.commit());
    assert!(!state.edited_once());
}

#[test]
fn key_rewriting_commit_follows_the_record() {
    let mut state: EditorState<IdDraft> = EditorState::default();
    state.set_records(vec![item("old-id", "Label")]);
    state.select("old-id");
    state.update_draft(|d| d.id = "new-id".to_owned());

    assert!(state.commit());
    assert_eq!(state.selected_key.as_deref(), Some("new-id"));
    assert_eq!(state.selected().unwrap().id, "new-id");
    assert_eq!(state.records[0].id, "new-id");
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_selected_drops_record_and_clears_selection() {
    let mut state = loaded();
    state.select("beta");

    let (removed, first) = state.remove_selected().unwrap();
    assert_eq!(removed.id, "beta");
    assert!(first);
    assert_eq!(state.records.len(), 2);
    assert!(state.selected_key.is_none());
    assert!(state.draft.is_none());
}

#[test]
fn remove_without_selection_returns_none() {
    let mut state = loaded();
    assert!(state.remove_selected().is_none());
}

#[test]
fn removal_consumes_the_first_edit_flag() {
    let mut state = loaded();
    state.select("beta");
    let (_, first) = state.remove_selected().unwrap();
    assert!(first);

    state.select("alpha");
    state.update_draft(|d| d.label = "later".to_owned());
    assert!(!state.commit());
}

// =============================================================
// Refetch behavior
// =============================================================

#[test]
fn refetch_keeps_selection_when_key_survives() {
    let mut state = loaded();
    state.select("beta");
    state.begin_edit();
    state.update_draft(|d| d.label = "unsaved".to_owned());

    state.set_records(vec![item("beta", "Server copy")]);
    assert_eq!(state.selected_key.as_deref(), Some("beta"));
    // Baseline re-derives from the fresh copy; unsaved edits drop.
    assert_eq!(state.draft.as_ref().unwrap().label, "Server copy");
    assert!(!state.dirty);
    assert!(!state.editing);
}

#[test]
fn refetch_clears_selection_when_key_vanished() {
    let mut state = loaded();
    state.select("beta");
    state.set_records(vec![item("alpha", "First")]);
    assert!(state.selected_key.is_none());
    assert!(state.draft.is_none());
}
