#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// A record that can live in an editable collection.
pub trait Record: Clone + std::fmt::Debug {
    /// Stable identity within the collection. May change when an edit
    /// rewrites an identifying field.
    fn key(&self) -> String;

    /// Substring search over the view-relevant fields. `needle` arrives
    /// trimmed and lowercased.
    fn matches(&self, needle: &str) -> bool;
}

/// An editable projection of one record type.
///
/// Each editor view defines its own draft: the subset of fields it lets the
/// user change. The baseline (`from_record`) doubles as the dirty-tracking
/// reference, and `apply_to` writes the edited fields back into the stored
/// record after the server accepted them.
pub trait Draft: Clone + PartialEq + std::fmt::Debug {
    type Record: Record;

    fn from_record(record: &Self::Record) -> Self;
    fn apply_to(&self, record: &mut Self::Record);
}

/// Edit-session state shared by every editor view.
///
/// The lifecycle is always the same: load the full collection, narrow it with
/// a search term, select one record into a draft, track whether the draft
/// differs from the stored baseline, and reconcile the local copy once a save
/// round-trips. Activity logging fires only on the first committed change,
/// which `commit`/`remove_selected` report back to the caller.
#[derive(Clone, Debug)]
pub struct EditorState<D: Draft> {
    pub records: Vec<D::Record>,
    pub search: String,
    pub selected_key: Option<String>,
    pub draft: Option<D>,
    pub editing: bool,
    pub dirty: bool,
    pub loading: bool,
    pub error: Option<String>,
    edited_once: bool,
}

impl<D: Draft> Default for EditorState<D> {
    // loading starts true: views kick off their fetch on mount.
    fn default() -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            selected_key: None,
            draft: None,
            editing: false,
            dirty: false,
            loading: true,
            error: None,
            edited_once: false,
        }
    }
}

impl<D: Draft> EditorState<D> {
    /// Install a freshly fetched collection. A surviving selection is
    /// re-derived against the new baseline; a vanished one is cleared.
    pub fn set_records(&mut self, records: Vec<D::Record>) {
        self.records = records;
        self.loading = false;
        self.error = None;
        if let Some(key) = self.selected_key.clone() {
            self.select(&key);
        }
    }

    /// Record a failed load.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.records.clear();
        self.loading = false;
        self.error = Some(message.into());
        self.clear_selection();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Records matching the current search term, in fetch order.
    pub fn filtered(&self) -> Vec<&D::Record> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            self.records.iter().collect()
        } else {
            self.records.iter().filter(|r| r.matches(&needle)).collect()
        }
    }

    /// (shown, total) counts for the search readout.
    pub fn shown_total(&self) -> (usize, usize) {
        (self.filtered().len(), self.records.len())
    }

    /// Select a record by key, resetting the draft to its baseline.
    /// Unknown keys clear the selection.
    pub fn select(&mut self, key: &str) {
        match self.find(key).map(D::from_record) {
            Some(draft) => {
                self.draft = Some(draft);
                self.selected_key = Some(key.to_owned());
                self.editing = false;
                self.dirty = false;
            }
            None => self.clear_selection(),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_key = None;
        self.draft = None;
        self.editing = false;
        self.dirty = false;
    }

    /// The currently selected record, if its key still resolves.
    pub fn selected(&self) -> Option<&D::Record> {
        self.selected_key.as_deref().and_then(|key| self.find(key))
    }

    pub fn begin_edit(&mut self) {
        if self.selected_key.is_some() {
            self.editing = true;
        }
    }

    /// Leave edit mode and restore the draft to the stored baseline.
    pub fn cancel_edit(&mut self) {
        let baseline = self.selected().map(D::from_record);
        self.draft = baseline;
        self.editing = false;
        self.dirty = false;
    }

    /// Mutate the draft, then recompute `dirty` against the baseline.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut D)) {
        let Some(baseline) = self.selected().map(D::from_record) else {
            return;
        };
        if let Some(draft) = self.draft.as_mut() {
            f(draft);
            self.dirty = *draft != baseline;
        }
    }

    /// Reconcile a successful save: write the draft into the stored record
    /// and follow its (possibly rewritten) key. Returns `true` exactly once
    /// per state value, on the first committed change — the caller's cue to
    /// add an activity entry.
    pub fn commit(&mut self) -> bool {
        let (Some(key), Some(draft)) = (self.selected_key.clone(), self.draft.clone()) else {
            return false;
        };
        let Some(record) = self.records.iter_mut().find(|r| r.key() == key) else {
            return false;
        };
        draft.apply_to(record);
        self.selected_key = Some(record.key());
        self.editing = false;
        self.dirty = false;
        let first = !self.edited_once;
        self.edited_once = true;
        first
    }

    /// Drop the selected record from the collection after a successful
    /// delete. Returns the removed record plus the same one-shot first-edit
    /// flag as `commit`.
    pub fn remove_selected(&mut self) -> Option<(D::Record, bool)> {
        let key = self.selected_key.clone()?;
        let index = self.records.iter().position(|r| r.key() == key)?;
        let removed = self.records.remove(index);
        self.clear_selection();
        let first = !self.edited_once;
        self.edited_once = true;
        Some((removed, first))
    }

    /// Whether any change has been committed in this view's lifetime.
    pub fn edited_once(&self) -> bool {
        self.edited_once
    }

    fn find(&self, key: &str) -> Option<&D::Record> {
        self.records.iter().find(|r| r.key() == key)
    }
}
