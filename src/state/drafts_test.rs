use super::*;
use crate::state::editor::EditorState;

fn chapter(id: &str, sentences: &[&str]) -> Chapter {
    Chapter {
        chapter_id: id.to_owned(),
        full_summary: sentences.iter().map(|s| (*s).to_owned()).collect(),
    }
}

fn word(chapter_id: &str, domain_id: &str, name: &str, definition: &str) -> DomainWord {
    DomainWord {
        id: format!("{chapter_id}-{domain_id}"),
        chapter_id: chapter_id.to_owned(),
        domain_id: domain_id.to_owned(),
        name: name.to_owned(),
        definition: definition.to_owned(),
        is_mwe: false,
        mwe_type: None,
        tokens_with_pos: Vec::new(),
        translations: BTreeMap::new(),
        word_structure: BTreeMap::new(),
    }
}

// =============================================================
// Record keys and search
// =============================================================

#[test]
fn chapter_search_covers_id_and_sentences() {
    let ch = chapter("ch1", &["Plants convert light.", "Roots absorb water."]);
    assert!(ch.matches("ch1"));
    assert!(ch.matches("absorb"));
    assert!(!ch.matches("mitochondria"));
}

#[test]
fn section_key_is_chapter_and_section() {
    let section = Section {
        chapter_id: "ch1".to_owned(),
        section_id: "1.2".to_owned(),
        section_summary: "Cell walls.".to_owned(),
    };
    assert_eq!(section.key(), "ch1/1.2");
    assert!(section.matches("walls"));
}

#[test]
fn domain_word_search_covers_name_and_definition() {
    let w = word("ch2", "osmosis", "osmosis", "Movement of water across membranes.");
    assert_eq!(w.key(), "ch2/osmosis");
    assert!(w.matches("membranes"));
    assert!(w.matches("osmo"));
}

#[test]
fn taxonomy_search_covers_name_and_format() {
    let tax = Taxonomy {
        id: "t1".to_owned(),
        chapter_id: "ch3".to_owned(),
        domain_id: "cells".to_owned(),
        domain_name: "Cell Biology".to_owned(),
        image_format: "svg".to_owned(),
        image_url: "/taxonomy/image/t1".to_owned(),
    };
    assert_eq!(tax.key(), "ch3/cells");
    assert!(tax.matches("biology"));
    assert!(tax.matches("svg"));
}

// =============================================================
// Chapter text drafts
// =============================================================

#[test]
fn chapter_draft_joins_sentences() {
    let ch = chapter("ch1", &["One.", "Two."]);
    let draft = ChapterDraft::from_record(&ch);
    assert_eq!(draft.text, "One.\n\nTwo.");
}

#[test]
fn chapter_draft_apply_splits_and_drops_blanks() {
    let mut ch = chapter("ch1", &["Old."]);
    let draft = ChapterDraft {
        text: "New first.\n\n\n\nNew second.\n\n  ".to_owned(),
    };
    draft.apply_to(&mut ch);
    assert_eq!(ch.full_summary, ["New first.", "New second."]);
}

#[test]
fn chapter_editor_dirty_only_on_real_change() {
    let mut state: EditorState<ChapterDraft> = EditorState::default();
    state.set_records(vec![chapter("ch1", &["One.", "Two."])]);
    state.select("ch1");
    state.begin_edit();

    state.update_draft(|d| d.text = "One.\n\nTwo.".to_owned());
    assert!(!state.dirty);

    state.update_draft(|d| d.text = "One.\n\nTwo!".to_owned());
    assert!(state.dirty);
}

// =============================================================
// Domain-word drafts
// =============================================================

#[test]
fn domain_id_rename_moves_the_key() {
    let mut state: EditorState<DomainIdDraft> = EditorState::default();
    state.set_records(vec![word("ch2", "fotosynthesis", "photosynthesis", "def")]);
    state.select("ch2/fotosynthesis");
    state.update_draft(|d| d.domain_id = "photosynthesis".to_owned());
    assert!(state.dirty);

    state.commit();
    assert_eq!(state.selected_key.as_deref(), Some("ch2/photosynthesis"));
    assert_eq!(state.records[0].domain_id, "photosynthesis");
}

#[test]
fn definition_draft_edits_translation_values() {
    let mut w = word("ch2", "osmosis", "osmosis", "old definition");
    w.translations.insert("de".to_owned(), "Osmose".to_owned());

    let mut draft = DefinitionDraft::from_record(&w);
    draft.definition = "new definition".to_owned();
    draft.translations.insert("de".to_owned(), "Die Osmose".to_owned());
    draft.apply_to(&mut w);

    assert_eq!(w.definition, "new definition");
    assert_eq!(w.translations["de"], "Die Osmose");
}

#[test]
fn structure_draft_supports_add_and_remove() {
    let mut w = word("ch2", "osmosis", "osmosis", "def");
    w.word_structure.insert("root".to_owned(), "osmo".to_owned());

    let mut draft = StructureDraft::from_record(&w);
    draft.word_structure.insert("suffix".to_owned(), "sis".to_owned());
    draft.word_structure.remove("root");
    draft.apply_to(&mut w);

    assert_eq!(w.word_structure.len(), 1);
    assert_eq!(w.word_structure["suffix"], "sis");
}

// =============================================================
// Taxonomy drafts
// =============================================================

#[test]
fn taxonomy_draft_round_trip() {
    let mut tax = Taxonomy {
        id: "t1".to_owned(),
        chapter_id: "ch3".to_owned(),
        domain_id: "cells".to_owned(),
        domain_name: "Cells".to_owned(),
        image_format: "png".to_owned(),
        image_url: String::new(),
    };
    let mut draft = TaxonomyDraft::from_record(&tax);
    assert_eq!(draft.image_format, "png");

    draft.domain_name = "Cell Biology".to_owned();
    draft.image_format = "svg".to_owned();
    draft.apply_to(&mut tax);
    assert_eq!(tax.domain_name, "Cell Biology");
    assert_eq!(tax.image_format, "svg");
}
