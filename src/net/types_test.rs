use serde_json::json;

use super::*;

// =============================================================
// Record decoding from backend-shaped JSON
// =============================================================

#[test]
fn chapter_list_decodes() {
    let body = json!({
        "chapters": [
            { "chapter_id": "ch1", "full_summary": ["First sentence.", "Second sentence."] }
        ]
    });
    let list: ChapterList = serde_json::from_value(body).unwrap();
    assert_eq!(list.chapters.len(), 1);
    assert_eq!(list.chapters[0].chapter_id, "ch1");
    assert_eq!(list.chapters[0].full_summary.len(), 2);
}

#[test]
fn section_defaults_empty_summary() {
    let body = json!({ "chapter_id": "ch1", "section_id": "1.2" });
    let section: Section = serde_json::from_value(body).unwrap();
    assert_eq!(section.section_summary, "");
}

#[test]
fn domain_word_decodes_full_document() {
    let body = json!({
        "_id": "64f1c0ffee",
        "chapter_id": "ch2",
        "domain_id": "photosynthesis",
        "name": "photosynthesis",
        "definition": "Conversion of light energy into chemical energy.",
        "is_mwe": false,
        "mwe_type": "",
        "tokens_with_pos": [["photosynthesis", "NOUN"]],
        "translations": { "de": "Photosynthese", "fr": "photosynthèse" },
        "word_structure": { "root": "photo", "suffix": "synthesis" }
    });
    let word: DomainWord = serde_json::from_value(body).unwrap();
    assert_eq!(word.id, "64f1c0ffee");
    assert_eq!(word.translations.len(), 2);
    assert_eq!(word.word_structure["root"], "photo");
    assert!(!word.is_mwe);
}

#[test]
fn domain_word_tolerates_null_mwe_type_and_missing_maps() {
    let body = json!({
        "_id": "a1",
        "chapter_id": "ch1",
        "domain_id": "osmosis",
        "mwe_type": null
    });
    let word: DomainWord = serde_json::from_value(body).unwrap();
    assert!(word.mwe_type.is_none());
    assert!(word.translations.is_empty());
    assert!(word.tokens_with_pos.is_empty());
}

#[test]
fn taxonomy_decodes_with_relative_image_url() {
    let body = json!({
        "taxonomies": [{
            "_id": "t1",
            "chapter_id": "ch3",
            "domain_id": "cells",
            "domain_name": "Cell Biology",
            "image_format": "svg",
            "image_url": "/taxonomy/image/t1"
        }]
    });
    let list: TaxonomyList = serde_json::from_value(body).unwrap();
    assert_eq!(list.taxonomies[0].image_url, "/taxonomy/image/t1");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_decodes() {
    let body = json!({
        "message": "Login successful",
        "session_token": "deadbeef",
        "username": "ana"
    });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.session_token, "deadbeef");
    assert_eq!(resp.username, "ana");
}

#[test]
fn reset_requested_without_development_token() {
    let body = json!({ "message": "Reset instructions sent" });
    let resp: ResetRequested = serde_json::from_value(body).unwrap();
    assert!(resp.development_token.is_none());
}

#[test]
fn error_body_decodes_detail() {
    let body = json!({ "detail": "Invalid username or password" });
    let err: ErrorBody = serde_json::from_value(body).unwrap();
    assert_eq!(err.detail, "Invalid username or password");
}
