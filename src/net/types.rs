//! Serde types for every payload exchanged with the content backend.
//!
//! Records are owned by the backend; the client keeps transient copies for
//! display and editing. Fields the backend backfills with empty defaults are
//! marked `#[serde(default)]` so partial documents still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A chapter with its full summary, one sentence per entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter_id: String,
    pub full_summary: Vec<String>,
}

/// Envelope for `GET /all-chapters`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChapterList {
    pub chapters: Vec<Chapter>,
}

/// A section-level summary within a chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub chapter_id: String,
    pub section_id: String,
    #[serde(default)]
    pub section_summary: String,
}

/// Envelope for `GET /all-sections`.
#[derive(Clone, Debug, Deserialize)]
pub struct SectionList {
    pub sections: Vec<Section>,
}

/// A domain vocabulary word with its lexical metadata.
///
/// `tokens_with_pos` stays loosely typed: the backend emits token/POS pairs
/// in more than one historical shape and the client only ever displays them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainWord {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub chapter_id: String,
    pub domain_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub is_mwe: bool,
    #[serde(default)]
    pub mwe_type: Option<String>,
    #[serde(default)]
    pub tokens_with_pos: Vec<serde_json::Value>,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    #[serde(default)]
    pub word_structure: BTreeMap<String, String>,
}

/// Envelope for `GET /all-domain-words`.
#[derive(Clone, Debug, Deserialize)]
pub struct DomainWordList {
    pub domain_words: Vec<DomainWord>,
}

/// A taxonomy record pointing at a stored diagram image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub chapter_id: String,
    pub domain_id: String,
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub image_format: String,
    #[serde(default)]
    pub image_url: String,
}

/// Envelope for `GET /all-taxonomies`.
#[derive(Clone, Debug, Deserialize)]
pub struct TaxonomyList {
    pub taxonomies: Vec<Taxonomy>,
}

/// Successful `POST /login` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub session_token: String,
    pub username: String,
}

/// `GET /verify-session` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionCheck {
    pub valid: bool,
    pub username: String,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// `POST /forgot-password` payload. Development builds of the backend also
/// return the reset token so the email step can be skipped locally.
#[derive(Clone, Debug, Deserialize)]
pub struct ResetRequested {
    pub message: String,
    #[serde(default)]
    pub development_token: Option<String>,
}

/// FastAPI-style error body.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
