#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use std::collections::BTreeMap;

use crate::net::types::{Chapter, DomainWord, Section, Taxonomy};
use crate::state::editor::{Draft, Record};
use crate::util::text::{join_paragraphs, split_paragraphs};

// =============================================================
// Record identity and search fields
// =============================================================

impl Record for Chapter {
    fn key(&self) -> String {
        self.chapter_id.clone()
    }

    fn matches(&self, needle: &str) -> bool {
        self.chapter_id.to_lowercase().contains(needle)
            || self
                .full_summary
                .iter()
                .any(|sentence| sentence.to_lowercase().contains(needle))
    }
}

impl Record for Section {
    fn key(&self) -> String {
        format!("{}/{}", self.chapter_id, self.section_id)
    }

    fn matches(&self, needle: &str) -> bool {
        self.chapter_id.to_lowercase().contains(needle)
            || self.section_id.to_lowercase().contains(needle)
            || self.section_summary.to_lowercase().contains(needle)
    }
}

impl Record for DomainWord {
    fn key(&self) -> String {
        format!("{}/{}", self.chapter_id, self.domain_id)
    }

    fn matches(&self, needle: &str) -> bool {
        self.chapter_id.to_lowercase().contains(needle)
            || self.domain_id.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.definition.to_lowercase().contains(needle)
    }
}

impl Record for Taxonomy {
    fn key(&self) -> String {
        format!("{}/{}", self.chapter_id, self.domain_id)
    }

    fn matches(&self, needle: &str) -> bool {
        self.chapter_id.to_lowercase().contains(needle)
            || self.domain_id.to_lowercase().contains(needle)
            || self.domain_name.to_lowercase().contains(needle)
            || self.image_format.to_lowercase().contains(needle)
    }
}

// =============================================================
// Per-view drafts
// =============================================================

/// Full-summary editing: the sentence list as one blank-line-separated block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterDraft {
    pub text: String,
}

impl Draft for ChapterDraft {
    type Record = Chapter;

    fn from_record(record: &Chapter) -> Self {
        Self {
            text: join_paragraphs(&record.full_summary),
        }
    }

    fn apply_to(&self, record: &mut Chapter) {
        record.full_summary = split_paragraphs(&self.text);
    }
}

/// Section-summary editing: the single summary string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionDraft {
    pub text: String,
}

impl Draft for SectionDraft {
    type Record = Section;

    fn from_record(record: &Section) -> Self {
        Self {
            text: record.section_summary.clone(),
        }
    }

    fn apply_to(&self, record: &mut Section) {
        record.section_summary = self.text.clone();
    }
}

/// Domain-id rename. Rewrites the record key, so the editor follows the
/// selection across the commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainIdDraft {
    pub domain_id: String,
}

impl Draft for DomainIdDraft {
    type Record = DomainWord;

    fn from_record(record: &DomainWord) -> Self {
        Self {
            domain_id: record.domain_id.clone(),
        }
    }

    fn apply_to(&self, record: &mut DomainWord) {
        record.domain_id = self.domain_id.clone();
    }
}

/// Definition editing: the definition text plus the values of the existing
/// translation languages. The language set itself is fixed in this view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionDraft {
    pub definition: String,
    pub translations: BTreeMap<String, String>,
}

impl Draft for DefinitionDraft {
    type Record = DomainWord;

    fn from_record(record: &DomainWord) -> Self {
        Self {
            definition: record.definition.clone(),
            translations: record.translations.clone(),
        }
    }

    fn apply_to(&self, record: &mut DomainWord) {
        record.definition = self.definition.clone();
        record.translations = self.translations.clone();
    }
}

/// Word-structure editing: the whole metadata map, fields can be added,
/// changed, and removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureDraft {
    pub word_structure: BTreeMap<String, String>,
}

impl Draft for StructureDraft {
    type Record = DomainWord;

    fn from_record(record: &DomainWord) -> Self {
        Self {
            word_structure: record.word_structure.clone(),
        }
    }

    fn apply_to(&self, record: &mut DomainWord) {
        record.word_structure = self.word_structure.clone();
    }
}

/// Taxonomy editing: display name and stored image format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxonomyDraft {
    pub domain_name: String,
    pub image_format: String,
}

impl Draft for TaxonomyDraft {
    type Record = Taxonomy;

    fn from_record(record: &Taxonomy) -> Self {
        Self {
            domain_name: record.domain_name.clone(),
            image_format: record.image_format.clone(),
        }
    }

    fn apply_to(&self, record: &mut Taxonomy) {
        record.domain_name = self.domain_name.clone();
        record.image_format = self.image_format.clone();
    }
}
