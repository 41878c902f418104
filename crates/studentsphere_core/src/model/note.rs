//! Personal study notes.

use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

/// Tag attached when a note is created without any.
pub const DEFAULT_NOTE_TAG: &str = "General";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Distinct tag names in insertion order.
    pub tags: Vec<String>,
}

/// User input for a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Trims tag names and drops blanks and exact duplicates, keeping the first
/// occurrence.
pub fn distinct_tags(tags: &[String]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let trimmed = tag.trim();
        if !trimmed.is_empty() && !distinct.iter().any(|seen| seen == trimmed) {
            distinct.push(trimmed.to_string());
        }
    }
    distinct
}

impl Record for Note {
    const COLLECTION_KEY: &'static str = keys::NOTES;
    const COLLECTION_NAME: &'static str = "notes";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::notes()
    }
}

#[cfg(test)]
mod tests {
    use super::distinct_tags;

    #[test]
    fn distinct_tags_trims_and_deduplicates_in_order() {
        let tags = vec![
            " DSP ".to_string(),
            "Electronics".to_string(),
            "DSP".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(
            distinct_tags(&tags),
            vec!["DSP".to_string(), "Electronics".to_string()]
        );
    }
}
