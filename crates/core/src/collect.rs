//! The ordered, de-duplicated list of prompts the learner has clicked.

use crate::{CollectedPrompt, Error, Result};
use serde::{Deserialize, Serialize};

/// Prompts collected during a session, in first-collection order.
///
/// Append-only: an entry is never mutated or removed, and a second
/// click on the same (slide, label) pair changes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptCollection {
    entries: Vec<CollectedPrompt>,
}

impl PromptCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the collection from its persisted JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Store(e.to_string()))
    }

    /// Serialize the collection for persistence.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Store(e.to_string()))
    }

    /// Record a clicked prompt. Returns `true` when a new entry was
    /// appended, `false` when the (slide, label) pair was already
    /// collected. An empty label is a valid label.
    pub fn collect(
        &mut self,
        slide: u32,
        title: impl Into<String>,
        label: impl Into<String>,
        prompt: impl Into<String>,
    ) -> bool {
        let label = label.into();
        if self.contains(slide, &label) {
            return false;
        }
        self.entries.push(CollectedPrompt {
            slide,
            title: title.into(),
            label,
            prompt: prompt.into(),
        });
        true
    }

    /// Whether a (slide, label) pair has already been collected.
    pub fn contains(&self, slide: u32, label: &str) -> bool {
        self.entries
            .iter()
            .any(|p| p.slide == slide && p.label == label)
    }

    /// Number of collected prompts; the count shown in the header badge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-collection order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectedPrompt> {
        self.entries.iter()
    }
}
