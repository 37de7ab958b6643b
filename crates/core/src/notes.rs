//! Per-slide free-text notes.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse mapping from slide number to the learner's note for it.
///
/// A note whose text trims to empty is removed on the spot, so the map
/// only ever holds non-empty notes. At most one note per slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideNotes {
    notes: BTreeMap<u32, String>,
}

impl SlideNotes {
    /// An empty note map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the note map from its persisted JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Store(e.to_string()))
    }

    /// Serialize the note map for persistence.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Store(e.to_string()))
    }

    /// Set the note for a slide. The text is trimmed; an empty result
    /// deletes any existing note instead of storing it.
    pub fn set(&mut self, slide: u32, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.notes.remove(&slide);
        } else {
            self.notes.insert(slide, trimmed.to_string());
        }
    }

    /// The note for a slide, or the empty string when there is none.
    pub fn get(&self, slide: u32) -> &str {
        self.notes.get(&slide).map(String::as_str).unwrap_or("")
    }

    /// Slides that currently have a note, ascending.
    pub fn slides(&self) -> impl Iterator<Item = u32> + '_ {
        self.notes.keys().copied()
    }

    /// All (slide, note) pairs, ascending by slide.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.notes.iter().map(|(slide, text)| (*slide, text.as_str()))
    }

    /// Number of slides with a note.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether no slide has a note.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut notes = SlideNotes::new();
        notes.set(3, "Ask about data center siting.");
        assert_eq!(notes.get(3), "Ask about data center siting.");
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_get_missing_returns_empty() {
        let notes = SlideNotes::new();
        assert_eq!(notes.get(7), "");
    }

    #[test]
    fn test_set_trims_stored_text() {
        let mut notes = SlideNotes::new();
        notes.set(2, "  padded note  ");
        assert_eq!(notes.get(2), "padded note");
    }

    #[test]
    fn test_whitespace_only_removes_entry() {
        let mut notes = SlideNotes::new();
        notes.set(9, "keep this");
        notes.set(9, "   ");

        assert_eq!(notes.get(9), "");
        assert!(notes.is_empty());
        assert_eq!(notes.slides().count(), 0);
    }

    #[test]
    fn test_set_overwrites() {
        let mut notes = SlideNotes::new();
        notes.set(4, "first");
        notes.set(4, "second");
        assert_eq!(notes.get(4), "second");
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_slides_ascending() {
        let mut notes = SlideNotes::new();
        notes.set(9, "nine");
        notes.set(2, "two");
        notes.set(5, "five");
        let slides: Vec<u32> = notes.slides().collect();
        assert_eq!(slides, vec![2, 5, 9]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut notes = SlideNotes::new();
        notes.set(3, "note three");
        notes.set(11, "note eleven");

        let json = notes.to_json().unwrap();
        let restored = SlideNotes::from_json(&json).unwrap();
        assert_eq!(restored.get(3), "note three");
        assert_eq!(restored.get(11), "note eleven");
        assert_eq!(restored.len(), 2);
    }
}
