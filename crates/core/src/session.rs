//! Application state for one learner's browsing session.
//!
//! Owns the navigation pointer, the collected prompts, and the notes,
//! and writes each back to the injected store the moment it changes.
//! The UI layer stays a thin shell: it forwards clicks and keypresses
//! here and re-reads state afterwards.

use crate::storage::{self, KeyValueStore};
use crate::{
    export, template, CatalogEntry, Error, IntakeProfile, PromptCatalog, PromptCollection,
    Result, SlideNotes, SlideTitles,
};
use chrono::NaiveDate;

/// One learner's session over the injected store.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    catalog: PromptCatalog,
    titles: SlideTitles,
    profile: IntakeProfile,
    collected: PromptCollection,
    notes: SlideNotes,
    current_slide: u32,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore a session from the store.
    ///
    /// A missing or unreadable intake profile is `ProfileMissing`: the
    /// caller sends the learner to the intake form. Session-scoped data
    /// is best effort — an unreadable collected list or note map is
    /// discarded with a warning, and a stored slide pointer outside the
    /// deck is clamped back in.
    pub fn load(store: S, catalog: PromptCatalog, titles: SlideTitles) -> Result<Self> {
        let profile: IntakeProfile = match store.get(storage::INTAKE_KEY) {
            Some(raw) => serde_json::from_str(&raw).map_err(|_| Error::ProfileMissing)?,
            None => return Err(Error::ProfileMissing),
        };

        let collected = match store.get(storage::COLLECTED_KEY) {
            Some(raw) => PromptCollection::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable collected prompts: {}", e);
                PromptCollection::new()
            }),
            None => PromptCollection::new(),
        };

        let notes = match store.get(storage::NOTES_KEY) {
            Some(raw) => SlideNotes::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable notes: {}", e);
                SlideNotes::new()
            }),
            None => SlideNotes::new(),
        };

        let total = titles.len() as u32;
        let current_slide = store
            .get(storage::CURRENT_SLIDE_KEY)
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|n| (1..=total).contains(n))
            .unwrap_or(1);

        Ok(Self {
            store,
            catalog,
            titles,
            profile,
            collected,
            notes,
            current_slide,
        })
    }

    pub fn profile(&self) -> &IntakeProfile {
        &self.profile
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    pub fn titles(&self) -> &SlideTitles {
        &self.titles
    }

    pub fn collected(&self) -> &PromptCollection {
        &self.collected
    }

    pub fn notes(&self) -> &SlideNotes {
        &self.notes
    }

    /// Number of prompts collected so far; the header badge count.
    pub fn prompt_count(&self) -> usize {
        self.collected.len()
    }

    pub fn total_slides(&self) -> u32 {
        self.titles.len() as u32
    }

    /// 1-based number of the slide on display.
    pub fn current_slide(&self) -> u32 {
        self.current_slide
    }

    /// Display title of the slide on display.
    pub fn current_title(&self) -> String {
        self.titles.title(self.current_slide)
    }

    /// Jump to a slide. Out-of-range numbers are ignored; a valid jump
    /// persists the pointer immediately.
    pub fn go_to_slide(&mut self, slide: u32) {
        if slide < 1 || slide > self.total_slides() {
            return;
        }
        self.current_slide = slide;
        self.store
            .set(storage::CURRENT_SLIDE_KEY, &slide.to_string());
    }

    /// Advance one slide, stopping at the last one.
    pub fn next_slide(&mut self) {
        self.go_to_slide(self.current_slide + 1);
    }

    /// Go back one slide, stopping at the first one.
    pub fn prev_slide(&mut self) {
        if self.current_slide > 1 {
            self.go_to_slide(self.current_slide - 1);
        }
    }

    /// Render a catalog entry against the learner profile and add it to
    /// the collection, persisting the list when it grew. Returns whether
    /// the prompt was newly collected; a repeat click changes nothing.
    pub fn collect_entry(&mut self, entry: &CatalogEntry) -> Result<bool> {
        let rendered = template::render(&entry.prompt, &self.profile);
        let title = self.titles.title(entry.slide);
        let added = self
            .collected
            .collect(entry.slide, title, entry.label.clone(), rendered);
        if added {
            self.store
                .set(storage::COLLECTED_KEY, &self.collected.to_json()?);
        }
        Ok(added)
    }

    /// Set the note for the slide on display, persisting on every call.
    pub fn set_note(&mut self, text: &str) -> Result<()> {
        self.notes.set(self.current_slide, text);
        self.store.set(storage::NOTES_KEY, &self.notes.to_json()?);
        Ok(())
    }

    /// The note for the slide on display, or the empty string.
    pub fn note(&self) -> &str {
        self.notes.get(self.current_slide)
    }

    /// Build the learning-pack document for the given date.
    pub fn export(&self, date: NaiveDate) -> Result<String> {
        export::build_document(&self.profile, &self.collected, &self.notes, &self.titles, date)
    }

    /// File name for the export artifact.
    pub fn export_filename(&self) -> String {
        export::export_filename(&self.profile)
    }

    /// Hand the store back, e.g. to snapshot it for the shell.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
