//! Static prompt catalog and slide-title catalog.
//!
//! Both are loaded once at startup and never change. A catalog that
//! fails to load is a degraded condition, not a fatal one: the viewer
//! keeps navigating and taking notes without any prompts.

use crate::{CatalogEntry, Error, Result};

/// Number of slides in the built-in deck.
pub const TOTAL_SLIDES: u32 = 20;

/// Display titles of the Economics of AI deck, in slide order.
const DECK_TITLES: [&str; TOTAL_SLIDES as usize] = [
    "Economics of AI",
    "The Central Tension",
    "The Pipeline: AI Economics",
    "UPSTREAM: Cost Structure",
    "Silicon & Infrastructure",
    "Data: The New Constraint",
    "Training vs. Inference",
    "Energy & Talent",
    "MIDSTREAM: Market Structure",
    "The Two-Tier Oligopoly",
    "Why Oligopoly Persists",
    "Open Source: Competitive Force",
    "Supply Chains & Geopolitics",
    "DOWNSTREAM: Markets & Impacts",
    "Pricing & Business Models",
    "The Agentic Economy",
    "Labor Markets & Productivity",
    "Who Captures the Gains?",
    "The Spine: 12 Takeaways",
    "Thank You",
];

/// The static per-slide prompt catalog.
///
/// Entries keep their source order. At most one master entry is honored
/// per slide; extra masters are kept in the entry list but never
/// returned by [`PromptCatalog::master`].
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    entries: Vec<CatalogEntry>,
}

impl PromptCatalog {
    /// Build a catalog from parsed entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let catalog = Self { entries };
        catalog.warn_on_duplicate_masters();
        catalog
    }

    /// A catalog with no entries, for degraded operation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON source (an array of entries).
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| Error::CatalogLoad(e.to_string()))?;
        Ok(Self::new(entries))
    }

    /// Number of entries across all slides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All entries for one slide, in source order.
    pub fn for_slide(&self, slide: u32) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.slide == slide)
    }

    /// The slide's master prompt, if it has one.
    pub fn master(&self, slide: u32) -> Option<&CatalogEntry> {
        self.for_slide(slide).find(|e| e.is_master())
    }

    /// The slide's specialized prompts, in source order.
    pub fn specialized(&self, slide: u32) -> Vec<&CatalogEntry> {
        self.for_slide(slide).filter(|e| !e.is_master()).collect()
    }

    fn warn_on_duplicate_masters(&self) {
        let mut seen: Vec<u32> = Vec::new();
        for entry in self.entries.iter().filter(|e| e.is_master()) {
            if seen.contains(&entry.slide) {
                log::warn!(
                    "slide {} has more than one master prompt; keeping the first",
                    entry.slide
                );
            } else {
                seen.push(entry.slide);
            }
        }
    }
}

/// Mapping from 1-based slide number to display title.
#[derive(Debug, Clone)]
pub struct SlideTitles {
    titles: Vec<String>,
}

impl Default for SlideTitles {
    /// The built-in Economics of AI deck.
    fn default() -> Self {
        Self {
            titles: DECK_TITLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl SlideTitles {
    /// Build a title catalog from a caller-supplied list.
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }

    /// Parse a title catalog from a JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let titles: Vec<String> =
            serde_json::from_str(json).map_err(|e| Error::CatalogLoad(e.to_string()))?;
        Ok(Self::new(titles))
    }

    /// Display title for a 1-based slide number. Out-of-range numbers
    /// fall back to a plain "Slide n" so stale session data cannot
    /// break the export.
    pub fn title(&self, slide: u32) -> String {
        slide
            .checked_sub(1)
            .and_then(|idx| self.titles.get(idx as usize))
            .cloned()
            .unwrap_or_else(|| format!("Slide {}", slide))
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
