//! Domain types for the prompt catalog and the learner's session data.

use serde::{Deserialize, Serialize};

/// Learner profile captured once by the intake form.
///
/// Written by the external intake page; the core only reads it, and it
/// does not change during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeProfile {
    /// Learner's name, if they chose to give one.
    #[serde(default)]
    pub name: Option<String>,

    /// Role or profession, e.g. "urban planner".
    pub profession: String,

    /// What the learner said they are curious about.
    pub curiosity: String,
}

impl IntakeProfile {
    /// Create a profile with all three fields.
    pub fn new(
        name: impl Into<String>,
        profession: impl Into<String>,
        curiosity: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            profession: profession.into(),
            curiosity: curiosity.into(),
        }
    }

    /// Create a profile without a name.
    pub fn anonymous(profession: impl Into<String>, curiosity: impl Into<String>) -> Self {
        Self {
            name: None,
            profession: profession.into(),
            curiosity: curiosity.into(),
        }
    }

    /// The learner's name, or `None` when it is absent or blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Whether a catalog entry is the slide's master prompt or one of its
/// specialized hotspots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PromptKind {
    /// The single slide-wide prompt, shown as the star marker.
    Master,
    /// A prompt anchored to one region of the slide.
    Specialized,
}

impl From<String> for PromptKind {
    /// Anything but an exact "master" reads as specialized, so a
    /// catalog with unanticipated type strings still loads.
    fn from(kind: String) -> Self {
        if kind == "master" {
            Self::Master
        } else {
            Self::Specialized
        }
    }
}

/// Hotspot geometry in percent of the slide image. The core carries this
/// through for the UI layer but never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// One entry of the static prompt catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// 1-based slide number this prompt belongs to.
    pub slide: u32,

    /// Master or specialized.
    #[serde(rename = "type")]
    pub kind: PromptKind,

    /// Short label shown on the hotspot and in the export.
    pub label: String,

    /// Prompt template text; may contain `{{name}}`, `{{profession}}`,
    /// and `{{curiosity}}` placeholders.
    pub prompt: String,

    /// Marker geometry for specialized prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Hotspot>,
}

impl CatalogEntry {
    /// Whether this is the slide's master prompt.
    pub fn is_master(&self) -> bool {
        self.kind == PromptKind::Master
    }
}

/// A prompt the learner has clicked, with its template fully rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedPrompt {
    /// Slide the prompt was collected from.
    pub slide: u32,

    /// Display title of that slide at collection time.
    pub title: String,

    /// Catalog label of the prompt.
    pub label: String,

    /// Rendered prompt text; no placeholders remain.
    pub prompt: String,
}
