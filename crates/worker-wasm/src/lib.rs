//! WASM-compatible wrapper for the learning-resource core.
//!
//! Exposes the session (navigation, prompt collection, notes, export)
//! to browser JavaScript. The JS shell owns the real sessionStorage and
//! localStorage: it hands snapshots in when the page loads and persists
//! the `collected_json`/`notes_json`/`current_slide` values back after
//! each state change.

use chrono::NaiveDate;
use econai_core::{
    template, Hotspot, MemoryStore, PromptCatalog, Session, SlideTitles, EXPORT_MIME_TYPE,
};
use econai_core::storage::{self, KeyValueStore};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// One prompt of the current slide, rendered for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptView {
    pub slide: u32,
    pub label: String,
    /// Rendered text; no placeholders remain.
    pub prompt: String,
    /// Marker geometry for specialized prompts, in percent.
    pub hotspot: Option<Hotspot>,
}

/// The current slide's prompts: the star marker plus numbered hotspots.
#[derive(Debug, Serialize, Deserialize)]
pub struct SlidePromptsView {
    pub master: Option<PromptView>,
    pub specialized: Vec<PromptView>,
}

/// Everything the shell needs to trigger the download.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportPayload {
    pub filename: String,
    pub mime_type: String,
    pub markdown: String,
}

/// A learner session held in WASM memory for the lifetime of the page.
#[wasm_bindgen]
pub struct LearnerSession {
    inner: Session<MemoryStore>,
    catalog_warning: Option<String>,
}

#[wasm_bindgen]
impl LearnerSession {
    /// Build a session from storage snapshots captured by the JS shell.
    ///
    /// `profile_json` is required — without it the shell must redirect
    /// to the intake form. A missing or malformed catalog degrades to a
    /// prompt-less deck; `catalog_warning` carries the reason.
    #[wasm_bindgen(constructor)]
    pub fn new(
        profile_json: &str,
        catalog_json: Option<String>,
        collected_json: Option<String>,
        notes_json: Option<String>,
        current_slide: Option<u32>,
    ) -> Result<LearnerSession, JsValue> {
        let mut store = MemoryStore::new();
        store.set(storage::INTAKE_KEY, profile_json);
        if let Some(raw) = collected_json {
            store.set(storage::COLLECTED_KEY, &raw);
        }
        if let Some(raw) = notes_json {
            store.set(storage::NOTES_KEY, &raw);
        }
        if let Some(slide) = current_slide {
            store.set(storage::CURRENT_SLIDE_KEY, &slide.to_string());
        }

        let mut catalog_warning = None;
        let catalog = match catalog_json {
            Some(raw) => PromptCatalog::from_json(&raw).unwrap_or_else(|e| {
                catalog_warning = Some(e.to_string());
                PromptCatalog::empty()
            }),
            None => PromptCatalog::empty(),
        };

        let inner = Session::load(store, catalog, SlideTitles::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner,
            catalog_warning,
        })
    }

    /// Why the catalog is empty, if loading it failed.
    pub fn catalog_warning(&self) -> Option<String> {
        self.catalog_warning.clone()
    }

    pub fn current_slide(&self) -> u32 {
        self.inner.current_slide()
    }

    pub fn total_slides(&self) -> u32 {
        self.inner.total_slides()
    }

    pub fn current_title(&self) -> String {
        self.inner.current_title()
    }

    pub fn prompt_count(&self) -> usize {
        self.inner.prompt_count()
    }

    pub fn go_to_slide(&mut self, slide: u32) {
        self.inner.go_to_slide(slide);
    }

    pub fn next_slide(&mut self) {
        self.inner.next_slide();
    }

    pub fn prev_slide(&mut self) {
        self.inner.prev_slide();
    }

    /// Rendered prompts for the slide on display.
    pub fn slide_prompts(&self) -> Result<JsValue, JsValue> {
        let view = slide_prompts_view(&self.inner, self.inner.current_slide());
        serde_wasm_bindgen::to_value(&view)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Collect the prompt with this label on the current slide. Returns
    /// whether it was newly collected; an unknown label is `false`.
    pub fn collect(&mut self, label: &str) -> Result<bool, JsValue> {
        let entry = self
            .inner
            .catalog()
            .for_slide(self.inner.current_slide())
            .find(|e| e.label == label)
            .cloned();
        match entry {
            Some(entry) => self
                .inner
                .collect_entry(&entry)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(false),
        }
    }

    /// The note for the slide on display.
    pub fn note(&self) -> String {
        self.inner.note().to_string()
    }

    pub fn set_note(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner
            .set_note(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Collected prompts as JSON, for the shell to persist.
    pub fn collected_json(&self) -> Result<String, JsValue> {
        self.inner
            .collected()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Notes as JSON, for the shell to persist.
    pub fn notes_json(&self) -> Result<String, JsValue> {
        self.inner
            .notes()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Build the learning pack dated today. Throws the
    /// nothing-to-export message when both stores are empty, for the
    /// shell to surface as a toast.
    pub fn export(&self) -> Result<JsValue, JsValue> {
        let payload =
            export_payload(&self.inner, today()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&payload)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

/// Render one slide's prompts against the learner profile.
fn slide_prompts_view(session: &Session<MemoryStore>, slide: u32) -> SlidePromptsView {
    let view = |entry: &econai_core::CatalogEntry| PromptView {
        slide: entry.slide,
        label: entry.label.clone(),
        prompt: template::render(&entry.prompt, session.profile()),
        hotspot: entry.hotspot,
    };

    SlidePromptsView {
        master: session.catalog().master(slide).map(view),
        specialized: session
            .catalog()
            .specialized(slide)
            .into_iter()
            .map(view)
            .collect(),
    }
}

/// Assemble the download payload for a given date.
fn export_payload(
    session: &Session<MemoryStore>,
    date: NaiveDate,
) -> econai_core::Result<ExportPayload> {
    Ok(ExportPayload {
        filename: session.export_filename(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        markdown: session.export(date)?,
    })
}

/// Local calendar date from the JS clock.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}
