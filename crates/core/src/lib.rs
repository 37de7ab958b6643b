//! Core domain logic for the Economics of AI interactive learning
//! resource: prompt-template rendering, prompt collection, per-slide
//! notes, and Markdown learning-pack export.
//!
//! The UI shell (slide images, hotspot markers, clipboard, downloads)
//! lives outside this crate; it forwards user actions to [`Session`]
//! and renders whatever state it reads back. Persistence is injected
//! through [`KeyValueStore`], so everything here runs unchanged against
//! browser storage, a test HashMap, or files on disk.

pub mod catalog;
pub mod collect;
pub mod error;
pub mod export;
pub mod notes;
pub mod session;
pub mod storage;
pub mod template;
pub mod types;

pub use catalog::{PromptCatalog, SlideTitles, TOTAL_SLIDES};
pub use collect::PromptCollection;
pub use error::{Error, Result};
pub use export::{build_document, export_filename, EXPORT_MIME_TYPE};
pub use notes::SlideNotes;
pub use session::Session;
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{CatalogEntry, CollectedPrompt, Hotspot, IntakeProfile, PromptKind};
