//! Error types for the learning-resource core.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the core. None of these is fatal to the session:
/// every failure degrades to a reduced but usable state.
#[derive(Error, Debug)]
pub enum Error {
    /// The static prompt catalog could not be parsed. Callers continue
    /// with an empty catalog; navigation and notes remain usable.
    #[error("Failed to load prompt catalog: {0}")]
    CatalogLoad(String),

    /// Export was requested with no collected prompts and no notes.
    #[error("Nothing to export: collect prompts or add notes first")]
    NothingToExport,

    /// No intake profile is stored. The caller must send the learner
    /// through the intake form before starting a session.
    #[error("No learner profile found")]
    ProfileMissing,

    /// Persisted session data could not be serialized or parsed.
    #[error("Session storage error: {0}")]
    Store(String),
}
