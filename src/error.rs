//! Structured error types for the maquette engine.
//!
//! The layout core itself is infallible (out-of-range geometry is clamped,
//! oversized items degrade instead of failing), so the only real error
//! sources are JSON parsing and the item store.

use thiserror::Error;

/// The unified error type returned by all fallible maquette API functions.
#[derive(Debug, Error)]
pub enum MaquetteError {
    /// JSON input failed to parse as a valid layout document.
    #[error("failed to parse document: {source}{}", format_hint(.hint))]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// The item store could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] std::io::Error),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  hint: {hint}")
    }
}

impl From<serde_json::Error> for MaquetteError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the layout document schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input — is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        MaquetteError::Parse { source: e, hint }
    }
}
