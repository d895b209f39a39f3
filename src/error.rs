use thiserror::Error;

/// Errors from converting interrupt records to or from JSON.
///
/// The interrupt lifecycle itself (report, read, clear) is total and never
/// fails; only the conversion surface is fallible.
#[derive(Error, Debug)]
pub enum InterruptStateError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
