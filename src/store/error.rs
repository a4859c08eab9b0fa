use thiserror::Error;

/// Failure to read or write the backing file.
///
/// Unparseable content is not an error: it is reported as
/// [`LoadOutcome::Corrupt`](super::json_file::LoadOutcome) and treated as an
/// empty store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize saved games: {0}")]
    Serialize(#[from] serde_json::Error),
}
