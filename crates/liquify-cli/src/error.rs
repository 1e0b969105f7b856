use thiserror::Error;

/// Errors with dedicated handling in the adapter pipeline.
///
/// Everything else (I/O, child processes, invalid route patterns)
/// propagates as an `anyhow` context chain and aborts the run.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A textual asset reference could not be matched to any scanned built
    /// file. Signals a build-configuration inconsistency, so the run fails
    /// rather than writing a template with a dangling reference.
    #[error("no built asset matches reference '{0}'")]
    UnknownAsset(String),
}
