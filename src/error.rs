use thiserror::Error;

/// Failure taxonomy for a run. Every variant is fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum SetError {
    /// Invalid or missing configuration: bad mode, malformed tag, or a
    /// version tag that does not parse.
    #[error("{0}")]
    Config(String),

    /// An external command could not be run, exited non-zero, or produced
    /// output we cannot use.
    #[error("{0}")]
    Command(String),

    /// Manifest read or write failed.
    #[error("{0}")]
    Io(String),
}
