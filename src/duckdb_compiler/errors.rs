use thiserror::Error;

/// Failure modes of the DuckDB dialect compiler.
///
/// All of these are raised synchronously and propagate unchanged; nothing
/// is retried or downgraded to a default translation. The first four mean
/// "this engine cannot express the request"; `NotImplemented` means "no
/// translation rule covers this kind" and signals a coverage bug rather
/// than an engine limitation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuckDbCompileError {
    #[error("DuckDB doesn't support {unit} interval resolutions")]
    UnsupportedIntervalResolution { unit: &'static str },

    #[error("'{unit}' unit is not supported for epoch timestamp conversion")]
    UnsupportedTimestampUnit { unit: &'static str },

    #[error("DuckDB only implements the population correlation coefficient")]
    UnsupportedCorrelationMode,

    #[error("no available hashing function for '{name}'")]
    UnsupportedHashFunction { name: String },

    #[error("operation '{name}' has no DuckDB translation rule")]
    NotImplemented { name: &'static str },
}
