//! Error taxonomy for envdiag.
//!
//! Probe-level failures never appear here: a missing tool or a non-zero
//! exit degrades to [`crate::probe::ProbeOutcome::Absent`] at the call
//! site. Only genuinely unexpected conditions are fatal, and those
//! propagate to the binary's top-level boundary.

/// Errors produced by a diagnostics run.
#[derive(Debug, thiserror::Error)]
pub enum EnvdiagError {
    #[error("named output {name} could not be written to {path}: {source}")]
    NamedOutput {
        name: String,
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for diagnostics operations.
pub type Result<T> = std::result::Result<T, EnvdiagError>;
