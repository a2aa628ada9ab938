//! envdiag Core Library
//!
//! Environment diagnostics collection for CI runners: a sequential
//! pipeline that captures a run timestamp, platform and kernel facts,
//! git repository metadata, and optional extended info (Java runtime,
//! workspace tree), assembled into a grouped human-readable report.

pub mod context;
pub mod error;
pub mod exec;
pub mod extended;
pub mod outputs;
pub mod pipeline;
pub mod platform;
pub mod probe;
pub mod repo;
pub mod report;
pub mod telemetry;
pub mod timestamp;

pub use context::{RunContext, RunnerOs};
pub use error::{EnvdiagError, Result};
pub use exec::CommandResult;
pub use pipeline::{collect, collect_at, DiagnosticsRun};
pub use probe::ProbeOutcome;
pub use repo::RepoFacts;
pub use report::{Report, Section};
pub use telemetry::init_tracing;

/// envdiag version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
