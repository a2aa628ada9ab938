//! The four-stage diagnostics pipeline.
//!
//! Stages run strictly top-to-bottom: timestamp, platform, repository,
//! and (when enabled) the extended inspector. Probe failures degrade to
//! placeholder lines; the pipeline itself cannot fail.

use crate::context::RunContext;
use crate::report::{Report, Section};
use crate::{extended, platform, repo, timestamp};
use chrono::{DateTime, Utc};
use tracing::info;

/// Report header for the timestamp stage.
pub const TIMESTAMP_HEADER: &str = "⏰ Timestamp";

/// Outcome of one diagnostics run.
#[derive(Debug, Clone)]
pub struct DiagnosticsRun {
    /// Formatted run timestamp, also published as a named output.
    pub timestamp: String,

    /// The assembled report.
    pub report: Report,
}

/// Run all stages against the current instant.
pub fn collect(ctx: &RunContext) -> DiagnosticsRun {
    collect_at(ctx, Utc::now())
}

/// Run all stages against an explicit instant.
pub fn collect_at(ctx: &RunContext, at: DateTime<Utc>) -> DiagnosticsRun {
    let mut report = Report::new();

    let stamp = timestamp::format_timestamp(at);
    let mut section = Section::new(TIMESTAMP_HEADER);
    section.kv("Timestamp", &stamp);
    report.push(section);
    info!(timestamp = %stamp, "diagnostics run started");

    report.push(platform::inspect(ctx));

    repo::configure_safe_directory(ctx);
    report.push(repo::section(&repo::gather(ctx)));

    if ctx.extended_info {
        report.push(extended::inspect(ctx));
    }

    DiagnosticsRun {
        timestamp: stamp,
        report,
    }
}
