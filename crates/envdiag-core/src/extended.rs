//! Extended diagnostics: Java runtime and workspace tree.
//!
//! Both probes run only when the run context enables extended info, and
//! both attempt execution on every OS family.

use crate::context::{RunContext, RunnerOs};
use crate::exec::{self, CommandResult};
use crate::probe::ProbeOutcome;
use crate::report::Section;
use std::path::Path;
use tracing::debug;

/// Report header for this inspector.
pub const HEADER: &str = "🔍 Extended Information";

/// Directory names excluded from the tree listing.
const TREE_EXCLUDES: &[&str] = &[".git", ".svn", "node_modules", "target", "build", ".gradle"];

/// Depth limit for the tree listing.
const TREE_DEPTH: &str = "3";

/// Collect the extended section for the report.
pub fn inspect(ctx: &RunContext) -> Section {
    let mut section = Section::new(HEADER);

    match java_version(ctx) {
        ProbeOutcome::Found(banner) => {
            section.line("Java:");
            section.indented(&banner);
        }
        ProbeOutcome::Absent => section.kv("Java", "not found"),
    }
    if let Some(home) = &ctx.java_home {
        section.kv("Java home", &home.display().to_string());
    }

    match directory_tree(ctx) {
        ProbeOutcome::Found(listing) => {
            section.line(format!("Workspace tree ({TREE_DEPTH} levels):"));
            section.indented(&listing);
        }
        ProbeOutcome::Absent => {
            debug!("no usable directory tree tool on this runner");
            section.line("Directory tree tool unavailable");
        }
    }

    section
}

/// Probe the Java runtime version.
///
/// JVMs print the version banner to stderr on success, so stderr is
/// preferred when both streams carry text. A zero exit with nothing on
/// either stream still counts as not found.
pub fn java_version(ctx: &RunContext) -> ProbeOutcome {
    let program = match &ctx.java_home {
        Some(home) => home.join("bin").join("java").display().to_string(),
        None => "java".to_string(),
    };
    interpret_java(exec::run(&program, &["-version"]))
}

fn interpret_java(result: CommandResult) -> ProbeOutcome {
    if !result.success() {
        return ProbeOutcome::Absent;
    }
    if !result.stderr.is_empty() {
        return ProbeOutcome::Found(result.stderr);
    }
    ProbeOutcome::from_text(&result.stdout)
}

/// Render the workspace tree, three levels deep, hidden entries included.
///
/// Noisy directories (VCS metadata, build caches, dependency trees) are
/// excluded. On a Windows runner whose primary tool is absent or failed,
/// the native tree command is tried once; no manual recursive listing is
/// ever attempted.
pub fn directory_tree(ctx: &RunContext) -> ProbeOutcome {
    let dir = ctx.workspace.as_deref();

    let primary = run_tree(dir);
    if primary.success() {
        return ProbeOutcome::from_text(&primary.stdout);
    }

    if needs_windows_fallback(ctx.runner_os, &primary) {
        let fallback = exec::run_in("cmd", &["/C", "tree", "/A", "/F"], dir);
        if fallback.success() {
            return ProbeOutcome::from_text(&fallback.stdout);
        }
    }

    ProbeOutcome::Absent
}

fn run_tree(dir: Option<&Path>) -> CommandResult {
    let excludes = TREE_EXCLUDES.join("|");
    exec::run_in("tree", &["-a", "-L", TREE_DEPTH, "-I", &excludes], dir)
}

/// The native fallback applies only on Windows runners, and only once
/// the primary tool is absent or has exited non-zero.
pub fn needs_windows_fallback(os: RunnerOs, primary: &CommandResult) -> bool {
    os == RunnerOs::Windows && !primary.success()
}
