//! Run context captured once at startup.
//!
//! All ambient environment reads happen here, exactly once. Every
//! inspector receives the resulting [`RunContext`] by reference, which
//! keeps the components testable with injected fixtures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Operating-system family of the CI runner.
///
/// Parsed once from the runner-provided family name; inspectors dispatch
/// on this enum instead of re-reading ambient state at each branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerOs {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl RunnerOs {
    /// Parse the runner-provided OS family name (e.g. `Linux`, `macOS`,
    /// `Windows`). Anything unrecognised maps to [`RunnerOs::Other`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => RunnerOs::Linux,
            "macos" => RunnerOs::MacOs,
            "windows" => RunnerOs::Windows,
            _ => RunnerOs::Other,
        }
    }

    /// Display name for the report.
    pub fn name(&self) -> &'static str {
        match self {
            RunnerOs::Linux => "Linux",
            RunnerOs::MacOs => "macOS",
            RunnerOs::Windows => "Windows",
            RunnerOs::Other => "unknown",
        }
    }
}

/// Immutable configuration for one diagnostics run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// OS family reported by the runner.
    pub runner_os: RunnerOs,

    /// Filesystem root of the checked-out repository, when known.
    pub workspace: Option<PathBuf>,

    /// Repository identifier (e.g. `owner/name`).
    pub repository: Option<String>,

    /// Ref name checked out for this run.
    pub ref_name: Option<String>,

    /// Commit SHA checked out for this run.
    pub sha: Option<String>,

    /// JVM installation root, when one is provisioned.
    pub java_home: Option<PathBuf>,

    /// Sink file for named step outputs.
    pub output_path: Option<PathBuf>,

    /// Whether the extended inspector is enabled.
    pub extended_info: bool,
}

impl RunContext {
    /// Build the context from the process environment.
    pub fn from_env(extended_info: bool) -> Self {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars, extended_info)
    }

    /// Build the context from an explicit variable map.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_vars(vars: &HashMap<String, String>, extended_info: bool) -> Self {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        RunContext {
            runner_os: get("RUNNER_OS")
                .map(|v| RunnerOs::parse(&v))
                .unwrap_or(RunnerOs::Other),
            workspace: get("GITHUB_WORKSPACE").map(PathBuf::from),
            repository: get("GITHUB_REPOSITORY"),
            ref_name: get("GITHUB_REF_NAME"),
            sha: get("GITHUB_SHA"),
            java_home: get("JAVA_HOME").map(PathBuf::from),
            output_path: get("GITHUB_OUTPUT").map(PathBuf::from),
            extended_info,
        }
    }
}
