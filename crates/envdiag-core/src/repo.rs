//! Repository inspection via the git CLI.
//!
//! Ambient values from the run context win over tool queries; everything
//! else is derived with one isolated `git` invocation per fact, so a
//! failing query degrades that single line and nothing else.

use crate::context::RunContext;
use crate::exec::{self, CommandResult};
use crate::probe::ProbeOutcome;
use crate::report::Section;
use std::path::Path;
use tracing::warn;

/// Report header for this inspector.
pub const HEADER: &str = "📦 Repository Information";

/// Length of the abbreviated commit hash.
const SHORT_SHA_LEN: usize = 7;

/// Git facts for the current workspace.
#[derive(Debug, Clone)]
pub struct RepoFacts {
    pub repository: ProbeOutcome,
    pub branch: ProbeOutcome,
    pub sha: ProbeOutcome,
    pub short_sha: ProbeOutcome,
    pub author: ProbeOutcome,
    pub committed_at: ProbeOutcome,
    pub remote_url: ProbeOutcome,
    pub tags_at_head: ProbeOutcome,
    pub message: ProbeOutcome,
}

/// Register the workspace as a git safe directory.
///
/// CI checkouts are frequently owned by a different user than the step
/// process; without the trust exception every later git query fails.
/// Adding the same entry twice is harmless, so this is safe to repeat
/// across runs. Skipped with a warning when the workspace path is
/// unknown.
pub fn configure_safe_directory(ctx: &RunContext) {
    let Some(workspace) = &ctx.workspace else {
        warn!("workspace path unknown; skipping git safe.directory setup");
        return;
    };

    let path = workspace.display().to_string();
    let result = exec::run(
        "git",
        &["config", "--global", "--add", "safe.directory", &path],
    );
    if !result.success() {
        warn!(stderr = %result.stderr, "could not register git safe.directory");
    }
}

/// Gather repository facts, each probe issued and interpreted in
/// isolation.
pub fn gather(ctx: &RunContext) -> RepoFacts {
    let dir = ctx.workspace.as_deref();

    let repository = ambient(ctx.repository.as_deref());
    let branch = ambient_or_query(
        ctx.ref_name.as_deref(),
        dir,
        &["rev-parse", "--abbrev-ref", "HEAD"],
    );
    let sha = ambient_or_query(ctx.sha.as_deref(), dir, &["rev-parse", "HEAD"]);
    let short_sha = sha
        .clone()
        .map(|full| full[..SHORT_SHA_LEN.min(full.len())].to_string());
    let author = query(dir, &["log", "-1", "--format=%an <%ae>"]);
    let committed_at = query(dir, &["log", "-1", "--format=%ci"]);
    let remote_url = query(dir, &["remote", "get-url", "origin"]);
    let tags_at_head = query(dir, &["tag", "--points-at", "HEAD"]).map(|tags| {
        tags.lines()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    });
    let message = query(dir, &["log", "-1", "--format=%B"]);

    RepoFacts {
        repository,
        branch,
        sha,
        short_sha,
        author,
        committed_at,
        remote_url,
        tags_at_head,
        message,
    }
}

/// Render the gathered facts as a report section.
pub fn section(facts: &RepoFacts) -> Section {
    let mut section = Section::new(HEADER);
    section.kv("Repository", facts.repository.or_na());
    section.kv("Branch", facts.branch.or_na());
    section.kv("Commit", facts.sha.or_na());
    section.kv("Short commit", facts.short_sha.or_na());
    section.kv("Author", facts.author.or_na());
    section.kv("Date", facts.committed_at.or_na());
    section.kv("Remote", facts.remote_url.or_na());
    section.kv("Tags at HEAD", facts.tags_at_head.or_na());

    match &facts.message {
        ProbeOutcome::Found(message) => {
            section.line("Message:");
            section.indented(message);
        }
        ProbeOutcome::Absent => section.kv("Message", "N/A"),
    }

    section
}

fn ambient(value: Option<&str>) -> ProbeOutcome {
    match value {
        Some(v) => ProbeOutcome::from_text(v),
        None => ProbeOutcome::Absent,
    }
}

fn ambient_or_query(value: Option<&str>, dir: Option<&Path>, args: &[&str]) -> ProbeOutcome {
    match value {
        Some(v) => ProbeOutcome::from_text(v),
        None => query(dir, args),
    }
}

fn query(dir: Option<&Path>, args: &[&str]) -> ProbeOutcome {
    interpret(exec::run_in("git", args, dir))
}

fn interpret(result: CommandResult) -> ProbeOutcome {
    if result.success() {
        ProbeOutcome::from_text(&result.stdout)
    } else {
        ProbeOutcome::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{RunContext, RunnerOs};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn run_git(repo_dir: &Path, args: &[&str]) {
        let result = exec::run_in("git", args, Some(repo_dir));
        assert!(
            result.success(),
            "git {:?} failed: {}",
            args,
            result.stderr
        );
    }

    fn make_git_repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        run_git(dir.path(), &["init"]);
        run_git(dir.path(), &["config", "user.name", "test-user"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["commit", "--allow-empty", "-m", "initial"]);
        dir
    }

    fn ctx_for(workspace: &Path) -> RunContext {
        RunContext {
            runner_os: RunnerOs::Linux,
            workspace: Some(workspace.to_path_buf()),
            repository: None,
            ref_name: None,
            sha: None,
            java_home: None,
            output_path: None,
            extended_info: false,
        }
    }

    #[test]
    fn gather_short_sha_is_prefix_of_full() {
        let repo = make_git_repo();
        let facts = gather(&ctx_for(repo.path()));

        let full = facts.sha.as_found().expect("full sha");
        let short = facts.short_sha.as_found().expect("short sha");
        assert_eq!(full.len(), 40);
        assert_eq!(short, &full[..7]);
    }

    #[test]
    fn gather_joins_tags_at_head() {
        let repo = make_git_repo();
        run_git(repo.path(), &["tag", "v1.0.0"]);
        run_git(repo.path(), &["tag", "v1.1.0"]);

        let facts = gather(&ctx_for(repo.path()));
        assert_eq!(
            facts.tags_at_head,
            ProbeOutcome::Found("v1.0.0, v1.1.0".to_string())
        );
    }

    #[test]
    fn gather_without_tags_or_remote_is_absent() {
        let repo = make_git_repo();
        let facts = gather(&ctx_for(repo.path()));

        assert_eq!(facts.tags_at_head, ProbeOutcome::Absent);
        assert_eq!(facts.remote_url, ProbeOutcome::Absent);
        assert_eq!(facts.tags_at_head.or_na(), "N/A");
    }

    #[test]
    fn gather_reads_author_and_message() {
        let repo = make_git_repo();
        let facts = gather(&ctx_for(repo.path()));

        assert_eq!(
            facts.author,
            ProbeOutcome::Found("test-user <test@example.com>".to_string())
        );
        assert_eq!(facts.message, ProbeOutcome::Found("initial".to_string()));
        assert!(facts.committed_at.is_found());
    }

    #[test]
    fn ambient_values_win_over_queries() {
        let repo = make_git_repo();
        let mut ctx = ctx_for(repo.path());
        ctx.repository = Some("acme/widget".to_string());
        ctx.ref_name = Some("release/2.0".to_string());
        ctx.sha = Some("cafebabecafebabecafebabecafebabecafebabe".to_string());

        let facts = gather(&ctx);
        assert_eq!(
            facts.repository,
            ProbeOutcome::Found("acme/widget".to_string())
        );
        assert_eq!(facts.branch, ProbeOutcome::Found("release/2.0".to_string()));
        assert_eq!(
            facts.short_sha,
            ProbeOutcome::Found("cafebab".to_string())
        );
    }

    #[test]
    fn gather_outside_repo_degrades_to_absent() {
        let dir = tempfile::tempdir().unwrap();
        let facts = gather(&ctx_for(dir.path()));

        assert_eq!(facts.sha, ProbeOutcome::Absent);
        assert_eq!(facts.short_sha, ProbeOutcome::Absent);
        assert_eq!(facts.branch, ProbeOutcome::Absent);
    }

    #[test]
    fn section_renders_message_as_indented_block() {
        let facts = RepoFacts {
            repository: ProbeOutcome::Found("acme/widget".into()),
            branch: ProbeOutcome::Found("main".into()),
            sha: ProbeOutcome::Absent,
            short_sha: ProbeOutcome::Absent,
            author: ProbeOutcome::Absent,
            committed_at: ProbeOutcome::Absent,
            remote_url: ProbeOutcome::Absent,
            tags_at_head: ProbeOutcome::Absent,
            message: ProbeOutcome::Found("fix: one\n\ndetails".into()),
        };

        let section = section(&facts);
        assert!(section.lines.contains(&"Repository: acme/widget".to_string()));
        assert!(section.lines.contains(&"Commit: N/A".to_string()));
        assert!(section.lines.contains(&"Message:".to_string()));
        assert!(section.lines.contains(&"  fix: one".to_string()));
        assert!(section.lines.contains(&"  details".to_string()));
    }

    #[test]
    fn configure_safe_directory_skips_without_workspace() {
        // Must not panic or error; the warning path is the contract.
        let ctx = RunContext::from_vars(&HashMap::new(), false);
        assert_eq!(ctx.workspace, None::<PathBuf>);
        configure_safe_directory(&ctx);
    }
}
