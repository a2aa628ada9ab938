//! envdiag - environment diagnostics for CI runners.
//!
//! Prints grouped diagnostics (timestamp, platform facts, repository
//! metadata, and optionally the Java runtime and a workspace tree) for
//! the current runner, and publishes the run timestamp as a named step
//! output.

use anyhow::{Context, Result};
use clap::Parser;
use envdiag_core::{collect, init_tracing, outputs, RunContext};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "envdiag")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CI environment diagnostics", long_about = None)]
struct Cli {
    /// Also probe the Java runtime and render the workspace tree
    #[arg(long, env = "INPUT_SHOW_EXTENDED_INFO")]
    extended_info: bool,

    /// Override the ambient workspace path
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let mut ctx = RunContext::from_env(cli.extended_info);
    if let Some(workspace) = cli.workspace {
        ctx.workspace = Some(workspace);
    }

    let run = collect(&ctx);
    run.report.emit();

    if let Some(sink) = &ctx.output_path {
        outputs::write_output(sink, "timestamp", &run.timestamp)
            .context("failed to publish timestamp output")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn extended_info_defaults_off() {
        let cli = Cli::try_parse_from(["envdiag"]).unwrap();
        assert!(!cli.extended_info);
        assert!(cli.workspace.is_none());
    }

    #[test]
    fn extended_info_flag_parses() {
        let cli = Cli::try_parse_from(["envdiag", "--extended-info", "--json"]).unwrap();
        assert!(cli.extended_info);
        assert!(cli.json);
    }
}
