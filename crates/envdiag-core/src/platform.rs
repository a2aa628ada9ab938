//! Platform inspection.
//!
//! Host facts (architecture, hostname, memory, kernel, CPU) come from
//! host introspection; distro details are gathered by one handler per
//! [`RunnerOs`] family, selected from the run context rather than
//! re-detected.

use crate::context::{RunContext, RunnerOs};
use crate::exec::{self, CommandResult};
use crate::probe::ProbeOutcome;
use crate::report::Section;
use std::path::Path;
use sysinfo::System;

/// Report header for this inspector.
pub const HEADER: &str = "💻 System Information";

/// Default location of the os-release file on Linux.
const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Distribution-info fallback tool when the os-release file is missing.
const LSB_RELEASE_BIN: &str = "lsb_release";

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Collect the platform section for the report.
pub fn inspect(ctx: &RunContext) -> Section {
    let mut section = Section::new(HEADER);
    let sys = System::new_all();

    section.kv("Runner OS", ctx.runner_os.name());
    section.kv("Architecture", std::env::consts::ARCH);
    section.kv(
        "Hostname",
        &System::host_name().unwrap_or_else(|| "unknown".to_string()),
    );
    section.kv("OS", &os_summary());
    section.kv(
        "Kernel",
        &System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
    );
    section.kv("CPU", &cpu_summary(&sys));
    section.kv("Total memory", &format_gib(sys.total_memory()));
    section.kv("Free memory", &format_gib(sys.free_memory()));

    if let Some(distro) = distro_details(ctx.runner_os, Path::new(OS_RELEASE_PATH)) {
        match distro {
            ProbeOutcome::Found(text) if text.contains('\n') => {
                section.line("Distro:");
                section.indented(&text);
            }
            other => section.kv("Distro", other.or_na()),
        }
    }

    section
}

fn os_summary() -> String {
    let name = System::name().unwrap_or_else(|| "unknown".to_string());
    match System::os_version() {
        Some(version) => format!("{name} {version}"),
        None => name,
    }
}

fn cpu_summary(sys: &System) -> String {
    let brand = sys
        .cpus()
        .first()
        .map(|c| c.brand().trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    format!("{} ({} cores)", brand, sys.cpus().len())
}

/// Render a byte count in gibibytes, two decimal places.
fn format_gib(bytes: u64) -> String {
    format!("{:.2} GiB", bytes as f64 / BYTES_PER_GIB)
}

/// Distro details for the given family.
///
/// `None` means the family has nothing to report here and the line is
/// omitted entirely.
fn distro_details(os: RunnerOs, os_release: &Path) -> Option<ProbeOutcome> {
    match os {
        RunnerOs::Linux => Some(linux_distro(os_release, LSB_RELEASE_BIN)),
        RunnerOs::MacOs => Some(interpret(exec::run("sw_vers", &[]))),
        RunnerOs::Windows => Some(interpret(exec::run("cmd", &["/C", "systeminfo"]))),
        RunnerOs::Other => None,
    }
}

/// Linux distro identification.
///
/// Prefers the os-release file; falls back to the distribution-info tool
/// only when the file is missing. The tool binary is a parameter so the
/// missing-tool path stays testable.
fn linux_distro(os_release: &Path, lsb_release_bin: &str) -> ProbeOutcome {
    match std::fs::read_to_string(os_release) {
        Ok(content) => parse_os_release(&content),
        Err(_) => interpret(exec::run(lsb_release_bin, &["-a"])),
    }
}

/// Extract `PRETTY_NAME`, else `NAME` + `VERSION`, from os-release text.
fn parse_os_release(content: &str) -> ProbeOutcome {
    if let Some(pretty) = os_release_value(content, "PRETTY_NAME") {
        return ProbeOutcome::Found(pretty);
    }

    match (
        os_release_value(content, "NAME"),
        os_release_value(content, "VERSION"),
    ) {
        (Some(name), Some(version)) => ProbeOutcome::Found(format!("{name} {version}")),
        (Some(name), None) => ProbeOutcome::Found(name),
        _ => ProbeOutcome::Absent,
    }
}

fn os_release_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| {
            line.strip_prefix(key)?
                .strip_prefix('=')
                .map(|v| v.trim().trim_matches('"').to_string())
        })
        .filter(|v| !v.is_empty())
}

fn interpret(result: CommandResult) -> ProbeOutcome {
    if result.success() {
        ProbeOutcome::from_text(&result.stdout)
    } else {
        ProbeOutcome::Absent
    }
}
