//! Named step outputs for the invoking platform.
//!
//! The platform hands the step a sink file path; appending `name=value`
//! lines to it publishes the values to downstream steps. An unwritable
//! sink is the one fatal condition in this crate.

use crate::error::{EnvdiagError, Result};
use std::io::Write;
use std::path::Path;

/// Append `name=value` to the output sink.
pub fn write_output(sink: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(sink)
        .map_err(|source| EnvdiagError::NamedOutput {
            name: name.to_string(),
            path: sink.display().to_string(),
            source,
        })?;

    writeln!(file, "{name}={value}").map_err(|source| EnvdiagError::NamedOutput {
        name: name.to_string(),
        path: sink.display().to_string(),
        source,
    })?;

    Ok(())
}
