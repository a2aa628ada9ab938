//! Diagnostic report assembly.
//!
//! The report is a write-only, append-only sequence of named sections.
//! Inspectors build [`Section`]s; the binary renders the whole report to
//! stdout once at the end of the run.

use serde::Serialize;

/// One named group of report lines.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Fixed emoji-prefixed header.
    pub header: String,

    /// Lines in insertion order.
    pub lines: Vec<String>,
}

impl Section {
    /// Start an empty section under `header`.
    pub fn new(header: impl Into<String>) -> Self {
        Section {
            header: header.into(),
            lines: Vec::new(),
        }
    }

    /// Append a raw line.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Append a `Label: value` row.
    pub fn kv(&mut self, label: &str, value: &str) {
        self.lines.push(format!("{label}: {value}"));
    }

    /// Append a multi-line block, each line indented by two spaces.
    /// Blank lines stay blank.
    pub fn indented(&mut self, block: &str) {
        for line in block.lines() {
            if line.is_empty() {
                self.lines.push(String::new());
            } else {
                self.lines.push(format!("  {line}"));
            }
        }
    }
}

/// Append-only diagnostic report, rendered once per run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    /// Append a finished section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Whether a section with this header was appended.
    pub fn has_section(&self, header: &str) -> bool {
        self.sections.iter().any(|s| s.header == header)
    }

    /// Render the report as grouped text, one blank line between groups.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&section.header);
            out.push('\n');
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Emit the rendered report to stdout.
    pub fn emit(&self) {
        print!("{}", self.render());
    }
}
