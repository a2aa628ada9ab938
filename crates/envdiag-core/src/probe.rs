//! Probe outcomes.
//!
//! A probe either produced a value or it did not. A missing tool, a
//! non-zero exit, and genuinely empty output all land on
//! [`ProbeOutcome::Absent`], so an empty string never doubles as a
//! failure marker.

use serde::{Deserialize, Serialize};

/// Outcome of a single diagnostic probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The probe produced a value.
    Found(String),

    /// The tool was missing, failed, or produced nothing usable.
    Absent,
}

impl ProbeOutcome {
    /// Wrap captured text, treating empty text as absence.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            ProbeOutcome::Absent
        } else {
            ProbeOutcome::Found(trimmed.to_string())
        }
    }

    /// Whether the probe produced a value.
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeOutcome::Found(_))
    }

    /// The value, if any.
    pub fn as_found(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Found(v) => Some(v),
            ProbeOutcome::Absent => None,
        }
    }

    /// Apply `f` to a found value, leaving absence untouched.
    pub fn map<F: FnOnce(String) -> String>(self, f: F) -> Self {
        match self {
            ProbeOutcome::Found(v) => ProbeOutcome::Found(f(v)),
            ProbeOutcome::Absent => ProbeOutcome::Absent,
        }
    }

    /// Render for the report, with `N/A` standing in for absence.
    pub fn or_na(&self) -> &str {
        match self {
            ProbeOutcome::Found(v) => v,
            ProbeOutcome::Absent => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_trims_and_keeps_value() {
        assert_eq!(
            ProbeOutcome::from_text("  6.5.0-generic \n"),
            ProbeOutcome::Found("6.5.0-generic".to_string())
        );
    }

    #[test]
    fn from_text_empty_is_absent() {
        assert_eq!(ProbeOutcome::from_text("   \n"), ProbeOutcome::Absent);
        assert_eq!(ProbeOutcome::from_text(""), ProbeOutcome::Absent);
    }

    #[test]
    fn or_na_substitutes_placeholder() {
        assert_eq!(ProbeOutcome::Absent.or_na(), "N/A");
        assert_eq!(ProbeOutcome::Found("x".into()).or_na(), "x");
    }

    #[test]
    fn map_skips_absent() {
        let mapped = ProbeOutcome::Absent.map(|v| format!("{v}!"));
        assert_eq!(mapped, ProbeOutcome::Absent);

        let mapped = ProbeOutcome::Found("a".into()).map(|v| format!("{v}!"));
        assert_eq!(mapped, ProbeOutcome::Found("a!".into()));
    }
}
