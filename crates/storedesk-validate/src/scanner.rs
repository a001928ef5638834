//! Anti-Pattern Scanning
//!
//! Scans raw mutation text for known bad idioms. Independent of the registry
//! and of field recognition; its warnings never affect `valid`.

use crate::diagnostics::{Diagnostic, MutationViolation};
use crate::rules::{AntiPattern, anti_patterns};
use crate::{Result, ValidationError};
use tracing::trace;

pub struct AntiPatternScanner {
    patterns: Vec<&'static AntiPattern>,
}

impl Default for AntiPatternScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl AntiPatternScanner {
    /// Scanner over the full standard table
    pub fn new() -> Self {
        Self {
            patterns: anti_patterns().iter().collect(),
        }
    }

    /// Scanner over the standard table minus the given pattern ids
    ///
    /// Unknown ids are rejected so that a typo in configuration does not
    /// silently leave a pattern enabled.
    pub fn without(disabled: &[String]) -> Result<Self> {
        if let Some(unknown) = disabled
            .iter()
            .find(|id| !anti_patterns().iter().any(|p| p.id == id.as_str()))
        {
            return Err(ValidationError::Config(format!(
                "Unknown anti-pattern id: {unknown}"
            )));
        }

        Ok(Self {
            patterns: anti_patterns()
                .iter()
                .filter(|p| !disabled.iter().any(|id| id == p.id))
                .collect(),
        })
    }

    /// Ids of the active patterns, in table order
    pub fn pattern_ids(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.id).collect()
    }

    /// One warning per matching pattern, in table order
    pub fn scan(&self, text: &str) -> Vec<Diagnostic> {
        self.patterns
            .iter()
            .filter(|p| p.is_match(text))
            .map(|p| {
                trace!(pattern = p.id, "Anti-pattern matched");
                MutationViolation::AntiPatternDetected {
                    pattern: p.id.to_string(),
                    remedy: p.remedy.to_string(),
                }
                .into()
            })
            .collect()
    }
}
