//! Structural Validation
//!
//! Checks every registered field call against its registry entry and the
//! document's variables against each other:
//! - Argument shape per call (MUT002), then variable type per call (MUT003)
//! - Declared but unused variables (MUT004)
//! - Used but undeclared variables (MUT005)
//!
//! Errors are appended in exactly that order. Per-field checks are
//! independent: a failed argument check never skips the type check.

use crate::diagnostics::{Diagnostic, MutationViolation};
use crate::lexer::Extraction;
use crate::rules::{Hint, MutationRegistry, RegistryEntry};
use std::collections::BTreeSet;
use tracing::trace;

/// Errors and suggestions produced by one structural pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralFindings {
    pub errors: Vec<Diagnostic>,
    pub suggestions: Vec<Diagnostic>,
}

/// Field-agnostic checker driven entirely by registry data
pub struct StructuralValidator<'a> {
    registry: &'a MutationRegistry,
    suggestions: bool,
}

impl<'a> StructuralValidator<'a> {
    pub fn new(registry: &'a MutationRegistry) -> Self {
        Self {
            registry,
            suggestions: true,
        }
    }

    /// Enable or disable hint probing
    pub fn with_suggestions(mut self, enabled: bool) -> Self {
        self.suggestions = enabled;
        self
    }

    pub fn check(&self, text: &str, extraction: &Extraction) -> StructuralFindings {
        let mut findings = StructuralFindings::default();

        for call in &extraction.field_calls {
            let Some(entry) = self.registry.lookup(&call.name) else {
                continue;
            };
            self.check_field(text, entry, &mut findings);
        }

        self.check_variables(extraction, &mut findings);
        findings
    }

    fn check_field(&self, text: &str, entry: &RegistryEntry, findings: &mut StructuralFindings) {
        if !entry.args_match(text) {
            trace!(field = entry.field_name, "Argument shape mismatch");
            findings.errors.push(
                MutationViolation::FieldSyntaxMismatch {
                    field: entry.field_name.to_string(),
                    expected: entry.expected_args.to_string(),
                }
                .into(),
            );
            self.match_hints(text, entry, &entry.arg_hints, findings);
        }

        if !entry.type_matches(text) {
            trace!(field = entry.field_name, "Variable type mismatch");
            findings.errors.push(
                MutationViolation::FieldTypeMismatch {
                    field: entry.field_name.to_string(),
                    expected: entry.expected_type.to_string(),
                }
                .into(),
            );
            self.match_hints(text, entry, &entry.type_hints, findings);
        }
    }

    fn match_hints(
        &self,
        text: &str,
        entry: &RegistryEntry,
        hints: &[Hint],
        findings: &mut StructuralFindings,
    ) {
        if !self.suggestions {
            return;
        }
        findings.suggestions.extend(
            hints
                .iter()
                .filter(|hint| hint.detect.is_match(text))
                .map(|hint| {
                    Diagnostic::from(MutationViolation::FieldSuggestion {
                        field: entry.field_name.to_string(),
                        hint: hint.suggestion.to_string(),
                    })
                }),
        );
    }

    fn check_variables(&self, extraction: &Extraction, findings: &mut StructuralFindings) {
        let declared = extraction.declared_names();
        let used = &extraction.usages;

        let unused: BTreeSet<&String> = declared.difference(used).collect();
        if !unused.is_empty() {
            findings.errors.push(MutationViolation::unused(unused).into());
        }

        let undeclared: BTreeSet<&String> = used.difference(&declared).collect();
        if !undeclared.is_empty() {
            findings
                .errors
                .push(MutationViolation::undeclared(undeclared).into());
        }
    }
}
