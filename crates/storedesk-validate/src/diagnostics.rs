//! Mutation findings and the validation result
//!
//! Every finding the validator can produce is a [`MutationViolation`]
//! variant; callers receive them frozen into [`Diagnostic`]s inside a
//! [`ValidationResult`].

use crate::DiagnosticKind;
use crate::lexer::FieldCall;
use crate::violation_trait::Violation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

define_violations! {
    pub enum MutationViolation {
        #[violation(
            id = "MUT001",
            category = Header,
            kind = Error,
            message = "Could not find a mutation operation name (expected `mutation <Name>`)",
            suggestion = "Start the document with `mutation <Name>` followed by its variable declarations"
        )]
        MissingOperationName {},

        #[violation(
            id = "MUT002",
            category = Arguments,
            kind = Error,
            message = "Field `{field}` has wrong syntax: expected arguments `{expected}`",
            suggestion = "Call `{field}` with `{expected}`"
        )]
        FieldSyntaxMismatch {
            field: String,
            expected: String,
        },

        #[violation(
            id = "MUT003",
            category = Types,
            kind = Error,
            message = "Field `{field}` has wrong variable type: expected `{expected}`",
            suggestion = "Declare the variable passed to `{field}` as `{expected}`"
        )]
        FieldTypeMismatch {
            field: String,
            expected: String,
        },

        #[violation(
            id = "MUT004",
            category = Variables,
            kind = Error,
            message = "Variables declared but never used: {names}",
            suggestion = "Remove {names} from the operation signature or pass them to a field"
        )]
        UnusedVariable {
            names: String,
        },

        #[violation(
            id = "MUT005",
            category = Variables,
            kind = Error,
            message = "Variables used but never declared: {names}",
            suggestion = "Declare {names} in the operation signature"
        )]
        UndeclaredVariable {
            names: String,
        },

        #[violation(
            id = "MUT006",
            category = AntiPattern,
            kind = Warning,
            message = "[{pattern}] {remedy}"
        )]
        AntiPatternDetected {
            pattern: String,
            remedy: String,
        },

        #[violation(
            id = "MUT007",
            category = Arguments,
            kind = Suggestion,
            message = "{field}: {hint}"
        )]
        FieldSuggestion {
            field: String,
            hint: String,
        },
    }
}

impl MutationViolation {
    /// Build a variable consistency finding from a sorted name set
    pub fn unused<'a>(names: impl IntoIterator<Item = &'a String>) -> Self {
        Self::UnusedVariable {
            names: join_names(names),
        }
    }

    pub fn undeclared<'a>(names: impl IntoIterator<Item = &'a String>) -> Self {
        Self::UndeclaredVariable {
            names: join_names(names),
        }
    }
}

fn join_names<'a>(names: impl IntoIterator<Item = &'a String>) -> String {
    names
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One reported finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error, warning or suggestion
    pub kind: DiagnosticKind,
    /// Stable violation id (e.g. "MUT002")
    pub code: String,
    /// Mutation field the finding is attributed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl From<MutationViolation> for Diagnostic {
    fn from(violation: MutationViolation) -> Self {
        violation.to_diagnostic()
    }
}

/// Outcome of validating one mutation document
///
/// `valid` is true iff `errors` is empty. Maps are ordered so that two runs
/// over the same text serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub operation_name: Option<String>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub suggestions: Vec<Diagnostic>,
    pub fields: Vec<FieldCall>,
    pub variables: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn new(
        operation_name: Option<String>,
        errors: Vec<Diagnostic>,
        warnings: Vec<Diagnostic>,
        suggestions: Vec<Diagnostic>,
        fields: Vec<FieldCall>,
        variables: BTreeMap<String, String>,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            operation_name,
            errors,
            warnings,
            suggestions,
            fields,
            variables,
        }
    }

    /// The only short-circuiting outcome: no `mutation <Name>` header
    pub fn missing_operation_name() -> Self {
        Self::new(
            None,
            vec![MutationViolation::MissingOperationName {}.into()],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            BTreeMap::new(),
        )
    }

    /// Errors carrying the given violation id
    pub fn errors_with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.errors.iter().filter(move |d| d.code == code)
    }

    /// True if an error with `code` is attributed to `field`
    pub fn has_error_for(&self, code: &str, field: &str) -> bool {
        self.errors_with_code(code)
            .any(|d| d.field.as_deref() == Some(field))
    }

    /// Names of all recorded field calls, in call order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// All diagnostics, errors first
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.suggestions.iter())
    }
}
