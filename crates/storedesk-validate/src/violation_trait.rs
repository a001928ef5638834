//! Violation Trait
//!
//! Generic trait for all mutation findings. Every finding, whatever its kind,
//! is rendered into a [`Diagnostic`] through this trait.

use serde::Serialize;
use std::fmt::Display;

pub use super::DiagnosticKind;
use crate::diagnostics::Diagnostic;

/// Category of a finding for grouping in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationCategory {
    /// Operation header (`mutation <Name>`)
    Header,
    /// Call arguments of a registered field
    Arguments,
    /// Variable type declarations of a registered field
    Types,
    /// Declaration/usage consistency
    Variables,
    /// Known bad idioms
    AntiPattern,
}

impl Display for ViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "Header"),
            Self::Arguments => write!(f, "Arguments"),
            Self::Types => write!(f, "Types"),
            Self::Variables => write!(f, "Variables"),
            Self::AntiPattern => write!(f, "Anti-pattern"),
        }
    }
}

/// Generic violation trait - all findings implement this
pub trait Violation: Display + Send + Sync {
    /// Unique violation ID (e.g., "MUT002")
    fn id(&self) -> &str;

    /// Category for grouping in reports
    fn category(&self) -> ViolationCategory;

    /// Whether this is an error, a warning or a suggestion
    fn kind(&self) -> DiagnosticKind;

    /// Mutation field the finding is attributed to (if applicable)
    fn field(&self) -> Option<&str>;

    /// Human-readable message describing the finding
    fn message(&self) -> String {
        self.to_string()
    }

    /// Suggested fix for the finding (if applicable)
    fn suggestion(&self) -> Option<String> {
        None
    }

    /// Freeze into the plain diagnostic carried by a `ValidationResult`
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            kind: self.kind(),
            code: self.id().to_string(),
            field: self.field().map(str::to_string),
            message: self.message(),
        }
    }
}
