//! Mutation Validation for the storedesk back-office
//!
//! This crate statically checks hand-written GraphQL mutation documents
//! against a fixed registry of known-good e-commerce mutation shapes:
//! - Argument shape of every registered field call
//! - Variable type declarations expected by those fields
//! - Declared-but-unused and used-but-undeclared variables
//! - Known anti-patterns, independent of which field they appear in
//!
//! It can also rewrite a narrow family of known-bad mutations into their
//! known-good form. The rewrite is not trusted until the result is fed back
//! through [`validate`].
//!
//! # Example
//!
//! ```ignore
//! use storedesk_validate::{fix, validate};
//!
//! let text = "mutation orderCreate($input: OrderInput!) { orderCreate(input: $input) { order { id } } }";
//! let result = validate(text);
//! assert!(!result.valid);
//!
//! let repaired = fix(text);
//! assert!(validate(&repaired).valid);
//! ```

pub mod violation_trait;
#[macro_use]
pub mod violation_macro;
pub mod diagnostics;

pub mod config;
pub mod constants;

pub mod rules;

pub mod fixer;
pub mod lexer;
pub mod reporter;
pub mod scanner;
pub mod structural;
pub mod validator;

use thiserror::Error;

pub use violation_trait::{Violation, ViolationCategory};

pub use diagnostics::{Diagnostic, MutationViolation, ValidationResult};

pub use config::{ConfigLoader, FileConfig, LoggingConfig, OutputConfig, ValidatorSettings};

pub use rules::{
    AntiPattern, FixRule, Hint, MutationRegistry, RegistryEntry, anti_patterns, example, examples,
    registry,
};

pub use fixer::{AutoFixer, FixOutcome};
pub use lexer::{Extraction, FieldCall, VariableDeclaration, extract};
pub use reporter::{OutputFormat, Reporter, ValidationReport};
pub use scanner::AntiPatternScanner;
pub use structural::{StructuralFindings, StructuralValidator};
pub use validator::{MutationValidator, fix, validate};

/// Result type for configuration and I/O operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised around the validator, never by it
///
/// Validation findings are reported as [`Diagnostic`]s inside a
/// [`ValidationResult`]. This type only covers loading configuration and
/// reading input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to extract configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ValidationError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Kind of a reported finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DiagnosticKind {
    Error,
    Warning,
    Suggestion,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Suggestion => write!(f, "SUGGESTION"),
        }
    }
}
