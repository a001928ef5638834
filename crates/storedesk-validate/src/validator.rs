//! Mutation validator facade
//!
//! Wires the extractor, the structural validator and the anti-pattern
//! scanner into the single pure function `text -> ValidationResult`.

use crate::config::ValidatorSettings;
use crate::diagnostics::ValidationResult;
use crate::fixer::{AutoFixer, FixOutcome};
use crate::lexer::extract;
use crate::rules::{MutationRegistry, registry};
use crate::scanner::AntiPatternScanner;
use crate::structural::StructuralValidator;
use crate::Result;
use tracing::debug;

/// Validate `text` with the default configuration
pub fn validate(text: &str) -> ValidationResult {
    MutationValidator::new().validate(text)
}

/// Auto-fix `text` with the standard registry
///
/// The result must be re-validated before it is trusted.
pub fn fix(text: &str) -> String {
    AutoFixer::default().fix(text)
}

/// Stateless validator over the process-wide rule tables
///
/// Holds no per-run state; one instance can serve any number of threads.
pub struct MutationValidator {
    registry: &'static MutationRegistry,
    scanner: AntiPatternScanner,
    suggestions: bool,
}

impl Default for MutationValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MutationValidator {
    pub fn new() -> Self {
        Self {
            registry: registry(),
            scanner: AntiPatternScanner::new(),
            suggestions: true,
        }
    }

    /// Build a validator tuned by the `[validator]` config section
    pub fn with_settings(settings: &ValidatorSettings) -> Result<Self> {
        Ok(Self {
            registry: registry(),
            scanner: AntiPatternScanner::without(&settings.disabled_anti_patterns)?,
            suggestions: settings.suggestions,
        })
    }

    pub fn registry(&self) -> &'static MutationRegistry {
        self.registry
    }

    pub fn validate(&self, text: &str) -> ValidationResult {
        let extraction = extract(text);

        let Some(operation_name) = extraction.operation_name.clone() else {
            debug!("No mutation operation name found");
            return ValidationResult::missing_operation_name();
        };

        let structural = StructuralValidator::new(self.registry)
            .with_suggestions(self.suggestions)
            .check(text, &extraction);
        let warnings = self.scanner.scan(text);
        let variables = extraction.variables();

        let result = ValidationResult::new(
            Some(operation_name),
            structural.errors,
            warnings,
            structural.suggestions,
            extraction.field_calls,
            variables,
        );

        debug!(
            operation = result.operation_name.as_deref().unwrap_or_default(),
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            suggestions = result.suggestions.len(),
            "Validated mutation"
        );

        result
    }

    pub fn fix(&self, text: &str) -> String {
        self.fix_with_report(text).text
    }

    pub fn fix_with_report(&self, text: &str) -> FixOutcome {
        AutoFixer::new(self.registry).fix_with_report(text)
    }
}
