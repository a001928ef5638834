//! Auto-Fixer
//!
//! Rewrites a narrow, named family of known-bad mutations into their
//! known-good form using the fix rules attached to registry entries. Only
//! entries that carry fix rules take part (today: `orderCreate` and
//! `productCreate`). This is not a formatter and performs no validation;
//! callers must re-run the validator on the returned text before trusting it.

use crate::rules::{MutationRegistry, RegistryEntry, registry};
use std::borrow::Cow;
use tracing::debug;

/// Rewritten text and the fields whose rules changed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub text: String,
    /// Field names whose fix rules modified the text, in registry order
    pub applied: Vec<&'static str>,
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

pub struct AutoFixer<'a> {
    registry: &'a MutationRegistry,
}

impl Default for AutoFixer<'static> {
    fn default() -> Self {
        Self::new(registry())
    }
}

impl<'a> AutoFixer<'a> {
    pub fn new(registry: &'a MutationRegistry) -> Self {
        Self { registry }
    }

    /// Apply every relevant fix rule; text needing no fix is returned as is
    pub fn fix(&self, text: &str) -> String {
        self.fix_with_report(text).text
    }

    pub fn fix_with_report(&self, text: &str) -> FixOutcome {
        let mut current = text.to_string();
        let mut applied = Vec::new();

        for entry in self.registry.entries().iter().filter(|e| e.is_fixable()) {
            if !entry.name_pattern.is_match(&current) {
                continue;
            }
            if let Some(rewritten) = apply_rules(entry, &current) {
                debug!(field = entry.field_name, "Applied fix rules");
                applied.push(entry.field_name);
                current = rewritten;
            }
        }

        FixOutcome {
            text: current,
            applied,
        }
    }
}

/// Run an entry's rules in order; `None` when nothing changed
fn apply_rules(entry: &RegistryEntry, text: &str) -> Option<String> {
    let mut current = text.to_string();
    let mut changed = false;

    for rule in &entry.fix_rules {
        let rewritten = match rule.pattern.replace_all(&current, rule.replacement) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(rewritten) => rewritten,
        };
        current = rewritten;
        changed = true;
    }

    changed.then_some(current)
}
