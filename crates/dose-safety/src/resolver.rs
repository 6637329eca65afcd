//! Warning resolution engine.
//!
//! Holds the registered rule sets keyed by drug and evaluates them against
//! the raw patient inputs, independently of the dose calculation. Every
//! resolution returns a message: a matched rule's warning, a conservative
//! fallback, or the standard confirmation.

use std::collections::BTreeMap;

use tracing::debug;

use dose_model::{DrugId, PatientInput, WarningResult};

use crate::rules::WarningRule;

/// Standard confirmation when no rule matches.
const NO_ISSUES_MESSAGE: &str = "No safety issues found for the supplied inputs.";

/// Per-drug warning rule sets.
///
/// Exactly one rule set applies per drug; within a set, the first matching
/// rule wins. A drug with no registered set resolves conservatively to a
/// warning rather than a silent pass.
#[derive(Debug, Default)]
pub struct WarningResolver {
    rule_sets: BTreeMap<DrugId, Vec<WarningRule>>,
}

impl WarningResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rule set for a drug, replacing any previous set. An
    /// empty set is a valid registration meaning "reviewed, no rules".
    pub fn register(&mut self, drug: DrugId, rules: Vec<WarningRule>) {
        self.rule_sets.insert(drug, rules);
    }

    /// Evaluate the registered rules against one calculation's raw inputs.
    pub fn resolve(&self, input: &PatientInput) -> WarningResult {
        let Some(rules) = self.rule_sets.get(&input.drug) else {
            return WarningResult::warn(format!(
                "{} is not supported for automated dosing review; verify dosing manually.",
                input.drug
            ));
        };

        if !input.weight.is_known()
            && rules.iter().any(|rule| rule.predicate.needs_weight())
        {
            return WarningResult::warn(format!(
                "Patient weight is required to evaluate safety rules for {}.",
                input.drug
            ));
        }

        for rule in rules {
            if rule.predicate.matches(input) {
                debug!(drug = %input.drug, "warning rule matched");
                return WarningResult::warn(rule.message.clone());
            }
        }
        WarningResult::clear(NO_ISSUES_MESSAGE)
    }
}
