//! Earnings breakdown models.
//!
//! A breakdown explains, step by step, how a summary's earnings were derived
//! from the raw totals and the configured percentages.

use serde::{Deserialize, Serialize};

/// A single step in an earnings breakdown.
///
/// Each step captures the input, output, and reasoning for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Identifier of the rule that was applied (e.g. "lunch_overage_share").
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the step.
    pub reasoning: String,
}

/// The complete breakdown for one summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// The steps, in order.
    pub steps: Vec<BreakdownStep>,
}

impl EarningsBreakdown {
    /// Returns the first step applying the given rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&BreakdownStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}
