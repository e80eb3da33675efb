//! Result types produced by the symptom scorer.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse risk estimate attached to a candidate disease.
///
/// Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Human-readable label, e.g. `"High"`.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One candidate disease for a set of observed symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredDisease {
    pub name: String,
    /// Number of distinct observed symptoms the disease lists. Always `> 0`.
    pub score: usize,
    pub risk: RiskTier,
    /// The observed symptoms that matched, sorted.
    pub matched: BTreeSet<String>,
    /// The observed tokens that are red flags for this disease, sorted.
    pub matched_red_flags: BTreeSet<String>,
}
