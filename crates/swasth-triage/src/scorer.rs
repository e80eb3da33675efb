//! Symptom-based scoring and risk tiering.
//!
//! Scoring algorithm, per record:
//!
//! 1. `matched = observed ∩ distinct symptoms`, `score = |matched|`.
//! 2. Records with `score == 0` are dropped.
//! 3. Risk tier, first rule that applies:
//!    - any observed token is one of the record's red flags → `High`
//!    - `score / max(distinct symptoms, 1) > medium_ratio` → `Medium`
//!    - otherwise → `Low`
//!
//! Ranking sorts by score, highest first, keeping encounter order for ties.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use swasth_contracts::{DiseaseRecord, ObservedSymptoms, RiskTier, ScoredDisease};

use crate::config::TriageConfig;

/// Scored diseases keyed by name, in encounter order.
///
/// When two records share a name, the later record's result replaces the
/// earlier one but keeps the earlier one's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: Vec<ScoredDisease>,
    positions: HashMap<String, usize>,
}

impl ScoreTable {
    fn insert(&mut self, scored: ScoredDisease) {
        match self.positions.get(&scored.name) {
            Some(&pos) => self.entries[pos] = scored,
            None => {
                self.positions.insert(scored.name.clone(), self.entries.len());
                self.entries.push(scored);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ScoredDisease> {
        self.positions.get(name).map(|&pos| &self.entries[pos])
    }

    /// Entries in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredDisease> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<ScoredDisease> {
        self.entries
    }
}

/// Sort a score table for presentation: score descending, stable on ties.
pub fn rank(table: ScoreTable) -> Vec<ScoredDisease> {
    let mut ranked = table.into_entries();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Score every record with the default configuration.
pub fn score(records: &[DiseaseRecord], observed: &ObservedSymptoms) -> ScoreTable {
    SymptomScorer::default().score(records, observed)
}

/// Scores records against observed symptoms using a [`TriageConfig`].
#[derive(Debug, Clone, Default)]
pub struct SymptomScorer {
    config: TriageConfig,
}

impl SymptomScorer {
    pub fn new(config: TriageConfig) -> Self {
        Self { config }
    }

    /// Score `records` against `observed`. Pure and total: an empty
    /// observation yields an empty table.
    pub fn score(&self, records: &[DiseaseRecord], observed: &ObservedSymptoms) -> ScoreTable {
        let mut table = ScoreTable::default();
        if observed.is_empty() {
            debug!("no observed symptoms; nothing to score");
            return table;
        }

        for record in records {
            let matched = observed.overlap(&record.symptoms);
            let score = matched.len();
            if score == 0 {
                continue;
            }

            let matched_red_flags = observed.overlap(&record.red_flags);
            let risk = self.risk_for(score, record.symptom_set().len(), &matched_red_flags);

            debug!(
                disease = %record.name,
                score,
                risk = %risk,
                "disease matched observed symptoms"
            );

            table.insert(ScoredDisease {
                name: record.name.clone(),
                score,
                risk,
                matched,
                matched_red_flags,
            });
        }

        debug!(
            observed = observed.len(),
            candidates = table.len(),
            "scored diseases"
        );
        table
    }

    /// Assign a risk tier. Red-flag overlap dominates the score ratio.
    pub fn risk_for(
        &self,
        score: usize,
        distinct_symptoms: usize,
        matched_red_flags: &BTreeSet<String>,
    ) -> RiskTier {
        if !matched_red_flags.is_empty() {
            return RiskTier::High;
        }

        let ratio = score as f64 / distinct_symptoms.max(1) as f64;
        if ratio > self.config.medium_ratio {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Score and rank, truncated to `max_results` when that is non-zero.
    pub fn ranked(&self, records: &[DiseaseRecord], observed: &ObservedSymptoms) -> Vec<ScoredDisease> {
        let mut ranked = rank(self.score(records, observed));
        if self.config.max_results > 0 {
            ranked.truncate(self.config.max_results);
        }
        ranked
    }
}
