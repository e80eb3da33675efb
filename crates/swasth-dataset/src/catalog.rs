//! Loaded records together with the index derived from them.

use std::path::{Path, PathBuf};

use swasth_contracts::{DiseaseRecord, ObservedSymptoms, ScoredDisease};
use swasth_triage::{build_index, lookup, search_by_name, SymptomIndex, SymptomScorer};

/// Immutable, query-ready view of one dataset.
///
/// Built once per load. Nothing here mutates after construction; a new
/// dataset means a new `Catalog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    source: Option<PathBuf>,
    records: Vec<DiseaseRecord>,
    index: SymptomIndex,
}

impl Catalog {
    /// Build a catalog from records that did not come from a file.
    pub fn new(records: Vec<DiseaseRecord>) -> Self {
        let index = build_index(&records);
        Self {
            source: None,
            records,
            index,
        }
    }

    /// Build a catalog remembering which file it was loaded from.
    pub fn from_source(path: &Path, records: Vec<DiseaseRecord>) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            ..Self::new(records)
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn index(&self) -> &SymptomIndex {
        &self.index
    }

    /// Every disease whose name contains `query`, in source order.
    pub fn search(&self, query: &str) -> Vec<&DiseaseRecord> {
        search_by_name(&self.records, query)
    }

    /// The first disease whose name contains `query`.
    pub fn lookup(&self, query: &str) -> Option<&DiseaseRecord> {
        lookup(&self.records, query)
    }

    /// Ranked candidates for `observed`, most relevant first.
    pub fn rank(&self, scorer: &SymptomScorer, observed: &ObservedSymptoms) -> Vec<ScoredDisease> {
        scorer.ranked(&self.records, observed)
    }
}
