//! Inverted index from symptom token to the diseases that list it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use swasth_contracts::{DiseaseRecord, ObservedSymptoms};

/// Symptom token → names of diseases listing that symptom.
///
/// Entries are appended in record order and never deduplicated: a disease
/// whose own symptom cell repeats a token appears that many times under it.
/// Keys iterate in sorted order, which is also the order symptoms are offered
/// for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomIndex {
    entries: BTreeMap<String, Vec<String>>,
}

/// Build the index from loaded records. Records with no symptoms contribute
/// nothing.
pub fn build_index(records: &[DiseaseRecord]) -> SymptomIndex {
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for record in records {
        for token in &record.symptoms {
            entries
                .entry(token.clone())
                .or_default()
                .push(record.name.clone());
        }
    }

    debug!(
        records = records.len(),
        symptoms = entries.len(),
        "built symptom index"
    );

    SymptomIndex { entries }
}

impl SymptomIndex {
    /// Number of distinct symptom tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All distinct symptom tokens, sorted.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Disease names listing `token`, in record order. Empty for unknown tokens.
    pub fn diseases_for(&self, token: &str) -> &[String] {
        self.entries.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Sorted symptoms whose text contains `fragment` (case-insensitive).
    /// A blank fragment returns every symptom.
    pub fn filter<'a>(&'a self, fragment: &str) -> Vec<&'a str> {
        let needle = fragment.trim().to_lowercase();
        self.symptoms().filter(|s| s.contains(&needle)).collect()
    }

    /// Split observed tokens into those the dataset knows and those it does
    /// not. Unknown tokens can never match any disease.
    pub fn partition(&self, observed: &ObservedSymptoms) -> (ObservedSymptoms, Vec<String>) {
        let (known, unknown): (Vec<&str>, Vec<&str>) =
            observed.iter().partition(|token| self.contains(token));
        (
            ObservedSymptoms::new(known),
            unknown.into_iter().map(str::to_string).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DiseaseRecord> {
        vec![
            DiseaseRecord::new("Malaria").with_symptoms("Fever, chills, sweating"),
            DiseaseRecord::new("Dengue").with_symptoms("fever, rash, joint pain"),
            DiseaseRecord::new("Unknown Rash").with_symptoms(""),
            DiseaseRecord::new("Scabies").with_symptoms("itching, rash, itching"),
        ]
    }

    #[test]
    fn index_maps_symptom_to_diseases_in_record_order() {
        let index = build_index(&records());
        assert_eq!(index.diseases_for("fever"), ["malaria", "dengue"]);
        assert_eq!(index.diseases_for("rash"), ["dengue", "scabies"]);
        assert!(index.diseases_for("cough").is_empty());
    }

    #[test]
    fn repeated_token_in_one_record_is_not_deduplicated() {
        let index = build_index(&records());
        assert_eq!(index.diseases_for("itching"), ["scabies", "scabies"]);
    }

    #[test]
    fn symptoms_are_sorted_and_distinct() {
        let index = build_index(&records());
        let all: Vec<&str> = index.symptoms().collect();
        assert_eq!(
            all,
            vec!["chills", "fever", "itching", "joint pain", "rash", "sweating"]
        );
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn empty_records_give_empty_index() {
        let index = build_index(&[]);
        assert!(index.is_empty());
        assert_eq!(index.symptoms().count(), 0);
    }

    #[test]
    fn filter_matches_fragments_case_insensitively() {
        let index = build_index(&records());
        assert_eq!(index.filter("PAIN"), vec!["joint pain"]);
        assert_eq!(index.filter("  ").len(), 6);
    }

    #[test]
    fn partition_separates_unknown_tokens() {
        let index = build_index(&records());
        let observed = ObservedSymptoms::new(["fever", "headache", "rash"]);
        let (known, unknown) = index.partition(&observed);

        assert_eq!(known.iter().collect::<Vec<_>>(), vec!["fever", "rash"]);
        assert_eq!(unknown, vec!["headache"]);
    }

    #[test]
    fn building_twice_is_identical() {
        let recs = records();
        assert_eq!(build_index(&recs), build_index(&recs));
    }
}
