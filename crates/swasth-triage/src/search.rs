//! Disease lookup by name.

use tracing::debug;

use swasth_contracts::record::normalize_name;
use swasth_contracts::DiseaseRecord;

/// Every record whose name contains `query`, in source row order.
///
/// Matching is a case-insensitive substring test. Zero matches is an empty
/// vector, never an error. A blank query would match every record, so it is
/// answered with no matches instead; callers should not send one.
pub fn search_by_name<'a>(records: &'a [DiseaseRecord], query: &str) -> Vec<&'a DiseaseRecord> {
    let needle = normalize_name(query);
    if needle.is_empty() {
        debug!("blank disease query; returning no matches");
        return Vec::new();
    }

    let matches: Vec<&DiseaseRecord> = records
        .iter()
        .filter(|r| r.name.contains(&needle))
        .collect();

    debug!(query = %needle, matches = matches.len(), "searched diseases by name");
    matches
}

/// The primary result for a name query: the first match in source order.
pub fn lookup<'a>(records: &'a [DiseaseRecord], query: &str) -> Option<&'a DiseaseRecord> {
    search_by_name(records, query).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DiseaseRecord> {
        vec![
            DiseaseRecord::new("Influenza-like illness"),
            DiseaseRecord::new("Malaria"),
            DiseaseRecord::new("Avian flu"),
            DiseaseRecord::new("malaria"),
        ]
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let recs = records();
        let names: Vec<&str> = search_by_name(&recs, "FLU")
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["influenza-like illness", "avian flu"]);
    }

    #[test]
    fn zero_matches_is_empty_not_error() {
        let recs = records();
        assert!(search_by_name(&recs, "cholera").is_empty());
        assert!(lookup(&recs, "cholera").is_none());
    }

    #[test]
    fn blank_query_matches_nothing() {
        let recs = records();
        assert!(search_by_name(&recs, "   ").is_empty());
    }

    #[test]
    fn duplicate_names_are_kept_and_first_wins() {
        let recs = records();
        assert_eq!(search_by_name(&recs, "malaria").len(), 2);
        let primary = lookup(&recs, "malaria").unwrap();
        assert!(std::ptr::eq(primary, &recs[1]));
    }
}
