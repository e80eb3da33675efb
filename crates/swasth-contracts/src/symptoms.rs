//! Symptom token normalization.
//!
//! Symptom and red-flag cells are free-text, comma-delimited lists. They are
//! parsed into normalized tokens here, at the data-model boundary, so nothing
//! downstream ever sees the raw cell text.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Split a comma-delimited cell into trimmed, lower-cased, non-empty tokens.
///
/// Order and duplicates are preserved.
pub fn parse_tokens(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalize_token).collect()
}

/// Trim and lower-case one token. Blank input yields `None`.
pub fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_lowercase())
    }
}

/// The set of symptoms a user reports.
///
/// Construction normalizes every token, so the set only ever holds trimmed,
/// lower-cased, non-empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedSymptoms(BTreeSet<String>);

impl ObservedSymptoms {
    /// Build from already-separated tokens, e.g. a multi-select widget.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().collect()
    }

    /// Build from comma-separated free text, e.g. a voice transcript.
    pub fn from_free_text(text: &str) -> Self {
        Self(parse_tokens(text).into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Iterate tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Observed tokens that also appear in `other`, sorted.
    pub fn overlap<'a, I>(&self, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        other
            .into_iter()
            .filter(|t| self.0.contains(t.as_str()))
            .cloned()
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ObservedSymptoms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter_map(|s| normalize_token(s.as_ref()))
                .collect(),
        )
    }
}
