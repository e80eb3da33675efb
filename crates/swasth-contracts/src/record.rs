//! The disease record: one normalized row of the source table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::symptoms::parse_tokens;

/// One disease, as loaded from the dataset.
///
/// Every recognized field is always present. Optional text fields that were
/// missing from the source file hold the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Trimmed, lower-cased disease name. Not guaranteed unique.
    pub name: String,
    /// Symptom tokens in source order, duplicates preserved.
    pub symptoms: Vec<String>,
    /// Tokens that signal elevated risk when observed.
    pub red_flags: BTreeSet<String>,
    /// The symptoms cell as written in the source, for display.
    #[serde(default)]
    pub symptoms_text: String,
    /// The red-flags cell as written in the source, for display.
    #[serde(default)]
    pub red_flags_text: String,
    pub about: String,
    pub care: String,
    pub transmission: String,
    pub prevention: String,
    pub treatment: String,
    pub medicines: String,
    pub herbal_remedies: String,
    pub refs: String,
}

impl DiseaseRecord {
    /// Create a record with the given name and every other field empty.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            ..Self::default()
        }
    }

    /// Build a record from raw cell values.
    ///
    /// `cell` returns the raw text for a field, or `None` when the source has
    /// no such column. Absent and blank cells are treated identically.
    pub fn from_cells<'a, F>(mut cell: F) -> Self
    where
        F: FnMut(Field) -> Option<&'a str>,
    {
        let mut text = |field: Field| cell(field).unwrap_or_default().to_string();

        let name = normalize_name(&text(Field::Name));
        let symptoms_text = text(Field::Symptoms).trim().to_string();
        let red_flags_text = text(Field::RedFlags).trim().to_string();

        Self {
            name,
            symptoms: parse_tokens(&symptoms_text),
            red_flags: parse_tokens(&red_flags_text).into_iter().collect(),
            symptoms_text,
            red_flags_text,
            about: text(Field::About),
            care: text(Field::Care),
            transmission: text(Field::Transmission),
            prevention: text(Field::Prevention),
            treatment: text(Field::Treatment),
            medicines: text(Field::Medicines),
            herbal_remedies: text(Field::HerbalRemedies),
            refs: text(Field::Refs),
        }
    }

    /// Replace the symptom list by parsing a comma-delimited cell.
    pub fn with_symptoms(mut self, raw: &str) -> Self {
        self.symptoms = parse_tokens(raw);
        self.symptoms_text = raw.trim().to_string();
        self
    }

    /// Replace the red-flag set by parsing a comma-delimited cell.
    pub fn with_red_flags(mut self, raw: &str) -> Self {
        self.red_flags = parse_tokens(raw).into_iter().collect();
        self.red_flags_text = raw.trim().to_string();
        self
    }

    /// Distinct symptom tokens.
    pub fn symptom_set(&self) -> BTreeSet<&str> {
        self.symptoms.iter().map(String::as_str).collect()
    }

    /// The display text of a field. List fields keep the source cell's
    /// wording and order.
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Symptoms => self.symptoms_text.clone(),
            Field::RedFlags => self.red_flags_text.clone(),
            Field::About => self.about.clone(),
            Field::Care => self.care.clone(),
            Field::Transmission => self.transmission.clone(),
            Field::Prevention => self.prevention.clone(),
            Field::Treatment => self.treatment.clone(),
            Field::Medicines => self.medicines.clone(),
            Field::HerbalRemedies => self.herbal_remedies.clone(),
            Field::Refs => self.refs.clone(),
        }
    }
}

/// Trim and lower-case a disease name.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}
