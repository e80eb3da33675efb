//! The table of recognized dataset columns.
//!
//! Column presence in the source spreadsheet is dynamic. Rather than probing
//! for columns throughout the code, every column the system understands is
//! listed here once, together with whether it is required. Optional fields
//! default to the empty string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A column the dataset loader recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Symptoms,
    RedFlags,
    About,
    Care,
    Transmission,
    Prevention,
    Treatment,
    Medicines,
    HerbalRemedies,
    Refs,
}

impl Field {
    /// Every recognized field, required first.
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Symptoms,
        Field::RedFlags,
        Field::About,
        Field::Care,
        Field::Transmission,
        Field::Prevention,
        Field::Treatment,
        Field::Medicines,
        Field::HerbalRemedies,
        Field::Refs,
    ];

    /// The normalized column header for this field.
    pub fn column(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Symptoms => "symptoms",
            Field::RedFlags => "red_flags",
            Field::About => "about",
            Field::Care => "care",
            Field::Transmission => "transmission",
            Field::Prevention => "prevention",
            Field::Treatment => "treatment",
            Field::Medicines => "medicines",
            Field::HerbalRemedies => "herbal_remedies",
            Field::Refs => "refs",
        }
    }

    /// Only `name` must be present in the source file.
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name)
    }

    /// Resolve a raw header cell to a recognized field.
    ///
    /// The header is trimmed and lower-cased first, so `" Red_Flags "`
    /// resolves to [`Field::RedFlags`].
    pub fn from_header(raw: &str) -> Option<Field> {
        let header = normalize_header(raw);
        Field::ALL.into_iter().find(|f| f.column() == header)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Trim and lower-case a column header.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}
