//! Plain-text rendering of lookup and triage results.
//!
//! Every function writes to a caller-supplied `Write` so the session can be
//! driven and checked without a terminal.

use std::io::{self, Write};

use serde::Serialize;

use swasth_contracts::{DiseaseRecord, Field, ScoredDisease};

/// Sections of a disease card, in display order. Empty fields are skipped.
const CARD_SECTIONS: [(Field, &str); 10] = [
    (Field::About, "About"),
    (Field::Symptoms, "Symptoms"),
    (Field::RedFlags, "Red-flag Signs"),
    (Field::Care, "First Aid / Immediate Care"),
    (Field::Transmission, "Transmission"),
    (Field::Prevention, "Prevention"),
    (Field::Treatment, "Treatment"),
    (Field::Medicines, "Local Medicines"),
    (Field::HerbalRemedies, "Herbal Remedies"),
    (Field::Refs, "References"),
];

pub const DISCLAIMER: &str =
    "Informational only - always consult a qualified clinician for diagnosis or treatment.";

pub const NOT_FOUND: &str = "No disease found. Please check spelling.";

pub const NO_CONDITIONS: &str = "No conditions match the selected symptoms.";

/// Capitalize the first letter of every word, like `"Influenza-Like Illness"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut start_of_word = true;
    for c in name.chars() {
        if start_of_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        start_of_word = !c.is_alphabetic();
    }
    out
}

pub fn disclaimer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "SwasthBot - Odisha Disease Info, Herbal and Medicine Guide")?;
    writeln!(out, "{}", DISCLAIMER)?;
    writeln!(out)
}

/// Render one disease as a card: upper-cased heading, then non-empty sections.
pub fn disease_card<W: Write>(out: &mut W, record: &DiseaseRecord) -> io::Result<()> {
    let heading = record.name.to_uppercase();
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", "=".repeat(heading.chars().count()))?;

    for (field, label) in CARD_SECTIONS {
        let text = record.text(field);
        if !text.is_empty() {
            writeln!(out, "{}: {}", label, text)?;
        }
    }
    writeln!(out)
}

pub fn not_found<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", NOT_FOUND)
}

/// Render ranked candidates, most relevant first.
pub fn ranking<W: Write>(out: &mut W, ranked: &[ScoredDisease]) -> io::Result<()> {
    if ranked.is_empty() {
        return writeln!(out, "{}", NO_CONDITIONS);
    }

    writeln!(out, "Possible conditions based on symptoms (sorted by relevance):")?;
    for entry in ranked {
        writeln!(
            out,
            "- {} - matched symptoms: {} - Risk Level: {}",
            title_case(&entry.name),
            entry.score,
            entry.risk
        )?;
    }
    Ok(())
}

/// Warn about observed tokens no disease lists as a symptom.
pub fn unknown_symptoms<W: Write>(out: &mut W, unknown: &[String]) -> io::Result<()> {
    if unknown.is_empty() {
        return Ok(());
    }
    writeln!(out, "Not in the symptom list: {}", unknown.join(", "))
}

pub fn symptom_list<W: Write>(out: &mut W, symptoms: &[&str]) -> io::Result<()> {
    if symptoms.is_empty() {
        return writeln!(out, "No symptoms found.");
    }
    for symptom in symptoms {
        writeln!(out, "{}", symptom)?;
    }
    Ok(())
}

/// Pretty-printed JSON for an external renderer.
pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use swasth_contracts::RiskTier;

    use super::*;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("influenza-like illness"), "Influenza-Like Illness");
        assert_eq!(title_case("malaria"), "Malaria");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn card_skips_empty_sections_in_fixed_order() {
        let mut record = DiseaseRecord::new("Cholera")
            .with_symptoms("watery diarrhoea, vomiting")
            .with_red_flags("sunken eyes");
        record.care = "Start ORS immediately.".to_string();
        record.about = "Acute diarrhoeal infection.".to_string();

        let text = rendered(|out| disease_card(out, &record));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "CHOLERA");
        assert_eq!(lines[1], "=======");
        assert_eq!(lines[2], "About: Acute diarrhoeal infection.");
        assert_eq!(lines[3], "Symptoms: watery diarrhoea, vomiting");
        assert_eq!(lines[4], "Red-flag Signs: sunken eyes");
        assert_eq!(lines[5], "First Aid / Immediate Care: Start ORS immediately.");
        assert!(!text.contains("Herbal Remedies"));
        assert!(!text.contains("References"));
    }

    #[test]
    fn card_shows_list_fields_as_written() {
        let record = DiseaseRecord::from_cells(|field| match field {
            Field::Name => Some("Malaria"),
            Field::Symptoms => Some("Fever, Chills, Sweating"),
            Field::RedFlags => Some("Seizures, Confusion"),
            _ => None,
        });

        let text = rendered(|out| disease_card(out, &record));

        assert!(text.contains("Symptoms: Fever, Chills, Sweating\n"));
        assert!(text.contains("Red-flag Signs: Seizures, Confusion\n"));
    }

    #[test]
    fn ranking_lists_entries_in_given_order() {
        let ranked = vec![
            ScoredDisease {
                name: "influenza-like illness".to_string(),
                score: 2,
                risk: RiskTier::High,
                matched: BTreeSet::new(),
                matched_red_flags: BTreeSet::new(),
            },
            ScoredDisease {
                name: "malaria".to_string(),
                score: 1,
                risk: RiskTier::Low,
                matched: BTreeSet::new(),
                matched_red_flags: BTreeSet::new(),
            },
        ];

        let text = rendered(|out| ranking(out, &ranked));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "- Influenza-Like Illness - matched symptoms: 2 - Risk Level: High"
        );
        assert_eq!(lines[2], "- Malaria - matched symptoms: 1 - Risk Level: Low");
    }

    #[test]
    fn empty_ranking_says_no_conditions() {
        let text = rendered(|out| ranking(out, &[]));
        assert_eq!(text.trim(), NO_CONDITIONS);
    }

    #[test]
    fn json_serializes_risk_uppercase() {
        let entry = ScoredDisease {
            name: "dengue".to_string(),
            score: 3,
            risk: RiskTier::Medium,
            matched: ["fever".to_string()].into_iter().collect(),
            matched_red_flags: BTreeSet::new(),
        };
        let text = rendered(|out| json(out, &[entry]));
        assert!(text.contains("\"risk\": \"MEDIUM\""));
        assert!(text.contains("\"fever\""));
    }
}
