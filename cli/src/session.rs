//! Query handling shared by the one-shot subcommands and the interactive
//! session.
//!
//! Each request goes through the dataset cache, so the file is read once and
//! later requests reuse the same catalog until `reload`.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use swasth_contracts::{DiseaseRecord, ObservedSymptoms, ScoredDisease};
use swasth_dataset::{Catalog, DatasetCache};
use swasth_triage::SymptomScorer;

use crate::config::AppConfig;
use crate::error::CliResult;
use crate::render;

const HELP: &str = "\
Commands:
  search <name>             look up a disease by (part of) its name
  check <symptom, ...>      rank diseases by comma-separated symptoms
  symptoms [filter]         list known symptoms, optionally filtered
  reload                    re-read the dataset file
  help                      show this message
  quit                      leave the session";

/// Whether the interactive loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    observed: Vec<&'a str>,
    unknown: Vec<String>,
    candidates: Vec<ScoredDisease>,
}

pub struct Session<'c> {
    cache: &'c DatasetCache,
    dataset: PathBuf,
    scorer: SymptomScorer,
    show_all_matches: bool,
    json: bool,
}

impl<'c> Session<'c> {
    pub fn new(cache: &'c DatasetCache, config: &AppConfig, json: bool) -> Self {
        Self {
            cache,
            dataset: config.dataset.path.clone(),
            scorer: SymptomScorer::new(config.triage.clone()),
            show_all_matches: config.display.show_all_matches,
            json,
        }
    }

    fn catalog(&self) -> CliResult<Arc<Catalog>> {
        Ok(self.cache.get_or_load(&self.dataset)?)
    }

    /// Look up diseases by name. Only the first match is shown unless
    /// `show_all_matches` is set.
    pub fn search<W: Write>(&self, out: &mut W, query: &str) -> CliResult<()> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            writeln!(out, "Enter a disease name to search.")?;
            return Ok(());
        }

        let catalog = self.catalog()?;
        let matches = catalog.search(&query);
        let shown: &[&DiseaseRecord] = if self.show_all_matches {
            &matches
        } else {
            &matches[..matches.len().min(1)]
        };
        debug!(query = %query, matches = matches.len(), shown = shown.len(), "name search");

        if self.json {
            if self.show_all_matches {
                render::json(out, shown)?;
            } else {
                render::json(out, &shown.first())?;
            }
            return Ok(());
        }

        if shown.is_empty() {
            render::not_found(out)?;
        }
        for record in shown {
            render::disease_card(out, record)?;
        }
        Ok(())
    }

    /// Rank diseases against the observed symptoms.
    pub fn check<W: Write>(&self, out: &mut W, observed: &ObservedSymptoms) -> CliResult<()> {
        if observed.is_empty() {
            writeln!(out, "Enter at least one symptom, separated by commas.")?;
            return Ok(());
        }

        let catalog = self.catalog()?;
        let (_, unknown) = catalog.index().partition(observed);
        let ranked = catalog.rank(&self.scorer, observed);

        if self.json {
            let report = CheckReport {
                observed: observed.iter().collect(),
                unknown,
                candidates: ranked,
            };
            render::json(out, &report)?;
            return Ok(());
        }

        render::unknown_symptoms(out, &unknown)?;
        render::ranking(out, &ranked)?;
        Ok(())
    }

    /// List selectable symptoms containing `filter`.
    pub fn symptoms<W: Write>(&self, out: &mut W, filter: &str) -> CliResult<()> {
        let catalog = self.catalog()?;
        let symptoms = catalog.index().filter(filter);

        if self.json {
            render::json(out, &symptoms)?;
        } else {
            render::symptom_list(out, &symptoms)?;
        }
        Ok(())
    }

    /// Drop the cached dataset and read it again.
    pub fn reload<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let catalog = self.cache.reload(&self.dataset)?;
        info!(path = %self.dataset.display(), "dataset reloaded on request");
        writeln!(
            out,
            "Reloaded {} diseases from {}.",
            catalog.records().len(),
            self.dataset.display()
        )?;
        Ok(())
    }

    /// Execute one line of interactive input.
    pub fn handle<W: Write>(&self, line: &str, out: &mut W) -> CliResult<Flow> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => {}
            "search" | "s" => self.search(out, rest)?,
            "check" | "c" => self.check(out, &ObservedSymptoms::from_free_text(rest))?,
            "symptoms" => self.symptoms(out, rest)?,
            "reload" => self.reload(out)?,
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            other => writeln!(out, "Unknown command '{}'. Type 'help' for a list.", other)?,
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until it ends or the user quits.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> CliResult<()> {
        writeln!(out, "Type 'help' for commands.")?;
        write!(out, "swasth> ")?;
        out.flush()?;

        for line in input.lines() {
            if self.handle(&line?, out)? == Flow::Quit {
                break;
            }
            write!(out, "swasth> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use swasth_contracts::SwasthError;

    use super::*;
    use crate::error::CliError;

    const SAMPLE_DATASET: &str = include_str!("../../data/odisha_diseases.csv");

    fn config_for(path: &Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.dataset.path = path.to_path_buf();
        config
    }

    fn sample(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("diseases.csv");
        std::fs::write(&path, SAMPLE_DATASET).unwrap();
        path
    }

    fn run_script(session: &Session<'_>, script: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn search_then_check_then_quit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&sample(&dir)), false);

        let out = run_script(
            &session,
            "search FLU\ncheck fever, breathlessness\nquit\nsearch malaria\n",
        );

        assert!(out.contains("INFLUENZA-LIKE ILLNESS"));
        assert!(out.contains("Red-flag Signs: breathlessness"));
        assert!(out.contains("- Influenza-Like Illness - matched symptoms: 1 - Risk Level: High"));
        assert!(out.contains("- Malaria - matched symptoms: 1 - Risk Level: Low"));
        assert!(!out.contains("MALARIA"));
    }

    #[test]
    fn only_first_match_is_shown_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.csv");
        std::fs::write(&path, "name,about\nMalaria,first\nmalaria,second\n").unwrap();
        let cache = DatasetCache::spreadsheet();

        let mut out = Vec::new();
        Session::new(&cache, &config_for(&path), false)
            .search(&mut out, "malaria")
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("About: first"));
        assert!(!text.contains("About: second"));

        let mut config = config_for(&path);
        config.display.show_all_matches = true;
        let mut out = Vec::new();
        Session::new(&cache, &config, false)
            .search(&mut out, "malaria")
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("About: first"));
        assert!(text.contains("About: second"));
    }

    #[test]
    fn no_match_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&sample(&dir)), false);

        let out = run_script(&session, "search leprosy\ncheck hiccups\n");
        assert!(out.contains(render::NOT_FOUND));
        assert!(out.contains("Not in the symptom list: hiccups"));
        assert!(out.contains(render::NO_CONDITIONS));
    }

    #[test]
    fn reload_picks_up_changed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diseases.csv");
        std::fs::write(&path, "name\nmalaria\n").unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&path), false);

        let mut out = Vec::new();
        session.search(&mut out, "typhoid").unwrap();
        std::fs::write(&path, "name\nmalaria\ntyphoid\n").unwrap();
        session.search(&mut out, "typhoid").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(render::NOT_FOUND).count(), 2);

        let out = run_script(&session, "reload\nsearch typhoid\n");
        assert!(out.contains("Reloaded 2 diseases"));
        assert!(out.contains("TYPHOID"));
    }

    #[test]
    fn missing_name_column_aborts_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "disease,symptoms\nmalaria,fever\n").unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&path), false);

        let mut out = Vec::new();
        let result = session.run(Cursor::new("search malaria\n"), &mut out);
        assert!(matches!(
            result,
            Err(CliError::Swasth(SwasthError::MissingNameColumn { .. }))
        ));
    }

    #[test]
    fn unknown_and_blank_commands() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&sample(&dir)), false);

        let out = run_script(&session, "\ndiagnose me\nsearch   \ncheck , ,\nhelp\n");
        assert!(out.contains("Unknown command 'diagnose'"));
        assert!(out.contains("Enter a disease name to search."));
        assert!(out.contains("Enter at least one symptom"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn symptoms_lists_filtered_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&sample(&dir)), false);

        let mut out = Vec::new();
        session.symptoms(&mut out, "itch").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["itching", "itching at night"]);
    }

    #[test]
    fn json_check_report_is_ranked() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&sample(&dir)), true);

        let mut out = Vec::new();
        session
            .check(&mut out, &ObservedSymptoms::new(["fever", "cough", "breathlessness"]))
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

        // Tuberculosis and influenza both match two symptoms; source order breaks the tie.
        let candidates = report["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0]["name"], "tuberculosis");
        assert_eq!(candidates[0]["score"], 2);
        assert_eq!(candidates[0]["risk"], "LOW");
        assert_eq!(candidates[1]["name"], "influenza-like illness");
        assert_eq!(candidates[1]["risk"], "HIGH");
        assert_eq!(report["unknown"][0], "breathlessness");
    }

    #[test]
    fn json_search_without_match_is_null() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::spreadsheet();
        let session = Session::new(&cache, &config_for(&sample(&dir)), true);

        let mut out = Vec::new();
        session.search(&mut out, "leprosy").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.is_null());
    }
}
