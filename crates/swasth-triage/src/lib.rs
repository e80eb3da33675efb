//! # swasth-triage
//!
//! Lookup and triage logic over loaded disease records.
//!
//! ## Overview
//!
//! - [`build_index`] derives a [`SymptomIndex`] (symptom → diseases) and the
//!   sorted list of selectable symptoms.
//! - [`search_by_name`] / [`lookup`] find diseases by case-insensitive
//!   substring.
//! - [`SymptomScorer`] scores every disease against a set of observed
//!   symptoms and assigns a [`RiskTier`](swasth_contracts::RiskTier);
//!   [`rank`] orders the result for display.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use swasth_contracts::ObservedSymptoms;
//! use swasth_triage::{rank, score};
//!
//! let observed = ObservedSymptoms::new(["fever", "cough"]);
//! for entry in rank(score(&records, &observed)) {
//!     println!("{} {} {}", entry.name, entry.score, entry.risk);
//! }
//! ```
//!
//! Everything here is pure: nothing reads files or holds mutable state.

pub mod config;
pub mod index;
pub mod scorer;
pub mod search;

pub use config::TriageConfig;
pub use index::{build_index, SymptomIndex};
pub use scorer::{rank, score, ScoreTable, SymptomScorer};
pub use search::{lookup, search_by_name};

// ── Tests ─────────────────────────────────────────────────────────────────────
