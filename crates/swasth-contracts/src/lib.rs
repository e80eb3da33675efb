//! # swasth-contracts
//!
//! Shared types and error definitions for SwasthBot.
//!
//! Every crate in the workspace imports from here. The only logic in this
//! crate is token and name normalization, which defines what a
//! "normalized" record looks like for everyone else.

pub mod error;
pub mod field;
pub mod record;
pub mod symptoms;
pub mod triage;

pub use error::{SwasthError, SwasthResult};
pub use field::Field;
pub use record::DiseaseRecord;
pub use symptoms::ObservedSymptoms;
pub use triage::{RiskTier, ScoredDisease};
