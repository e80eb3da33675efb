//! # swasth-dataset
//!
//! Loads the disease spreadsheet into normalized records and keeps the result
//! for the lifetime of the process.
//!
//! ## Overview
//!
//! - [`RecordSource`] is the loader trait. [`CsvRecordSource`] reads CSV/TSV
//!   exports and [`XlsxRecordSource`] reads the first sheet of a workbook.
//!   [`SpreadsheetSource`] picks between them by file extension.
//! - [`Catalog`] pairs the records with their [`SymptomIndex`](swasth_triage::SymptomIndex).
//! - [`DatasetCache`] memoizes catalogs by file path, with explicit
//!   `reload`/`invalidate` entry points.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use swasth_dataset::DatasetCache;
//!
//! let cache = DatasetCache::spreadsheet();
//! let catalog = cache.get_or_load(Path::new("data/odisha_diseases.csv"))?;
//! if let Some(record) = catalog.lookup("malaria") {
//!     println!("{}", record.about);
//! }
//! ```

pub mod cache;
pub mod catalog;
mod columns;
pub mod csv_source;
pub mod source;
pub mod spreadsheet;
pub mod xlsx_source;

pub use cache::DatasetCache;
pub use catalog::Catalog;
pub use csv_source::CsvRecordSource;
pub use source::RecordSource;
pub use spreadsheet::{load, SpreadsheetSource};
pub use xlsx_source::XlsxRecordSource;

// ── Tests ─────────────────────────────────────────────────────────────────────
