//! The loader seam.
//!
//! `RecordSource` is the boundary between the on-disk table and everything
//! else. The cache and catalog only ever see normalized `DiseaseRecord`s, so
//! a source for another spreadsheet format plugs in without touching them.

use std::path::Path;

use swasth_contracts::{DiseaseRecord, SwasthResult};

/// Reads a disease table from disk and normalizes it.
pub trait RecordSource: Send + Sync {
    /// Load every row of the table at `path`, in source order.
    ///
    /// Implementations must:
    /// - trim and lower-case every column header,
    /// - trim and lower-case every `name` value,
    /// - materialize every optional recognized field as the empty string when
    ///   its column is absent,
    /// - fail with `SwasthError::MissingNameColumn` (listing every discovered
    ///   header) when no header normalizes to `name`.
    fn load(&self, path: &Path) -> SwasthResult<Vec<DiseaseRecord>>;
}
