//! Workbook implementation of `RecordSource`.
//!
//! Reads the first worksheet of an Excel or OpenDocument workbook. The first
//! row of the sheet's used range is the header row.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use tracing::{debug, info};

use swasth_contracts::{DiseaseRecord, SwasthError, SwasthResult};

use crate::columns::ColumnMap;
use crate::source::RecordSource;

/// File extensions read as workbooks rather than delimited text.
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Loads disease records from the first sheet of a workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxRecordSource;

impl XlsxRecordSource {
    /// Whether `path` has a workbook extension (case-insensitive).
    pub fn handles(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| WORKBOOK_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

impl RecordSource for XlsxRecordSource {
    fn load(&self, path: &Path) -> SwasthResult<Vec<DiseaseRecord>> {
        let origin = path.display().to_string();
        if !path.exists() {
            return Err(SwasthError::DatasetRead {
                path: origin,
                reason: "file not found".to_string(),
            });
        }

        let parse_err = |reason: String| SwasthError::DatasetParse {
            path: origin.clone(),
            reason,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| parse_err(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| parse_err("workbook has no worksheets".to_string()))?
            .map_err(|e| parse_err(e.to_string()))?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(|c| c.to_string().trim().to_string()).collect::<Vec<_>>());

        let headers = rows.next().unwrap_or_default();
        let columns = ColumnMap::resolve(&headers)?;

        let mut records = Vec::new();
        for cells in rows {
            if cells.iter().all(String::is_empty) {
                debug!(path = %origin, "blank worksheet row skipped");
                continue;
            }
            records.push(columns.record(|i| cells.get(i).map(String::as_str)));
        }

        info!(path = %origin, records = records.len(), "loaded workbook dataset");
        Ok(records)
    }
}
