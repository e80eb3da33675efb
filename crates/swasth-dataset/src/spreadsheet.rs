//! Format selection by file extension.

use std::path::Path;

use tracing::debug;

use swasth_contracts::{DiseaseRecord, SwasthResult};

use crate::csv_source::CsvRecordSource;
use crate::source::RecordSource;
use crate::xlsx_source::XlsxRecordSource;

/// Reads workbooks (`.xlsx`, `.xls`, `.ods`, ...) with [`XlsxRecordSource`]
/// and everything else as delimited text with [`CsvRecordSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetSource {
    csv: CsvRecordSource,
    xlsx: XlsxRecordSource,
}

impl RecordSource for SpreadsheetSource {
    fn load(&self, path: &Path) -> SwasthResult<Vec<DiseaseRecord>> {
        if XlsxRecordSource::handles(path) {
            debug!(path = %path.display(), "reading dataset as workbook");
            self.xlsx.load(path)
        } else {
            debug!(path = %path.display(), "reading dataset as delimited text");
            self.csv.load(path)
        }
    }
}

/// Load the table at `path`, picking the reader from its extension.
pub fn load(path: &Path) -> SwasthResult<Vec<DiseaseRecord>> {
    SpreadsheetSource::default().load(path)
}
