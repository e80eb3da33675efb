//! Delimited-text implementation of `RecordSource`.
//!
//! Reads a spreadsheet export (CSV, or TSV for `.tsv`/`.tab` files) with a
//! header row.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;

use swasth_contracts::{DiseaseRecord, SwasthError, SwasthResult};

use crate::columns::ColumnMap;
use crate::source::RecordSource;

/// Loads disease records from a delimited text file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRecordSource;

impl CsvRecordSource {
    /// The delimiter used for `path`: tab for `.tsv`/`.tab`, comma otherwise.
    pub fn delimiter_for(path: &Path) -> u8 {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("tsv") | Some("tab") => b'\t',
            _ => b',',
        }
    }

    /// Parse records from any reader. `origin` names the input in errors.
    pub fn read<R: io::Read>(
        &self,
        reader: R,
        delimiter: u8,
        origin: &str,
    ) -> SwasthResult<Vec<DiseaseRecord>> {
        let parse_err = |e: csv::Error| SwasthError::DatasetParse {
            path: origin.to_string(),
            reason: e.to_string(),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(delimiter)
            .from_reader(reader);

        let columns = ColumnMap::resolve(rdr.headers().map_err(parse_err)?.iter())?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row.map_err(parse_err)?;
            records.push(columns.record(|i| row.get(i)));
        }

        Ok(records)
    }
}

impl RecordSource for CsvRecordSource {
    fn load(&self, path: &Path) -> SwasthResult<Vec<DiseaseRecord>> {
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|e| SwasthError::DatasetRead {
            path: origin.clone(),
            reason: e.to_string(),
        })?;

        let records = self.read(file, Self::delimiter_for(path), &origin)?;
        info!(path = %origin, records = records.len(), "loaded delimited dataset");
        Ok(records)
    }
}
