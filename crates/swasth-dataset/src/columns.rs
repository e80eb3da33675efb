//! Header resolution shared by every spreadsheet format.
//!
//! Headers are matched against the recognized [`Field`] table after trimming
//! and lower-casing. Unrecognized columns are ignored; when a recognized
//! header appears twice, the first column wins.

use std::collections::HashMap;

use tracing::{debug, warn};

use swasth_contracts::{field::normalize_header, DiseaseRecord, Field, SwasthError, SwasthResult};

/// Recognized field → column position.
#[derive(Debug, Clone)]
pub(crate) struct ColumnMap(HashMap<Field, usize>);

impl ColumnMap {
    /// Resolve a raw header row.
    ///
    /// Fails with `MissingNameColumn`, listing every normalized header, when
    /// none of them is `name`.
    pub(crate) fn resolve<I, S>(raw_headers: I) -> SwasthResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<String> = raw_headers
            .into_iter()
            .map(|h| normalize_header(h.as_ref()))
            .collect();

        let mut columns: HashMap<Field, usize> = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            match Field::from_header(header) {
                Some(field) => {
                    if columns.contains_key(&field) {
                        warn!(column = %header, position = i, "duplicate column ignored");
                    } else {
                        columns.insert(field, i);
                    }
                }
                None => debug!(column = %header, "unrecognized column ignored"),
            }
        }

        if !columns.contains_key(&Field::Name) {
            return Err(SwasthError::MissingNameColumn { found: headers });
        }

        for field in Field::ALL {
            if !columns.contains_key(&field) {
                debug!(column = %field, "column absent; filling with empty values");
            }
        }

        Ok(Self(columns))
    }

    /// Build a record from one row. `cell` returns the text at a column
    /// position, or `None` past the end of a short row.
    pub(crate) fn record<'a, F>(&self, cell: F) -> DiseaseRecord
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        DiseaseRecord::from_cells(|field| self.0.get(&field).and_then(|&i| cell(i)))
    }
}
