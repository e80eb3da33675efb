//! Path-keyed dataset cache.
//!
//! A dataset is read at most once per path for the lifetime of the cache.
//! There is no eviction and no file watching: a changed file is only picked
//! up after an explicit [`DatasetCache::reload`] or
//! [`DatasetCache::invalidate`].
//!
//! Paths are keyed as given, without canonicalization, so `data/x.csv` and
//! `./data/x.csv` are separate entries.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use swasth_contracts::{SwasthError, SwasthResult};

use crate::catalog::Catalog;
use crate::source::RecordSource;
use crate::spreadsheet::SpreadsheetSource;

/// Memoizes loaded catalogs by file path.
pub struct DatasetCache<S: RecordSource = SpreadsheetSource> {
    source: S,
    entries: Mutex<HashMap<PathBuf, Arc<Catalog>>>,
}

impl DatasetCache<SpreadsheetSource> {
    /// A cache that reads workbooks or delimited text by file extension.
    pub fn spreadsheet() -> Self {
        Self::new(SpreadsheetSource::default())
    }
}

impl<S: RecordSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> SwasthResult<MutexGuard<'_, HashMap<PathBuf, Arc<Catalog>>>> {
        self.entries.lock().map_err(|e| SwasthError::CacheError {
            reason: format!("dataset cache lock poisoned: {}", e),
        })
    }

    /// Return the catalog for `path`, loading it on first use.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn get_or_load(&self, path: &Path) -> SwasthResult<Arc<Catalog>> {
        let mut entries = self.lock()?;

        if let Some(catalog) = entries.get(path) {
            debug!(path = %path.display(), "dataset cache hit");
            return Ok(Arc::clone(catalog));
        }

        let records = self.source.load(path)?;
        let catalog = Arc::new(Catalog::from_source(path, records));
        info!(
            path = %path.display(),
            records = catalog.records().len(),
            symptoms = catalog.index().len(),
            "dataset cached"
        );
        entries.insert(path.to_path_buf(), Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Drop the cached entry for `path`. Returns whether one existed.
    ///
    /// Catalogs already handed out stay valid; they are simply no longer
    /// shared with future callers.
    pub fn invalidate(&self, path: &Path) -> SwasthResult<bool> {
        let removed = self.lock()?.remove(path).is_some();
        debug!(path = %path.display(), removed, "dataset cache entry invalidated");
        Ok(removed)
    }

    /// Re-read `path` from disk, replacing any cached entry.
    pub fn reload(&self, path: &Path) -> SwasthResult<Arc<Catalog>> {
        self.invalidate(path)?;
        self.get_or_load(path)
    }

    /// Drop every cached entry.
    pub fn clear(&self) -> SwasthResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    pub fn contains(&self, path: &Path) -> SwasthResult<bool> {
        Ok(self.lock()?.contains_key(path))
    }

    pub fn len(&self) -> SwasthResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> SwasthResult<bool> {
        Ok(self.lock()?.is_empty())
    }
}
