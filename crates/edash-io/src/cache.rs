//! Session cache for loaded tables.
//!
//! Every dashboard recomputation asks for the raw table again. The cache
//! keeps one [`DataFrame`] per source file and hands out `Arc` clones; an
//! entry is reused only while the file's modification time and length are
//! unchanged, otherwise the file is read again and the entry replaced.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::table::read_table;

/// Identity of a source file at the time it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStamp {
    pub modified: SystemTime,
    pub len: u64,
}

impl SourceStamp {
    pub fn of(path: &Path) -> Result<Self> {
        let meta =
            fs::metadata(path).with_context(|| format!("reading metadata of {}", path.display()))?;
        let modified = meta
            .modified()
            .with_context(|| format!("reading modification time of {}", path.display()))?;
        Ok(Self {
            modified,
            len: meta.len(),
        })
    }
}

#[derive(Debug)]
struct CachedTable {
    stamp: SourceStamp,
    table: Arc<DataFrame>,
}

/// Tables keyed by canonical source path.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: RwLock<HashMap<PathBuf, CachedTable>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared cache, for callers that hand one instance to several services.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Return the cached table for `path`, reading it with [`read_table`] on a
    /// miss or when the file changed since it was cached.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<DataFrame>> {
        self.get_or_load_with(path, |p| read_table(p))
    }

    /// Same as [`TableCache::get_or_load`] with a caller-supplied loader.
    pub fn get_or_load_with<F>(&self, path: impl AsRef<Path>, load: F) -> Result<Arc<DataFrame>>
    where
        F: FnOnce(&Path) -> Result<DataFrame>,
    {
        let path = path.as_ref();
        let key = fs::canonicalize(path)
            .with_context(|| format!("resolving {}", path.display()))?;
        let stamp = SourceStamp::of(&key)?;

        if let Some(entry) = self.entries.read().get(&key) {
            if entry.stamp == stamp {
                debug!(path = %key.display(), "table cache hit");
                return Ok(Arc::clone(&entry.table));
            }
        }

        debug!(path = %key.display(), "table cache miss");
        let table = Arc::new(load(&key)?);
        self.entries.write().insert(
            key,
            CachedTable {
                stamp,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    /// Drop the entry for `path`, if any. Returns whether one was removed.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.write().remove(&key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
