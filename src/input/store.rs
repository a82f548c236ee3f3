use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::input::{InputError, load_reference_tables};
use crate::model::schema::ReferenceSchema;
use crate::model::table::ReferenceTables;

#[derive(Debug, Clone)]
pub struct ReferenceSources {
    pub summary: PathBuf,
    pub graft: Option<PathBuf>,
    pub schema: ReferenceSchema,
}

/// Owned handle on the reference tables.
///
/// Tables are loaded once on construction. Scoring calls take a cheap
/// [`snapshot`](ReferenceStore::snapshot) and never observe a half-applied
/// refresh; a failed refresh keeps the previous tables.
#[derive(Debug)]
pub struct ReferenceStore {
    sources: Option<ReferenceSources>,
    current: RwLock<Arc<ReferenceTables>>,
    generation: AtomicU64,
}

impl ReferenceStore {
    pub fn load(sources: ReferenceSources) -> Result<Self, InputError> {
        let tables = read_sources(&sources)?;
        Ok(Self {
            sources: Some(sources),
            current: RwLock::new(Arc::new(tables)),
            generation: AtomicU64::new(1),
        })
    }

    /// Wraps tables the caller already holds in memory. Such a store has
    /// nothing to refresh from.
    pub fn from_tables(tables: ReferenceTables) -> Self {
        Self {
            sources: None,
            current: RwLock::new(Arc::new(tables)),
            generation: AtomicU64::new(1),
        }
    }

    pub fn snapshot(&self) -> Arc<ReferenceTables> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Re-reads the source files and swaps the new tables in.
    pub fn refresh(&self) -> Result<Arc<ReferenceTables>, InputError> {
        let Some(sources) = &self.sources else {
            return Ok(self.snapshot());
        };
        let tables = Arc::new(read_sources(sources)?);
        {
            let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
            *guard = Arc::clone(&tables);
        }
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(
            generation,
            rows = tables.summary.len(),
            "reference tables refreshed"
        );
        Ok(tables)
    }
}

fn read_sources(sources: &ReferenceSources) -> Result<ReferenceTables, InputError> {
    load_reference_tables(&sources.summary, sources.graft.as_deref(), &sources.schema)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/store.rs"]
mod tests;
