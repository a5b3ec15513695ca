//! Save-on-mutation catalog operations.
//!
//! A [`Library`] owns the session's catalog together with the [`Store`] it
//! came from. Every mutating operation builds the updated catalog, persists
//! it, and only then swaps it in, so memory and disk agree after each call.

use tracing::{debug, info};

use crate::catalog::{Catalog, Statistics};
use crate::error::{Result, ShelfError};
use crate::store::{LoadOutcome, Store};
use crate::types::{Book, SearchField};

/// Catalog plus the file it persists to
#[derive(Debug)]
pub struct Library {
    catalog: Catalog,
    store: Store,
    load_outcome: LoadOutcome,
}

impl Library {
    /// Load the catalog from `store`; never fails, see [`Store::load`]
    pub fn open(store: Store) -> Self {
        let (catalog, load_outcome) = store.load();
        info!(
            "Opened library {:?} ({} books, {:?})",
            store.path(),
            catalog.len(),
            load_outcome
        );
        Self {
            catalog,
            store,
            load_outcome,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// How the catalog was obtained at open time
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Append a book and persist the full catalog
    pub fn add(&mut self, book: Book) -> Result<()> {
        let mut updated = self.catalog.clone();
        debug!("Adding book: {}", book);
        updated.push(book);
        self.commit(updated)
    }

    /// Remove every book whose title matches, ignoring case.
    ///
    /// Returns how many records were removed. When nothing matched the
    /// catalog and the file are left untouched and `NotFound` is returned.
    pub fn remove(&mut self, title: &str) -> Result<usize> {
        let updated = self.catalog.without_title(title);
        let removed = self.catalog.len() - updated.len();
        if removed == 0 {
            debug!("No book titled {:?}", title);
            return Err(ShelfError::not_found(title));
        }
        self.commit(updated)?;
        info!("Removed {} book(s) titled {:?}", removed, title);
        Ok(removed)
    }

    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        self.catalog.search(query, field)
    }

    pub fn books(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn statistics(&self) -> Statistics {
        self.catalog.statistics()
    }

    fn commit(&mut self, updated: Catalog) -> Result<()> {
        self.store.save(&updated)?;
        self.catalog = updated;
        Ok(())
    }
}
