//! # Catalog
//!
//! The in-memory collection of [`Book`]s and everything that touches it:
//! loading, persisting, queries and mutations.
//!
//! ## Persistence
//!
//! Every mutating operation (add, delete, status change) rewrites the whole
//! backing store. A failed write does not undo the mutation: it is captured
//! in the returned [`Mutation`] so the caller can report it, and the next
//! successful save brings the store back in sync.
//!
//! ## Loading
//!
//! [`Catalog::load`] is all-or-nothing. Any decode failure or duplicate id
//! leaves the catalog empty and returns [`LoadOutcome::Reset`].
//!
//! ## Matching
//!
//! - [`Catalog::find_one`] compares typed values exactly (case-sensitive).
//! - [`Catalog::find_all`] compares stringified, lower-cased values.

use crate::error::{CatalogError, Result};
use crate::ids::IdRegistry;
use crate::model::{Book, Criteria, Status};
use crate::store::StorageBackend;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Result of [`Catalog::load`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing stored yet.
    Empty,
    /// This many books were loaded.
    Loaded(usize),
    /// The stored data was rejected; the catalog is empty.
    Reset(CatalogError),
}

/// A completed mutation. `persist_error` is set when the in-memory change
/// could not be written to storage.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub persist_error: Option<CatalogError>,
}

impl<T> Mutation<T> {
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

pub struct Catalog<B: StorageBackend> {
    backend: B,
    books: Vec<Book>,
    ids: IdRegistry,
}

impl<B: StorageBackend> Catalog<B> {
    /// An empty catalog over `backend`. Nothing is read until [`load`](Self::load).
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            books: Vec::new(),
            ids: IdRegistry::new(),
        }
    }

    /// Construct and load in one step.
    pub fn open(backend: B) -> (Self, LoadOutcome) {
        let mut catalog = Self::new(backend);
        let outcome = catalog.load();
        (catalog, outcome)
    }

    pub fn load(&mut self) -> LoadOutcome {
        self.reset();
        let location = self.backend.location();

        let records = match self.backend.load() {
            Ok(None) => {
                debug!(path = %location.display(), "no catalog stored yet");
                return LoadOutcome::Empty;
            }
            Ok(Some(records)) => records,
            Err(CatalogError::Serialization(e)) => {
                return self.reject(CatalogError::MalformedStorage {
                    path: location,
                    reason: e.to_string(),
                });
            }
            Err(e) => return self.reject(e),
        };

        let mut books = Vec::with_capacity(records.len());
        for record in records {
            let book = Book::create(
                &mut self.ids,
                record.title,
                record.author,
                record.year,
                record.status,
                Some(record.id),
            );
            match book {
                Ok(book) => books.push(book),
                Err(e) => {
                    return self.reject(CatalogError::MalformedStorage {
                        path: location,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.books = books;
        debug!(path = %location.display(), count = self.books.len(), "catalog loaded");
        LoadOutcome::Loaded(self.books.len())
    }

    fn reject(&mut self, error: CatalogError) -> LoadOutcome {
        self.reset();
        warn!(error = %error, "catalog load failed, starting empty");
        LoadOutcome::Reset(error)
    }

    fn reset(&mut self) {
        self.books.clear();
        self.ids.clear();
    }

    /// Write the full collection to storage.
    pub fn save(&self) -> Result<()> {
        self.backend.save(&self.books).map_err(|e| {
            let error = CatalogError::Persistence {
                path: self.backend.location(),
                reason: e.to_string(),
            };
            warn!(error = %error, "catalog save failed");
            error
        })?;
        debug!(path = %self.backend.location().display(), count = self.books.len(), "catalog saved");
        Ok(())
    }

    fn persist<T>(&self, value: T) -> Mutation<T> {
        Mutation {
            value,
            persist_error: self.save().err(),
        }
    }

    /// Append a new available book with the smallest free id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Mutation<Book>> {
        let book = Book::create(&mut self.ids, title, author, year, Status::Available, None)?;
        debug!(id = book.id, title = %book.title, "book added");
        self.books.push(book.clone());
        Ok(self.persist(book))
    }

    /// Remove the book with `id` and free the id for reuse.
    pub fn delete(&mut self, id: u32) -> Result<Mutation<Book>> {
        let position = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let book = self.books.remove(position);
        self.ids.release(id);
        debug!(id, "book deleted");
        Ok(self.persist(book))
    }

    /// First book where every criterion matches exactly.
    pub fn find_one(&self, criteria: &Criteria) -> Option<&Book> {
        self.books
            .iter()
            .find(|book| criteria.matches_exact(book))
    }

    /// Every book where every criterion matches after lower-casing both
    /// sides. Empty when nothing matches.
    pub fn find_all(&self, criteria: &Criteria) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| criteria.matches_normalized(book))
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// All books in insertion order.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate `new_status`, then update the book with `id`.
    pub fn change_status(&mut self, id: u32, new_status: &str) -> Result<Mutation<Book>> {
        let status: Status = new_status.parse()?;
        self.set_status(id, status)
    }

    pub fn set_status(&mut self, id: u32, status: Status) -> Result<Mutation<Book>> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        book.status = status;
        let updated = book.clone();
        debug!(id, status = %status, "status changed");
        Ok(self.persist(updated))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
