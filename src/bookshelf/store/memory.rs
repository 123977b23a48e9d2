use super::{decode, encode, StorageBackend};
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Holds the encoded JSON text rather than `Book` values so tests can seed
/// malformed content and exercise the same decode path as [`FileBackend`].
///
/// Uses `RefCell` for interior mutability since the catalog is
/// single-threaded.
///
/// [`FileBackend`]: super::fs::FileBackend
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `content` as if it had been read from disk.
    pub fn with_content(content: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.content.borrow_mut() = Some(content.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw text of the last successful save.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Book>>> {
        match self.content.borrow().as_deref() {
            Some(content) => decode(content).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        let content = encode(books, true)?;
        *self.content.borrow_mut() = Some(content);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://books.json")
    }
}
