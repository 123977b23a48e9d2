//! # Storage Layer
//!
//! The [`StorageBackend`] trait handles the "how" of persistence (filesystem
//! vs memory) while [`Catalog`](crate::catalog::Catalog) handles the "what":
//! id bookkeeping, queries and when to write.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one JSON file
//! - [`memory::MemBackend`]: in-memory storage for tests, can simulate
//!   write failures
//!
//! ## Storage Format
//!
//! The whole catalog is a single JSON array, rewritten in full on every
//! save:
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "Dune",
//!     "author": "Frank Herbert",
//!     "year": 1965,
//!     "status": "available"
//!   }
//! ]
//! ```
//!
//! Array order is the catalog's insertion order.

use crate::error::Result;
use crate::model::Book;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for raw catalog storage.
pub trait StorageBackend {
    /// Read every stored book.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err on I/O failures and on content that does not decode.
    fn load(&self) -> Result<Option<Vec<Book>>>;

    /// Replace the stored catalog with `books`.
    fn save(&self, books: &[Book]) -> Result<()>;

    /// Where the catalog lives. For `MemBackend` this is a virtual path.
    fn location(&self) -> PathBuf;
}

pub(crate) fn decode(content: &str) -> Result<Vec<Book>> {
    Ok(serde_json::from_str(content)?)
}

pub(crate) fn encode(books: &[Book], pretty: bool) -> Result<String> {
    let content = if pretty {
        serde_json::to_string_pretty(books)?
    } else {
        serde_json::to_string(books)?
    };
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    #[test]
    fn decode_rejects_unknown_status() {
        let content = r#"[{"id":1,"title":"A","author":"B","year":2000,"status":"lost"}]"#;
        assert!(decode(content).is_err());
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let content = r#"[{"id":1,"title":"A","year":2000,"status":"available"}]"#;
        assert!(decode(content).is_err());
    }

    #[test]
    fn decode_reads_non_ascii_text() {
        let content = r#"[{"id":2,"title":"Мастер и Маргарита","author":"Булгаков","year":1967,"status":"checked_out"}]"#;
        let books = decode(content).unwrap();
        assert_eq!(books[0].title, "Мастер и Маргарита");
        assert_eq!(books[0].status, Status::CheckedOut);
    }

    #[test]
    fn encode_keeps_non_ascii_readable() {
        let books = decode(
            r#"[{"id":1,"title":"Война и мир","author":"Толстой","year":1869,"status":"available"}]"#,
        )
        .unwrap();
        let text = encode(&books, true).unwrap();
        assert!(text.contains("Война и мир"));
        assert!(text.contains('\n'));
        assert!(!encode(&books, false).unwrap().contains('\n'));
    }
}
