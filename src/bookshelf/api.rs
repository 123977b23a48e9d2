//! # API Facade
//!
//! The single entry point for catalog operations, whatever the UI. It owns
//! the one [`Catalog`] of the process and dispatches to the command layer.
//!
//! The facade turns UI text into typed values (field names, numeric search
//! values) and otherwise stays out of the way: business logic lives in
//! `commands/*.rs`, presentation in the binary.
//!
//! `ShelfApi<B: StorageBackend>` is generic over storage:
//! - Production: `ShelfApi<FileBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::Criteria;
use crate::store::StorageBackend;

pub struct ShelfApi<B: StorageBackend> {
    catalog: Catalog<B>,
}

impl<B: StorageBackend> ShelfApi<B> {
    /// Build the API and load the catalog. The returned result describes
    /// the load.
    pub fn open(backend: B) -> (Self, commands::CmdResult) {
        let mut catalog = Catalog::new(backend);
        let loaded = commands::load::run(&mut catalog);
        (Self { catalog }, loaded)
    }

    pub fn reload(&mut self) -> commands::CmdResult {
        commands::load::run(&mut self.catalog)
    }

    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, title.into(), author.into(), year)
    }

    pub fn delete_book(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, id)
    }

    /// Search on one field given as text, e.g. `("author", "austen")`.
    pub fn find_books(&self, field: &str, value: &str) -> Result<commands::CmdResult> {
        let criteria = Criteria::parse(field, value)?;
        commands::find::run(&self.catalog, &criteria)
    }

    pub fn find_books_by(&self, criteria: &Criteria) -> Result<commands::CmdResult> {
        commands::find::run(&self.catalog, criteria)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn change_status(&mut self, id: u32, status: &str) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.catalog, id, status)
    }

    pub fn catalog(&self) -> &Catalog<B> {
        &self.catalog
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::Status;
    use crate::store::memory::MemBackend;

    fn api() -> ShelfApi<MemBackend> {
        let (api, loaded) = ShelfApi::open(MemBackend::new());
        assert_eq!(loaded.messages[0].content, "Library is empty.");
        api
    }

    #[test]
    fn add_dispatches_to_catalog() {
        let mut api = api();
        let result = api.add_book("Dune", "Herbert", 1965).unwrap();
        assert_eq!(result.affected_books[0].id, 1);
        assert_eq!(api.catalog().len(), 1);
    }

    #[test]
    fn find_parses_field_and_numeric_value() {
        let mut api = api();
        api.add_book("Dune", "Herbert", 1965).unwrap();
        api.add_book("Emma", "Austen", 1815).unwrap();

        let result = api.find_books("year", "1815").unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].title, "Emma");

        let result = api.find_books("Title", "dune").unwrap();
        assert_eq!(result.listed_books[0].id, 1);
    }

    #[test]
    fn find_with_unknown_field_is_an_error() {
        let api = api();
        let err = api.find_books("isbn", "123").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownField(_)));
    }

    #[test]
    fn find_books_by_typed_criteria() {
        let mut api = api();
        api.add_book("Dune", "Herbert", 1965).unwrap();
        api.change_status(1, "checked_out").unwrap();

        let result = api
            .find_books_by(&Criteria::new().status(Status::CheckedOut))
            .unwrap();
        assert_eq!(result.listed_books.len(), 1);
    }

    #[test]
    fn reload_reads_back_saved_state() {
        let mut api = api();
        api.add_book("Dune", "Herbert", 1965).unwrap();
        api.delete_book(1).unwrap();
        api.add_book("Emma", "Austen", 1815).unwrap();

        let result = api.reload();
        assert_eq!(result.messages[0].content, "Loaded 1 books.");
        assert_eq!(api.list_books().unwrap().listed_books[0].title, "Emma");
    }
}
