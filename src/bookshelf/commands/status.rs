//! # Status Command
//!
//! Moves a book between `available` and `checked_out`. Either direction is
//! allowed at any time; setting the current status again is reported as
//! informational.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    id: u32,
    new_status: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let previous = catalog.get(id).map(|book| book.status);

    match catalog.change_status(id, new_status) {
        Ok(mutation) => {
            let status = mutation.value.status;
            if previous == Some(status) {
                result.add_message(CmdMessage::info(format!(
                    "Book {} is already {}.",
                    id, status
                )));
            } else {
                result.add_message(CmdMessage::success(format!(
                    "Status of book {} changed to '{}'.",
                    id, status
                )));
            }
            result.report_persistence(mutation.persist_error);
            result.affected_books.push(mutation.value);
        }
        Err(e @ (CatalogError::InvalidStatus(_) | CatalogError::NotFound(_))) => {
            result.add_message(CmdMessage::error(e.to_string()));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::model::Status;
    use crate::store::memory::MemBackend;

    fn catalog() -> Catalog<MemBackend> {
        let mut catalog = Catalog::new(MemBackend::new());
        add::run(&mut catalog, "Emma".into(), "Austen".into(), 1815).unwrap();
        add::run(&mut catalog, "Dune".into(), "Herbert".into(), 1965).unwrap();
        catalog
    }

    #[test]
    fn checks_out_a_book() {
        let mut catalog = catalog();
        let result = run(&mut catalog, 2, "checked_out").unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.affected_books[0].status, Status::CheckedOut);
        assert_eq!(catalog.get(1).unwrap().status, Status::Available);
        assert_eq!(catalog.get(2).unwrap().status, Status::CheckedOut);
    }

    #[test]
    fn same_status_is_informational() {
        let mut catalog = catalog();
        let result = run(&mut catalog, 1, "available").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("already available"));
    }

    #[test]
    fn invalid_status_is_reported_and_changes_nothing() {
        let mut catalog = catalog();
        let before = catalog.list_all().to_vec();

        let result = run(&mut catalog, 1, "bogus").unwrap();
        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("Invalid status 'bogus'"));
        assert_eq!(catalog.list_all(), before.as_slice());
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut catalog = catalog();
        let result = run(&mut catalog, 9, "checked_out").unwrap();
        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("id 9 not found"));
    }
}
