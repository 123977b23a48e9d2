use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &mut Catalog<B>, id: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match catalog.delete(id) {
        Ok(mutation) => {
            result.add_message(CmdMessage::success(format!(
                "Book with id {} deleted: {}",
                id, mutation.value.title
            )));
            result.report_persistence(mutation.persist_error);
            result.affected_books.push(mutation.value);
        }
        Err(e @ CatalogError::NotFound(_)) => result.add_message(CmdMessage::error(e.to_string())),
        Err(e) => return Err(e),
    }

    Ok(result)
}
