use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Criteria;
use crate::store::StorageBackend;

/// Case-insensitive search; every criterion must match.
pub fn run<B: StorageBackend>(catalog: &Catalog<B>, criteria: &Criteria) -> Result<CmdResult> {
    let found: Vec<_> = catalog.find_all(criteria).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("Nothing found."));
    } else {
        result.add_message(CmdMessage::info(format!("Found {} books.", found.len())));
    }

    Ok(result.with_listed_books(found))
}
