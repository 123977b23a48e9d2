use crate::catalog::{Catalog, LoadOutcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::store::StorageBackend;

/// (Re)load the catalog and describe what happened.
pub fn run<B: StorageBackend>(catalog: &mut Catalog<B>) -> CmdResult {
    let outcome = catalog.load();
    report(&outcome)
}

pub fn report(outcome: &LoadOutcome) -> CmdResult {
    let mut result = CmdResult::default();
    match outcome {
        LoadOutcome::Empty => result.add_message(CmdMessage::info("Library is empty.")),
        LoadOutcome::Loaded(count) => {
            result.add_message(CmdMessage::info(format!("Loaded {} books.", count)))
        }
        LoadOutcome::Reset(error) => {
            result.add_message(CmdMessage::error(error.to_string()));
            result.add_message(CmdMessage::warning("Starting with an empty library."));
        }
    }
    result
}
