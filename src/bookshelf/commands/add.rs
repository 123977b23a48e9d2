use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdResult> {
    let mutation = catalog.add(title, author, year)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book '{}' added with id {}.",
        mutation.value.title, mutation.value.id
    )));
    result.report_persistence(mutation.persist_error);
    result.affected_books.push(mutation.value);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::MemBackend;

    #[test]
    fn adds_and_reports_the_new_book() {
        let mut catalog = Catalog::new(MemBackend::new());
        let result = run(&mut catalog, "Dune".into(), "Herbert".into(), 1965).unwrap();

        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(result.affected_books[0].id, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("'Dune'"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn empty_title_is_stored() {
        let mut catalog = Catalog::new(MemBackend::new());
        run(&mut catalog, "Dune".into(), "Herbert".into(), 1965).unwrap();
        let result = run(&mut catalog, "".into(), "".into(), 0).unwrap();
        assert_eq!(result.affected_books[0].id, 2);
        assert_eq!(result.affected_books[0].title, "");
        assert_eq!(catalog.get(2).unwrap().author, "");
    }

    #[test]
    fn failed_save_adds_a_warning() {
        let mut catalog = Catalog::new(MemBackend::new());
        catalog.backend().set_simulate_write_error(true);

        let result = run(&mut catalog, "Dune".into(), "Herbert".into(), 1965).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert!(result.messages[1].content.contains("kept in memory"));
        assert_eq!(catalog.len(), 1);
    }
}
