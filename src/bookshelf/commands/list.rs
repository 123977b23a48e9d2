use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &Catalog<B>) -> Result<CmdResult> {
    let books = catalog.list_all().to_vec();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} books in the library.",
        books.len()
    )));
    Ok(result.with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete};
    use crate::store::memory::MemBackend;

    #[test]
    fn lists_in_insertion_order_with_count() {
        let mut catalog = Catalog::new(MemBackend::new());
        add::run(&mut catalog, "B".into(), "X".into(), 2001).unwrap();
        add::run(&mut catalog, "A".into(), "Y".into(), 2000).unwrap();
        add::run(&mut catalog, "C".into(), "Z".into(), 2002).unwrap();
        delete::run(&mut catalog, 1).unwrap();
        add::run(&mut catalog, "D".into(), "W".into(), 2003).unwrap();

        let result = run(&catalog).unwrap();
        let listed: Vec<(u32, &str)> = result
            .listed_books
            .iter()
            .map(|b| (b.id, b.title.as_str()))
            .collect();
        assert_eq!(listed, vec![(2, "A"), (3, "C"), (1, "D")]);
        assert_eq!(result.messages[0].content, "3 books in the library.");
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let catalog = Catalog::new(MemBackend::new());
        let result = run(&catalog).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "0 books in the library.");
    }
}
