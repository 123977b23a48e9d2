//! Book identifier bookkeeping.
//!
//! Every [`Catalog`](crate::catalog::Catalog) owns one `IdRegistry`. It is
//! rebuilt from exactly the records present on each load and is never shared
//! between catalogs, so two catalogs in the same process cannot see each
//! other's ids.

use crate::error::{CatalogError, Result};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    used: BTreeSet<u32>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an explicit id. Ids start at 1.
    pub fn claim(&mut self, id: u32) -> Result<()> {
        if id == 0 {
            return Err(CatalogError::Input(
                "book ids must be positive, got 0".to_string(),
            ));
        }
        if !self.used.insert(id) {
            return Err(CatalogError::DuplicateId(id));
        }
        Ok(())
    }

    /// Claim and return the smallest unused id, scanning up from 1.
    pub fn allocate(&mut self) -> u32 {
        let mut candidate = 1;
        for &id in &self.used {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        self.used.insert(candidate);
        candidate
    }

    /// Return an id to the pool so a later `allocate` can reuse it.
    pub fn release(&mut self, id: u32) -> bool {
        self.used.remove(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.used.contains(&id)
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_sequentially_from_one() {
        let mut ids = IdRegistry::new();
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.allocate(), 3);
    }

    #[test]
    fn allocate_fills_the_smallest_gap() {
        let mut ids = IdRegistry::new();
        ids.claim(1).unwrap();
        ids.claim(2).unwrap();
        ids.claim(5).unwrap();
        assert_eq!(ids.allocate(), 3);
        assert_eq!(ids.allocate(), 4);
        assert_eq!(ids.allocate(), 6);
    }

    #[test]
    fn released_ids_are_reused() {
        let mut ids = IdRegistry::new();
        for _ in 0..3 {
            ids.allocate();
        }
        assert!(ids.release(2));
        assert!(!ids.contains(2));
        assert_eq!(ids.allocate(), 2);
    }

    #[test]
    fn claim_rejects_duplicates_and_zero() {
        let mut ids = IdRegistry::new();
        ids.claim(4).unwrap();
        assert!(matches!(ids.claim(4), Err(CatalogError::DuplicateId(4))));
        assert!(matches!(ids.claim(0), Err(CatalogError::Input(_))));
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn registries_are_independent() {
        let mut a = IdRegistry::new();
        let mut b = IdRegistry::new();
        assert_eq!(a.allocate(), 1);
        assert_eq!(b.allocate(), 1);
    }
}
