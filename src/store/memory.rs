use super::{PartLotRef, PartLookup, PartRef};
use crate::errors::StoreError;

/// Inventory held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    parts: Vec<PartRef>,
    lots: Vec<PartLotRef>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_part(mut self, part: PartRef) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_lot(mut self, lot: PartLotRef) -> Self {
        self.lots.push(lot);
        self
    }

    fn parts_where(&self, pred: impl Fn(&PartRef) -> bool) -> Vec<PartRef> {
        let mut found: Vec<PartRef> = self.parts.iter().filter(|p| pred(p)).cloned().collect();
        found.sort_by_key(|p| p.id);
        found
    }
}

impl PartLookup for InMemoryStore {
    fn lots_by_user_barcode(&self, barcode: &str) -> Result<Vec<PartLotRef>, StoreError> {
        let mut found: Vec<PartLotRef> = self
            .lots
            .iter()
            .filter(|lot| lot.user_barcode.as_deref() == Some(barcode))
            .cloned()
            .collect();
        found.sort_by_key(|lot| lot.id);
        Ok(found)
    }

    fn parts_by_ipn(&self, ipn: &str) -> Result<Vec<PartRef>, StoreError> {
        Ok(self.parts_where(|p| p.ipn.as_deref() == Some(ipn)))
    }

    fn lot_by_id(&self, id: i64) -> Result<Option<PartLotRef>, StoreError> {
        Ok(self.lots.iter().find(|lot| lot.id == id).cloned())
    }

    fn parts_by_mpn(&self, mpn: &str) -> Result<Vec<PartRef>, StoreError> {
        Ok(self.parts_where(|p| p.mpn.as_deref() == Some(mpn)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_part(PartRef::new(5, "Resistor").with_ipn("R-10K").with_mpn("RC0603"))
            .with_part(PartRef::new(2, "Resistor (dup)").with_ipn("R-10K"))
            .with_lot(PartLotRef::new(9, 5).with_user_barcode("BIN-A1"))
            .with_lot(PartLotRef::new(3, 2).with_user_barcode("BIN-A1"))
    }

    #[test]
    fn test_lookups_are_sorted_by_id() {
        let store = store();
        let lots = store.lots_by_user_barcode("BIN-A1").unwrap();
        assert_eq!(lots.iter().map(|l| l.id).collect::<Vec<_>>(), vec![3, 9]);
        let parts = store.parts_by_ipn("R-10K").unwrap();
        assert_eq!(parts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn test_lookups_are_exact() {
        let store = store();
        assert!(store.lots_by_user_barcode("bin-a1").unwrap().is_empty());
        assert!(store.parts_by_ipn("R-10").unwrap().is_empty());
    }

    #[test]
    fn test_lot_by_id_and_mpn() {
        let store = store().with_lot(PartLotRef::new(11, 5));
        assert_eq!(store.lot_by_id(11).unwrap().unwrap().part_id, 5);
        assert!(store.lot_by_id(12).unwrap().is_none());
        assert_eq!(store.parts_by_mpn("RC0603").unwrap()[0].id, 5);
    }
}
