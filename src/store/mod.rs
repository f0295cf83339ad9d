//! Inventory lookups used by the scanner and the redirect resolver.
//!
//! The scanner never talks to a database directly; it receives a
//! [`PartLookup`] implementation:
//!
//! | Type            | Backing                         |
//! |-----------------|---------------------------------|
//! | `InMemoryStore` | vectors, for tests and dry runs |
//! | `SqliteStore`   | `rusqlite` database file        |

mod memory;
mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::StoreError;
use serde::{Deserialize, Serialize};

/// A part as seen by barcode lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRef {
    pub id: i64,
    pub name: String,
    /// Internal part number
    #[serde(default)]
    pub ipn: Option<String>,
    /// Manufacturer part number
    #[serde(default)]
    pub mpn: Option<String>,
}

impl PartRef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ipn: None,
            mpn: None,
        }
    }

    pub fn with_ipn(mut self, ipn: impl Into<String>) -> Self {
        self.ipn = Some(ipn.into());
        self
    }

    pub fn with_mpn(mut self, mpn: impl Into<String>) -> Self {
        self.mpn = Some(mpn.into());
        self
    }
}

/// A part lot as seen by barcode lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartLotRef {
    pub id: i64,
    pub part_id: i64,
    /// Barcode the user assigned to this lot
    #[serde(default)]
    pub user_barcode: Option<String>,
}

impl PartLotRef {
    pub fn new(id: i64, part_id: i64) -> Self {
        Self {
            id,
            part_id,
            user_barcode: None,
        }
    }

    pub fn with_user_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.user_barcode = Some(barcode.into());
        self
    }
}

/// Read-only inventory queries. All matches are exact.
pub trait PartLookup {
    /// Lots whose user-assigned barcode equals `barcode`.
    fn lots_by_user_barcode(&self, barcode: &str) -> Result<Vec<PartLotRef>, StoreError>;

    /// Parts whose internal part number equals `ipn`.
    fn parts_by_ipn(&self, ipn: &str) -> Result<Vec<PartRef>, StoreError>;

    /// The lot with the given id.
    fn lot_by_id(&self, id: i64) -> Result<Option<PartLotRef>, StoreError>;

    /// Parts whose manufacturer part number equals `mpn`.
    fn parts_by_mpn(&self, mpn: &str) -> Result<Vec<PartRef>, StoreError>;
}

impl<T: PartLookup + ?Sized> PartLookup for &T {
    fn lots_by_user_barcode(&self, barcode: &str) -> Result<Vec<PartLotRef>, StoreError> {
        (**self).lots_by_user_barcode(barcode)
    }

    fn parts_by_ipn(&self, ipn: &str) -> Result<Vec<PartRef>, StoreError> {
        (**self).parts_by_ipn(ipn)
    }

    fn lot_by_id(&self, id: i64) -> Result<Option<PartLotRef>, StoreError> {
        (**self).lot_by_id(id)
    }

    fn parts_by_mpn(&self, mpn: &str) -> Result<Vec<PartRef>, StoreError> {
        (**self).parts_by_mpn(mpn)
    }
}

impl<T: PartLookup + ?Sized> PartLookup for Box<T> {
    fn lots_by_user_barcode(&self, barcode: &str) -> Result<Vec<PartLotRef>, StoreError> {
        (**self).lots_by_user_barcode(barcode)
    }

    fn parts_by_ipn(&self, ipn: &str) -> Result<Vec<PartRef>, StoreError> {
        (**self).parts_by_ipn(ipn)
    }

    fn lot_by_id(&self, id: i64) -> Result<Option<PartLotRef>, StoreError> {
        (**self).lot_by_id(id)
    }

    fn parts_by_mpn(&self, mpn: &str) -> Result<Vec<PartRef>, StoreError> {
        (**self).parts_by_mpn(mpn)
    }
}
