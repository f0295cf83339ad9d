pub mod barcode;
pub mod config;
pub mod errors;
pub mod store;
pub mod util;

pub use barcode::{
    BarcodeGenerator, BarcodeScanner, LocalScanResult, Redirector, ScanResult, SourceType,
    TargetType, VendorScanResult,
};
pub use errors::{GenerateError, RedirectError, ScanError, StoreError};
pub use store::{InMemoryStore, PartLookup, PartLotRef, PartRef, SqliteStore};
