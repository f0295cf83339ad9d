//! Barcode interpretation for the parts inventory.
//!
//! This module turns raw scanner output into structured results:
//!
//! - `P0042`, `L-000042`, `https://host/scan/part/42` - labels printed by the inventory
//! - user-assigned lot barcodes and internal part numbers (needs a [`PartLookup`])
//! - ISO/IEC 15434 Format 06 distributor labels (Digikey, Mouser, ...)
//!
//! It also generates label content and resolves scans to inventory pages.
//!
//! [`PartLookup`]: crate::store::PartLookup

mod format06;
mod generator;
mod normalizer;
mod parser;
mod redirect;
mod scanner;
mod types;

pub use format06::{Format06Fields, decode_fields};
pub use generator::BarcodeGenerator;
pub use normalizer::normalize;
pub use redirect::Redirector;
pub use scanner::BarcodeScanner;
pub use types::{LocalScanResult, ScanResult, SourceType, TargetType, VendorScanResult};
