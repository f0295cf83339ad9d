//! Barcode scan result types.
//!
//! A scan either points at an entity the inventory already knows
//! (`LocalScanResult`) or carries distributor data (`VendorScanResult`).

use serde::{Deserialize, Serialize};

/// The kind of inventory entity a local barcode refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Part,
    PartLot,
    Storelocation,
}

impl TargetType {
    /// Single-letter prefix used by the compact 1D barcode format.
    pub fn prefix(self) -> char {
        match self {
            TargetType::Part => 'P',
            TargetType::PartLot => 'L',
            TargetType::Storelocation => 'S',
        }
    }

    /// Path segment used by the `/scan/{type}/{id}` URL format.
    pub fn url_segment(self) -> &'static str {
        match self {
            TargetType::Part => "part",
            TargetType::PartLot => "lot",
            TargetType::Storelocation => "location",
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetType::Part => write!(f, "part"),
            TargetType::PartLot => write!(f, "part lot"),
            TargetType::Storelocation => write!(f, "storage location"),
        }
    }
}

impl std::str::FromStr for TargetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "part" => Ok(TargetType::Part),
            "lot" | "part_lot" | "part-lot" => Ok(TargetType::PartLot),
            "location" | "storelocation" | "store_location" => Ok(TargetType::Storelocation),
            _ => anyhow::bail!(
                "Invalid target type '{}'. Valid values: part, lot, location",
                s
            ),
        }
    }
}

/// How a barcode was recognized.
///
/// `Vendor` is only meaningful as a scan hint; local results never carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Generated by the inventory itself (URL, prefixed or legacy formats)
    Internal,
    /// Matched a part's internal part number
    Ipn,
    /// Matched a barcode the user assigned to a part lot
    UserDefined,
    /// Distributor label (ISO/IEC 15434 Format 06)
    Vendor,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Internal => write!(f, "internal"),
            SourceType::Ipn => write!(f, "ipn"),
            SourceType::UserDefined => write!(f, "user-defined"),
            SourceType::Vendor => write!(f, "vendor"),
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(SourceType::Internal),
            "ipn" => Ok(SourceType::Ipn),
            "user-defined" | "user_defined" | "user" => Ok(SourceType::UserDefined),
            "vendor" => Ok(SourceType::Vendor),
            _ => anyhow::bail!(
                "Invalid source type '{}'. Valid values: internal, ipn, user-defined, vendor",
                s
            ),
        }
    }
}

/// A barcode that identifies an entity known to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalScanResult {
    pub target_type: TargetType,
    pub target_id: i64,
    pub source_type: SourceType,
}

impl LocalScanResult {
    pub fn new(target_type: TargetType, target_id: i64, source_type: SourceType) -> Self {
        Self {
            target_type,
            target_id,
            source_type,
        }
    }
}

/// Data decoded from a distributor barcode.
///
/// Every field is optional; a label carries whatever its issuer chose to encode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorScanResult {
    pub vendor: Option<String>,
    pub manufacturer_part_number: Option<String>,
    pub vendor_part_number: Option<String>,
    pub date_code: Option<String>,
    pub quantity: Option<String>,
    pub manufacturer: Option<String>,
}

/// Outcome of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanResult {
    Local(LocalScanResult),
    Vendor(VendorScanResult),
}

impl From<LocalScanResult> for ScanResult {
    fn from(local: LocalScanResult) -> Self {
        ScanResult::Local(local)
    }
}

impl From<VendorScanResult> for ScanResult {
    fn from(vendor: VendorScanResult) -> Self {
        ScanResult::Vendor(vendor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_prefix_and_segment() {
        assert_eq!(TargetType::Part.prefix(), 'P');
        assert_eq!(TargetType::PartLot.prefix(), 'L');
        assert_eq!(TargetType::Storelocation.prefix(), 'S');
        assert_eq!(TargetType::PartLot.url_segment(), "lot");
        assert_eq!(TargetType::Storelocation.url_segment(), "location");
    }

    #[test]
    fn test_target_type_from_str() {
        assert_eq!("part".parse::<TargetType>().unwrap(), TargetType::Part);
        assert_eq!("LOT".parse::<TargetType>().unwrap(), TargetType::PartLot);
        assert_eq!(
            "location".parse::<TargetType>().unwrap(),
            TargetType::Storelocation
        );
        assert!("shelf".parse::<TargetType>().is_err());
    }

    #[test]
    fn test_source_type_from_str_invalid() {
        let err = "barcode".parse::<SourceType>().unwrap_err();
        assert!(err.to_string().contains("Invalid source type"));
    }

    #[test]
    fn test_source_type_display_round_trips() {
        for source in [
            SourceType::Internal,
            SourceType::Ipn,
            SourceType::UserDefined,
            SourceType::Vendor,
        ] {
            assert_eq!(source.to_string().parse::<SourceType>().unwrap(), source);
        }
    }

    #[test]
    fn test_scan_result_serializes_with_kind_tag() {
        let result: ScanResult =
            LocalScanResult::new(TargetType::PartLot, 7, SourceType::UserDefined).into();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "local");
        assert_eq!(json["target_type"], "part_lot");
        assert_eq!(json["target_id"], 7);
        assert_eq!(json["source_type"], "user_defined");
    }

    #[test]
    fn test_vendor_result_serializes_with_kind_tag() {
        let result: ScanResult = VendorScanResult {
            quantity: Some("10".into()),
            ..Default::default()
        }
        .into();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "vendor");
        assert_eq!(json["quantity"], "10");
        assert!(json["manufacturer"].is_null());
    }
}
