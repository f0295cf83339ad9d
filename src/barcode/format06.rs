//! ISO/IEC 15434 "Format 06" distributor barcodes.
//!
//! Distributors such as Digikey and Mouser print 2D codes shaped like
//!
//! ```text
//! [)>{RS}06{GS}1P1234567{GS}Q10{GS}{EOT}
//! ```
//!
//! where every `{GS}`-separated segment starts with a data identifier
//! (`1P`, `Q`, ...) followed by the value.

use super::parser::Attempt;
use super::types::VendorScanResult;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

const HEADER: &str = "[)>\u{1E}06\u{1D}";
const GROUP_SEPARATOR: char = '\u{1D}';
const END_OF_TRANSMISSION: char = '\u{04}';

// Leading zeros are consumed but not part of the identifier: `01P` reads as `1P`.
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0*((?:[1-9][0-9]*)?[A-Z])").unwrap());

pub const SUPPLIER_PART_NUMBER: &str = "Supplier Part Number";
pub const DIGIKEY_PART_NUMBER: &str = "Digikey Part Number";
pub const DATE_CODE: &str = "Date Code";
pub const QUANTITY: &str = "Quantity";
pub const MANUFACTURER: &str = "Manufacturer";

/// Data identifiers understood in Format 06 payloads.
pub static FIELD_MEANINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("6D", "Ship Date"),
        ("P", "Customer Part Number"),
        ("1P", SUPPLIER_PART_NUMBER),
        ("2P", "Revision Number"),
        ("30P", DIGIKEY_PART_NUMBER),
        ("Q", QUANTITY),
        ("K", "Purchase Order Part Number"),
        ("4K", "Purchase Order Line Number"),
        ("1K", "Digikey Sales Order Number"),
        ("10K", "Digikey Invoice Number"),
        ("11K", "Digikey Packing List Number"),
        ("9D", DATE_CODE),
        ("10D", "Alternative Date Code"),
        ("1T", "Lot Code"),
        ("4L", "Country of Origin"),
        ("13E", "RoHS/Country of Origin Indicator"),
        ("3S", "Package ID for Inner Pack when part of a mixed Logistic Carton"),
        ("4S", "Package ID for Logistic Carton with like items"),
        ("5S", "Package ID for Logistic Carton with mixed items"),
        ("S", "Serial Number"),
        ("1V", MANUFACTURER),
        ("11Z", "Digikey Pick Ticket"),
        ("12Z", "Digikey Part ID"),
        ("13Z", "Digikey Load ID"),
        ("20Z", "Padding"),
    ])
});

/// Every field of a decoded payload, keyed by meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format06Fields {
    fields: BTreeMap<&'static str, String>,
}

impl Format06Fields {
    /// Value of the field with the given meaning (e.g. `"Lot Code"`).
    pub fn get(&self, meaning: &str) -> Option<&str> {
        self.fields.get(meaning).map(String::as_str)
    }

    /// All fields, ordered by meaning.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(meaning, value)| (*meaning, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn owned(&self, meaning: &str) -> Option<String> {
        self.get(meaning).map(str::to_string)
    }

    /// Project the fields the inventory cares about into a scan result.
    pub fn to_scan_result(&self) -> VendorScanResult {
        VendorScanResult {
            vendor: None,
            manufacturer_part_number: self.owned(SUPPLIER_PART_NUMBER),
            vendor_part_number: self.owned(DIGIKEY_PART_NUMBER),
            date_code: self.owned(DATE_CODE),
            quantity: self.owned(QUANTITY),
            manufacturer: self.owned(MANUFACTURER),
        }
    }
}

/// Split a Format 06 payload into its fields.
///
/// Declines (returns `None`) when the header is missing, when fewer than two
/// segments follow it, or when any segment has a missing or unknown data
/// identifier. Later duplicates of an identifier overwrite earlier ones.
pub fn decode_fields(input: &str) -> Option<Format06Fields> {
    if !input.starts_with(HEADER) {
        return None;
    }
    let body = input.strip_suffix(END_OF_TRANSMISSION).unwrap_or(input);

    // The first segment is the `[)>{RS}06` header itself.
    let segments: Vec<&str> = body
        .split(GROUP_SEPARATOR)
        .skip(1)
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.len() < 2 {
        return None;
    }

    let mut fields = BTreeMap::new();
    for segment in segments {
        let cap = IDENTIFIER_REGEX.captures(segment)?;
        let prefix_len = cap.get(0)?.end();
        let code = cap.get(1)?.as_str();
        let Some(meaning) = FIELD_MEANINGS.get(code) else {
            tracing::debug!(code, "unknown Format 06 data identifier");
            return None;
        };
        fields.insert(*meaning, segment[prefix_len..].to_string());
    }

    Some(Format06Fields { fields })
}

/// Try to read the input as a Format 06 distributor barcode.
pub fn parse_format06(input: &str) -> Attempt<VendorScanResult> {
    match decode_fields(input) {
        Some(fields) => Attempt::Matched(fields.to_scan_result()),
        None => Attempt::NoMatch,
    }
}
