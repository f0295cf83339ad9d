//! Barcode classification.
//!
//! Formats are tried in a fixed order; the first one that recognizes the
//! input wins:
//!
//! | Step | Format                  | Source type    | Needs lookup |
//! |------|-------------------------|----------------|--------------|
//! | 1-5  | internal (see `parser`) | `Internal`     | no           |
//! | 6    | user-assigned lot code  | `UserDefined`  | yes          |
//! | 7    | internal part number    | `Ipn`          | yes          |
//! | 8    | Format 06 vendor label  | -              | no           |
//!
//! With a hint, only the matching step runs.

use super::format06::parse_format06;
use super::normalizer::normalize;
use super::parser::{Attempt, parse_internal};
use super::types::{LocalScanResult, ScanResult, SourceType, TargetType};
use crate::errors::ScanError;
use crate::store::PartLookup;

type LookupFormat<L> =
    fn(&BarcodeScanner<L>, &str) -> Result<Attempt<LocalScanResult>, ScanError>;

/// Classifies scanned text, consulting `lookup` for user-defined and IPN codes.
pub struct BarcodeScanner<L> {
    lookup: L,
}

impl<L: PartLookup> BarcodeScanner<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Classify `input`.
    ///
    /// # Errors
    /// - `ScanError::InvalidFormat` when no format (or not the hinted one) matches
    /// - `ScanError::UnknownPrefix` when a prefixed or URL form names an unknown type
    /// - `ScanError::Lookup` when the lookup collaborator fails
    pub fn scan(&self, input: &str, hint: Option<SourceType>) -> Result<ScanResult, ScanError> {
        let input = normalize(input);

        let outcome = match hint {
            None => self.scan_any(&input),
            Some(SourceType::Internal) => parse_internal(&input).map(ScanResult::Local),
            Some(SourceType::UserDefined) => self.parse_user_defined(&input)?.map(ScanResult::Local),
            Some(SourceType::Ipn) => self.parse_ipn(&input)?.map(ScanResult::Local),
            Some(SourceType::Vendor) => parse_format06(&input).map(ScanResult::Vendor),
        };

        match outcome {
            Attempt::Matched(result) => Ok(result),
            Attempt::Invalid(err) => Err(err),
            Attempt::NoMatch => {
                tracing::debug!(?hint, "no barcode format matched");
                Err(ScanError::InvalidFormat)
            }
        }
    }

    fn scan_any(&self, input: &str) -> Attempt<ScanResult> {
        match parse_internal(input) {
            Attempt::NoMatch => {}
            outcome => return outcome.map(ScanResult::Local),
        }

        let lookups: [LookupFormat<L>; 2] = [Self::parse_user_defined, Self::parse_ipn];
        for lookup in lookups {
            match lookup(self, input) {
                Ok(Attempt::NoMatch) => {}
                Ok(outcome) => return outcome.map(ScanResult::Local),
                Err(err) => return Attempt::Invalid(err),
            }
        }

        parse_format06(input).map(ScanResult::Vendor)
    }

    fn parse_user_defined(&self, input: &str) -> Result<Attempt<LocalScanResult>, ScanError> {
        if input.is_empty() {
            return Ok(Attempt::NoMatch);
        }
        let lots = self.lookup.lots_by_user_barcode(input)?;
        if lots.len() > 1 {
            tracing::warn!(
                barcode = input,
                count = lots.len(),
                "user barcode is assigned to several part lots, using the lowest id"
            );
        }
        Ok(match lots.iter().map(|lot| lot.id).min() {
            Some(id) => {
                tracing::debug!(id, "user-defined barcode matched a part lot");
                Attempt::Matched(LocalScanResult::new(
                    TargetType::PartLot,
                    id,
                    SourceType::UserDefined,
                ))
            }
            None => Attempt::NoMatch,
        })
    }

    fn parse_ipn(&self, input: &str) -> Result<Attempt<LocalScanResult>, ScanError> {
        if input.is_empty() {
            return Ok(Attempt::NoMatch);
        }
        let parts = self.lookup.parts_by_ipn(input)?;
        if parts.len() > 1 {
            tracing::warn!(
                ipn = input,
                count = parts.len(),
                "internal part number is shared by several parts, using the lowest id"
            );
        }
        Ok(match parts.iter().map(|part| part.id).min() {
            Some(id) => {
                tracing::debug!(id, "internal part number matched a part");
                Attempt::Matched(LocalScanResult::new(TargetType::Part, id, SourceType::Ipn))
            }
            None => Attempt::NoMatch,
        })
    }
}
