//! Resolve a scan to the inventory page an operator should land on.

use super::types::{LocalScanResult, ScanResult, TargetType, VendorScanResult};
use crate::errors::RedirectError;
use crate::store::PartLookup;

/// Maps scan results to page paths such as `/part/42`.
pub struct Redirector<L> {
    lookup: L,
    locale: Option<String>,
}

impl<L: PartLookup> Redirector<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            locale: None,
        }
    }

    /// Prefix every path with `/{locale}`. Empty locales are ignored.
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale.filter(|l| !l.trim().is_empty());
        self
    }

    /// Page path for a scan result.
    pub fn resolve(&self, result: &ScanResult) -> Result<String, RedirectError> {
        let path = match result {
            ScanResult::Local(local) => self.local_path(local)?,
            ScanResult::Vendor(vendor) => self.vendor_path(vendor)?,
        };
        Ok(match &self.locale {
            Some(locale) => format!("/{}{}", locale, path),
            None => path,
        })
    }

    fn local_path(&self, local: &LocalScanResult) -> Result<String, RedirectError> {
        match local.target_type {
            TargetType::Part => Ok(format!("/part/{}", local.target_id)),
            TargetType::PartLot => {
                let lot = self.lookup.lot_by_id(local.target_id)?.ok_or_else(|| {
                    RedirectError::NotFound {
                        what: format!("part lot {}", local.target_id),
                    }
                })?;
                Ok(format!("/part/{}", lot.part_id))
            }
            TargetType::Storelocation => Ok(format!("/store_location/{}/parts", local.target_id)),
        }
    }

    fn vendor_path(&self, vendor: &VendorScanResult) -> Result<String, RedirectError> {
        let mpn = vendor
            .manufacturer_part_number
            .as_deref()
            .filter(|mpn| !mpn.is_empty())
            .ok_or_else(|| RedirectError::NotFound {
                what: "vendor barcode without manufacturer part number".to_string(),
            })?;
        let part_id = self
            .lookup
            .parts_by_mpn(mpn)?
            .iter()
            .map(|part| part.id)
            .min()
            .ok_or_else(|| RedirectError::NotFound {
                what: format!("manufacturer part number '{}'", mpn),
            })?;
        Ok(format!("/part/{}", part_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::types::SourceType;
    use crate::store::{InMemoryStore, PartLotRef, PartRef};

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_part(PartRef::new(4, "LED").with_mpn("LTST-C150"))
            .with_part(PartRef::new(9, "LED (alt)").with_mpn("LTST-C150"))
            .with_lot(PartLotRef::new(30, 9))
    }

    fn local(target_type: TargetType, id: i64) -> ScanResult {
        ScanResult::Local(LocalScanResult::new(target_type, id, SourceType::Internal))
    }

    #[test]
    fn test_resolve_local_targets() {
        let redirector = Redirector::new(store());
        assert_eq!(redirector.resolve(&local(TargetType::Part, 42)).unwrap(), "/part/42");
        assert_eq!(redirector.resolve(&local(TargetType::PartLot, 30)).unwrap(), "/part/9");
        assert_eq!(
            redirector.resolve(&local(TargetType::Storelocation, 5)).unwrap(),
            "/store_location/5/parts"
        );
    }

    #[test]
    fn test_resolve_unknown_lot() {
        let redirector = Redirector::new(store());
        let err = redirector.resolve(&local(TargetType::PartLot, 31)).unwrap_err();
        assert!(matches!(err, RedirectError::NotFound { .. }));
        assert!(err.to_string().contains("part lot 31"));
    }

    #[test]
    fn test_resolve_vendor_by_mpn() {
        let redirector = Redirector::new(store());
        let vendor = ScanResult::Vendor(VendorScanResult {
            manufacturer_part_number: Some("LTST-C150".into()),
            ..Default::default()
        });
        assert_eq!(redirector.resolve(&vendor).unwrap(), "/part/4");
    }

    #[test]
    fn test_resolve_vendor_without_match() {
        let redirector = Redirector::new(store());
        let unknown = ScanResult::Vendor(VendorScanResult {
            manufacturer_part_number: Some("NE555".into()),
            ..Default::default()
        });
        assert!(matches!(
            redirector.resolve(&unknown),
            Err(RedirectError::NotFound { .. })
        ));
        let empty = ScanResult::Vendor(VendorScanResult::default());
        assert!(matches!(
            redirector.resolve(&empty),
            Err(RedirectError::NotFound { .. })
        ));
    }

    #[test]
    fn test_locale_prefix() {
        let redirector = Redirector::new(store()).with_locale(Some("de".into()));
        assert_eq!(redirector.resolve(&local(TargetType::Part, 1)).unwrap(), "/de/part/1");
        let redirector = Redirector::new(store()).with_locale(Some(" ".into()));
        assert_eq!(redirector.resolve(&local(TargetType::Part, 1)).unwrap(), "/part/1");
    }
}
