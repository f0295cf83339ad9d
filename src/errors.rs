//! Typed error hierarchy for partscan.
//!
//! Four top-level enums cover the four subsystems:
//! - `ScanError`: barcode classification failures
//! - `StoreError`: lookup collaborator failures
//! - `GenerateError`: barcode content generation failures
//! - `RedirectError`: scan result to page path resolution failures

use thiserror::Error;

/// Errors from scanning a barcode payload.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Barcode does not match any known format")]
    InvalidFormat,

    #[error("Unknown barcode type prefix '{prefix}'")]
    UnknownPrefix { prefix: String },

    #[error("Barcode lookup failed: {0}")]
    Lookup(#[from] StoreError),
}

/// Errors from a `PartLookup` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Errors from generating barcode content.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Cannot generate a barcode for negative id {id}")]
    NegativeId { id: i64 },

    #[error("No base URL configured for URL barcodes")]
    MissingBaseUrl,
}

/// Errors from resolving a scan result to an inventory page.
#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("No inventory entry found for {what}")]
    NotFound { what: String },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_unknown_prefix_carries_prefix() {
        let err = ScanError::UnknownPrefix {
            prefix: "X".to_string(),
        };
        match &err {
            ScanError::UnknownPrefix { prefix } => assert_eq!(prefix, "X"),
            _ => panic!("Expected UnknownPrefix"),
        }
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn scan_error_converts_from_store_error() {
        let err: ScanError = StoreError::LockPoisoned.into();
        assert!(matches!(err, ScanError::Lookup(StoreError::LockPoisoned)));
    }

    #[test]
    fn redirect_error_converts_from_scan_error() {
        let err: RedirectError = ScanError::InvalidFormat.into();
        assert!(matches!(err, RedirectError::Scan(ScanError::InvalidFormat)));
        assert_eq!(err.to_string(), "Barcode does not match any known format");
    }

    #[test]
    fn generate_error_negative_id_carries_id() {
        let err = GenerateError::NegativeId { id: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        assert_std_error(&ScanError::InvalidFormat);
        assert_std_error(&StoreError::LockPoisoned);
        assert_std_error(&GenerateError::MissingBaseUrl);
        assert_std_error(&RedirectError::NotFound {
            what: "part 1".into(),
        });
    }
}
