//! Barcode content for printed labels.
//!
//! Both formats read back through the internal scanner formats.

use super::types::TargetType;
use crate::errors::GenerateError;

/// Builds barcode content for inventory entities.
#[derive(Debug, Clone, Default)]
pub struct BarcodeGenerator {
    base_url: Option<String>,
}

impl BarcodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator able to produce URL content below `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let trimmed = base_url.trim_end_matches('/');
        Self {
            base_url: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Compact 1D content: the type prefix and the id padded to four digits (`P0042`).
    pub fn content_1d(&self, target: TargetType, id: i64) -> Result<String, GenerateError> {
        check_id(id)?;
        Ok(format!("{}{:04}", target.prefix(), id))
    }

    /// QR content: `{base_url}/scan/{type}/{id}`.
    pub fn content_url(&self, target: TargetType, id: i64) -> Result<String, GenerateError> {
        check_id(id)?;
        let base_url = self.base_url.as_deref().ok_or(GenerateError::MissingBaseUrl)?;
        Ok(format!("{}/scan/{}/{}", base_url, target.url_segment(), id))
    }
}

fn check_id(id: i64) -> Result<(), GenerateError> {
    if id < 0 {
        return Err(GenerateError::NegativeId { id });
    }
    Ok(())
}
