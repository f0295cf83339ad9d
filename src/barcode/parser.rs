//! Internal barcode formats.
//!
//! These are the formats the inventory prints on its own labels, plus the
//! legacy formats older installations produced:
//! - `https://host/scan/part/42` - URL form (QR codes)
//! - `P0042` - prefix letter and at least four digits (1D codes)
//! - `L-000042` - legacy dashed form
//! - `$L00336` - legacy storage location form
//! - `0000012` / `00000123` - legacy EAN-8 part form, checksum ignored
//!
//! None of them needs a database lookup.

use super::types::{LocalScanResult, SourceType, TargetType};
use crate::errors::ScanError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// Character classes are spelled out so they stay ASCII-only.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://.*/scan/([0-9A-Za-z_]+)/([0-9]+)/?$").unwrap()
});

static PREFIXED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])([0-9]{4,})$").unwrap());

static LEGACY_DASHED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9A-Za-z_])-([0-9]{6,})$").unwrap());

static LEGACY_LOCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$L([0-9]{5,})$").unwrap());

static LEGACY_EAN8_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{7})[0-9]?$").unwrap());

/// Prefix letters of the compact and legacy dashed formats.
static PREFIX_TYPES: LazyLock<HashMap<&'static str, TargetType>> = LazyLock::new(|| {
    HashMap::from([
        ("L", TargetType::PartLot),
        ("P", TargetType::Part),
        ("S", TargetType::Storelocation),
    ])
});

/// Path segments of the URL format, matched case-insensitively.
static URL_TYPES: LazyLock<HashMap<&'static str, TargetType>> = LazyLock::new(|| {
    HashMap::from([
        ("lot", TargetType::PartLot),
        ("part", TargetType::Part),
        ("location", TargetType::Storelocation),
    ])
});

/// Outcome of trying one barcode format.
///
/// `NoMatch` lets the caller try the next format; `Invalid` stops the scan.
#[derive(Debug)]
pub(crate) enum Attempt<T> {
    NoMatch,
    Matched(T),
    Invalid(ScanError),
}

impl<T> Attempt<T> {
    #[cfg(test)]
    pub fn is_match(&self) -> bool {
        matches!(self, Attempt::Matched(_))
    }

    /// Transform a matched value, keeping the other outcomes.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attempt<U> {
        match self {
            Attempt::NoMatch => Attempt::NoMatch,
            Attempt::Matched(value) => Attempt::Matched(f(value)),
            Attempt::Invalid(err) => Attempt::Invalid(err),
        }
    }
}

type InternalFormat = fn(&str) -> Attempt<LocalScanResult>;

/// Internal formats in the order they are tried.
const INTERNAL_FORMATS: [(&str, InternalFormat); 5] = [
    ("url", parse_url),
    ("prefixed", parse_prefixed),
    ("legacy-dashed", parse_legacy_dashed),
    ("legacy-location", parse_legacy_location),
    ("legacy-ean8", parse_legacy_ean8),
];

/// Try every internal format in order. The first one that does not decline wins.
pub fn parse_internal(input: &str) -> Attempt<LocalScanResult> {
    for (name, format) in INTERNAL_FORMATS {
        match format(input) {
            Attempt::NoMatch => continue,
            Attempt::Matched(result) => {
                tracing::debug!(format = name, "internal barcode format recognized");
                return Attempt::Matched(result);
            }
            Attempt::Invalid(err) => {
                tracing::debug!(format = name, error = %err, "internal barcode format rejected");
                return Attempt::Invalid(err);
            }
        }
    }
    Attempt::NoMatch
}

/// `https://host/.../scan/{lot|part|location}/{id}`
pub fn parse_url(input: &str) -> Attempt<LocalScanResult> {
    let Some(cap) = URL_REGEX.captures(input) else {
        return Attempt::NoMatch;
    };
    let segment = &cap[1];
    let Some(target_type) = URL_TYPES.get(segment.to_lowercase().as_str()) else {
        return Attempt::Invalid(ScanError::UnknownPrefix {
            prefix: segment.to_string(),
        });
    };
    internal(*target_type, &cap[2])
}

/// `P0042`: one uppercase letter, at least four digits.
pub fn parse_prefixed(input: &str) -> Attempt<LocalScanResult> {
    let Some(cap) = PREFIXED_REGEX.captures(input) else {
        return Attempt::NoMatch;
    };
    prefixed(&cap[1], &cap[2])
}

/// `L-000042`: one word character, a dash, at least six digits.
pub fn parse_legacy_dashed(input: &str) -> Attempt<LocalScanResult> {
    let Some(cap) = LEGACY_DASHED_REGEX.captures(input) else {
        return Attempt::NoMatch;
    };
    prefixed(&cap[1], &cap[2])
}

/// `$L00336`: always a storage location.
pub fn parse_legacy_location(input: &str) -> Attempt<LocalScanResult> {
    let Some(cap) = LEGACY_LOCATION_REGEX.captures(input) else {
        return Attempt::NoMatch;
    };
    internal(TargetType::Storelocation, &cap[1])
}

/// Seven digits plus an optional EAN-8 check digit: always a part.
pub fn parse_legacy_ean8(input: &str) -> Attempt<LocalScanResult> {
    let Some(cap) = LEGACY_EAN8_REGEX.captures(input) else {
        return Attempt::NoMatch;
    };
    internal(TargetType::Part, &cap[1])
}

fn prefixed(prefix: &str, digits: &str) -> Attempt<LocalScanResult> {
    match PREFIX_TYPES.get(prefix) {
        Some(target_type) => internal(*target_type, digits),
        None => Attempt::Invalid(ScanError::UnknownPrefix {
            prefix: prefix.to_string(),
        }),
    }
}

fn internal(target_type: TargetType, digits: &str) -> Attempt<LocalScanResult> {
    // Ids beyond i64 cannot exist in the inventory.
    match digits.parse::<i64>() {
        Ok(id) => Attempt::Matched(LocalScanResult::new(target_type, id, SourceType::Internal)),
        Err(_) => Attempt::NoMatch,
    }
}
