//! Scanner output cleanup applied before any format matching.

/// Characters stripped from both ends of a scan.
///
/// Format 06 separators (0x04, 0x1D, 0x1E) must survive trimming.
const TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Normalize raw scanner output.
///
/// Some scanners with a German keyboard layout emit `ß` where a `-` was
/// encoded. `ß` never appears in a valid payload, so it is always replaced.
pub fn normalize(input: &str) -> String {
    input.trim_matches(&TRIM_CHARS[..]).replace('ß', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  P0042\r\n"), "P0042");
        assert_eq!(normalize("\tL0007\0"), "L0007");
    }

    #[test]
    fn test_normalize_replaces_sharp_s() {
        assert_eq!(normalize("Lß000042"), "L-000042");
        assert_eq!(normalize("ßß"), "--");
    }

    #[test]
    fn test_normalize_keeps_format06_separators() {
        let payload = "[)>\u{1E}06\u{1D}Q10\u{1D}\u{04}";
        assert_eq!(normalize(payload), payload);
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" not a barcode "), "not a barcode");
    }
}
