//! Shared utility functions for the partscan crate.

/// Expand backslash escapes typed on a command line into the characters a
/// scanner would have sent.
///
/// Supports `\xHH`, `\u{H..}`, `\t`, `\n`, `\r` and `\\`. Anything else,
/// including malformed escapes, is kept verbatim.
pub fn expand_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let escape = &rest[pos..];
        match parse_escape(escape) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &escape[consumed..];
            }
            None => {
                out.push('\\');
                rest = &escape[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode one escape at the start of `s` (which begins with `\`).
/// Returns the character and the number of bytes consumed.
fn parse_escape(s: &str) -> Option<(char, usize)> {
    let mut chars = s[1..].chars();
    match chars.next()? {
        '\\' => Some(('\\', 2)),
        't' => Some(('\t', 2)),
        'n' => Some(('\n', 2)),
        'r' => Some(('\r', 2)),
        'x' => {
            let hex = s.get(2..4)?;
            let value = u8::from_str_radix(hex, 16).ok()?;
            Some((char::from(value), 4))
        }
        'u' => {
            let body = s.get(2..)?.strip_prefix('{')?;
            let end = body.find('}')?;
            let value = u32::from_str_radix(&body[..end], 16).ok()?;
            // `\u{` + digits + `}`
            Some((char::from_u32(value)?, 3 + end + 1))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_escapes_plain_text() {
        assert_eq!(expand_escapes("P0042"), "P0042");
    }

    #[test]
    fn test_expand_escapes_hex() {
        assert_eq!(
            expand_escapes(r"[)>\x1e06\x1d1P1234567\x1dQ10\x1d\x04"),
            "[)>\u{1E}06\u{1D}1P1234567\u{1D}Q10\u{1D}\u{04}"
        );
    }

    #[test]
    fn test_expand_escapes_unicode() {
        assert_eq!(expand_escapes(r"\u{1D}A\u{df}"), "\u{1D}Aß");
    }

    #[test]
    fn test_expand_escapes_backslash_and_whitespace() {
        assert_eq!(expand_escapes(r"a\\b\tc"), "a\\b\tc");
    }

    #[test]
    fn test_expand_escapes_malformed_kept_verbatim() {
        assert_eq!(expand_escapes(r"\q"), r"\q");
        assert_eq!(expand_escapes(r"\xZZ"), r"\xZZ");
        assert_eq!(expand_escapes(r"\u{110000}"), r"\u{110000}");
        assert_eq!(expand_escapes("trailing\\"), "trailing\\");
    }
}
