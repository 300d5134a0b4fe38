// src/extractors/entities.rs

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Matches one entity reference: decimal numeric, hex numeric, or named.
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#([0-9]+)|#[xX]([0-9a-fA-F]+)|([a-zA-Z][a-zA-Z0-9]*));")
        .expect("Failed to compile ENTITY_RE")
});

/// Decodes HTML entity references in `text`.
///
/// Handles the named entities seen in the corpus plus decimal (`&#233;`) and
/// hex (`&#xE9;`) numeric references. Entity-shaped spans that do not
/// resolve (unknown names, out-of-range code points) are left verbatim.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let decoded = if let Some(dec) = caps.get(1) {
                numeric_char(dec.as_str(), 10)
            } else if let Some(hex) = caps.get(2) {
                numeric_char(hex.as_str(), 16)
            } else {
                named_char(&caps[3])
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn numeric_char(digits: &str, radix: u32) -> Option<char> {
    u32::from_str_radix(digits, radix).ok().and_then(char::from_u32)
}

fn named_char(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(decode_entities("Oil &amp; Gas"), "Oil & Gas");
        assert_eq!(decode_entities("&lt;3 pct&gt;"), "<3 pct>");
        assert_eq!(decode_entities("&quot;shr loss&quot;"), "\"shr loss\"");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entities("Citro&#235;n"), "Citroën");
        assert_eq!(decode_entities("caf&#233;"), "café");
        assert_eq!(decode_entities("caf&#xE9;"), "café");
    }

    #[test]
    fn test_unknown_spans_pass_through() {
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("AT&T profits"), "AT&T profits");
        // surrogate range has no char
        assert_eq!(decode_entities("&#55296;"), "&#55296;");
    }

    #[test]
    fn test_decode_is_idempotent_on_decoded_text() {
        let once = decode_entities("Oil &amp; Gas caf&#233;");
        assert_eq!(decode_entities(&once), once);
    }

    #[test]
    fn test_no_entities_is_a_no_op() {
        assert_eq!(decode_entities("plain corpus text"), "plain corpus text");
        assert_eq!(decode_entities(""), "");
    }
}
