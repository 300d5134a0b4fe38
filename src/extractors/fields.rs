// src/extractors/fields.rs

use regex::Regex;

/// Returns the first capture group of the first match of `re` in `text`,
/// trimmed, or `default` when there is no match.
///
/// Absence of a field is a normal outcome in this corpus, so this never
/// errors. Every field pattern is expected to carry its own `(?is)` flags
/// and exactly one capture group; patterns without a group yield `default`.
pub fn first_capture(re: &Regex, text: &str, default: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Evaluates fallback candidates in priority order and returns the first
/// non-empty one, or an empty string when every candidate is empty.
pub fn first_non_empty(candidates: &[&str]) -> String {
    candidates
        .iter()
        .find(|c| !c.is_empty())
        .map_or_else(String::new, |c| (*c).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static DATE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?is)<DATE>(.*?)</DATE>").expect("Failed to compile DATE_RE")
    });

    static NEWID_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"(?i)NEWID="(\d+)""#).expect("Failed to compile NEWID_RE")
    });

    #[test]
    fn test_first_capture_literal_tag() {
        let text = "<DATE> 26-FEB-1987 15:01:44.79</DATE>";
        assert_eq!(first_capture(&DATE_RE, text, ""), "26-FEB-1987 15:01:44.79");
    }

    #[test]
    fn test_first_capture_is_case_insensitive_and_multiline() {
        let text = "<date>26-FEB-1987\n15:01:44.79</date>";
        assert_eq!(first_capture(&DATE_RE, text, ""), "26-FEB-1987\n15:01:44.79");
    }

    #[test]
    fn test_first_capture_attribute_pattern() {
        let text = r#"<REUTERS TOPICS="YES" NEWID="2005">"#;
        assert_eq!(first_capture(&NEWID_RE, text, ""), "2005");
    }

    #[test]
    fn test_first_capture_returns_default_on_absence() {
        assert_eq!(first_capture(&DATE_RE, "no date here", ""), "");
        assert_eq!(first_capture(&DATE_RE, "no date here", "n/a"), "n/a");
    }

    #[test]
    fn test_first_capture_takes_first_of_many() {
        let text = "<DATE>first</DATE><DATE>second</DATE>";
        assert_eq!(first_capture(&DATE_RE, text, ""), "first");
    }

    #[test]
    fn test_first_non_empty_priority_order() {
        assert_eq!(first_non_empty(&["", "body", "title"]), "body");
        assert_eq!(first_non_empty(&["", "", "title"]), "title");
        assert_eq!(first_non_empty(&["", "", ""]), "");
        assert_eq!(first_non_empty(&[]), "");
    }
}
