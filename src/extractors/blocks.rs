// src/extractors/blocks.rs

use once_cell::sync::Lazy;
use regex::Regex;

// One <REUTERS ...> ... </REUTERS> span is one article. The opening marker
// carries attributes (TOPICS, LEWISSPLIT, NEWID, ...), so anything up to the
// closing '>' is accepted on it.
static DOCUMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<REUTERS[^>]*>.*?</REUTERS>").expect("Failed to compile DOCUMENT_RE")
});

/// Splits a whole archive file into its document blocks, in input order.
///
/// Spans without a closing marker never match and therefore yield no block;
/// malformed input degrades to fewer blocks, never to an error.
pub fn split_documents(raw: &str) -> Vec<&str> {
    DOCUMENT_RE.find_iter(raw).map(|m| m.as_str()).collect()
}
