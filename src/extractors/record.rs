// src/extractors/record.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extractors::entities::decode_entities;
use crate::extractors::fields::{first_capture, first_non_empty};

// Joins multi-valued place/topic codes; never occurs inside a code itself.
const ITEM_DELIMITER: &str = ";";

// --- Field Patterns (Lazy Static) ---
// All patterns scan case-insensitively and across line breaks; each has
// exactly one capture group for `first_capture`.
static NEWID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)NEWID="(\d+)""#).expect("Failed to compile NEWID_RE")
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<DATE>(.*?)</DATE>").expect("Failed to compile DATE_RE")
});

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<TITLE>(.*?)</TITLE>").expect("Failed to compile TITLE_RE")
});

static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<AUTHOR>(.*?)</AUTHOR>").expect("Failed to compile AUTHOR_RE")
});

static DATELINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<DATELINE>(.*?)</DATELINE>").expect("Failed to compile DATELINE_RE")
});

static BODY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<BODY>(.*?)</BODY>").expect("Failed to compile BODY_RE")
});

// BRIEF items have no <BODY>, only the enclosing <TEXT TYPE="BRIEF"> span.
static TEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<TEXT[^>]*>(.*?)</TEXT>").expect("Failed to compile TEXT_RE")
});

static PLACES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<PLACES>(.*?)</PLACES>").expect("Failed to compile PLACES_RE")
});

static TOPICS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<TOPICS>(.*?)</TOPICS>").expect("Failed to compile TOPICS_RE")
});

static ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<D>(.*?)</D>").expect("Failed to compile ITEM_RE")
});

// --- Data Structures ---
/// One normalized article. Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Corpus-unique article id from the NEWID attribute; absent when the
    /// opening marker carries none.
    pub id: Option<u64>,
    /// Free-text archive timestamp, unparsed.
    pub date: String,
    #[serde(rename = "article_title")]
    pub title: String,
    #[serde(rename = "article_text")]
    pub text: String,
    pub author: String,
    /// Place codes joined with `;`, in order of appearance.
    pub places: String,
    /// Topic codes, same shape as `places`.
    pub topics: String,
}

/// Builds one [`Record`] from one document block.
///
/// Never fails: a block with no recognizable sub-elements produces a record
/// with every text field empty and no id.
pub fn build_record(block: &str) -> Record {
    let id = first_capture(&NEWID_RE, block, "").parse::<u64>().ok();
    let date = first_capture(&DATE_RE, block, "");

    let title = decode_entities(&first_capture(&TITLE_RE, block, ""));
    let author = decode_entities(&first_capture(&AUTHOR_RE, block, ""));
    let dateline = decode_entities(&first_capture(&DATELINE_RE, block, ""));

    // BRIEF items carry their content directly in <TEXT>, with no <BODY>.
    let body_tag = decode_entities(&first_capture(&BODY_RE, block, ""));
    let text_tag = decode_entities(&first_capture(&TEXT_RE, block, ""));
    let body = first_non_empty(&[&body_tag, &text_tag]);

    let text = if !dateline.is_empty() && !body.is_empty() {
        format!("{dateline}\n\n{body}")
    } else {
        first_non_empty(&[&body, &title])
    };

    let places = delimited_items(&first_capture(&PLACES_RE, block, ""));
    let topics = delimited_items(&first_capture(&TOPICS_RE, block, ""));

    Record { id, date, title, text, author, places, topics }
}

/// Collects every `<D>` item inside an enclosing span, in order, joined with
/// the item delimiter. Items are taken verbatim.
fn delimited_items(enclosing: &str) -> String {
    ITEM_RE
        .captures_iter(enclosing)
        .map(|caps| caps[1].to_string())
        .collect::<Vec<_>>()
        .join(ITEM_DELIMITER)
}
