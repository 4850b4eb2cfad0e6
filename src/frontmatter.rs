//! Frontmatter extraction: a `---` delimited key/value header
use std::collections::BTreeMap;

/// Split a document into its metadata map and body.
///
/// Without a leading `---`, or without a closing `---` anywhere after
/// it, there is no frontmatter: the map is empty and the body is the
/// input unchanged. Otherwise each header line is split at its first
/// `:`; keys and values are trimmed and surrounding quotes stripped
/// from values. Lines without a colon are ignored.
pub fn extract(text: &str) -> (BTreeMap<String, String>, &str) {
    if !text.starts_with("---") {
        return (BTreeMap::new(), text);
    }
    let Some(end) = text[3..].find("---") else {
        return (BTreeMap::new(), text);
    };
    let end = end + 3;
    let header = &text[3..end];
    let body = text[end + 3..].trim();

    let mut meta = BTreeMap::new();
    for line in header.lines() {
        let line = line.trim();
        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            meta.insert(key.trim().to_string(), value.to_string());
        }
    }
    (meta, body)
}
