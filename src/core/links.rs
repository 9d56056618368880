// src/core/links.rs
use regex::Regex;
use std::sync::LazyLock;

// Greedy within the line, so two links on one line merge into a single
// wide match. The reports downstream carry raw matches, not parsed
// targets, and depend on this behavior staying put.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*\]\(.*\)").expect("link pattern is valid"));

/// Extracts all inline link references from raw document content, line by
/// line, in scan order. Matches are returned verbatim (e.g. `[bar](spam)`)
/// and are not deduplicated.
#[must_use]
pub fn scrape_backlinks(content: &str) -> Vec<String> {
    let mut backlinks = Vec::new();
    for line in content.lines() {
        for m in LINK_RE.find_iter(line) {
            backlinks.push(m.as_str().to_string());
        }
    }
    backlinks
}
