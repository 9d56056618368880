// src/models/frontmatter.rs
use serde::Deserialize;

/// The subset of YAML front matter this tool understands. Any other keys in
/// the block are ignored.
#[derive(Deserialize, Debug, Default)]
pub struct Frontmatter {
    pub tags: Option<Vec<String>>,
}
