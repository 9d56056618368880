// src/models/indexed_file.rs
use std::path::PathBuf;

/// One entry in a tag's bucket: the document that declared the tag, its
/// heading-derived title, and the other tags declared alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    pub path: PathBuf,
    pub title: Option<String>,
    pub other_tags: Vec<String>,
}
