// src/core/index.rs
use crate::models::IndexedFile;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Maps each tag to the documents that declared it, in discovery order.
/// Keys iterate lexicographically, which is the order the renderer emits
/// sections in.
#[derive(Debug, Default)]
pub struct TagIndex {
    files_by_tag: BTreeMap<String, Vec<IndexedFile>>,
}

impl TagIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one document's scraped facts. Each declared tag gets a
    /// bucket entry carrying the document's other tags. Tags are
    /// case-sensitive and not normalized; a tag string declared twice
    /// produces two bucket entries, and every occurrence is excluded from
    /// each entry's co-tag list.
    pub fn add_document(&mut self, path: &Path, tags: &[String], title: Option<&str>) {
        for tag in tags {
            let file = IndexedFile {
                path: path.to_path_buf(),
                title: title.map(String::from),
                other_tags: other_tags(tags, tag),
            };
            self.files_by_tag.entry(tag.clone()).or_default().push(file);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IndexedFile])> {
        self.files_by_tag
            .iter()
            .map(|(tag, files)| (tag.as_str(), files.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files_by_tag.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files_by_tag.is_empty()
    }
}

fn other_tags(tags: &[String], tag: &str) -> Vec<String> {
    tags.iter().filter(|t| t.as_str() != tag).cloned().collect()
}

/// Maps each discovered document to the raw link matches found in it,
/// preserving discovery order across documents and scan order within one.
#[derive(Debug, Default)]
pub struct BacklinkIndex {
    entries: Vec<(PathBuf, Vec<String>)>,
}

impl BacklinkIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the links found in one document, verbatim. Document paths
    /// derive from the file tree, so one call per document is expected and
    /// repeated paths are not merged.
    pub fn add_document(&mut self, path: &Path, links: Vec<String>) {
        self.entries.push((path.to_path_buf(), links));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[String])> {
        self.entries
            .iter()
            .map(|(path, links)| (path.as_path(), links.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
