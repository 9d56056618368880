// src/core/render.rs
use crate::core::index::{BacklinkIndex, TagIndex};
use crate::models::{IndexedFile, RenderOptions};
use crate::utils::relative_to;
use std::collections::HashMap;
use std::path::Path;

/// Renders the tag index as a markdown document.
///
/// Sections appear in lexicographic tag order; entries within a section
/// keep discovery order. Link targets are rewritten relative to the
/// directory that will contain the output file. Exactly one blank line
/// separates sections, and the final entry of the final section carries no
/// trailing newline.
///
/// Duplicate titles are resolved per bucket: when two entries under the
/// same tag share a title, both display their relative path instead.
#[must_use]
pub fn render_index(index: &TagIndex, options: &RenderOptions, output_path: &Path) -> String {
    let mut out = format!("# {}\n", options.title);

    if options.toc {
        out.push_str("\n---\n\n## Table of contents\n");
        for (tag, _) in index.iter() {
            let header = tag_to_header(tag, options);
            out.push_str(&format!("- [{}](#{})\n", header, header_to_link(&header)));
        }
        out.push_str("\n---\n\n");
    }

    let tag_count = index.len();
    for (n, (tag, files)) in index.iter().enumerate() {
        out.push_str(&format!("## {}\n", tag_to_header(tag, options)));

        let counted_titles = count_titles(files);
        for (m, file) in files.iter().enumerate() {
            let mut relative_path = relative_to(&file.path, output_path);
            if options.wiki_links {
                relative_path = relative_path.with_extension("");
            }
            let relative_path = relative_path.display().to_string();

            let title = file.title.clone().unwrap_or_default();
            let title = if counted_titles.get(&title).is_some_and(|count| *count > 1) {
                relative_path.clone()
            } else {
                title
            };

            out.push_str(&format!("- [{title}]({relative_path})"));
            if options.tag_links {
                for other_tag in &file.other_tags {
                    out.push_str(&format!(" `{other_tag}`"));
                }
            }
            let last_entry = m == files.len() - 1 && n == tag_count - 1;
            if !last_entry {
                out.push('\n');
            }
        }
        if n < tag_count - 1 {
            out.push('\n');
        }
    }

    out
}

/// Renders the backlink report: one block per discovered document, in
/// discovery order, listing the raw link matches found in it. Paths are
/// relativized against the output file's directory; a raw link string that
/// cannot be relativized passes through unchanged.
#[must_use]
pub fn render_backlinks(index: &BacklinkIndex, output_path: &Path) -> String {
    let mut out = String::new();
    for (path, links) in index.iter() {
        out.push_str(&format!("{}:\n", relative_to(path, output_path).display()));
        for link in links {
            let link = relative_to(Path::new(link), output_path);
            out.push_str(&format!("  - {}\n", link.display()));
        }
    }
    out
}

fn tag_to_header(tag: &str, options: &RenderOptions) -> String {
    if options.capitalize {
        let mut chars = tag.chars();
        if let Some(first) = chars.next() {
            return first.to_uppercase().chain(chars).collect();
        }
    }
    tag.to_string()
}

/// Derives an in-document anchor from a section header. The rendering
/// platform drops colons and turns spaces into hyphens when generating
/// heading anchors, so `foo:bar` needs `#foobar` and `foo bar` needs
/// `#foo-bar`.
#[must_use]
pub fn header_to_link(header: &str) -> String {
    header.replace(':', "").replace(' ', "-")
}

fn count_titles(files: &[IndexedFile]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for file in files {
        *counts
            .entry(file.title.clone().unwrap_or_default())
            .or_insert(0_usize) += 1;
    }
    counts
}
