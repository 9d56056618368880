// src/utils.rs
use std::path::{Component, Path, PathBuf};

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Rewrites `path` relative to the directory containing `output_path`, so
/// that links in the generated file resolve from where that file lives.
/// Returns `path` unchanged when no relative path exists, for example when
/// one side is absolute and the other is not.
#[must_use]
pub fn relative_to(path: &Path, output_path: &Path) -> PathBuf {
    let base = output_path.parent().unwrap_or_else(|| Path::new(""));
    diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

fn diff_paths(path: &Path, base: &Path) -> Option<PathBuf> {
    if path.is_absolute() != base.is_absolute() {
        return None;
    }

    let mut path_components = path.components();
    let mut base_components = base.components();
    let mut result: Vec<Component> = Vec::new();
    loop {
        match (path_components.next(), base_components.next()) {
            (None, None) => break,
            (Some(p), None) => {
                result.push(p);
                result.extend(path_components.by_ref());
                break;
            }
            (None, Some(_)) => result.push(Component::ParentDir),
            (Some(p), Some(b)) if result.is_empty() && p == b => {}
            (Some(p), Some(b)) if b == Component::CurDir => result.push(p),
            (Some(_), Some(b)) if b == Component::ParentDir => return None,
            (Some(p), Some(_)) => {
                result.push(Component::ParentDir);
                for _ in base_components.by_ref() {
                    result.push(Component::ParentDir);
                }
                result.push(p);
                result.extend(path_components.by_ref());
                break;
            }
        }
    }

    Some(result.iter().map(|c| c.as_os_str()).collect())
}
