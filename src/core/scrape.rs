// src/core/scrape.rs
use crate::models::Frontmatter;
use log::debug;

/// Extracts the declared tags and heading-derived title from raw document
/// content.
///
/// Front matter must open the document: after any leading blank lines the
/// first line has to be exactly `---`, otherwise no tags and no title are
/// reported at all. Lines between the opening and closing `---` are
/// collected and decoded as YAML with a `tags` list. The first line
/// starting with `# ` supplies the title and stops the scan immediately,
/// even if the closing `---` has not been seen yet.
///
/// A body that fails to decode is never an error for the run: the document
/// is reported as tagless, a diagnostic is logged, and any title found is
/// still returned.
pub fn scrape_tags_and_title(content: &str) -> (Vec<String>, Option<String>) {
    let lines: Vec<&str> = content.lines().collect();
    let mut title = None;

    if first_non_empty_line(&lines) != Some("---") {
        debug!(
            "first line was {:?}, no tags detected",
            lines.first().copied().unwrap_or("")
        );
        return (Vec::new(), title);
    }

    let mut found_yaml = false;
    let mut finished_yaml = false;
    let mut yaml_lines: Vec<&str> = Vec::new();
    for line in &lines {
        if line.len() > 2 && line.starts_with("# ") {
            title = Some(line[2..].to_string());
            break;
        }
        if *line == "---" {
            if found_yaml {
                // A second boundary marks the end of the front matter.
                finished_yaml = true;
            } else {
                found_yaml = true;
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if found_yaml && !finished_yaml {
            yaml_lines.push(line);
        }
    }

    if yaml_lines.is_empty() {
        return (Vec::new(), title);
    }

    debug!("found yaml:");
    for line in &yaml_lines {
        debug!("{line}");
    }

    match serde_yaml_ng::from_str::<Frontmatter>(&yaml_lines.join("\n")) {
        Ok(frontmatter) => (frontmatter.tags.unwrap_or_default(), title),
        Err(e) => {
            debug!("error decoding front matter: {e}");
            (Vec::new(), title)
        }
    }
}

fn first_non_empty_line<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines.iter().copied().find(|line| !line.is_empty())
}
