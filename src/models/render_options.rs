// src/models/render_options.rs

/// Presentation options for the generated tag index, resolved once by the
/// CLI layer and passed through rendering as a value.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title of the generated index document.
    pub title: String,
    /// Strip file extensions from link targets.
    pub wiki_links: bool,
    /// Uppercase the first character of each tag heading.
    pub capitalize: bool,
    /// Annotate each entry with its other tags.
    pub tag_links: bool,
    /// Emit a table of contents linking to each tag heading.
    pub toc: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: String::from("Index"),
            wiki_links: false,
            capitalize: false,
            tag_links: false,
            toc: false,
        }
    }
}
