// src/models.rs
pub mod frontmatter;
pub mod indexed_file;
pub mod render_options;

pub use frontmatter::Frontmatter;
pub use indexed_file::IndexedFile;
pub use render_options::RenderOptions;
