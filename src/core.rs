// src/core.rs
pub mod index;
pub mod links;
pub mod render;
pub mod scrape;
pub mod walker;
