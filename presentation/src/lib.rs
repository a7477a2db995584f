//! Presentation layer for finds-artefact
//!
//! This crate contains CLI definitions, shortcode attribute parsing and the
//! HTML views that render display outcomes.

pub mod cli;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use input::shortcode::{parse_attributes, sanitize_text_field};
pub use output::html::HtmlArtefactView;
