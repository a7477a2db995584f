//! Shortcode attributes
//!
//! The attribute bag an author writes into an artefact shortcode:
//! `id`, `caption-option`, `caption-text` and `figure-size`.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ATTR_ID: &str = "id";
pub const ATTR_CAPTION_OPTION: &str = "caption-option";
pub const ATTR_CAPTION_TEXT: &str = "caption-text";
pub const ATTR_FIGURE_SIZE: &str = "figure-size";

/// How the figure caption is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionOption {
    /// Caption generated from the record's metadata (default)
    #[default]
    Auto,
    /// Caption taken from the `caption-text` attribute
    Manual,
    /// No caption
    None,
}

impl fmt::Display for CaptionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptionOption::Auto => write!(f, "auto"),
            CaptionOption::Manual => write!(f, "manual"),
            CaptionOption::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for CaptionOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(CaptionOption::Auto),
            "manual" => Ok(CaptionOption::Manual),
            "none" => Ok(CaptionOption::None),
            _ => Err(format!("Invalid CaptionOption: {}", s)),
        }
    }
}

/// Rendered size of the figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl fmt::Display for FigureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureSize::Small => write!(f, "small"),
            FigureSize::Medium => write!(f, "medium"),
            FigureSize::Large => write!(f, "large"),
        }
    }
}

impl std::str::FromStr for FigureSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(FigureSize::Small),
            "medium" => Ok(FigureSize::Medium),
            "large" => Ok(FigureSize::Large),
            _ => Err(format!("Invalid FigureSize: {}", s)),
        }
    }
}

/// Attributes of one artefact shortcode invocation
///
/// The `id` is kept raw; it is cleaned and validated by the use case so that
/// an invalid id can still be reported to the author. Caption text is stored
/// as given, so callers sanitize it at the boundary where it is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeAttributes {
    id: Option<String>,
    caption_option: CaptionOption,
    caption_text: String,
    figure_size: FigureSize,
}

impl ShortcodeAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_caption_option(mut self, option: CaptionOption) -> Self {
        self.caption_option = option;
        self
    }

    pub fn with_caption_text(mut self, text: impl Into<String>) -> Self {
        self.caption_text = text.into();
        self
    }

    pub fn with_figure_size(mut self, size: FigureSize) -> Self {
        self.figure_size = size;
        self
    }

    /// The `id` attribute exactly as supplied
    pub fn raw_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn caption_option(&self) -> CaptionOption {
        self.caption_option
    }

    pub fn caption_text(&self) -> &str {
        &self.caption_text
    }

    pub fn figure_size(&self) -> FigureSize {
        self.figure_size
    }
}
