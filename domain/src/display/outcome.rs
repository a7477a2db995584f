//! Display outcome value objects

use crate::core::error::DisplayError;
use crate::record::artefact::ArtefactRecord;
use crate::shortcode::attributes::FigureSize;

/// Everything the figure view needs for a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtefactFigure {
    pub record: ArtefactRecord,
    pub caption: String,
    pub figure_size: FigureSize,
}

/// Result of one shortcode invocation: a figure or an error message, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    Figure(ArtefactFigure),
    Error(DisplayError),
}

impl From<DisplayError> for DisplayOutcome {
    fn from(error: DisplayError) -> Self {
        DisplayOutcome::Error(error)
    }
}
