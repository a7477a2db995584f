//! Artefact view port
//!
//! Defines how outcomes are turned into markup. Rendering is pure: an
//! implementation returns the full output and writes nothing itself.

use finds_domain::{ArtefactFigure, DisplayOutcome};

/// Port for rendering display outcomes
pub trait ArtefactView: Send + Sync {
    /// Render a successful figure
    fn render_figure(&self, figure: &ArtefactFigure) -> String;

    /// Render an error message in place of the figure
    fn render_error(&self, message: &str) -> String;

    /// Render whichever view the outcome calls for
    fn render(&self, outcome: &DisplayOutcome) -> String {
        match outcome {
            DisplayOutcome::Figure(figure) => self.render_figure(figure),
            DisplayOutcome::Error(error) => self.render_error(&error.to_string()),
        }
    }
}
