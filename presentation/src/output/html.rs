//! HTML views for artefact figures and error messages

use finds_application::ArtefactView;
use finds_domain::core::string::{escape_html, sentence_case, truncate};
use finds_domain::{ArtefactFigure, FigureSize, ImageVariant, NO_IMAGE_MESSAGE};

/// Longest alt text taken from a record description
const ALT_TEXT_MAX_LEN: usize = 150;

/// Renders outcomes as HTML fragments for embedding in a page
pub struct HtmlArtefactView {
    base_url: String,
}

impl HtmlArtefactView {
    /// `base_url` is the site that image and record paths are resolved against
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn image_variant(size: FigureSize) -> ImageVariant {
        match size {
            FigureSize::Small | FigureSize::Medium => ImageVariant::Medium,
            FigureSize::Large => ImageVariant::Original,
        }
    }

    /// Caption first, then the record's own description, then its object type
    fn alt_text(figure: &ArtefactFigure) -> String {
        if !figure.caption.is_empty() {
            return figure.caption.clone();
        }
        if let Some(description) = figure.record.description() {
            return truncate(description, ALT_TEXT_MAX_LEN);
        }
        figure
            .record
            .object_type()
            .map(sentence_case)
            .unwrap_or_else(|| "Artefact".to_string())
    }

    /// Render the figure markup
    pub fn figure(&self, figure: &ArtefactFigure) -> String {
        let Some(image_path) = figure
            .record
            .image_path(Self::image_variant(figure.figure_size))
        else {
            return Self::error(NO_IMAGE_MESSAGE);
        };

        let image = format!(
            r#"<img src="{}" alt="{}" loading="lazy" />"#,
            escape_html(&self.absolute(&image_path)),
            escape_html(&Self::alt_text(figure))
        );
        let image = match figure.record.record_path() {
            Some(record_path) => format!(
                r#"<a href="{}">{}</a>"#,
                escape_html(&self.absolute(&record_path)),
                image
            ),
            None => image,
        };

        let mut output = format!(
            "<figure class=\"finds-figure finds-figure--{}\">\n  {}\n",
            figure.figure_size, image
        );
        if !figure.caption.is_empty() {
            output.push_str(&format!(
                "  <figcaption class=\"finds-figure__caption\">{}</figcaption>\n",
                escape_html(&figure.caption)
            ));
        }
        output.push_str("</figure>\n");
        output
    }

    /// Render an error message in place of the figure
    pub fn error(message: &str) -> String {
        format!(
            "<div class=\"finds-error\" role=\"alert\">\n  <p>{}</p>\n</div>\n",
            escape_html(message)
        )
    }
}

impl ArtefactView for HtmlArtefactView {
    fn render_figure(&self, figure: &ArtefactFigure) -> String {
        self.figure(figure)
    }

    fn render_error(&self, message: &str) -> String {
        Self::error(message)
    }
}
