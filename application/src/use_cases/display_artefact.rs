//! Display Artefact use case
//!
//! Orchestrates one artefact shortcode invocation: validate the id, import
//! the record, decide between figure and error, render.

use crate::ports::artefact_importer::{ArtefactImporter, ImportOutcome};
use crate::ports::artefact_view::ArtefactView;
use finds_domain::{
    ArtefactFigure, ArtefactRecord, CaptionCreator, DisplayError, DisplayOutcome, RecordId,
    RecordKind, ShortcodeAttributes, clean,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for displaying a single artefact record
///
/// Holds only shared collaborators, so one instance can serve any number of
/// invocations; each call threads its own [`DisplayOutcome`].
pub struct DisplayArtefactUseCase<I: ArtefactImporter + 'static, V: ArtefactView + 'static> {
    importer: Arc<I>,
    view: Arc<V>,
}

impl<I: ArtefactImporter + 'static, V: ArtefactView + 'static> DisplayArtefactUseCase<I, V> {
    pub fn new(importer: Arc<I>, view: Arc<V>) -> Self {
        Self { importer, view }
    }

    /// Run the invocation and render its outcome to a single string
    pub async fn execute(&self, attributes: &ShortcodeAttributes) -> String {
        let outcome = self.decide(attributes).await;
        self.view.render(&outcome)
    }

    /// Run the invocation up to, but not including, rendering
    pub async fn decide(&self, attributes: &ShortcodeAttributes) -> DisplayOutcome {
        let candidate = clean(attributes.raw_id());

        let id = match RecordId::validate(&candidate) {
            Ok(id) => id,
            Err(e) => {
                debug!("Rejected record id {:?}: {:?}", candidate, e);
                return DisplayError::from(e).into();
            }
        };

        info!("Importing artefact record {}", id);

        match self.importer.import(&id).await {
            ImportOutcome::Artefact(record) => Self::figure_for(record, attributes),
            ImportOutcome::Error { message } => {
                warn!("Import of record {} failed: {}", id, message);
                DisplayError::Remote(message).into()
            }
            ImportOutcome::Unrecognized { record } => {
                warn!("Import of record {} returned record type {:?}", id, record);
                DisplayError::UnexpectedResponse(record).into()
            }
        }
    }

    fn figure_for(record: ArtefactRecord, attributes: &ShortcodeAttributes) -> DisplayOutcome {
        if !record.has_image() {
            info!("Record {:?} has no image", record.id());
            return DisplayError::NoImageAvailable.into();
        }

        let caption = CaptionCreator::create(
            RecordKind::Artefact,
            &record,
            attributes.caption_option(),
            attributes.caption_text(),
        );
        debug!("Caption for record {:?}: {:?}", record.id(), caption);

        DisplayOutcome::Figure(ArtefactFigure {
            record,
            caption,
            figure_size: attributes.figure_size(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use finds_domain::{CaptionOption, FigureSize, RecordIdError};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockImporter {
        outcome: ImportOutcome,
        calls: Mutex<Vec<String>>,
    }

    impl MockImporter {
        fn new(outcome: ImportOutcome) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ArtefactImporter for MockImporter {
        async fn import(&self, id: &RecordId) -> ImportOutcome {
            self.calls.lock().unwrap().push(id.to_string());
            self.outcome.clone()
        }
    }

    /// Plain-text view so assertions can see exactly what reached the renderer
    struct MockView;

    impl ArtefactView for MockView {
        fn render_figure(&self, figure: &ArtefactFigure) -> String {
            format!("figure[{}]: {}", figure.figure_size, figure.caption)
        }

        fn render_error(&self, message: &str) -> String {
            format!("error: {}", message)
        }
    }

    fn artefact(with_image: bool) -> ArtefactRecord {
        ArtefactRecord {
            id: Some("123456".to_string()),
            find_id: Some("LIN-D92A22".to_string()),
            object_type: Some("BROOCH".to_string()),
            broad_period: Some("ROMAN".to_string()),
            image_directory: with_image.then(|| "images/a/".to_string()),
            filename: with_image.then(|| "brooch.jpg".to_string()),
            ..Default::default()
        }
    }

    fn use_case(
        outcome: ImportOutcome,
    ) -> (DisplayArtefactUseCase<MockImporter, MockView>, Arc<MockImporter>) {
        let importer = Arc::new(MockImporter::new(outcome));
        (
            DisplayArtefactUseCase::new(Arc::clone(&importer), Arc::new(MockView)),
            importer,
        )
    }

    #[tokio::test]
    async fn test_figure_with_generated_caption() {
        let (use_case, importer) = use_case(ImportOutcome::Artefact(artefact(true)));
        let attrs = ShortcodeAttributes::new()
            .with_id("123456")
            .with_figure_size(FigureSize::Large);

        let output = use_case.execute(&attrs).await;

        assert_eq!(output, "figure[large]: Roman brooch (LIN-D92A22)");
        assert_eq!(importer.calls(), vec!["123456".to_string()]);
    }

    #[tokio::test]
    async fn test_figure_with_manual_caption() {
        let (use_case, _) = use_case(ImportOutcome::Artefact(artefact(true)));
        let attrs = ShortcodeAttributes::new()
            .with_id("123456/")
            .with_caption_option(CaptionOption::Manual)
            .with_caption_text("Found by the river");

        let output = use_case.execute(&attrs).await;

        assert_eq!(output, "figure[medium]: Found by the river");
    }

    #[tokio::test]
    async fn test_remote_error_is_propagated_verbatim() {
        let (use_case, _) = use_case(ImportOutcome::error("Not found"));
        let attrs = ShortcodeAttributes::new().with_id("999999");

        let output = use_case.execute(&attrs).await;

        assert_eq!(output, "error: Not found");
    }

    #[tokio::test]
    async fn test_record_without_image() {
        let (use_case, _) = use_case(ImportOutcome::Artefact(artefact(false)));
        let attrs = ShortcodeAttributes::new().with_id("123456");

        let outcome = use_case.decide(&attrs).await;
        assert_eq!(outcome, DisplayOutcome::Error(DisplayError::NoImageAvailable));

        let output = use_case.execute(&attrs).await;
        assert_eq!(output, "error: No image is available on this record.");
    }

    #[tokio::test]
    async fn test_invalid_ids_never_reach_importer() {
        let (use_case, importer) = use_case(ImportOutcome::Artefact(artefact(true)));

        let cases = [
            (ShortcodeAttributes::new(), RecordIdError::MissingId),
            (ShortcodeAttributes::new().with_id("///"), RecordIdError::MissingId),
            (ShortcodeAttributes::new().with_id("12a45"), RecordIdError::NotNumeric),
            (ShortcodeAttributes::new().with_id("1234567"), RecordIdError::TooLong),
        ];

        for (attrs, expected) in cases {
            let outcome = use_case.decide(&attrs).await;
            assert_eq!(outcome, DisplayOutcome::Error(DisplayError::InvalidId(expected)));
        }
        assert!(importer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_id_renders_validator_message() {
        let (use_case, _) = use_case(ImportOutcome::Artefact(artefact(true)));
        let attrs = ShortcodeAttributes::new().with_id("12a45");

        let output = use_case.execute(&attrs).await;

        assert_eq!(output, format!("error: {}", RecordIdError::NotNumeric));
    }

    #[tokio::test]
    async fn test_unrecognized_discriminator_renders_error() {
        let (use_case, _) = use_case(ImportOutcome::Unrecognized {
            record: "coin".to_string(),
        });
        let attrs = ShortcodeAttributes::new().with_id("42");

        let outcome = use_case.decide(&attrs).await;

        assert_eq!(
            outcome,
            DisplayOutcome::Error(DisplayError::UnexpectedResponse("coin".to_string()))
        );
    }

    #[tokio::test]
    async fn test_identical_invocations_render_identically() {
        let (use_case, importer) = use_case(ImportOutcome::Artefact(artefact(true)));
        let attrs = ShortcodeAttributes::new().with_id("123456");

        let first = use_case.execute(&attrs).await;
        let second = use_case.execute(&attrs).await;

        assert_eq!(first, second);
        assert_eq!(importer.calls().len(), 2);
    }
}
