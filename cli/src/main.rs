//! CLI entrypoint for finds-artefact
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use finds_application::{ArtefactImporter, DisplayArtefactUseCase};
use finds_domain::ShortcodeAttributes;
use finds_infrastructure::{ConfigLoader, FindsEndpoint, FindsJsonImporter, FixtureImporter};
use finds_presentation::{Cli, HtmlArtefactView};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries the rendered HTML only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    let attributes =
        cli.shortcode_attributes(config.defaults.caption_option, config.defaults.figure_size);

    // === Dependency Injection ===
    let endpoint = FindsEndpoint::new(&config.source.scheme, &config.source.host)?;
    let view = Arc::new(HtmlArtefactView::new(endpoint.base_url().as_str()));

    let html = match &cli.fixtures {
        Some(dir) => {
            info!("Reading records from fixtures in {}", dir.display());
            render(Arc::new(FixtureImporter::new(dir)), view, &attributes).await
        }
        None => {
            info!("Reading records from {}", endpoint.base_url());
            let importer = FindsJsonImporter::from_config(&config.source)?;
            render(Arc::new(importer), view, &attributes).await
        }
    };

    print!("{}", html);

    Ok(())
}

async fn render<I: ArtefactImporter + 'static>(
    importer: Arc<I>,
    view: Arc<HtmlArtefactView>,
    attributes: &ShortcodeAttributes,
) -> String {
    DisplayArtefactUseCase::new(importer, view)
        .execute(attributes)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use finds_domain::{CaptionOption, FigureSize};
    use std::path::PathBuf;

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("fixtures")
    }

    async fn render_fixture(attributes: ShortcodeAttributes) -> String {
        render(
            Arc::new(FixtureImporter::new(fixtures_dir())),
            Arc::new(HtmlArtefactView::new("https://finds.org.uk")),
            &attributes,
        )
        .await
    }

    #[tokio::test]
    async fn test_fixture_with_image_renders_figure() {
        let html = render_fixture(
            ShortcodeAttributes::new()
                .with_id("123456/")
                .with_figure_size(FigureSize::Large),
        )
        .await;

        assert!(html.starts_with(r#"<figure class="finds-figure finds-figure--large">"#));
        assert!(html.contains(
            r#"<figcaption class="finds-figure__caption">Roman brooch from Lincolnshire (LIN-D92A22)</figcaption>"#
        ));
        assert!(html.contains(r#"src="https://finds.org.uk/images/jbloggs/brooch.jpg""#));
    }

    #[tokio::test]
    async fn test_fixture_without_caption_uses_description_for_alt() {
        let html = render_fixture(
            ShortcodeAttributes::new()
                .with_id("123456")
                .with_caption_option(CaptionOption::None),
        )
        .await;

        assert!(html.contains(r#"alt="A copper alloy bow brooch with a hinged pin.""#));
        assert!(!html.contains("<figcaption"));
    }

    #[tokio::test]
    async fn test_fixture_without_image_renders_error() {
        let html = render_fixture(ShortcodeAttributes::new().with_id("111111")).await;

        assert_eq!(
            html,
            "<div class=\"finds-error\" role=\"alert\">\n  <p>No image is available on this record.</p>\n</div>\n"
        );
    }

    #[tokio::test]
    async fn test_fixture_remote_error_renders_verbatim() {
        let html = render_fixture(ShortcodeAttributes::new().with_id("999999")).await;

        assert!(html.starts_with(r#"<div class="finds-error""#));
        assert!(html.contains("<p>Not found</p>"));
    }

    #[tokio::test]
    async fn test_invalid_id_renders_validation_error() {
        let html = render_fixture(ShortcodeAttributes::new().with_id("12a45")).await;

        assert!(html.contains("There&#39;s a problem with your record ID (not a number)."));
    }
}
