//! CLI command definitions

use crate::input::shortcode::parse_attributes;
use clap::Parser;
use finds_domain::shortcode::attributes::{
    ATTR_CAPTION_OPTION, ATTR_CAPTION_TEXT, ATTR_FIGURE_SIZE, ATTR_ID,
};
use finds_domain::{CaptionOption, FigureSize, ShortcodeAttributes};
use std::path::PathBuf;

/// CLI arguments for finds-artefact
#[derive(Parser, Debug)]
#[command(name = "finds-artefact")]
#[command(author, version, about = "Render a finds.org.uk artefact record as an HTML figure")]
#[command(long_about = r#"
finds-artefact expands one artefact shortcode into HTML.

The record id is validated, the record is fetched from finds.org.uk, and
either a figure (image + caption) or an error message is printed to stdout.

Configuration files are loaded from (in priority order):
1. FINDS_* environment variables
2. --config <path>     Explicit config file
3. ./finds.toml        Project-level config
4. ~/.config/finds-artefact/config.toml   Global config

Example:
  finds-artefact --id 123456
  finds-artefact --id 123456 --caption-option manual --caption-text "Roman brooch"
  finds-artefact --id 123456 --figure-size large --fixtures ./fixtures
"#)]
pub struct Cli {
    /// finds.org.uk record id (the shortcode `id` attribute)
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Caption mode: auto, manual or none
    #[arg(long, value_name = "OPTION")]
    pub caption_option: Option<String>,

    /// Caption text, used with --caption-option manual
    #[arg(long, value_name = "TEXT")]
    pub caption_text: Option<String>,

    /// Figure size: small, medium or large
    #[arg(long, value_name = "SIZE")]
    pub figure_size: Option<String>,

    /// Read records from <DIR>/<id>.json instead of finds.org.uk
    #[arg(long, value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Build the shortcode attributes for this invocation.
    ///
    /// Unrecognised caption options and figure sizes fall back to the given
    /// defaults, the same way a shortcode with a typo would.
    pub fn shortcode_attributes(
        &self,
        default_caption: CaptionOption,
        default_size: FigureSize,
    ) -> ShortcodeAttributes {
        let base = ShortcodeAttributes::new()
            .with_caption_option(default_caption)
            .with_figure_size(default_size);
        let flags = [
            (ATTR_ID, &self.id),
            (ATTR_CAPTION_OPTION, &self.caption_option),
            (ATTR_CAPTION_TEXT, &self.caption_text),
            (ATTR_FIGURE_SIZE, &self.figure_size),
        ];

        parse_attributes(
            base,
            flags
                .into_iter()
                .filter_map(|(key, value)| value.as_deref().map(|v| (key, v))),
        )
    }
}
