//! Domain layer for finds-artefact
//!
//! This crate contains the core business rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Record id
//!
//! Authors reference a finds.org.uk record by its numeric id. Raw input is
//! cleaned and validated into a [`RecordId`] before anything is fetched.
//!
//! ## Display outcome
//!
//! One shortcode invocation ends in exactly one [`DisplayOutcome`]: a figure
//! (record, caption, size) or a [`DisplayError`] explaining why not.

pub mod caption;
pub mod core;
pub mod display;
pub mod record;
pub mod shortcode;

// Re-export commonly used types
pub use caption::creator::{CaptionCreator, RecordKind};
pub use core::error::{DisplayError, NO_IMAGE_MESSAGE};
pub use display::outcome::{ArtefactFigure, DisplayOutcome};
pub use record::{
    artefact::{ArtefactRecord, ImageVariant},
    record_id::{MAX_RECORD_ID_LEN, RecordId, RecordIdError, clean},
};
pub use shortcode::attributes::{CaptionOption, FigureSize, ShortcodeAttributes};
