//! Application layer for finds-artefact
//!
//! This crate contains the use case and the port definitions it drives.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    artefact_importer::{
        ArtefactImporter, ImportOutcome, RECORD_NOT_FOUND_MESSAGE, UNREADABLE_RECORD_MESSAGE,
    },
    artefact_view::ArtefactView,
};
pub use use_cases::display_artefact::DisplayArtefactUseCase;
