//! finds.org.uk adapters
//!
//! Implements ArtefactImporter over the finds.org.uk JSON API and over local
//! fixture files.

pub mod endpoint;
pub mod error;
pub mod fixture;
pub mod importer;
