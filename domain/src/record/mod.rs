//! finds.org.uk records.
//!
//! - [`record_id::RecordId`]: validated id of a record
//! - [`artefact::ArtefactRecord`]: the artefact data returned for an id

pub mod artefact;
pub mod record_id;
