//! Shortcode input: the attributes an author passes to one artefact figure.

pub mod attributes;
