//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DisplayError`]: why a figure could not be shown
//! - [`string`]: truncation, escaping and casing helpers

pub mod error;
pub mod string;
