//! Author input handling

pub mod shortcode;
