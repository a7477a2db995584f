//! Output rendering

pub mod html;
