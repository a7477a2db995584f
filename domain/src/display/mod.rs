//! Outcome of the render decision for one shortcode invocation.

pub mod outcome;
