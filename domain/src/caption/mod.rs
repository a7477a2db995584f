//! Figure captions, generated from record metadata or supplied by the author.

pub mod creator;
