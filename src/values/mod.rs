//! Reduction of leaf nodes to usable values.

mod extract;
mod markup;

pub use extract::{extract, extract_candidate, MalformedNumber};
pub use markup::strip_markup;
