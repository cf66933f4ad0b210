//! Recursive search over a compound record.
//!
//! Every query is a visitor over one depth-first, pre-order walk. A matching
//! section is reported and then descended into, so a label nested inside a
//! section of the same label is reported again.

mod digger;
mod matcher;

pub use digger::{find_all, Digger, Hit};
pub use matcher::LabelMatcher;
