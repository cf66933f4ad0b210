//! Per-label disambiguation of candidate values.
//!
//! A registry maps labels to rules. Labels without a rule pass every
//! candidate through unchanged: several fields are inherently irregular
//! across compounds and forcing them into one shape would lose data.

mod predicates;
mod registry;

pub use predicates::{cas_numeral, is_cas_numeral, not_vapor_phase};
pub use registry::{FilterRegistry, FilterRule, FilteredResult, Predicate};
