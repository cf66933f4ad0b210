//! # PubChem Record
//!
//! Fetches one hierarchical compound record from PubChem, keeps it in
//! memory, and answers named, type-aware queries over it without further
//! network calls.
//!
//! ## Core Concepts
//!
//! - **Document**: the immutable record, a tree of labelled sections and
//!   typed leaves (values, marked-up strings, numbers, booleans)
//! - **Digger**: depth-first search for sections by label
//! - **Extraction**: decoding of leaves into candidate values
//! - **Filters**: per-label rules choosing among several candidates, such
//!   as well-formed CAS numbers or non-vapor densities
//!
//! ## Example
//!
//! ```ignore
//! use pubchem_record::PubchemRecord;
//!
//! let ethanol = PubchemRecord::construct("ethanol")?;
//!
//! let weight = ethanol.molecular_weight()?;
//! let cas = ethanol.cas_number()?;
//! let density = ethanol.density()?;
//!
//! // Fields without a dedicated accessor
//! for key in ethanol.list_keys()? {
//!     println!("{}", key);
//! }
//! let flash_point = ethanol.query("Flash Point")?;
//! ```

pub mod dig;
pub mod document;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod ghs;
pub mod record;
pub mod types;
pub mod values;

// Re-exports
pub use dig::{find_all, Digger, Hit, LabelMatcher};
pub use document::{decode_record, DEFAULT_MAX_DEPTH};
pub use error::{RecordError, Result};
#[cfg(feature = "http")]
pub use fetch::{ClientConfig, PubchemClient};
pub use fetch::{InMemoryFetcher, RecordFetcher};
pub use filters::{FilterRegistry, FilterRule, FilteredResult, Predicate};
pub use ghs::GhsCodes;
pub use record::{CompoundSummary, PubchemRecord, RecordConfig};
pub use types::*;
pub use values::{extract, extract_candidate, strip_markup};
