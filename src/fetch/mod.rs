//! Retrieval of compound records.
//!
//! [`RecordFetcher`] is the seam between the query engine and the network.
//! [`PubchemClient`] talks to the PubChem REST API; [`InMemoryFetcher`]
//! serves records already held in memory.

#[cfg(feature = "http")]
mod client;
mod memory;

#[cfg(feature = "http")]
pub use client::{ClientConfig, PubchemClient};
pub use memory::InMemoryFetcher;

use crate::error::Result;
use crate::types::{Cid, Document, Identifier};

/// Source of compound records.
pub trait RecordFetcher {
    /// Resolve an identifier to a compound id. Fails with `NotFound`.
    fn resolve(&self, identifier: &Identifier) -> Result<Cid>;

    /// Retrieve the full record for a compound id. Fails with `Network`,
    /// `NotFound` or `UpstreamFormat`.
    fn fetch_record(&self, cid: Cid) -> Result<Document>;
}

