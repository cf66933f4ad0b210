//! Fetcher over records held in memory.

use super::RecordFetcher;
use crate::document::DEFAULT_MAX_DEPTH;
use crate::error::{RecordError, Result};
use crate::types::{Cid, Document, Identifier};
use serde_json::Value;
use std::collections::HashMap;

/// Serves PUG View JSON records registered up front.
///
/// Records are decoded on every fetch, so a malformed record surfaces the
/// same errors the HTTP client would.
#[derive(Clone, Debug)]
pub struct InMemoryFetcher {
    aliases: HashMap<Identifier, Cid>,
    records: HashMap<Cid, Value>,
    max_depth: usize,
}

impl Default for InMemoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
            records: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Register a record, reachable by its compound id.
    pub fn with_record(mut self, cid: Cid, record: Value) -> Self {
        self.records.insert(cid, record);
        self
    }

    /// Make `identifier` resolve to `cid`.
    pub fn with_alias(mut self, identifier: impl Into<Identifier>, cid: Cid) -> Self {
        self.aliases.insert(identifier.into(), cid);
        self
    }
}

impl RecordFetcher for InMemoryFetcher {
    fn resolve(&self, identifier: &Identifier) -> Result<Cid> {
        let cid = match identifier {
            Identifier::Cid(cid) if self.records.contains_key(cid) => Some(*cid),
            other => self.aliases.get(other).copied(),
        };
        cid.ok_or_else(|| RecordError::NotFound(identifier.to_string()))
    }

    fn fetch_record(&self, cid: Cid) -> Result<Document> {
        let record = self
            .records
            .get(&cid)
            .ok_or_else(|| RecordError::NotFound(format!("cid:{}", cid)))?;
        Document::from_json(record, self.max_depth)
    }
}
