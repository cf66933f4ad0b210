//! Blocking PubChem REST client.

use super::RecordFetcher;
use crate::document::DEFAULT_MAX_DEPTH;
use crate::error::{RecordError, Result};
use crate::types::{Cid, Document, Identifier};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

const BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest";

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// REST root, without the `pug`/`pug_view` segment.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    pub user_agent: String,

    /// Section nesting limit applied when decoding records.
    pub max_depth: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("pubchem-record/", env!("CARGO_PKG_VERSION")).to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// PUG REST / PUG View client. No retries: failures surface to the caller.
pub struct PubchemClient {
    client: Client,
    config: ClientConfig,
}

impl PubchemClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// All compound ids matching an identifier, in upstream order.
    pub fn cids(&self, identifier: &Identifier) -> Result<Vec<Cid>> {
        let url = self.cids_url(identifier)?;

        tracing::info!(%identifier, "Resolving compound");
        let body = self.get_json(url, &identifier.to_string())?;

        let list = body
            .get("IdentifierList")
            .and_then(|list| list.get("CID"))
            .and_then(Value::as_array)
            .ok_or_else(|| {
                RecordError::UpstreamFormat("response without IdentifierList.CID".into())
            })?;

        // PubChem answers unknown names with CID 0 in some namespaces.
        Ok(list
            .iter()
            .filter_map(Value::as_u64)
            .filter(|&cid| cid != 0)
            .map(Cid)
            .collect())
    }

    fn cids_url(&self, identifier: &Identifier) -> Result<Url> {
        let term = identifier.term();
        self.url(&["pug", "compound", identifier.namespace(), &term, "cids", "JSON"])
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| RecordError::Network(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| RecordError::Network("base URL cannot take a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json(&self, url: Url, subject: &str) -> Result<Value> {
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RecordError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(RecordError::Network(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl RecordFetcher for PubchemClient {
    fn resolve(&self, identifier: &Identifier) -> Result<Cid> {
        if let Identifier::Cid(cid) = identifier {
            return Ok(*cid);
        }

        let cids = self.cids(identifier)?;
        match cids.as_slice() {
            [] => Err(RecordError::NotFound(identifier.to_string())),
            [only] => Ok(*only),
            [first, ..] => {
                tracing::warn!(
                    %identifier,
                    matches = cids.len(),
                    cid = %first,
                    "Several compounds match, using the first"
                );
                Ok(*first)
            }
        }
    }

    fn fetch_record(&self, cid: Cid) -> Result<Document> {
        let mut url = self.url(&["pug_view", "data", "compound", &cid.to_string(), "JSON"])?;
        url.query_pairs_mut().append_pair("response_type", "display");

        tracing::info!(%cid, "Fetching compound record");
        let body = self.get_json(url, &format!("cid:{}", cid))?;
        Document::from_json(&body, self.config.max_depth)
    }
}
