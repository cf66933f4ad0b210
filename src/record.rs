//! The compound record facade.

use crate::dig::Digger;
use crate::document::DEFAULT_MAX_DEPTH;
use crate::error::Result;
use crate::fetch::RecordFetcher;
use crate::filters::{FilterRegistry, FilteredResult};
use crate::ghs::GhsCodes;
use crate::types::{CandidateValue, Cid, Document, Identifier};
use crate::values::extract_candidate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Record configuration.
#[derive(Clone, Debug)]
pub struct RecordConfig {
    /// Section nesting limit for queries.
    pub max_depth: usize,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Every named field of a record, for serialization.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompoundSummary {
    pub cid: Cid,
    pub name: Option<String>,
    pub iupac_name: Vec<String>,
    pub molecular_formula: Vec<String>,
    pub molecular_weight: Option<f64>,
    pub cas: Vec<String>,
    pub density: Vec<CandidateValue>,
    pub inchi: Vec<String>,
    pub inchikey: Vec<String>,
    pub smiles: Option<String>,
    pub synonyms: Vec<String>,
    pub ghs: GhsCodes,
}

/// One fetched compound record and the queries over it.
///
/// The record is fetched once at construction and never refreshed. Queries
/// are pure traversals of the cached document, so a record can be shared
/// across threads without locking.
#[derive(Clone, Debug)]
pub struct PubchemRecord {
    cid: Cid,
    document: Document,
    digger: Digger,
    filters: FilterRegistry,
}

impl PubchemRecord {
    /// Fetch a record from PubChem with the default client.
    #[cfg(feature = "http")]
    pub fn construct(identifier: impl Into<Identifier>) -> Result<Self> {
        use crate::fetch::{ClientConfig, PubchemClient};

        let client = PubchemClient::new(ClientConfig::default())?;
        Self::fetch(&client, identifier, RecordConfig::default())
    }

    /// Resolve `identifier` and fetch its record, one call each.
    ///
    /// Nothing is returned unless both calls succeed.
    pub fn fetch<F>(fetcher: &F, identifier: impl Into<Identifier>, config: RecordConfig) -> Result<Self>
    where
        F: RecordFetcher + ?Sized,
    {
        let identifier = identifier.into();
        let cid = fetcher.resolve(&identifier)?;
        let document = fetcher.fetch_record(cid)?;

        tracing::info!(
            %identifier,
            %cid,
            title = document.record_title().unwrap_or_default(),
            "Compound record loaded"
        );

        Ok(Self::from_document(cid, document, config))
    }

    /// Wrap an already available document.
    pub fn from_document(cid: Cid, document: Document, config: RecordConfig) -> Self {
        Self {
            cid,
            document,
            digger: Digger::new(config.max_depth),
            filters: FilterRegistry::default(),
        }
    }

    /// Replace the filter rules.
    pub fn with_filters(mut self, filters: FilterRegistry) -> Self {
        self.filters = filters;
        self
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    /// The compound id the record was resolved to.
    pub fn cid(&self) -> Cid {
        self.cid
    }

    /// Record title, the preferred compound name.
    pub fn name(&self) -> Option<&str> {
        self.document.record_title()
    }

    /// The cached document, for direct inspection.
    pub fn raw_record(&self) -> &Document {
        &self.document
    }

    /// All section labels present in the record.
    pub fn list_keys(&self) -> Result<BTreeSet<String>> {
        self.digger.labels(&self.document)
    }

    // --- Generic queries ---

    /// Every candidate for `label`, before filtering.
    ///
    /// Sections are matched with the label's registered matcher (exact by
    /// default).
    pub fn candidates(&self, label: &str) -> Result<Vec<CandidateValue>> {
        let matcher = self.filters.matcher_for(label);
        let hits = self.digger.find_matching(&self.document, label, matcher)?;

        let mut candidates = Vec::new();
        for hit in &hits {
            for (path, leaf) in self.digger.owned_leaves(hit, label, matcher)? {
                candidates.push(extract_candidate(&path, leaf)?);
            }
        }
        Ok(candidates)
    }

    /// Candidates for `label` after its filter rule.
    pub fn query(&self, label: &str) -> Result<FilteredResult> {
        Ok(self.filters.select(label, self.candidates(label)?))
    }

    fn texts(&self, label: &str) -> Result<Vec<String>> {
        Ok(self
            .query(label)?
            .iter()
            .map(|c| c.payload.as_text())
            .collect())
    }

    fn unique_texts(&self, label: &str) -> Result<Vec<String>> {
        let mut unique: Vec<String> = Vec::new();
        for text in self.texts(label)? {
            if !unique.contains(&text) {
                unique.push(text);
            }
        }
        Ok(unique)
    }

    // --- Named accessors ---

    /// Molecular weight, from the first numeric candidate.
    pub fn molecular_weight(&self) -> Result<Option<f64>> {
        Ok(self
            .query("Molecular Weight")?
            .iter()
            .find_map(|c| c.payload.as_f64()))
    }

    /// Molecular formulas; more than one when upstream lists variants.
    pub fn molecular_formula(&self) -> Result<Vec<String>> {
        self.unique_texts("Molecular Formula")
    }

    /// Well-formed CAS registry numbers.
    pub fn cas_number(&self) -> Result<Vec<String>> {
        self.unique_texts("CAS")
    }

    /// Density entries, vapor-phase values excluded.
    ///
    /// Upstream density data comes as plain numbers, numbers with units,
    /// inequalities, table references and free text, so the candidates are
    /// returned as found.
    pub fn density(&self) -> Result<Vec<CandidateValue>> {
        Ok(self.query("Density")?.into_candidates())
    }

    /// InChI strings, unique in first-seen order.
    pub fn inchi(&self) -> Result<Vec<String>> {
        self.unique_texts("InChI")
    }

    pub fn inchikey(&self) -> Result<Vec<String>> {
        self.unique_texts("InChIKey")
    }

    pub fn iupac_name(&self) -> Result<Vec<String>> {
        self.unique_texts("IUPAC Name")
    }

    /// The most specific SMILES listed, which upstream places last.
    pub fn smiles(&self) -> Result<Option<String>> {
        Ok(self.texts("SMILES")?.pop())
    }

    /// Alternate names, in upstream order and unfiltered.
    pub fn synonyms(&self) -> Result<Vec<String>> {
        self.texts("Synonyms")
    }

    pub fn ghs_codes(&self) -> Result<GhsCodes> {
        let texts = self.texts("GHS")?;
        Ok(GhsCodes::from_statements(texts.iter().map(String::as_str)))
    }

    /// All named fields at once.
    pub fn summary(&self) -> Result<CompoundSummary> {
        Ok(CompoundSummary {
            cid: self.cid,
            name: self.name().map(str::to_string),
            iupac_name: self.iupac_name()?,
            molecular_formula: self.molecular_formula()?,
            molecular_weight: self.molecular_weight()?,
            cas: self.cas_number()?,
            density: self.density()?,
            inchi: self.inchi()?,
            inchikey: self.inchikey()?,
            smiles: self.smiles()?,
            synonyms: self.synonyms()?,
            ghs: self.ghs_codes()?,
        })
    }
}
