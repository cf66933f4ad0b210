//! Label → rule registry.

use super::predicates::{cas_numeral, not_vapor_phase};
use crate::dig::LabelMatcher;
use crate::types::CandidateValue;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Decides whether a candidate is kept.
pub type Predicate = Arc<dyn Fn(&CandidateValue) -> bool + Send + Sync>;

/// How one label is searched and which candidates survive.
#[derive(Clone, Default)]
pub struct FilterRule {
    pub matcher: LabelMatcher,
    predicate: Option<Predicate>,
}

impl FilterRule {
    pub fn new(matcher: LabelMatcher) -> Self {
        Self {
            matcher,
            predicate: None,
        }
    }

    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&CandidateValue) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn accepts(&self, candidate: &CandidateValue) -> bool {
        self.predicate.as_ref().map_or(true, |keep| keep(candidate))
    }
}

impl fmt::Debug for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRule")
            .field("matcher", &self.matcher)
            .field("predicate", &self.predicate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Candidates retained for a label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilteredResult {
    pub label: String,
    pub candidates: Vec<CandidateValue>,
    /// Number of candidates the label's predicate rejected.
    pub rejected: usize,
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateValue> {
        self.candidates.iter()
    }

    pub fn into_candidates(self) -> Vec<CandidateValue> {
        self.candidates
    }
}

impl IntoIterator for FilteredResult {
    type Item = CandidateValue;
    type IntoIter = std::vec::IntoIter<CandidateValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

/// Registry of per-label rules.
///
/// `Default` carries the built-in rules; [`FilterRegistry::empty`] has none.
#[derive(Clone, Debug)]
pub struct FilterRegistry {
    rules: HashMap<String, FilterRule>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("CAS", FilterRule::new(LabelMatcher::Exact).with_predicate(cas_numeral));
        registry.register(
            "Density",
            FilterRule::new(LabelMatcher::Word).with_predicate(not_vapor_phase),
        );
        registry.register("SMILES", FilterRule::new(LabelMatcher::Word));
        registry.register("GHS", FilterRule::new(LabelMatcher::Contains));
        registry
    }
}

impl FilterRegistry {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Add or replace the rule for `label`, returning the previous one.
    pub fn register(&mut self, label: impl Into<String>, rule: FilterRule) -> Option<FilterRule> {
        self.rules.insert(label.into(), rule)
    }

    pub fn rule(&self, label: &str) -> Option<&FilterRule> {
        self.rules.get(label)
    }

    /// Matcher used to search for `label`; exact unless registered otherwise.
    pub fn matcher_for(&self, label: &str) -> LabelMatcher {
        self.rules.get(label).map(|rule| rule.matcher).unwrap_or_default()
    }

    /// Apply the rule for `label`. Unregistered labels keep every candidate.
    pub fn select(&self, label: &str, candidates: Vec<CandidateValue>) -> FilteredResult {
        let total = candidates.len();
        let candidates: Vec<CandidateValue> = match self.rules.get(label) {
            Some(rule) if rule.has_predicate() => {
                candidates.into_iter().filter(|c| rule.accepts(c)).collect()
            }
            _ => candidates,
        };

        let rejected = total - candidates.len();
        if rejected > 0 {
            tracing::debug!(label, rejected, kept = candidates.len(), "Filtered candidates");
        }

        FilteredResult {
            label: label.to_string(),
            candidates,
            rejected,
        }
    }
}
