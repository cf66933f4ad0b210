//! Depth-first traversal engine.

use super::LabelMatcher;
use crate::document::DEFAULT_MAX_DEPTH;
use crate::error::{RecordError, Result};
use crate::types::{Document, Node, NodePath, Section};
use std::collections::BTreeSet;

/// A section matched by a query, with its location.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit<'a> {
    pub path: NodePath,
    pub section: &'a Section,
}

/// Read-only search engine over [`Document`]s.
#[derive(Clone, Copy, Debug)]
pub struct Digger {
    max_depth: usize,
}

impl Default for Digger {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Digger {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Visit every section of the document in pre-order.
    pub fn walk<'a, F>(&self, document: &'a Document, mut visit: F) -> Result<()>
    where
        F: FnMut(&NodePath, &'a Section),
    {
        let root = NodePath::default();
        for section in document.sections() {
            self.walk_section(&root.child(section.label()), section, &mut visit)?;
        }
        Ok(())
    }

    fn walk_section<'a, F>(&self, path: &NodePath, section: &'a Section, visit: &mut F) -> Result<()>
    where
        F: FnMut(&NodePath, &'a Section),
    {
        if path.depth() > self.max_depth {
            return Err(RecordError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        visit(path, section);

        for child in section.children() {
            if let Node::Section(sub) = child {
                self.walk_section(&path.child(sub.label()), sub, visit)?;
            }
        }
        Ok(())
    }

    /// All sections whose label equals `label` exactly.
    pub fn find_all<'a>(&self, document: &'a Document, label: &str) -> Result<Vec<Hit<'a>>> {
        self.find_matching(document, label, LabelMatcher::Exact)
    }

    /// All sections whose label matches `label` under `matcher`.
    pub fn find_matching<'a>(
        &self,
        document: &'a Document,
        label: &str,
        matcher: LabelMatcher,
    ) -> Result<Vec<Hit<'a>>> {
        let mut hits = Vec::new();
        self.walk(document, |path, section| {
            if matcher.matches(label, section.label()) {
                hits.push(Hit {
                    path: path.clone(),
                    section,
                });
            }
        })?;
        Ok(hits)
    }

    /// The leaves a hit contributes to a query, each with the path of the
    /// section that holds it.
    ///
    /// A leaf belongs to its nearest matching ancestor: descent stops at
    /// nested sections that match the query themselves, since those are
    /// reported as hits of their own.
    pub fn owned_leaves<'a>(
        &self,
        hit: &Hit<'a>,
        label: &str,
        matcher: LabelMatcher,
    ) -> Result<Vec<(NodePath, &'a Node)>> {
        let mut leaves = Vec::new();
        self.collect_leaves(hit.section, &hit.path, label, matcher, &mut leaves)?;
        Ok(leaves)
    }

    fn collect_leaves<'a>(
        &self,
        section: &'a Section,
        path: &NodePath,
        label: &str,
        matcher: LabelMatcher,
        leaves: &mut Vec<(NodePath, &'a Node)>,
    ) -> Result<()> {
        if path.depth() > self.max_depth {
            return Err(RecordError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        for child in section.children() {
            match child {
                Node::Section(sub) if matcher.matches(label, sub.label()) => {}
                Node::Section(sub) => {
                    self.collect_leaves(sub, &path.child(sub.label()), label, matcher, leaves)?
                }
                leaf => leaves.push((path.clone(), leaf)),
            }
        }
        Ok(())
    }

    /// Every section label present anywhere in the document.
    pub fn labels(&self, document: &Document) -> Result<BTreeSet<String>> {
        let mut labels = BTreeSet::new();
        self.walk(document, |_, section| {
            if !labels.contains(section.label()) {
                labels.insert(section.label().to_string());
            }
        })?;
        Ok(labels)
    }
}

/// [`Digger::find_all`] with the default depth limit.
pub fn find_all<'a>(document: &'a Document, label: &str) -> Result<Vec<Hit<'a>>> {
    Digger::default().find_all(document, label)
}
