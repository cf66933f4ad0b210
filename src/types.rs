//! Core types for compound records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// PubChem compound identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cid(pub u64);

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cid({})", self.0)
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a caller searches by when constructing a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identifier {
    Name(String),
    Cid(Cid),
    Smiles(String),
    InChIKey(String),
    Formula(String),
}

impl Identifier {
    /// Search namespace understood by the PUG REST API.
    pub fn namespace(&self) -> &'static str {
        match self {
            Identifier::Name(_) => "name",
            Identifier::Cid(_) => "cid",
            Identifier::Smiles(_) => "smiles",
            Identifier::InChIKey(_) => "inchikey",
            // Plain `formula` searches are asynchronous and answer with a list key.
            Identifier::Formula(_) => "fastformula",
        }
    }

    /// The search term as sent upstream.
    pub fn term(&self) -> String {
        match self {
            Identifier::Cid(cid) => cid.to_string(),
            Identifier::Name(s)
            | Identifier::Smiles(s)
            | Identifier::InChIKey(s)
            | Identifier::Formula(s) => s.clone(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace(), self.term())
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::Name(name)
    }
}

impl From<u64> for Identifier {
    fn from(cid: u64) -> Self {
        Identifier::Cid(Cid(cid))
    }
}

impl From<Cid> for Identifier {
    fn from(cid: Cid) -> Self {
        Identifier::Cid(cid)
    }
}

/// A fetched compound record.
///
/// Built once, either decoded from upstream JSON or assembled
/// programmatically, and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    record_type: Option<String>,
    record_number: Option<Cid>,
    record_title: Option<String>,
    sections: Vec<Section>,
}

impl Document {
    /// Create a document from its top-level sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            ..Default::default()
        }
    }

    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    pub fn with_record_number(mut self, cid: Cid) -> Self {
        self.record_number = Some(cid);
        self
    }

    pub fn with_record_title(mut self, title: impl Into<String>) -> Self {
        self.record_title = Some(title.into());
        self
    }

    /// Upstream record type (usually "CID").
    pub fn record_type(&self) -> Option<&str> {
        self.record_type.as_deref()
    }

    /// The compound id stored in the record itself.
    pub fn record_number(&self) -> Option<Cid> {
        self.record_number
    }

    /// Preferred compound name.
    pub fn record_title(&self) -> Option<&str> {
        self.record_title.as_deref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// A labelled container node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section {
    label: String,
    description: Option<String>,
    children: Vec<Node>,
}

impl Section {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            children: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// One node of a record. The closed set of structural kinds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Node {
    Section(Section),
    Value(serde_json::Value),
    StringWithMarkup(MarkedText),
    Number(NumberNode),
    Boolean(bool),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Section(_) => NodeKind::Section,
            Node::Value(_) => NodeKind::Value,
            Node::StringWithMarkup(_) => NodeKind::StringWithMarkup,
            Node::Number(_) => NodeKind::Number,
            Node::Boolean(_) => NodeKind::Boolean,
        }
    }

    /// Plain text leaf without markup spans.
    pub fn text(text: impl Into<String>) -> Self {
        Node::StringWithMarkup(MarkedText::new(text))
    }

    /// Numeric leaf with an optional unit.
    pub fn number(value: f64, unit: Option<&str>) -> Self {
        Node::Number(NumberNode::new(serde_json::Value::from(value), unit))
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

impl From<MarkedText> for Node {
    fn from(text: MarkedText) -> Self {
        Node::StringWithMarkup(text)
    }
}

impl From<NumberNode> for Node {
    fn from(number: NumberNode) -> Self {
        Node::Number(number)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Boolean(value)
    }
}

/// Discriminant of [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Section,
    Value,
    StringWithMarkup,
    Number,
    Boolean,
}

/// Text payload with its inline annotation spans.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkedText {
    pub text: String,
    pub markup: Vec<MarkupSpan>,
}

impl MarkedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Vec::new(),
        }
    }

    pub fn with_markup(mut self, markup: Vec<MarkupSpan>) -> Self {
        self.markup = markup;
        self
    }
}

/// An annotation over a range of a [`MarkedText`] (links, italics, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkupSpan {
    pub start: usize,
    pub length: usize,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
}

/// Numeric leaf. The payload is kept as received; it is only interpreted
/// on extraction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumberNode {
    pub payload: serde_json::Value,
    pub unit: Option<String>,
}

impl NumberNode {
    pub fn new(payload: serde_json::Value, unit: Option<&str>) -> Self {
        Self {
            payload,
            unit: unit.map(str::to_string),
        }
    }
}

/// Labels from the document root down to a section, inclusive.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NodePath(pub Vec<String>);

impl NodePath {
    pub fn child(&self, label: &str) -> Self {
        let mut labels = self.0.clone();
        labels.push(label.to_string());
        NodePath(labels)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Label of the innermost section, if any.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodePath({})", self)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" > "))
    }
}

/// A decoded leaf value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Generic payload, passed through verbatim.
    Value(serde_json::Value),
    Number {
        value: f64,
        unit: Option<String>,
    },
    /// Number payload that did not parse, kept as text.
    RawNumber {
        text: String,
        unit: Option<String>,
    },
    Boolean(bool),
    /// Markup-stripped text.
    Text(String),
}

impl Payload {
    /// Render the payload as text. Numbers carry their unit as a suffix.
    pub fn as_text(&self) -> String {
        match self {
            Payload::Value(serde_json::Value::String(s)) => s.clone(),
            Payload::Value(v) => v.to_string(),
            Payload::Number { value, unit } => with_unit(value.to_string(), unit.as_deref()),
            Payload::RawNumber { text, unit } => with_unit(text.clone(), unit.as_deref()),
            Payload::Boolean(b) => b.to_string(),
            Payload::Text(s) => s.clone(),
        }
    }

    /// Numeric view of the payload, parsing text when possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Payload::Number { value, .. } => Some(*value),
            Payload::Text(s) | Payload::RawNumber { text: s, .. } => s.trim().parse().ok(),
            Payload::Value(v) => v.as_f64(),
            Payload::Boolean(_) => None,
        }
    }

    pub fn unit(&self) -> Option<&str> {
        match self {
            Payload::Number { unit, .. } | Payload::RawNumber { unit, .. } => unit.as_deref(),
            _ => None,
        }
    }
}

fn with_unit(text: String, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{} {}", text, unit),
        _ => text,
    }
}

/// One leaf extracted for a queried label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateValue {
    /// Path to the section holding the leaf, at or below the matched section.
    pub path: NodePath,
    /// Structural kind of the leaf.
    pub kind: NodeKind,
    pub payload: Payload,
}

impl CandidateValue {
    /// Label of the section holding the leaf.
    pub fn label(&self) -> &str {
        self.path.last().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_conversions() {
        assert_eq!(Identifier::from("water"), Identifier::Name("water".into()));
        assert_eq!(Identifier::from(962u64), Identifier::Cid(Cid(962)));
        assert_eq!(Identifier::from(962u64).term(), "962");
        assert_eq!(Identifier::InChIKey("XLYOFNOQVPJJNP-UHFFFAOYSA-N".into()).namespace(), "inchikey");
        assert_eq!(Identifier::Formula("H2O".into()).namespace(), "fastformula");
    }

    #[test]
    fn test_path_display() {
        let path = NodePath::default().child("Chemical and Physical Properties").child("Density");
        assert_eq!(path.to_string(), "Chemical and Physical Properties > Density");
        assert_eq!(path.last(), Some("Density"));
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_payload_as_text() {
        let number = Payload::Number {
            value: 1.2,
            unit: Some("g/cm3".into()),
        };
        assert_eq!(number.as_text(), "1.2 g/cm3");
        assert_eq!(Payload::Value(json!("abc")).as_text(), "abc");
        assert_eq!(Payload::Value(json!({"a": 1})).as_text(), r#"{"a":1}"#);
        assert_eq!(Payload::Boolean(true).as_text(), "true");
    }

    #[test]
    fn test_payload_as_f64() {
        assert_eq!(Payload::Text(" 18.015 ".into()).as_f64(), Some(18.015));
        assert_eq!(Payload::Text("about 18".into()).as_f64(), None);
        assert_eq!(Payload::Boolean(false).as_f64(), None);
    }

    #[test]
    fn test_section_builder() {
        let section = Section::new("Density")
            .with_description("Mass per volume")
            .with_child(Node::number(1.2, Some("g/cm3")))
            .with_child(true);

        assert_eq!(section.label(), "Density");
        assert_eq!(section.children().len(), 2);
        assert_eq!(section.children()[1].kind(), NodeKind::Boolean);
    }
}
