//! PUG View record decoding.

use crate::error::{RecordError, Result};
use crate::types::{Cid, Document, MarkedText, MarkupSpan, Node, NumberNode, Section};
use serde_json::{Map, Value};

/// Default limit on section nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Keys of a `Value` object that decode into dedicated node kinds.
const TYPED_VALUE_KEYS: [&str; 4] = ["StringWithMarkup", "Number", "Boolean", "Unit"];

impl Document {
    /// Decode a record from parsed JSON.
    pub fn from_json(value: &Value, max_depth: usize) -> Result<Self> {
        decode_record(value, max_depth)
    }

    /// Decode a record from raw JSON bytes.
    pub fn from_slice(bytes: &[u8], max_depth: usize) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        decode_record(&value, max_depth)
    }
}

/// Decode either a `{"Record": {...}}` envelope or a bare record object.
pub fn decode_record(value: &Value, max_depth: usize) -> Result<Document> {
    if let Some(fault) = value.get("Fault") {
        let message = fault
            .get("Message")
            .and_then(Value::as_str)
            .unwrap_or("unspecified fault");
        return Err(RecordError::UpstreamFormat(format!(
            "upstream returned a fault: {}",
            message
        )));
    }

    let record = value
        .get("Record")
        .unwrap_or(value)
        .as_object()
        .ok_or_else(|| RecordError::UpstreamFormat("record is not a JSON object".into()))?;

    let sections = decode_sections(record.get("Section"), 1, max_depth)?
        .into_iter()
        .filter_map(|node| match node {
            Node::Section(section) => Some(section),
            _ => None,
        })
        .collect();

    let mut document = Document::new(sections);

    if let Some(record_type) = record.get("RecordType").and_then(Value::as_str) {
        document = document.with_record_type(record_type);
    }
    if let Some(number) = record.get("RecordNumber").and_then(Value::as_u64) {
        document = document.with_record_number(Cid(number));
    }
    if let Some(title) = record.get("RecordTitle").and_then(Value::as_str) {
        document = document.with_record_title(title);
    }

    Ok(document)
}

fn decode_sections(value: Option<&Value>, depth: usize, max_depth: usize) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    for item in optional_array(value, "Section") {
        match item.as_object() {
            Some(obj) => nodes.push(Node::Section(decode_section(obj, depth, max_depth)?)),
            None => tracing::debug!(depth, "Skipping non-object section entry"),
        }
    }
    Ok(nodes)
}

fn decode_section(obj: &Map<String, Value>, depth: usize, max_depth: usize) -> Result<Section> {
    if depth > max_depth {
        return Err(RecordError::DepthExceeded { limit: max_depth });
    }

    let label = obj
        .get("TOCHeading")
        .and_then(Value::as_str)
        .ok_or_else(|| RecordError::UpstreamFormat("section without a TOCHeading".into()))?;

    let mut section = Section::new(label);
    if let Some(description) = obj.get("Description").and_then(Value::as_str) {
        section = section.with_description(description);
    }

    for item in optional_array(obj.get("Information"), "Information") {
        match item.as_object() {
            Some(info) => {
                section = section.with_children(decode_information(info, depth + 1, max_depth)?)
            }
            None => tracing::debug!(label, "Skipping non-object information entry"),
        }
    }

    section = section.with_children(decode_sections(obj.get("Section"), depth + 1, max_depth)?);

    Ok(section)
}

/// Named entries become their own section; anonymous ones attach their
/// leaves to the enclosing section.
fn decode_information(
    obj: &Map<String, Value>,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<Node>> {
    let leaves = match obj.get("Value") {
        Some(value) => decode_value(value)?,
        None => Vec::new(),
    };

    match obj.get("Name").and_then(Value::as_str) {
        Some(name) => {
            if depth > max_depth {
                return Err(RecordError::DepthExceeded { limit: max_depth });
            }
            Ok(vec![Node::Section(Section::new(name).with_children(leaves))])
        }
        None => Ok(leaves),
    }
}

fn decode_value(value: &Value) -> Result<Vec<Node>> {
    let Some(obj) = value.as_object() else {
        return Ok(vec![Node::Value(value.clone())]);
    };

    let unit = obj.get("Unit").and_then(Value::as_str);
    let mut nodes = Vec::new();

    for item in elements(obj.get("StringWithMarkup")) {
        nodes.push(Node::StringWithMarkup(decode_marked_text(item)?));
    }

    for item in elements(obj.get("Number")) {
        nodes.push(Node::Number(NumberNode::new(item.clone(), unit)));
    }

    for item in elements(obj.get("Boolean")) {
        let flag = item.as_bool().ok_or_else(|| {
            RecordError::UpstreamFormat(format!("Boolean value holds {}", item))
        })?;
        nodes.push(Node::Boolean(flag));
    }

    for (key, payload) in obj {
        if TYPED_VALUE_KEYS.contains(&key.as_str()) {
            continue;
        }
        let mut passthrough = Map::new();
        passthrough.insert(key.clone(), payload.clone());
        nodes.push(Node::Value(Value::Object(passthrough)));
    }

    Ok(nodes)
}

fn decode_marked_text(item: &Value) -> Result<MarkedText> {
    let text = item
        .get("String")
        .and_then(Value::as_str)
        .ok_or_else(|| RecordError::UpstreamFormat("StringWithMarkup entry without a String".into()))?;

    let markup = match item.get("Markup") {
        Some(spans) => serde_json::from_value::<Vec<MarkupSpan>>(spans.clone()).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Dropping malformed markup spans");
            Vec::new()
        }),
        None => Vec::new(),
    };

    Ok(MarkedText::new(text).with_markup(markup))
}

/// Items of an optional array; anything but an array yields nothing.
fn optional_array<'a>(value: Option<&'a Value>, key: &str) -> impl Iterator<Item = &'a Value> {
    let items = match value {
        Some(Value::Array(items)) => Some(items),
        Some(other) if !other.is_null() => {
            tracing::debug!(key, "Skipping malformed optional array");
            None
        }
        _ => None,
    };
    items.into_iter().flatten()
}

/// Items of a value list; a lone scalar counts as a single item.
fn elements(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![other],
    }
}
