//! Per-kind leaf decoding.

use super::strip_markup;
use crate::error::{RecordError, Result};
use crate::types::{CandidateValue, Node, NodePath, Payload};
use serde_json::Value;
use thiserror::Error;

/// A `Number` payload that is not a finite number (ranges, inequalities,
/// free text). Never surfaced: extraction falls back to the raw text.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("Malformed number payload: {0}")]
pub struct MalformedNumber(pub String);

fn parse_number(payload: &Value) -> std::result::Result<f64, MalformedNumber> {
    let parsed = match payload {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(MalformedNumber(match payload {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })),
    }
}

/// Decode a leaf node into its payload.
///
/// Sections are containers, not values; reach their leaves through the
/// [`Digger`](crate::dig::Digger) first.
pub fn extract(node: &Node) -> Result<Payload> {
    match node {
        Node::Section(section) => Err(RecordError::NotALeaf {
            label: section.label().to_string(),
        }),

        Node::Value(value) => Ok(Payload::Value(value.clone())),

        Node::Number(number) => match parse_number(&number.payload) {
            Ok(value) => Ok(Payload::Number {
                value,
                unit: number.unit.clone(),
            }),
            Err(MalformedNumber(text)) => {
                tracing::trace!(%text, "Keeping non-numeric number payload as text");
                Ok(Payload::RawNumber {
                    text,
                    unit: number.unit.clone(),
                })
            }
        },

        Node::Boolean(flag) => Ok(Payload::Boolean(*flag)),

        Node::StringWithMarkup(marked) => Ok(Payload::Text(strip_markup(&marked.text))),
    }
}

/// Extract a leaf found under the section at `path`.
pub fn extract_candidate(path: &NodePath, node: &Node) -> Result<CandidateValue> {
    Ok(CandidateValue {
        path: path.clone(),
        kind: node.kind(),
        payload: extract(node)?,
    })
}
