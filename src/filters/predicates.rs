//! Built-in candidate predicates.

use crate::types::{CandidateValue, Payload};
use regex::Regex;
use std::sync::LazyLock;

static CAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2,7})-(\d{2})-(\d)$").expect("valid CAS pattern"));

/// Whether `text` is a CAS registry number with a valid check digit.
///
/// This is stricter than the `NNNNNNN-NN-N` shape alone: a correctly shaped
/// number whose check digit disagrees is rejected too, so transcription
/// errors in upstream identifiers never reach `cas_number`. The check digit
/// is the sum of the other digits, each weighted by its position counted
/// from the right, modulo 10.
pub fn is_cas_numeral(text: &str) -> bool {
    let Some(caps) = CAS_PATTERN.captures(text) else {
        return false;
    };

    let body = format!("{}{}", &caps[1], &caps[2]);
    let sum: u32 = body
        .chars()
        .rev()
        .zip(1..)
        .filter_map(|(c, weight)| c.to_digit(10).map(|d| d * weight))
        .sum();

    caps[3].parse::<u32>().is_ok_and(|check| sum % 10 == check)
}

/// Keeps well-formed CAS numbers, rejecting malformed legacy entries.
pub fn cas_numeral(candidate: &CandidateValue) -> bool {
    match &candidate.payload {
        Payload::Text(text) => is_cas_numeral(text.trim()),
        Payload::Value(serde_json::Value::String(text)) => is_cas_numeral(text.trim()),
        _ => false,
    }
}

/// Rejects vapor-phase entries: the matched path, the unit or the text
/// mentions vapor.
pub fn not_vapor_phase(candidate: &CandidateValue) -> bool {
    let in_path = candidate.path.labels().iter().any(|label| mentions_vapor(label));
    !in_path && !mentions_vapor(&candidate.payload.as_text())
}

fn mentions_vapor(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("vapor") || lower.contains("vapour")
}
