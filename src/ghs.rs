//! GHS hazard and precautionary codes.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static HAZARD_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:EU)?H\d{3}[A-Za-z]*(?:\+(?:EU)?H\d{3}[A-Za-z]*)*").expect("valid hazard pattern")
});

static PRECAUTION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P\d{3}(?:\+P\d{3})*$").expect("valid precaution pattern"));

/// Codes found in a record's GHS classification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GhsCodes {
    /// Hazard statement codes, e.g. `H225`.
    pub hazard: Vec<String>,
    /// Precautionary statement codes, e.g. `P210`.
    pub precautionary: Vec<String>,
}

impl GhsCodes {
    /// Collect codes from GHS statement texts, deduplicated in first-seen
    /// order.
    ///
    /// Hazard statements look like `H225 (100%): Highly flammable ...`;
    /// precautionary codes arrive as lists like `P210, P233, and P501`.
    pub fn from_statements<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut codes = GhsCodes::default();

        for text in texts {
            let text = text.trim();
            if text.contains(':') {
                if let Some(code) = HAZARD_CODE.find(text) {
                    push_unique(&mut codes.hazard, code.as_str());
                    continue;
                }
            }

            if text.starts_with('P') && text.contains(',') {
                for item in text.split(',') {
                    let item = item.trim();
                    let item = item.strip_prefix("and ").unwrap_or(item).trim();
                    if PRECAUTION_CODE.is_match(item) {
                        push_unique(&mut codes.precautionary, item);
                    }
                }
            }
        }

        codes
    }

    pub fn is_empty(&self) -> bool {
        self.hazard.is_empty() && self.precautionary.is_empty()
    }
}

fn push_unique(codes: &mut Vec<String>, code: &str) {
    if !codes.iter().any(|c| c == code) {
        codes.push(code.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_codes() {
        let codes = GhsCodes::from_statements([
            "H225 (100%): Highly Flammable liquid and vapor [Danger Flammable liquids]",
            "H319 (88.2%): Causes serious eye irritation [Warning Serious eye damage/eye irritation]",
            "H225: Highly flammable liquid and vapour",
        ]);
        assert_eq!(codes.hazard, vec!["H225", "H319"]);
        assert!(codes.precautionary.is_empty());
    }

    #[test]
    fn test_combined_hazard_codes() {
        let codes = GhsCodes::from_statements(["H302+H312+H332: Harmful if swallowed"]);
        assert_eq!(codes.hazard, vec!["H302+H312+H332"]);
    }

    #[test]
    fn test_precautionary_codes() {
        let codes = GhsCodes::from_statements([
            "P210, P233, P240, P303+P361+P353, and P501",
            "P210, P403+P235",
        ]);
        assert_eq!(
            codes.precautionary,
            vec!["P210", "P233", "P240", "P303+P361+P353", "P501", "P403+P235"]
        );
    }

    #[test]
    fn test_unrelated_texts_ignored() {
        let codes = GhsCodes::from_statements([
            "Danger",
            "Pictogram(s): Flammable",
            "Precautionary Statement Codes",
            "Hazard statements: see below",
        ]);
        assert!(codes.is_empty());
    }
}
