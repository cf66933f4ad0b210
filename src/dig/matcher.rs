//! Label matching modes.

/// How a queried label is compared with section labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelMatcher {
    /// Case-sensitive equality.
    #[default]
    Exact,

    /// The query occurs in the label as a whole word, e.g. `Density`
    /// matches `Vapor Density` but not `Densityx`.
    Word,

    /// The query occurs anywhere in the label.
    Contains,
}

impl LabelMatcher {
    pub fn matches(&self, query: &str, label: &str) -> bool {
        match self {
            LabelMatcher::Exact => label == query,
            LabelMatcher::Contains => label.contains(query),
            LabelMatcher::Word => contains_word(label, query),
        }
    }
}

fn contains_word(label: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    label.match_indices(word).any(|(start, _)| {
        let end = start + word.len();
        let before = label[..start].chars().next_back();
        let after = label[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
