//! Corpus candidate with memoized derived state.
//!
//! Module isolation ensures no code outside this module can mutate `text`
//! after construction, so the `OnceLock` cache can never go stale.

use std::sync::OnceLock;

/// One corpus entry with its case-folded form computed on first access and
/// cached, avoiding redundant lowercasing across repeated `suggest` calls
/// against an unchanged corpus snapshot.
#[derive(Debug, Clone)]
pub struct Candidate {
    text: String,
    folded: OnceLock<String>,
}

impl Candidate {
    pub fn new(text: String) -> Self {
        Self {
            text,
            folded: OnceLock::new(),
        }
    }

    /// The candidate text as supplied by the corpus provider.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Unicode-lowercased text, computed once per snapshot lifetime.
    pub fn folded(&self) -> &str {
        self.folded.get_or_init(|| crate::scoring::fold(&self.text))
    }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Self::new(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_is_memoized() {
        let candidate = Candidate::new("PyThOn".to_string());
        let first = candidate.folded() as *const str;
        let second = candidate.folded() as *const str;
        assert_eq!(first, second, "second access must reuse the cached fold");
        assert_eq!(candidate.folded(), "python");
        assert_eq!(candidate.text(), "PyThOn");
    }

    #[test]
    fn test_empty_and_unicode_text() {
        assert_eq!(Candidate::from("").folded(), "");
        assert_eq!(Candidate::from("ÜBER").folded(), "über");
    }
}
