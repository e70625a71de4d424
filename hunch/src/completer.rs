//! TagCompleter - the toolkit-independent core of the editor dialog's
//! comma-separated tag autocomplete.
//!
//! The host's Qt adapter owns event wiring and popup handling; everything
//! it needs beyond that lives here: extracting the tag currently being
//! typed, browsing the corpus head when that fragment is blank, and
//! splicing a chosen completion back into the input line.

use crate::interface::{RankerConfig, COMPLETER_SCORE_CUTOFF};
use crate::ranker::SuggestionRanker;

/// The text after the last comma with leading whitespace stripped — the
/// tag currently being typed. The whole input when no comma is present.
pub fn active_fragment(input: &str) -> &str {
    match input.rsplit_once(',') {
        Some((_, fragment)) => fragment.trim_start(),
        None => input,
    }
}

/// Replace the active fragment with `completion`, preserving everything up
/// to and including the last comma and inserting a single space after it.
/// With no comma present the completion replaces the whole input.
pub fn apply_completion(input: &str, completion: &str) -> String {
    match input.rsplit_once(',') {
        Some((head, _)) => format!("{head}, {completion}"),
        None => completion.to_string(),
    }
}

/// Fuzzy autocomplete over a tag corpus, driven by the raw text of a
/// comma-separated input field.
#[derive(uniffi::Object)]
pub struct TagCompleter {
    ranker: SuggestionRanker,
}

// FFI-exported constructors (must be in standalone impl block)
#[uniffi::export]
impl TagCompleter {
    /// Create a completer with the historical lenient defaults
    /// (cutoff 40, cap 10, edit distance).
    #[uniffi::constructor]
    pub fn new(tags: Vec<String>) -> Self {
        let config = RankerConfig {
            score_cutoff: COMPLETER_SCORE_CUTOFF,
            ..RankerConfig::default()
        };
        Self::with_config(tags, config)
    }

    /// Create a completer with an explicit ranker config.
    #[uniffi::constructor]
    pub fn with_config(tags: Vec<String>, config: RankerConfig) -> Self {
        Self {
            ranker: SuggestionRanker::new(tags, config),
        }
    }
}

#[uniffi::export]
impl TagCompleter {
    /// Suggestions for the tag currently being typed.
    ///
    /// A blank fragment browses instead of matching: the first
    /// `max_results` tags in corpus order, so the popup stays useful
    /// before typing begins.
    pub fn suggest_for_input(&self, input: String) -> Vec<String> {
        let fragment = active_fragment(&input).trim();
        if fragment.is_empty() {
            let snapshot = self.ranker.snapshot();
            return snapshot
                .iter()
                .take(self.ranker.config().max_results as usize)
                .map(|tag| tag.text().to_string())
                .collect();
        }
        self.ranker.suggest(fragment.to_string())
    }

    /// Splice a chosen completion into the input line. See
    /// [`apply_completion`]; exported so the adapter does not reimplement
    /// the splicing.
    pub fn complete(&self, input: String, chosen: String) -> String {
        apply_completion(&input, &chosen)
    }

    /// Replace the tag corpus.
    pub fn update_tags(&self, tags: Vec<String>) {
        self.ranker.replace_corpus(tags);
    }
}
