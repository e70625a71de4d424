//! SuggestionRanker - corpus snapshot ownership and ranking, designed for
//! UniFFI export.
//!
//! The corpus lives behind a copy-on-write snapshot: `suggest` takes the
//! read lock only long enough to clone the `Arc`, then scans lock-free, so
//! a concurrent `replace_corpus` can never expose a half-written corpus.

use crate::candidate::Candidate;
use crate::interface::{RankerConfig, ScoreKind};
use crate::scoring;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ranks a corpus of candidate strings against typed query fragments.
///
/// One durable piece of state (the corpus snapshot) with two transitions:
/// `replace_corpus` mutates, `suggest` reads. Configuration is fixed at
/// construction.
#[derive(uniffi::Object)]
pub struct SuggestionRanker {
    corpus: RwLock<Arc<Vec<Candidate>>>,
    config: RankerConfig,
}

// Internal implementation (not exported via FFI)
impl SuggestionRanker {
    /// The current corpus snapshot. The returned `Arc` stays valid and
    /// unchanged across any later `replace_corpus`.
    pub fn snapshot(&self) -> Arc<Vec<Candidate>> {
        self.corpus.read().clone()
    }

    fn score_folded(&self, folded_query: &str, candidate: &Candidate) -> u8 {
        match self.config.strategy {
            ScoreKind::EditDistance => scoring::score_folded(folded_query, candidate.folded()),
            ScoreKind::MatchingBlocks => {
                scoring::block_ratio_folded(folded_query, candidate.folded())
            }
        }
    }

    /// [`Self::suggest`] with the score each suggestion earned.
    ///
    /// Scan, filter at the cutoff, order by score descending with
    /// case-insensitive lexicographic tie-breaks (raw text as the final
    /// stabilizer), then truncate to the cap. Truncation happens on the
    /// ranked list, never on the unfiltered scan, so the best K survive
    /// even when discovered late in corpus order.
    pub fn suggest_scored(&self, query: &str) -> Vec<(u8, String)> {
        if query.is_empty() {
            return Vec::new();
        }

        let folded_query = scoring::fold(query);
        let snapshot = self.snapshot();

        let mut survivors: Vec<(u8, &Candidate)> = snapshot
            .iter()
            .map(|candidate| (self.score_folded(&folded_query, candidate), candidate))
            .filter(|(score, _)| *score >= self.config.score_cutoff)
            .collect();

        survivors.sort_unstable_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| a.folded().cmp(b.folded()))
                .then_with(|| a.text().cmp(b.text()))
        });
        survivors.truncate(self.config.max_results as usize);

        log::debug!(
            "suggest: corpus={} survivors={} cutoff={}",
            snapshot.len(),
            survivors.len(),
            self.config.score_cutoff,
        );

        survivors
            .into_iter()
            .map(|(score, candidate)| (score, candidate.text().to_string()))
            .collect()
    }

    fn build_snapshot(corpus: Vec<String>) -> Arc<Vec<Candidate>> {
        Arc::new(corpus.into_iter().map(Candidate::new).collect())
    }
}

// FFI-exported constructors (must be in standalone impl block)
#[uniffi::export]
impl SuggestionRanker {
    /// Create a ranker over an initial corpus with an explicit config.
    #[uniffi::constructor]
    pub fn new(corpus: Vec<String>, config: RankerConfig) -> Self {
        Self {
            corpus: RwLock::new(Self::build_snapshot(corpus)),
            config,
        }
    }

    /// Create a ranker with the engine defaults (cutoff 60, cap 10,
    /// edit distance).
    #[uniffi::constructor]
    pub fn with_defaults(corpus: Vec<String>) -> Self {
        Self::new(corpus, RankerConfig::default())
    }
}

#[uniffi::export]
impl SuggestionRanker {
    /// Ordered suggestions for a query fragment.
    ///
    /// An empty query returns an empty list immediately; an empty fragment
    /// should not produce a noisy suggestion for every candidate.
    /// Whitespace-only queries flow through scoring, where they bottom out
    /// near 0 against any real candidate.
    pub fn suggest(&self, query: String) -> Vec<String> {
        self.suggest_scored(&query)
            .into_iter()
            .map(|(_, text)| text)
            .collect()
    }

    /// Atomically swap in a new corpus.
    ///
    /// The snapshot is built fully outside the lock; the write lock is held
    /// only for the pointer swap. Contents are taken as-is: empty corpus,
    /// duplicates, and empty-string candidates are all accepted.
    pub fn replace_corpus(&self, corpus: Vec<String>) {
        let snapshot = Self::build_snapshot(corpus);
        *self.corpus.write() = snapshot;
    }

    /// The configuration this ranker was constructed with.
    pub fn config(&self) -> RankerConfig {
        self.config.clone()
    }
}
