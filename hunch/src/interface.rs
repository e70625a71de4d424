//! Hunch FFI Interface Definition
//!
//! This file defines the public interface exposed to the Python host via
//! UniFFI. It acts as the source of truth for shared types.

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Which similarity formula a ranker applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, uniffi::Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreKind {
    /// Normalized Damerau-Levenshtein distance. Reference semantics.
    #[default]
    EditDistance,
    /// Legacy matching-block ratio, kept for call sites whose saved
    /// thresholds were tuned against the scorer the host app shipped with.
    MatchingBlocks,
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default minimum score a candidate must reach to be suggested.
pub const DEFAULT_SCORE_CUTOFF: u8 = 60;

/// Default maximum number of suggestions returned per query.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Lenient cutoff the tag completer uses. Autocomplete tolerates rougher
/// fragments than the snippet search bar.
pub const COMPLETER_SCORE_CUTOFF: u8 = 40;

/// Per-ranker configuration. Fixed at construction; rankers with different
/// sensitivity profiles coexist without shared module state.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankerConfig {
    /// Minimum similarity score, inclusive. Candidates strictly below are
    /// dropped.
    pub score_cutoff: u8,
    /// Result cap K, applied after ranking.
    pub max_results: u32,
    /// Similarity formula.
    pub strategy: ScoreKind,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            score_cutoff: DEFAULT_SCORE_CUTOFF,
            max_results: DEFAULT_MAX_RESULTS,
            strategy: ScoreKind::default(),
        }
    }
}

impl RankerConfig {
    /// Pull values into the ranges the host app historically validated
    /// against (cutoff 40..=80, results 5..=20). The engine itself accepts
    /// any configuration; config-loading hosts apply this before handing a
    /// persisted config over.
    pub fn clamped(&self) -> Self {
        Self {
            score_cutoff: self.score_cutoff.clamp(40, 80),
            max_results: self.max_results.clamp(5, 20),
            strategy: self.strategy,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FREE FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Similarity score in [0, 100] between a query and a candidate.
/// See [`crate::scoring::score`].
#[uniffi::export]
pub fn score(query: String, candidate: String) -> u8 {
    crate::scoring::score(&query, &candidate)
}

/// Legacy matching-block similarity in [0, 100].
/// See [`crate::scoring::block_ratio`].
#[uniffi::export]
pub fn block_ratio(query: String, candidate: String) -> u8 {
    crate::scoring::block_ratio(&query, &candidate)
}

/// The engine's default configuration: cutoff 60, cap 10, edit distance.
#[uniffi::export]
pub fn default_config() -> RankerConfig {
    RankerConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankerConfig::default();
        assert_eq!(config.score_cutoff, 60);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.strategy, ScoreKind::EditDistance);
    }

    #[test]
    fn test_clamped_pulls_out_of_range_values_in() {
        let config = RankerConfig {
            score_cutoff: 95,
            max_results: 3,
            strategy: ScoreKind::MatchingBlocks,
        };
        let clamped = config.clamped();
        assert_eq!(clamped.score_cutoff, 80);
        assert_eq!(clamped.max_results, 5);
        assert_eq!(clamped.strategy, ScoreKind::MatchingBlocks);
    }

    #[test]
    fn test_clamped_leaves_in_range_values_alone() {
        let config = RankerConfig {
            score_cutoff: 40,
            max_results: 20,
            strategy: ScoreKind::EditDistance,
        };
        assert_eq!(config.clamped(), config);
    }
}
