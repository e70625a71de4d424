//! Hunch - fuzzy suggestion engine for Quick Snippet Overlay
//!
//! This library implements the typo-tolerant suggestion core behind the
//! host app's tag autocomplete and snippet search: score a typed fragment
//! against a small corpus, filter at a cutoff, rank, and cap the results.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record/Enum)]).

pub mod candidate;
pub mod completer;
pub mod interface;
pub mod ranker;
pub mod scoring;

pub use completer::TagCompleter;
pub use interface::*;
pub use ranker::SuggestionRanker;

uniffi::setup_scaffolding!("hunch");
