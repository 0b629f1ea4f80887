//! Catalog tokenization and substring matching.
//!
//! This module turns raw catalog text into tokens and derives, for a given
//! query, which catalog indices match.

// Module declarations
pub mod query;
pub mod tokenize;

// Public re-exports (used via lib.rs)
pub use query::{MatchState, SearchQuery, derive_matches};
pub use tokenize::{tokenize, tokens};

// Internal re-exports
pub(crate) use tokenize::record_count;
