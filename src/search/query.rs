//! Search queries and the pure derivation of match state from a catalog.
//!
//! Match state is always recomputed from scratch rather than patched, so it can
//! never drift from the query that produced it.

use crate::catalog::Catalog;

/// The user's current search text.
///
/// The text is stored untouched. Trimming only decides whether the query is
/// active; an active query is matched with its interior and edge whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = text.to_lowercase();
        Self { text, folded }
    }

    /// The raw text as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the query selects anything at all. Blank text is the "no search" sentinel.
    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Case-insensitive substring test against an already lower-cased token.
    pub(crate) fn matches_folded(&self, folded_token: &str) -> bool {
        folded_token.contains(self.folded.as_str())
    }
}

/// The set of matching indices for one query, in ascending catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    indices: Vec<usize>,
}

impl MatchState {
    /// Matching indices, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The smallest matching index, i.e. the one to scroll into view.
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Derives the match state of `query` over `catalog`.
///
/// An inactive query matches nothing. Otherwise every index whose lower-cased
/// token contains the lower-cased query text is included.
pub fn derive_matches(catalog: &Catalog, query: &SearchQuery) -> MatchState {
    if !query.is_active() {
        return MatchState::default();
    }

    let indices = catalog
        .folded()
        .enumerate()
        .filter(|(_, folded)| query.matches_folded(folded))
        .map(|(index, _)| index)
        .collect();

    MatchState { indices }
}
