//! Highlight state for one viewing session.
//!
//! The controller owns the search text, the derived match state and the locked
//! set. Every event runs to completion before the next one is accepted, and the
//! only outbound effect is an optional [`ScrollRequest`] returned to the caller.

use crate::catalog::Catalog;
use crate::config::ViewerConfig;
use crate::search::{MatchState, SearchQuery, derive_matches};
use crate::types::{CommandState, RenderItem, ScrollRequest, Tier};
use ahash::AHashSet;

/// Host events the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search box content changed.
    SearchTextChanged(String),
    /// Promote the current matches into the locked set.
    Lock,
    /// Forget every locked index.
    ClearLocked,
}

/// Three-tier highlight model over an immutable catalog.
///
/// Tiers resolve with fixed precedence: an index in the locked set is always
/// [`Tier::Locked`], otherwise a matching index is [`Tier::Matched`], otherwise
/// it is [`Tier::Default`].
#[derive(Debug, Clone)]
pub struct HighlightController {
    catalog: Catalog,
    config: ViewerConfig,
    query: SearchQuery,
    matches: MatchState,
    locked: AHashSet<usize>,
}

impl HighlightController {
    /// Create a controller with the default viewer configuration.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, ViewerConfig::default())
    }

    /// Create a controller that stamps `config` onto its scroll requests.
    pub fn with_config(catalog: Catalog, config: ViewerConfig) -> Self {
        Self {
            catalog,
            config,
            query: SearchQuery::default(),
            matches: MatchState::default(),
            locked: AHashSet::new(),
        }
    }

    /// Handle one host event.
    pub fn dispatch(&mut self, event: Event) -> Option<ScrollRequest> {
        match event {
            Event::SearchTextChanged(text) => self.set_search_text(text),
            Event::Lock => {
                if !self.commands().lock_enabled {
                    tracing::debug!("Lock received with nothing matched; clearing search only");
                }
                self.lock_current_matches()
            }
            Event::ClearLocked => {
                if !self.commands().clear_locked_enabled {
                    tracing::debug!("Clear-locked received with nothing locked");
                }
                self.clear_locked();
                None
            }
        }
    }

    /// Replace the search text and recompute matches.
    ///
    /// Returns a scroll request for the first match whenever there is one, even
    /// if it is the same index as last time.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> Option<ScrollRequest> {
        self.query = SearchQuery::new(text);
        self.recompute()
    }

    /// Merge the current matches into the locked set, then clear the search.
    ///
    /// With nothing matched the locked set is left alone, but the search text
    /// is still cleared.
    pub fn lock_current_matches(&mut self) -> Option<ScrollRequest> {
        let before = self.locked.len();
        self.locked.extend(self.matches.indices().iter().copied());

        tracing::debug!(
            "Locked {} new indices ({} matched, {} locked total)",
            self.locked.len() - before,
            self.matches.len(),
            self.locked.len()
        );

        self.set_search_text(String::new())
    }

    /// Empty the locked set. Search text and matches are untouched.
    pub fn clear_locked(&mut self) {
        let removed = self.locked.len();
        self.locked.clear();
        tracing::debug!("Cleared {} locked indices", removed);
    }

    /// Render tier for `index`. Indices outside the catalog are `Default`.
    pub fn tier_of(&self, index: usize) -> Tier {
        Tier::resolve(self.locked.contains(&index), self.matches.contains(index))
    }

    /// Every catalog entry with its current tier, in catalog order.
    pub fn render_items(&self) -> impl ExactSizeIterator<Item = RenderItem<'_>> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(index, token)| RenderItem {
                index,
                token,
                tier: self.tier_of(index),
            })
    }

    /// Which host commands should currently be enabled.
    pub fn commands(&self) -> CommandState {
        CommandState {
            lock_enabled: !self.matches.is_empty(),
            clear_locked_enabled: !self.locked.is_empty(),
        }
    }

    /// Get the current search text, untrimmed
    pub fn search_text(&self) -> &str {
        self.query.text()
    }

    /// Get the matches for the current search text
    pub fn matches(&self) -> &MatchState {
        &self.matches
    }

    /// Get the index the view should be scrolled to, if any
    pub fn first_match(&self) -> Option<usize> {
        self.matches.first()
    }

    /// Get the locked indices in ascending order
    pub fn locked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.locked.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    pub fn locked_count(&self) -> usize {
        self.locked.len()
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.contains(&index)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    fn recompute(&mut self) -> Option<ScrollRequest> {
        self.matches = derive_matches(&self.catalog, &self.query);

        tracing::debug!(
            "Search {:?}: {} matches, first {:?}",
            self.query.text(),
            self.matches.len(),
            self.matches.first()
        );

        let request = self.matches.first().map(|index| ScrollRequest {
            index,
            behavior: self.config.scroll.behavior,
            align: self.config.scroll.align,
        });
        if let Some(request) = &request {
            tracing::trace!("Scroll request: {:?}", request);
        }
        request
    }
}
