//! Searchable, lockable view over a loosely formatted catalog of identifiers.
//!
//! The crate has two halves:
//! - [`tokenize()`] recovers a flat, ordered token list from raw catalog
//!   text delimited by line breaks, semicolons and (occasionally) stray spaces.
//! - [`HighlightController`] owns the search text and the locked set, and
//!   projects every catalog index onto a [`Tier`] for the host to render.
//!
//! ```
//! use catalog_lens::{Catalog, HighlightController, Tier};
//!
//! let catalog = Catalog::parse("Alpha; Beta Gamma\nalphabet");
//! let mut view = HighlightController::new(catalog);
//!
//! let scroll = view.set_search_text("alpha");
//! assert_eq!(scroll.map(|r| r.index), Some(0));
//!
//! view.lock_current_matches();
//! assert_eq!(view.tier_of(3), Tier::Locked);
//! assert_eq!(view.tier_of(1), Tier::Default);
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod search;
pub mod tracing;
pub mod types;

pub use catalog::Catalog;
pub use config::{ScrollConfig, ViewerConfig};
pub use controller::{Event, HighlightController};
pub use error::ConfigError;
pub use search::{MatchState, SearchQuery, tokenize};
pub use types::{CommandState, RenderItem, ScrollAlign, ScrollBehavior, ScrollRequest, Tier};
