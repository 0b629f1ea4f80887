//! The immutable, index-addressable token catalog for a session.

use crate::search::{record_count, tokens};
use std::ops::Index;

/// Ordered, immutable sequence of catalog tokens.
///
/// A token's position is its identity. Duplicates are legal and each copy is
/// addressed independently. A lower-cased shadow of every token is kept so
/// case-insensitive matching does not re-fold the catalog on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tokens: Vec<String>,
    folded: Vec<String>,
}

impl Catalog {
    /// Tokenizes raw catalog text and builds the catalog.
    pub fn parse(raw: &str) -> Self {
        let start = std::time::Instant::now();
        let catalog = Self::from_tokens(tokens(raw));

        tracing::info!(
            "Built catalog: {} tokens from {} records in {:?}",
            catalog.len(),
            record_count(raw),
            start.elapsed()
        );

        catalog
    }

    /// Builds a catalog from tokens that were already split.
    ///
    /// Tokens are trimmed; any that end up empty are dropped.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|token| token.as_ref().trim().to_owned())
            .filter(|token| !token.is_empty())
            .collect();
        let folded = tokens.iter().map(|token| token.to_lowercase()).collect();

        Self { tokens, folded }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Tokens in catalog order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Lower-cased tokens in catalog order.
    pub(crate) fn folded(&self) -> impl Iterator<Item = &str> {
        self.folded.iter().map(String::as_str)
    }
}

impl Index<usize> for Catalog {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}
