//! Structural tokenization of raw catalog text.
//!
//! Catalog text nests two delimiters: records are separated by line breaks and
//! fields within a record by `;`. Some fields carry two identifiers pasted
//! together with a single space instead of a semicolon, so a field containing
//! an internal space is split once more on spaces.
//!
//! Tokens are never validated or corrected. Odd prefixes and stray characters
//! pass through as literal content.

/// Field separator within a record.
const FIELD_DELIMITER: char = ';';

/// Secondary separator for fields that hold two pasted-together identifiers.
const PASTED_DELIMITER: char = ' ';

/// Lazily yields tokens from raw catalog text, borrowing from the input.
///
/// Order is exactly the top-to-bottom, left-to-right order of appearance.
pub fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines()
        .flat_map(|record| record.split(FIELD_DELIMITER))
        .flat_map(split_field)
}

/// Tokenizes raw catalog text into an ordered list of identifiers.
///
/// The position of each token in the returned list is its catalog index.
/// Never fails; empty or delimiter-only input yields an empty list.
pub fn tokenize(raw: &str) -> Vec<String> {
    tokens(raw).map(str::to_owned).collect()
}

/// Trims a field and splits it on internal spaces, dropping empty pieces.
fn split_field(field: &str) -> impl Iterator<Item = &str> {
    field
        .trim()
        .split(PASTED_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

/// Counts the non-blank records in raw catalog text.
pub(crate) fn record_count(raw: &str) -> usize {
    raw.lines().filter(|line| !line.trim().is_empty()).count()
}
