//! Property-based tests for tokenization and highlight precedence.
//!
//! ## Tokenizer
//!
//! 1. **Determinism**: tokenizing the same text twice yields the same sequence
//! 2. **Reference split**: output equals a naive line / `;` / space split with
//!    trim-and-discard at every stage
//! 3. **Shape**: every token is non-empty and contains no delimiter
//!
//! ## Highlight controller
//!
//! 4. **Precedence**: locked indices always render `Locked`
//! 5. **Exact matches**: the match set equals a brute-force substring scan
//! 6. **Sticky locks**: searches never alter the locked set

use catalog_lens::{Catalog, HighlightController, Tier, tokenize};
use proptest::prelude::*;
use rstest::rstest;

/// Catalog text drawn from a small alphabet so delimiters show up often.
fn raw_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z_]",
            1 => Just(";".to_string()),
            1 => Just(" ".to_string()),
            1 => Just("\n".to_string()),
            1 => Just("\t".to_string()),
        ],
        0..64,
    )
    .prop_map(|pieces| pieces.concat())
}

fn reference_split(raw: &str) -> Vec<String> {
    let mut out = Vec::new();
    for record in raw.split('\n') {
        let record = record.strip_suffix('\r').unwrap_or(record);
        for field in record.split(';') {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            for piece in field.split(' ') {
                let piece = piece.trim();
                if !piece.is_empty() {
                    out.push(piece.to_string());
                }
            }
        }
    }
    out
}

#[derive(Debug, Clone)]
enum Action {
    Search(String),
    Lock,
    ClearLocked,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => "[a-cA-C ]{0,3}".prop_map(Action::Search),
        1 => Just(Action::Lock),
        1 => Just(Action::ClearLocked),
    ]
}

proptest! {
    #[test]
    fn prop_tokenize_is_deterministic(raw in raw_text()) {
        prop_assert_eq!(tokenize(&raw), tokenize(&raw));
    }

    #[test]
    fn prop_tokenize_matches_reference_split(raw in raw_text()) {
        prop_assert_eq!(tokenize(&raw), reference_split(&raw));
    }

    #[test]
    fn prop_tokens_are_clean(raw in raw_text()) {
        for token in tokenize(&raw) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(';'));
            prop_assert!(!token.contains(' '));
            prop_assert!(!token.contains('\n'));
            prop_assert_eq!(token.trim(), token.as_str());
        }
    }

    #[test]
    fn prop_controller_invariants_hold(
        raw in "[a-cA-C;\n ]{0,40}",
        actions in proptest::collection::vec(action(), 0..24),
    ) {
        let catalog = Catalog::parse(&raw);
        let mut controller = HighlightController::new(catalog.clone());
        let mut expected_locked: Vec<usize> = Vec::new();

        for action in actions {
            match action {
                Action::Search(text) => {
                    let request = controller.set_search_text(text.clone());

                    let expected: Vec<usize> = if text.trim().is_empty() {
                        Vec::new()
                    } else {
                        let needle = text.to_lowercase();
                        catalog
                            .iter()
                            .enumerate()
                            .filter(|(_, token)| token.to_lowercase().contains(&needle))
                            .map(|(index, _)| index)
                            .collect()
                    };
                    prop_assert_eq!(controller.matches().indices(), expected.as_slice());
                    prop_assert_eq!(request.map(|r| r.index), expected.first().copied());
                }
                Action::Lock => {
                    expected_locked.extend(controller.matches().indices().iter().copied());
                    expected_locked.sort_unstable();
                    expected_locked.dedup();
                    controller.lock_current_matches();
                    prop_assert_eq!(controller.search_text(), "");
                    prop_assert!(controller.matches().is_empty());
                }
                Action::ClearLocked => {
                    expected_locked.clear();
                    controller.clear_locked();
                }
            }

            prop_assert_eq!(controller.locked_indices(), expected_locked.clone());
            for item in controller.render_items() {
                let expected_tier = if expected_locked.contains(&item.index) {
                    Tier::Locked
                } else if controller.matches().contains(item.index) {
                    Tier::Matched
                } else {
                    Tier::Default
                };
                prop_assert_eq!(item.tier, expected_tier);
            }
        }
    }
}

#[rstest]
#[case("A; B C\nD;;  E ")]
#[case("")]
#[case("\r\n;\r\n")]
#[case("a b;c\td\n e ")]
fn reference_split_agrees_on_samples(#[case] raw: &str) {
    assert_eq!(tokenize(raw), reference_split(raw));
}
