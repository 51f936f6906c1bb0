#![allow(dead_code)]

use game_core::{GameRules, StartPolicy, WordBank, statuses};
use game_types::{LetterResult, LetterStatus};

/// Creates a bank holding a single known word so the secret is predictable
pub fn single_word_bank(word: &str) -> WordBank {
    WordBank::from_word_list(word, word.len()).unwrap()
}

/// Rules with a short attempt budget to keep exhaustion tests quick
pub fn short_rules(max_attempts: i32) -> GameRules {
    GameRules::new(4, max_attempts, StartPolicy::Reject)
}

/// Parses a compact feedback pattern: `E` exact, `P` present, `A` absent
pub fn pattern(symbols: &str) -> Vec<LetterStatus> {
    symbols.chars()
        .map(|c| match c {
            'E' => LetterStatus::Exact,
            'P' => LetterStatus::Present,
            _ => LetterStatus::Absent,
        })
        .collect()
}

/// Asserts feedback matches a compact pattern
pub fn assert_feedback(feedback: &[LetterResult], expected: &str) {
    assert_eq!(
        statuses(feedback),
        pattern(expected),
        "Expected feedback {}, got {:?}",
        expected,
        feedback
    );
}
