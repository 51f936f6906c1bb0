use game_types::{LetterResult, LetterStatus};

/// Evaluate a guess against the secret word, position by position.
///
/// A letter is `Exact` when it matches the secret at the same index, otherwise
/// `Present` when it occurs anywhere in the secret. Membership is checked against
/// the whole secret without consuming letters, so a secret with one `B` still
/// marks every misplaced `B` in the guess as present.
///
/// # Panics
///
/// Panics if the guess and secret differ in length. Callers validate the guess
/// format before evaluating.
pub fn evaluate_guess(guess: &str, secret: &str) -> Vec<LetterResult> {
    let guess: Vec<char> = guess.to_uppercase().chars().collect();
    let secret: Vec<char> = secret.to_uppercase().chars().collect();

    assert_eq!(
        guess.len(),
        secret.len(),
        "guess and secret word must have the same length"
    );

    guess
        .iter()
        .zip(&secret)
        .enumerate()
        .map(|(position, (&letter, &expected))| {
            let status = if letter == expected {
                LetterStatus::Exact
            } else if secret.contains(&letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };

            LetterResult {
                letter: letter.to_string(),
                status,
                position: position as i32,
            }
        })
        .collect()
}

/// Whole-word comparison, independent of the per-letter feedback
pub fn is_solved(guess: &str, secret: &str) -> bool {
    guess.to_uppercase() == secret.to_uppercase()
}

pub fn statuses(feedback: &[LetterResult]) -> Vec<LetterStatus> {
    feedback.iter().map(|letter| letter.status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Exact, Present};

    #[test]
    fn test_evaluate_exact_word() {
        let feedback = evaluate_guess("CODE", "CODE");

        assert_eq!(feedback.len(), 4);
        assert!(feedback.iter().all(|l| l.status == Exact));
        assert!(is_solved("CODE", "CODE"));
    }

    #[test]
    fn test_evaluate_partial_match() {
        // C↔C, O↔O, R not in CODE, E↔E
        let feedback = evaluate_guess("CORE", "CODE");
        assert_eq!(statuses(&feedback), vec![Exact, Exact, Absent, Exact]);
        assert!(!is_solved("CORE", "CODE"));
    }

    #[test]
    fn test_duplicate_letters_are_not_consumed() {
        // BOOK has a single B, yet every B in the guess is marked
        let feedback = evaluate_guess("BBBX", "BOOK");
        assert_eq!(statuses(&feedback), vec![Exact, Present, Present, Absent]);

        let feedback = evaluate_guess("ROBO", "BOOK");
        assert_eq!(statuses(&feedback), vec![Absent, Exact, Present, Present]);
    }

    #[test]
    fn test_repeated_guess_letter_against_single_secret_letter() {
        // Only one O in CODE, both misplaced O's are still present
        let feedback = evaluate_guess("OOOX", "CODE");
        assert_eq!(statuses(&feedback), vec![Present, Exact, Present, Absent]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(evaluate_guess("code", "CODE"), evaluate_guess("CODE", "CODE"));
        assert_eq!(evaluate_guess("CoRe", "code"), evaluate_guess("CORE", "CODE"));
        assert!(is_solved("code", "CODE"));
    }

    #[test]
    fn test_letters_and_positions_reported() {
        let feedback = evaluate_guess("fish", "FORK");
        let letters: Vec<&str> = feedback.iter().map(|l| l.letter.as_str()).collect();
        let positions: Vec<i32> = feedback.iter().map(|l| l.position).collect();

        assert_eq!(letters, vec!["F", "I", "S", "H"]);
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert_eq!(statuses(&feedback), vec![Exact, Absent, Absent, Absent]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_is_a_caller_error() {
        evaluate_guess("COD", "CODE");
    }
}
