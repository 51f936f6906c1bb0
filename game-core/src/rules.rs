use game_types::{GameError, LetterResult};
use rand::Rng;
use rand::seq::IteratorRandom;
use std::str::FromStr;

use crate::evaluation::{evaluate_guess, is_solved};
use crate::word_bank::DEFAULT_WORD_LENGTH;

pub const DEFAULT_MAX_ATTEMPTS: i32 = 30;

/// What `/play` does when the player already has a game running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    /// Keep the running session, the player resumes guessing
    #[default]
    Reject,
    /// Drop the running session without touching score or streak
    Replace,
}

impl FromStr for StartPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "reject" | "resume" => Ok(StartPolicy::Reject),
            "replace" => Ok(StartPolicy::Replace),
            other => Err(format!("Unknown start policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuessResolution {
    Win,
    Exhausted { feedback: Vec<LetterResult> },
    Continue { feedback: Vec<LetterResult> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameRules {
    pub word_length: usize,
    pub max_attempts: i32,
    pub start_policy: StartPolicy,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            start_policy: StartPolicy::default(),
        }
    }
}

impl GameRules {
    pub fn new(word_length: usize, max_attempts: i32, start_policy: StartPolicy) -> Self {
        Self {
            word_length,
            max_attempts,
            start_policy,
        }
    }

    /// Trim and uppercase raw input, rejecting anything that isn't exactly
    /// `word_length` ASCII letters.
    pub fn normalize_guess(&self, raw: &str) -> Result<String, GameError> {
        let guess = raw.trim().to_uppercase();

        if guess.chars().count() != self.word_length
            || !guess.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(GameError::InvalidGuessFormat {
                guess,
                expected_length: self.word_length as u32,
            });
        }

        Ok(guess)
    }

    /// Decide how a session proceeds after `attempts_used` guesses, this one
    /// included. A correct guess wins even on the last allowed attempt.
    pub fn resolve_guess(&self, guess: &str, secret: &str, attempts_used: i32) -> GuessResolution {
        if is_solved(guess, secret) {
            return GuessResolution::Win;
        }

        let feedback = evaluate_guess(guess, secret);
        if attempts_used >= self.max_attempts {
            GuessResolution::Exhausted { feedback }
        } else {
            GuessResolution::Continue { feedback }
        }
    }
}

/// Pick one letter of the secret word, uniformly over positions
pub fn hint_letter<R: Rng + ?Sized>(secret: &str, rng: &mut R) -> Option<char> {
    secret.chars().choose(rng)
}
