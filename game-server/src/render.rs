//! Plain-text replies for the chat bot.

use game_types::{
    EndOutcome, GameError, GuessOutcome, HintOutcome, Leaderboard, LetterResult, LetterStatus,
    PlayerStats, StartOutcome,
};

pub fn symbol(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Exact => "✅",
        LetterStatus::Present => "⚪",
        LetterStatus::Absent => "❌",
    }
}

pub fn feedback(letters: &[LetterResult]) -> String {
    letters.iter().map(|letter| symbol(letter.status)).collect()
}

pub fn welcome() -> String {
    "👋 Welcome to the 4-Letter Word Guessing Bot!\n\n\
     🎮 Guess the word, get feedback:\n\
     ✅ Correct letter & position\n\
     ⚪ Letter exists but wrong position\n\
     ❌ Letter not in the word\n\n\
     Use /play to start, /hint for one hint per game, /end to give up, \
     /leaderboard and /stats to see the scores."
        .to_string()
}

pub fn start(outcome: &StartOutcome) -> String {
    match outcome {
        StartOutcome::Started { word_length, .. } => {
            format!("🎮 Game started! Guess a {}-letter word.", word_length)
        }
        StartOutcome::AlreadyActive {
            attempts_used,
            max_attempts,
        } => format!(
            "You already have a game running! Start guessing. (Attempts: {}/{})",
            attempts_used, max_attempts
        ),
    }
}

pub fn hint(outcome: &HintOutcome) -> String {
    format!("💡 Hint: The word contains the letter '{}'.", outcome.letter)
}

pub fn guess(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Win {
            word,
            attempts_used,
        } => format!(
            "🎉 Correct! The word was {} in {} attempts.",
            word, attempts_used
        ),
        GuessOutcome::Continue {
            feedback: letters,
            attempts_used,
            max_attempts,
        } => format!(
            "{} | Attempts: {}/{}",
            feedback(letters),
            attempts_used,
            max_attempts
        ),
        GuessOutcome::LossExhausted {
            feedback: letters,
            revealed_word,
            ..
        } => format!(
            "{}\n❌ Maximum attempts reached! The word was {}. Game Over!",
            feedback(letters),
            revealed_word
        ),
    }
}

pub fn end(outcome: &EndOutcome) -> String {
    format!(
        "❌ Game ended by user. The word was {}. Game Over!",
        outcome.revealed_word
    )
}

pub fn leaderboard(board: &Leaderboard) -> String {
    match board {
        Leaderboard::NoScores => "🏆 No scores yet. Be the first with /play!".to_string(),
        Leaderboard::Ranked(entries) => {
            let lines: Vec<String> = entries
                .iter()
                .map(|entry| format!("{}. {} - {}", entry.rank, entry.display_name, entry.score))
                .collect();
            format!("🏆 Top Players:\n{}", lines.join("\n"))
        }
    }
}

pub fn stats(stats: Option<&PlayerStats>) -> String {
    match stats {
        Some(PlayerStats { user, rank }) => {
            let rank = rank
                .map(|rank| format!("#{}", rank))
                .unwrap_or_else(|| "unranked".to_string());
            format!(
                "📊 {}: {} wins, current streak {}, rank {}",
                user.display_name, user.score, user.streak, rank
            )
        }
        None => "You haven't played yet. Start a game with /play".to_string(),
    }
}

pub fn error(error: &GameError) -> String {
    match error {
        GameError::NoActiveSession => "Start a game first with /play".to_string(),
        GameError::SessionAlreadyActive => {
            "You already have a game running! Start guessing.".to_string()
        }
        GameError::HintAlreadyUsed => "You already used your hint for this game!".to_string(),
        GameError::PlayerNotFound => "You haven't played yet. Start a game with /play".to_string(),
        GameError::InvalidGuessFormat {
            expected_length, ..
        } => format!("Please guess a {}-letter word.", expected_length),
        GameError::StorageUnavailable { .. } => {
            "⚠️ Something went wrong on our side. Please try again later.".to_string()
        }
    }
}

pub fn unknown_command(name: &str) -> String {
    format!(
        "Unknown command '{}'. Try /play, /hint, /end, /leaderboard or /stats.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::{LeaderboardEntry, User};

    fn letters(statuses: &[LetterStatus]) -> Vec<LetterResult> {
        statuses
            .iter()
            .enumerate()
            .map(|(position, status)| LetterResult {
                letter: "A".to_string(),
                status: *status,
                position: position as i32,
            })
            .collect()
    }

    #[test]
    fn test_continue_reply() {
        let outcome = GuessOutcome::Continue {
            feedback: letters(&[
                LetterStatus::Exact,
                LetterStatus::Exact,
                LetterStatus::Absent,
                LetterStatus::Present,
            ]),
            attempts_used: 3,
            max_attempts: 30,
        };
        assert_eq!(guess(&outcome), "✅✅❌⚪ | Attempts: 3/30");
    }

    #[test]
    fn test_terminal_replies() {
        let win = GuessOutcome::Win {
            word: "CODE".to_string(),
            attempts_used: 2,
        };
        assert_eq!(guess(&win), "🎉 Correct! The word was CODE in 2 attempts.");

        let loss = GuessOutcome::LossExhausted {
            feedback: letters(&[LetterStatus::Absent; 4]),
            revealed_word: "BOOK".to_string(),
            attempts_used: 30,
        };
        assert!(guess(&loss).contains("The word was BOOK"));

        let ended = EndOutcome {
            revealed_word: "FISH".to_string(),
        };
        assert!(end(&ended).contains("FISH"));
    }

    #[test]
    fn test_leaderboard_reply() {
        assert!(leaderboard(&Leaderboard::NoScores).contains("No scores yet"));

        let board = Leaderboard::Ranked(vec![
            LeaderboardEntry {
                rank: 1,
                display_name: "Alice".to_string(),
                score: 5,
            },
            LeaderboardEntry {
                rank: 2,
                display_name: "Bob".to_string(),
                score: 2,
            },
        ]);
        assert_eq!(
            leaderboard(&board),
            "🏆 Top Players:\n1. Alice - 5\n2. Bob - 2"
        );
    }

    #[test]
    fn test_stats_reply() {
        let stats_value = PlayerStats {
            user: User {
                id: "1".to_string(),
                display_name: "Alice".to_string(),
                score: 4,
                streak: 2,
                created_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            rank: Some(1),
        };
        assert_eq!(
            stats(Some(&stats_value)),
            "📊 Alice: 4 wins, current streak 2, rank #1"
        );
        assert!(stats(None).contains("/play"));
    }

    #[test]
    fn test_error_replies() {
        assert_eq!(
            error(&GameError::NoActiveSession),
            "Start a game first with /play"
        );
        assert_eq!(
            error(&GameError::InvalidGuessFormat {
                guess: "AB".to_string(),
                expected_length: 4
            }),
            "Please guess a 4-letter word."
        );
        assert_eq!(error(&GameError::PlayerNotFound), stats(None));
    }
}
