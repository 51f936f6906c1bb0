use regex::Regex;
use std::sync::LazyLock;

// "/play", "/Play@word_bot", "/hint extra words"
static COMMAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/([A-Za-z_]+)(?:@\w+)?(?:\s|$)").expect("command pattern is valid")
});

/// A routed chat message. Anything that isn't a slash command is a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Welcome,
    Play,
    Hint,
    End,
    Leaderboard,
    Stats,
    Guess(String),
    Unknown(String),
}

impl Command {
    /// Returns `None` for blank messages, which the bot ignores
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if !text.starts_with('/') {
            return Some(Command::Guess(text.to_string()));
        }

        let Some(captures) = COMMAND_PATTERN.captures(text) else {
            return Some(Command::Unknown(text.to_string()));
        };
        let name = captures[1].to_lowercase();

        let command = match name.as_str() {
            "start" => Command::Welcome,
            "play" => Command::Play,
            "hint" => Command::Hint,
            "end" => Command::End,
            "leaderboard" => Command::Leaderboard,
            "stats" => Command::Stats,
            _ => Command::Unknown(name),
        };
        Some(command)
    }
}
