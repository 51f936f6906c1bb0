use std::env;
use std::fmt::Display;
use std::str::FromStr;

use game_core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameRules, StartPolicy, WordBank};
use game_persistence::connection::DEFAULT_DATABASE_URL;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_attempts: i32,
    pub start_policy: StartPolicy,
    pub words_file: Option<String>,
    pub leaderboard_size: u64,
    pub lock_prune_interval_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_attempts = parse_or(&lookup, "MAX_ATTEMPTS", defaults.max_attempts)?;
        if max_attempts < 1 {
            return Err(ConfigError::Invalid {
                key: "MAX_ATTEMPTS",
                value: max_attempts.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_attempts,
            start_policy: parse_or(&lookup, "START_POLICY", defaults.start_policy)?,
            words_file: lookup("WORDS_FILE").filter(|path| !path.trim().is_empty()),
            leaderboard_size: parse_or(&lookup, "LEADERBOARD_SIZE", defaults.leaderboard_size)?,
            lock_prune_interval_seconds: parse_or(
                &lookup,
                "LOCK_PRUNE_INTERVAL_SECONDS",
                defaults.lock_prune_interval_seconds,
            )?,
        })
    }

    pub fn game_rules(&self) -> GameRules {
        GameRules::new(DEFAULT_WORD_LENGTH, self.max_attempts, self.start_policy)
    }

    /// The embedded list unless `WORDS_FILE` points somewhere else
    pub fn load_word_bank(&self) -> anyhow::Result<WordBank> {
        match &self.words_file {
            Some(path) => WordBank::from_file(path, DEFAULT_WORD_LENGTH),
            None => Ok(WordBank::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            start_policy: StartPolicy::Reject,
            words_file: None,
            leaderboard_size: 10,
            lock_prune_interval_seconds: 300,
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: err.to_string(),
        }),
        None => Ok(default),
    }
}
