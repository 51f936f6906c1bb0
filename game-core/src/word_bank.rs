use anyhow::{anyhow, Context, Result};
use rand::Rng;
use std::path::Path;

/// Word list shipped with the bot
pub const DEFAULT_WORDS: &str = "\
CODE\nPLAY\nWORD\nBOTS\nGAME\nCHAT\nNOTE\nTASK\nTIME\nFIRE\n\
LAMP\nTREE\nBOOK\nKING\nQUEE\nFISH\nMOON\nSTAR\nFORK\nCOIN";

pub const DEFAULT_WORD_LENGTH: usize = 4;

/// Immutable, non-empty set of uppercase secret words of a single length.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
    word_length: usize,
}

impl WordBank {
    /// Build a bank from a newline separated list. Blank lines and `#` comments
    /// are skipped, entries that aren't `word_length` ASCII letters are dropped.
    pub fn from_word_list(word_list: &str, word_length: usize) -> Result<Self> {
        let mut words: Vec<String> = word_list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_uppercase)
            .filter(|word| is_playable(word, word_length))
            .collect();
        words.sort();
        words.dedup();

        if words.is_empty() {
            return Err(anyhow!("No words available of length {}", word_length));
        }

        Ok(Self { words, word_length })
    }

    pub fn from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let bank = Self::from_word_list(&contents, word_length)
            .with_context(|| format!("Word list {} has no usable words", path.display()))?;

        tracing::info!("Loaded {} words from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Pick a word uniformly at random
    pub fn random_word(&self) -> String {
        self.random_word_with(&mut rand::thread_rng())
    }

    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // Non-empty by construction
        let index = rng.gen_range(0..self.words.len());
        self.words[index].clone()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: {
                let mut words: Vec<String> =
                    DEFAULT_WORDS.lines().map(str::to_string).collect();
                words.sort();
                words
            },
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

fn is_playable(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.chars().all(|c| c.is_ascii_alphabetic())
}
