mod words;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::fs;

use crate::game::scramble::can_scramble;

pub use words::BUNDLED_WORDS;

/// Immutable, ordered list of distinct candidate words.
///
/// Cloning is cheap: every game started from the same pool shares one
/// allocation.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Arc<[String]>,
}

impl WordPool {
    /// Build a pool from raw words. Words are trimmed, blanks are dropped and
    /// duplicates are removed keeping the first occurrence.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self {
            words: words.into(),
        }
    }

    /// The built-in word list
    pub fn bundled() -> Self {
        Self::new(BUNDLED_WORDS.iter().copied())
    }

    /// Load a newline-separated word file. Lines starting with `#` are
    /// comments. Words that cannot be scrambled are skipped.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read word list {}", path.display()))?;

        let mut skipped = 0usize;
        let words: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && !word.starts_with('#'))
            .filter(|word| {
                if can_scramble(word) {
                    true
                } else {
                    tracing::warn!("Skipping word '{}': nothing to scramble", word);
                    skipped += 1;
                    false
                }
            })
            .collect();

        let pool = Self::new(words);
        tracing::info!(
            "Loaded {} words from {} ({} skipped)",
            pool.len(),
            path.display(),
            skipped
        );

        Ok(pool)
    }

    /// Get the word at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words in the pool
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
