use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Answers whether a token is a known word.
///
/// Lookups are case-sensitive; callers normalize both sides (uppercase by
/// convention) before searching.
pub trait WordMembership {
    fn contains(&self, word: &str) -> bool;
}

impl WordMembership for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl WordMembership for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<T: WordMembership + ?Sized> WordMembership for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Uppercase word list held in memory.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file with one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dictionary '{}'", path.display()))?;

        let dictionary = Self::from_words(content.lines());
        tracing::info!(
            "Loaded {} words into dictionary from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from any word source, trimming and uppercasing
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordMembership for Dictionary {
    fn contains(&self, word: &str) -> bool {
        Dictionary::contains(self, word)
    }
}
