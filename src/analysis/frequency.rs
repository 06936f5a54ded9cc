// Frequency counter: stop-word filtering, counting, and top-N selection.
//
// Counting is a single pass into `WordCounts`, which remembers the order in
// which each word was first seen. Top-N selection is a stable sort on that
// order, so equal counts keep first-occurrence order.

use std::collections::{HashMap, HashSet};

/// Stop words excluded from every frequency ranking unless overridden.
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// Default number of top words kept per document.
pub const DEFAULT_TOP_N: usize = 15;

/// An immutable, pre-uppercased set of stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

impl StopWords {
    /// Build a stop-word set. Words are uppercased on the way in.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The default set plus `extra`.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = Self::default();
        for word in extra {
            let word = word.as_ref().trim().to_uppercase();
            if !word.is_empty() {
                stop_words.words.insert(word);
            }
        }
        stop_words
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_uppercase())
    }
}

/// Word → count mapping that preserves first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordCounts {
    /// Count every token in one pass.
    pub fn count<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Self::default();
        for token in tokens {
            counts.add(token.into());
        }
        counts
    }

    fn add(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The `n` most frequent words, descending by count, ties in
    /// first-occurrence order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable: equal counts stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Result of counting one document's tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyProfile {
    /// Top words in descending count order
    pub top_words: Vec<(String, usize)>,
    /// Number of tokens left after stop-word filtering
    pub total_words: usize,
}

/// Filters stop words and selects the top-N words of a token stream.
#[derive(Debug, Clone)]
pub struct FrequencyCounter {
    top_n: usize,
    stop_words: StopWords,
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N, StopWords::default())
    }
}

impl FrequencyCounter {
    pub fn new(top_n: usize, stop_words: StopWords) -> Self {
        Self { top_n, stop_words }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn count(&self, tokens: &[String]) -> FrequencyProfile {
        let counts = WordCounts::count(
            tokens
                .iter()
                .filter(|t| !self.stop_words.contains(t.as_str()))
                .map(|t| t.to_uppercase()),
        );

        FrequencyProfile {
            top_words: counts.most_common(self.top_n),
            total_words: counts.total(),
        }
    }
}
