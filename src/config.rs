use std::path::PathBuf;

use anyhow::Result;

use crate::analysis::frequency::{FrequencyCounter, StopWords, DEFAULT_TOP_N};

/// Inputs analyzed when no paths are given on the command line.
pub const DEFAULT_SOURCES: [&str; 5] = [
    "textbook1.txt",
    "textbook2.txt",
    "textbook3.txt",
    "textbook4.txt",
    "textbook5.txt",
];

/// Run configuration, assembled from command-line flags.
///
/// There is no config file and no environment lookup: everything the run
/// needs is passed in explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents to analyze, in order
    pub paths: Vec<PathBuf>,
    /// How many top words to keep per document (default 15)
    pub top_n: usize,
    /// Stop words added on top of the default set
    pub extra_stop_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: DEFAULT_SOURCES.iter().map(PathBuf::from).collect(),
            top_n: DEFAULT_TOP_N,
            extra_stop_words: Vec::new(),
        }
    }
}

impl Config {
    /// Default settings over the given paths. An empty list keeps the
    /// default sources.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        let mut config = Self::default();
        if !paths.is_empty() {
            config.paths = paths;
        }
        config
    }

    /// Reject settings that would make the run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            anyhow::bail!("--top must be at least 1");
        }
        if self.paths.is_empty() {
            anyhow::bail!("No input documents given");
        }
        Ok(())
    }

    /// Build the frequency counter these settings describe.
    pub fn frequency_counter(&self) -> FrequencyCounter {
        FrequencyCounter::new(self.top_n, StopWords::with_extra(&self.extra_stop_words))
    }
}
