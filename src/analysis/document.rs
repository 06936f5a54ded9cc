// Document analysis: one word-frequency profile per input file.
//
// A DocumentAnalysis is built once from a file's text and never mutated
// afterwards. Read failures come back as a tagged AnalysisError so the
// corpus runner can decide to skip the file instead of aborting.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::frequency::FrequencyCounter;
use super::tokenizer::tokenize;

/// Why a source could not be analyzed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The path does not resolve to an existing file
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O or UTF-8 decoding failure
    #[error("could not read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnalysisError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            AnalysisError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnalysisError::ReadError {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// The path that failed.
    pub fn path(&self) -> &Path {
        match self {
            AnalysisError::NotFound { path } | AnalysisError::ReadError { path, .. } => path,
        }
    }
}

/// A single top word with its raw count and share of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// count / total filtered words (0.0 for an empty document)
    pub normalized: f64,
}

/// Word-frequency profile of one document.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    source: PathBuf,
    top_words: Vec<WordFrequency>,
    total_words: usize,
}

impl DocumentAnalysis {
    /// Analyze text that has already been loaded.
    pub fn from_text(source: impl Into<PathBuf>, text: &str, counter: &FrequencyCounter) -> Self {
        let source = source.into();
        let tokens = tokenize(text);
        let profile = counter.count(&tokens);
        let total = profile.total_words;

        let top_words = profile
            .top_words
            .into_iter()
            .map(|(word, count)| WordFrequency {
                normalized: if total > 0 {
                    count as f64 / total as f64
                } else {
                    0.0
                },
                word,
                count,
            })
            .collect::<Vec<_>>();

        debug!(
            source = %source.display(),
            tokens = tokens.len(),
            filtered = total,
            top = top_words.len(),
            "Analyzed document"
        );

        Self {
            source,
            top_words,
            total_words: total,
        }
    }

    /// Path the text was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name component of the source.
    pub fn display_name(&self) -> String {
        basename(&self.source)
    }

    /// Top words, descending by count.
    pub fn top_words(&self) -> &[WordFrequency] {
        &self.top_words
    }

    /// Number of tokens left after stop-word filtering.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// The top words as a set, for overlap computations.
    pub fn word_set(&self) -> BTreeSet<&str> {
        self.top_words.iter().map(|w| w.word.as_str()).collect()
    }
}

/// File name component of a path, falling back to the full path.
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a UTF-8 text file and analyze it.
pub fn analyze_file(
    path: impl AsRef<Path>,
    counter: &FrequencyCounter,
) -> Result<DocumentAnalysis, AnalysisError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| AnalysisError::from_io(path, e))?;

    info!(path = %path.display(), bytes = text.len(), "Read document");

    Ok(DocumentAnalysis::from_text(path, &text, counter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::frequency::StopWords;

    #[test]
    fn test_normalized_frequencies() {
        let counter = FrequencyCounter::default();
        let doc = DocumentAnalysis::from_text("a.txt", "apple apple banana the", &counter);

        assert_eq!(doc.total_words(), 3);
        assert_eq!(doc.top_words()[0].word, "APPLE");
        assert!((doc.top_words()[0].normalized - 2.0 / 3.0).abs() < 1e-9);
        assert!((doc.top_words()[1].normalized - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_has_zero_totals() {
        let doc = DocumentAnalysis::from_text("empty.txt", "The and of!", &FrequencyCounter::default());
        assert_eq!(doc.total_words(), 0);
        assert!(doc.top_words().is_empty());
        assert!(doc.word_set().is_empty());
    }

    #[test]
    fn test_top_words_capped_at_n() {
        let counter = FrequencyCounter::new(3, StopWords::default());
        let doc = DocumentAnalysis::from_text("t.txt", "one two three four five one", &counter);
        assert_eq!(doc.top_words().len(), 3);
        assert_eq!(doc.top_words()[0].word, "ONE");
        assert_eq!(doc.top_words()[0].count, 2);
        assert!(!doc.word_set().contains("FIVE"));
        assert_eq!(doc.total_words(), 6);
    }

    #[test]
    fn test_display_name_is_basename() {
        let doc = DocumentAnalysis::from_text("corpus/books/bio.txt", "cell", &FrequencyCounter::default());
        assert_eq!(doc.display_name(), "bio.txt");
    }

    #[test]
    fn test_basename_falls_back_to_full_path() {
        assert_eq!(basename(Path::new("a/b/c.txt")), "c.txt");
        assert_eq!(basename(Path::new("/")), "/");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = analyze_file("/definitely/not/here.txt", &FrequencyCounter::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound { .. }));
        assert_eq!(err.path(), Path::new("/definitely/not/here.txt"));
        assert!(err.to_string().contains("here.txt"));
    }
}
