// Jaccard similarity over two documents' top-word sets.
//
//   jaccard = |S1 ∩ S2| / |S1 ∪ S2|
//
// This gives 0.0 for disjoint sets and 1.0 for identical ones. Word counts are
// ignored: only membership in the top-N set matters.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::document::{basename, DocumentAnalysis};

/// Overlap between two analyzed documents.
#[derive(Debug, Clone)]
pub struct PairSimilarity {
    pub first: PathBuf,
    pub second: PathBuf,
    /// Top words present in both documents (alphabetical)
    pub common_words: BTreeSet<String>,
    pub common_count: usize,
    pub jaccard: f64,
}

impl PairSimilarity {
    /// Basename of the first document.
    pub fn first_name(&self) -> String {
        basename(&self.first)
    }

    /// Basename of the second document.
    pub fn second_name(&self) -> String {
        basename(&self.second)
    }

    /// Common words joined with ", ".
    pub fn common_list(&self) -> String {
        self.common_words
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Jaccard index of two word sets. Defined as 0.0 when both are empty.
pub fn jaccard(a: &BTreeSet<&str>, b: &BTreeSet<&str>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Compare two documents. Returns `None` when either side is missing.
pub fn compare(
    first: Option<&DocumentAnalysis>,
    second: Option<&DocumentAnalysis>,
) -> Option<PairSimilarity> {
    let (first, second) = (first?, second?);

    let words_a = first.word_set();
    let words_b = second.word_set();

    let common_words: BTreeSet<String> = words_a
        .intersection(&words_b)
        .map(|w| w.to_string())
        .collect();

    Some(PairSimilarity {
        first: first.source().to_path_buf(),
        second: second.source().to_path_buf(),
        common_count: common_words.len(),
        common_words,
        jaccard: jaccard(&words_a, &words_b),
    })
}
