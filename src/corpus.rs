// Corpus runner: analyzes every input, then compares every pair.
//
// The run moves through four states in order:
// 1. Collecting: analyze each source, keeping successes and recording failures
// 2. Pairing: compare every unordered pair of analyzed documents
// 3. Ranking: stable sort of pairs by descending common-word count
// 4. Reporting: hand the finished CorpusReport to the caller for display
//
// With fewer than two analyzed documents the run stops after collecting.

use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::analysis::document::{analyze_file, AnalysisError, DocumentAnalysis};
use crate::analysis::frequency::FrequencyCounter;
use crate::analysis::overlap::{self, PairSimilarity};
use crate::config::Config;

/// Where the runner is in its pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Collecting,
    Pairing,
    Ranking,
    Reporting,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Collecting => "collecting",
            RunState::Pairing => "pairing",
            RunState::Ranking => "ranking",
            RunState::Reporting => "reporting",
        };
        f.write_str(name)
    }
}

/// A source that was excluded from the analysis.
#[derive(Debug, Clone)]
pub struct SkippedSource {
    pub path: String,
    pub reason: String,
}

impl From<&AnalysisError> for SkippedSource {
    fn from(err: &AnalysisError) -> Self {
        Self {
            path: err.path().display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    /// Successfully analyzed documents, in input order
    pub documents: Vec<DocumentAnalysis>,
    /// Sources that could not be read
    pub skipped: Vec<SkippedSource>,
    /// Every pair, ranked by descending common-word count
    pub pairs: Vec<PairSimilarity>,
}

impl CorpusReport {
    /// The highest-ranked pair.
    pub fn most_similar(&self) -> Option<&PairSimilarity> {
        self.pairs.first()
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Fewer than two documents survived collection
    Halted {
        analyzed: Vec<DocumentAnalysis>,
        skipped: Vec<SkippedSource>,
    },
    Completed(CorpusReport),
}

pub struct CorpusRunner {
    config: Config,
    counter: FrequencyCounter,
    state: RunState,
}

impl CorpusRunner {
    pub fn new(config: Config) -> Self {
        let counter = config.frequency_counter();
        Self {
            config,
            counter,
            state: RunState::Collecting,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn advance(&mut self, next: RunState) {
        info!(from = %self.state, to = %next, "Corpus run state change");
        self.state = next;
    }

    /// Run the whole pipeline. Each call starts again from collecting.
    pub fn run(&mut self) -> RunOutcome {
        self.state = RunState::Collecting;
        let (documents, skipped) = self.collect();

        if documents.len() < 2 {
            info!(
                analyzed = documents.len(),
                skipped = skipped.len(),
                "Not enough documents to compare"
            );
            return RunOutcome::Halted {
                analyzed: documents,
                skipped,
            };
        }

        self.advance(RunState::Pairing);
        let mut pairs = pair_all(&documents);

        self.advance(RunState::Ranking);
        rank_pairs(&mut pairs);

        self.advance(RunState::Reporting);
        RunOutcome::Completed(CorpusReport {
            documents,
            skipped,
            pairs,
        })
    }

    fn collect(&self) -> (Vec<DocumentAnalysis>, Vec<SkippedSource>) {
        let mut documents = Vec::new();
        let mut skipped = Vec::new();

        let pb = ProgressBar::new(self.config.paths.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("  Analyzing [{bar:30}] {pos}/{len}") {
            pb.set_style(style);
        }

        for path in &self.config.paths {
            match analyze_file(path, &self.counter) {
                Ok(doc) => documents.push(doc),
                Err(e) => {
                    info!(path = %path.display(), error = %e, "Skipping unreadable document");
                    skipped.push(SkippedSource::from(&e));
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            analyzed = documents.len(),
            skipped = skipped.len(),
            "Collection finished"
        );

        (documents, skipped)
    }
}

/// Compare every unordered pair `(i, j)` with `i < j`, in input order.
pub fn pair_all(documents: &[DocumentAnalysis]) -> Vec<PairSimilarity> {
    let mut pairs = Vec::with_capacity(documents.len() * documents.len().saturating_sub(1) / 2);
    for (i, first) in documents.iter().enumerate() {
        for second in &documents[i + 1..] {
            if let Some(pair) = overlap::compare(Some(first), Some(second)) {
                pairs.push(pair);
            }
        }
    }
    pairs
}

/// Sort by descending common-word count. Ties keep their pairing order.
pub fn rank_pairs(pairs: &mut [PairSimilarity]) {
    pairs.sort_by(|a, b| b.common_count.cmp(&a.common_count));
}
