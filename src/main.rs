use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use lexoverlap::analysis::frequency::DEFAULT_TOP_N;
use lexoverlap::config::Config;
use lexoverlap::corpus::{CorpusRunner, RunOutcome};
use lexoverlap::output;

/// lexoverlap: word-frequency profiles and lexical overlap between documents.
///
/// Reads each file, ranks its most frequent words (ignoring a small set of
/// stop words), then ranks every pair of documents by how many top words
/// they share.
#[derive(Parser)]
#[command(name = "lexoverlap", version, about)]
struct Cli {
    /// Text files to compare (default: textbook1.txt .. textbook5.txt)
    paths: Vec<PathBuf>,

    /// Number of top words kept per document
    #[arg(long = "top", default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Extra stop word to ignore (repeatable)
    #[arg(long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            top_n: self.top_n,
            extra_stop_words: self.stop_words,
            ..Config::with_paths(self.paths)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up structured logging (stderr, so the report on stdout stays clean)
    let default_filter = if cli.verbose {
        "lexoverlap=info"
    } else {
        "lexoverlap=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = cli.into_config();
    config.validate()?;

    info!(
        documents = config.paths.len(),
        top_n = config.top_n,
        "Starting corpus analysis"
    );

    let mut runner = CorpusRunner::new(config);
    match runner.run() {
        RunOutcome::Halted { analyzed, skipped } => {
            output::terminal::display_halted(analyzed.len(), &skipped);
        }
        RunOutcome::Completed(report) => output::terminal::display_report(&report),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = Cli::try_parse_from(["lexoverlap"]).unwrap().into_config();
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.paths.len(), 5);
    }

    #[test]
    fn test_cli_flags() {
        let config = Cli::try_parse_from([
            "lexoverlap",
            "--top",
            "3",
            "--stop-word",
            "is",
            "a.txt",
            "b.txt",
        ])
        .unwrap()
        .into_config();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.extra_stop_words, vec!["is".to_string()]);
        assert_eq!(config.paths, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }
}
