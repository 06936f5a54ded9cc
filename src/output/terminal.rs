// Colored terminal output for document profiles and pair rankings.
//
// The render_* functions build the report text; the display_* functions
// print it to stdout. Logging goes to stderr, so the report stays clean when
// redirected to a file.

use std::fmt::Write as _;

use colored::Colorize;

use super::format_ratio;
use crate::analysis::document::DocumentAnalysis;
use crate::analysis::overlap::PairSimilarity;
use crate::corpus::{CorpusReport, SkippedSource};

/// One document's top-word table.
pub fn render_document(doc: &DocumentAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{}",
        format!(
            "=== {} ({} words after filtering) ===",
            doc.display_name(),
            doc.total_words()
        )
        .bold()
    );

    if doc.top_words().is_empty() {
        let _ = writeln!(out, "  {}", "No words left after filtering.".dimmed());
        return out;
    }

    let _ = writeln!(
        out,
        "  {:>4}  {:<20} {:>7}  {:>9}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "Count".dimmed(),
        "Frequency".dimmed(),
    );
    let _ = writeln!(out, "  {}", "-".repeat(45).dimmed());

    for (i, entry) in doc.top_words().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>4}. {:<20} {:>7}  {:>9}",
            i + 1,
            entry.word,
            entry.count,
            format_ratio(entry.normalized),
        );
    }
    out
}

/// The ranked pair list.
pub fn render_pairs(pairs: &[PairSimilarity]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{}",
        format!("=== Similarity Ranking ({} pairs) ===", pairs.len()).bold()
    );

    for pair in pairs {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {} <-> {}",
            pair.first_name().bold(),
            pair.second_name().bold()
        );
        let _ = writeln!(
            out,
            "    Common words: {}  |  Jaccard: {}",
            pair.common_count,
            colorize_jaccard(pair.jaccard)
        );
        if pair.common_words.is_empty() {
            let _ = writeln!(out, "    {}", "(none)".dimmed());
        } else {
            let _ = writeln!(out, "    {}", pair.common_list().dimmed());
        }
    }
    out
}

/// Highlight for the top-ranked pair.
pub fn render_most_similar(pair: &PairSimilarity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=== Most Similar Pair ===".bright_green().bold());
    let _ = writeln!(
        out,
        "  {} and {}",
        pair.first_name().bold(),
        pair.second_name().bold()
    );
    let _ = writeln!(
        out,
        "  {} common words, Jaccard similarity {}",
        pair.common_count,
        format_ratio(pair.jaccard)
    );
    if !pair.common_words.is_empty() {
        let _ = writeln!(out, "  Shared: {}", pair.common_list());
    }
    out
}

/// Sources that were excluded from the analysis.
pub fn render_skipped(skipped: &[SkippedSource]) -> String {
    let mut out = String::new();
    for source in skipped {
        let _ = writeln!(out, "{} {}", "Skipped:".yellow().bold(), source.reason);
    }
    out
}

/// A complete report: skipped sources, documents, pairs, then the top pair.
pub fn render_report(report: &CorpusReport) -> String {
    let mut out = render_skipped(&report.skipped);

    for doc in &report.documents {
        out.push_str(&render_document(doc));
    }

    out.push_str(&render_pairs(&report.pairs));

    if let Some(best) = report.most_similar() {
        out.push_str(&render_most_similar(best));
    }
    out
}

/// Why a run stopped before pairing.
pub fn render_halted(analyzed: usize, skipped: &[SkippedSource]) -> String {
    let mut out = render_skipped(skipped);
    let _ = writeln!(
        out,
        "\n{}",
        format!(
            "Need at least 2 readable documents to compare, found {analyzed}. Nothing to report."
        )
        .red()
    );
    out
}

pub fn display_report(report: &CorpusReport) {
    println!("{}", render_report(report));
}

pub fn display_halted(analyzed: usize, skipped: &[SkippedSource]) {
    print!("{}", render_halted(analyzed, skipped));
}

/// Colorize a Jaccard ratio by strength.
fn colorize_jaccard(value: f64) -> colored::ColoredString {
    let text = format_ratio(value);
    if value >= 0.5 {
        text.bright_green()
    } else if value >= 0.2 {
        text.bright_yellow()
    } else {
        text.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::frequency::FrequencyCounter;
    use crate::corpus::{pair_all, rank_pairs};

    fn sample_report() -> CorpusReport {
        let counter = FrequencyCounter::default();
        let documents = vec![
            DocumentAnalysis::from_text("books/bio.txt", "cell cell membrane", &counter),
            DocumentAnalysis::from_text("books/chem.txt", "cell atom", &counter),
            DocumentAnalysis::from_text("books/econ.txt", "market price", &counter),
        ];
        let mut pairs = pair_all(&documents);
        rank_pairs(&mut pairs);
        CorpusReport {
            documents,
            skipped: vec![SkippedSource {
                path: "gone.txt".to_string(),
                reason: "file not found: gone.txt".to_string(),
            }],
            pairs,
        }
    }

    #[test]
    fn test_document_table_rows() {
        colored::control::set_override(false);
        let doc = DocumentAnalysis::from_text(
            "books/bio.txt",
            "cell cell membrane",
            &FrequencyCounter::default(),
        );
        let text = render_document(&doc);

        assert!(text.contains("=== bio.txt (3 words after filtering) ==="));
        assert!(text.contains("1. CELL"));
        assert!(text.contains("0.6667"));
        assert!(text.contains("2. MEMBRANE"));
        assert!(text.contains("0.3333"));
    }

    #[test]
    fn test_empty_document_message() {
        colored::control::set_override(false);
        let doc = DocumentAnalysis::from_text("x/empty.txt", "the of", &FrequencyCounter::default());
        assert!(render_document(&doc).contains("No words left after filtering."));
    }

    #[test]
    fn test_pair_section_in_rank_order() {
        colored::control::set_override(false);
        let text = render_pairs(&sample_report().pairs);

        assert!(text.contains("=== Similarity Ranking (3 pairs) ==="));
        assert!(text.contains("bio.txt <-> chem.txt"));
        assert!(text.contains("Common words: 1  |  Jaccard: 0.3333"));
        assert!(text.contains("    CELL\n"));
        assert!(text.contains("(none)"));
        assert!(!text.contains("books/"));

        let top = text.find("bio.txt <-> chem.txt").unwrap();
        let tied = text.find("bio.txt <-> econ.txt").unwrap();
        assert!(top < tied);
    }

    #[test]
    fn test_report_ends_with_most_similar() {
        colored::control::set_override(false);
        let text = render_report(&sample_report());

        assert!(text.starts_with("Skipped: file not found: gone.txt"));
        let highlight = text.find("=== Most Similar Pair ===").unwrap();
        assert!(highlight > text.find("=== Similarity Ranking").unwrap());
        assert!(text.contains("  bio.txt and chem.txt\n"));
        assert!(text.contains("1 common words, Jaccard similarity 0.3333"));
        assert!(text.contains("Shared: CELL"));
    }

    #[test]
    fn test_common_words_comma_joined() {
        colored::control::set_override(false);
        let counter = FrequencyCounter::default();
        let docs = vec![
            DocumentAnalysis::from_text("a.txt", "gravity orbit mass", &counter),
            DocumentAnalysis::from_text("b.txt", "orbit mass velocity", &counter),
        ];
        let pairs = pair_all(&docs);
        let text = render_most_similar(&pairs[0]);
        assert!(text.contains("2 common words, Jaccard similarity 0.5000"));
        assert!(text.contains("Shared: MASS, ORBIT"));
    }

    #[test]
    fn test_halted_message() {
        colored::control::set_override(false);
        let skipped = vec![SkippedSource {
            path: "b.txt".to_string(),
            reason: "file not found: b.txt".to_string(),
        }];
        let text = render_halted(1, &skipped);
        assert!(text.contains("Skipped: file not found: b.txt"));
        assert!(text.contains("found 1. Nothing to report."));
    }
}
