// Tokenizer: turns raw text into uppercase alphanumeric tokens.
//
// Anything outside ASCII letters, ASCII digits and whitespace is replaced
// with a space before splitting, so "don't" becomes two tokens (DON, T) and
// accented letters act as separators.

use std::sync::OnceLock;

use regex_lite::Regex;

fn non_alphanumeric() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static pattern compiles"))
}

/// Split text into uppercase tokens.
///
/// Empty or punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = non_alphanumeric().replace_all(text, " ");
    cleaned
        .to_uppercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
