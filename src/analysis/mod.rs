// Text analysis: tokenization, frequency counting, and top-word overlap.

pub mod document;
pub mod frequency;
pub mod overlap;
pub mod tokenizer;
