// lexoverlap: word-frequency profiles and lexical overlap between documents
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline: text analysis, corpus orchestration, and reporting.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod output;
