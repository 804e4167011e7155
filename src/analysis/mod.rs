//! Text analysis for graph construction.
//!
//! Source text flows through a small pipeline before it reaches the graph:
//!
//! ```text
//! raw text → RegexTokenizer ([A-Za-z]+) → LowercaseFilter → words
//! ```
//!
//! Tokenization keeps the original case. Case folding is a separate stage so
//! that callers which need the original spelling (e.g. echoing user input) can
//! stop after the tokenizer.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;

/// Case-fold a single word for graph identity comparison.
///
/// Every lookup into a [`WordGraph`](crate::graph::WordGraph) goes through this
/// function so that `"To"`, `"TO"` and `"to"` name the same node.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Extract the ordered word sequence of `text`, preserving case.
///
/// Words are maximal runs of ASCII letters; everything else separates words.
///
/// ```
/// use wordgraph::analysis::tokenize;
///
/// let words = tokenize("To @ explore strange new worlds, 2 seek");
/// assert_eq!(words, vec!["To", "explore", "strange", "new", "worlds", "seek"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    RegexTokenizer::default()
        .tokenize(text)
        .map(|tokens| tokens.map(|token| token.text).collect())
        .unwrap_or_default()
}
