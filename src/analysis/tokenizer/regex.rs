//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, WordGraphError};

/// Pattern for a word: a maximal run of ASCII letters.
pub const WORD_PATTERN: &str = r"[A-Za-z]+";

/// A regex-based tokenizer that extracts every match of its pattern as a token.
///
/// The default pattern is [`WORD_PATTERN`]; digits, punctuation, whitespace
/// and newlines never become part of a token.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the word pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| WordGraphError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether the pattern accepts the empty string.
    pub fn matches_empty(&self) -> bool {
        self.pattern.is_match("")
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .filter(|(_, mat)| !mat.as_str().is_empty())
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_separators_split_words() {
        let tokenizer = RegexTokenizer::default();
        let texts: Vec<String> = tokenizer
            .tokenize("well-known\nR2D2 isn't\r\n42")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["well", "known", "R", "D", "isn", "t"]);
    }

    #[test]
    fn test_case_is_preserved() {
        let tokenizer = RegexTokenizer::default();
        let texts: Vec<String> = tokenizer
            .tokenize("To Seek OUT")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(texts, vec!["To", "Seek", "OUT"]);
    }

    #[test]
    fn test_no_words() {
        let tokenizer = RegexTokenizer::default();
        assert_eq!(tokenizer.tokenize("123 ... !?").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexTokenizer::with_pattern("[a-z");
        assert!(matches!(result, Err(WordGraphError::Analysis(_))));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
        assert_eq!(RegexTokenizer::default().pattern(), WORD_PATTERN);
        assert!(!RegexTokenizer::default().matches_empty());
        assert!(RegexTokenizer::with_pattern("a*").unwrap().matches_empty());
    }
}
