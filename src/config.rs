//! Configuration for graph construction and randomized queries.
//!
//! # Examples
//!
//! ```
//! use wordgraph::config::WordGraphConfig;
//!
//! let config = WordGraphConfig::default();
//! assert_eq!(config.token_pattern, "[A-Za-z]+");
//! assert!(config.seed.is_none());
//!
//! let seeded = WordGraphConfig::default().with_seed(42);
//! assert_eq!(seeded.seed, Some(42));
//! ```

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::analysis::PipelineAnalyzer;
use crate::analysis::tokenizer::regex::{RegexTokenizer, WORD_PATTERN};
use crate::error::{Result, WordGraphError};

/// Settings shared by the library entry points and the CLI.
///
/// Missing fields in a JSON config file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGraphConfig {
    /// Regex describing one word of source text.
    pub token_pattern: String,
    /// Seed for bridge-word choice and random walks. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for WordGraphConfig {
    fn default() -> Self {
        Self {
            token_pattern: WORD_PATTERN.to_string(),
            seed: None,
        }
    }
}

impl WordGraphConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| WordGraphError::io(e, path))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.token_pattern.is_empty() {
            return Err(WordGraphError::invalid_config("token_pattern must not be empty"));
        }
        let tokenizer = RegexTokenizer::with_pattern(&self.token_pattern)
            .map_err(|e| WordGraphError::invalid_config(e.to_string()))?;
        if tokenizer.matches_empty() {
            return Err(WordGraphError::invalid_config(format!(
                "token_pattern {:?} matches the empty string",
                self.token_pattern
            )));
        }
        Ok(())
    }

    /// The tokenizer described by `token_pattern`.
    pub fn tokenizer(&self) -> Result<RegexTokenizer> {
        RegexTokenizer::with_pattern(&self.token_pattern)
    }

    /// The graph-construction analyzer described by `token_pattern`.
    pub fn analyzer(&self) -> Result<PipelineAnalyzer> {
        PipelineAnalyzer::with_pattern(&self.token_pattern)
    }

    /// A random generator, seeded from `seed` when set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
