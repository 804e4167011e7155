//! Bridge-word text generation.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::analysis::{RegexTokenizer, Tokenizer, fold_case};
use crate::error::{Result, WordGraphError};
use crate::graph::WordGraph;
use crate::query::bridge::bridge_ids;

/// Rewrites input text by inserting a bridge word between every adjacent pair
/// of words that has one.
///
/// For each pair `(cur, next)` the output gets `cur`, then one bridge word
/// chosen uniformly at random if any exist. The last input word is appended as
/// written. All other words, and every inserted bridge, are lowercase.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordgraph::graph::WordGraph;
/// use wordgraph::query::TextGenerator;
///
/// let graph = WordGraph::from_text("explore strange new worlds").unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let text = TextGenerator::new(&graph).generate("Explore new Worlds", &mut rng).unwrap();
/// assert_eq!(text, "explore strange new Worlds");
/// ```
#[derive(Debug, Clone)]
pub struct TextGenerator<'g> {
    graph: &'g WordGraph,
    tokenizer: RegexTokenizer,
}

impl<'g> TextGenerator<'g> {
    /// Create a generator over `graph` with the default word tokenizer.
    pub fn new(graph: &'g WordGraph) -> Self {
        Self::with_tokenizer(graph, RegexTokenizer::default())
    }

    /// Create a generator that splits input text with `tokenizer`.
    pub fn with_tokenizer(graph: &'g WordGraph, tokenizer: RegexTokenizer) -> Self {
        TextGenerator { graph, tokenizer }
    }

    /// Generate new text from `input`.
    ///
    /// Fails with [`WordGraphError::InvalidInput`] when `input` has no words.
    pub fn generate<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Result<String> {
        let words: Vec<String> = self.tokenizer.tokenize(input)?.map(|t| t.text).collect();
        let Some((last, _)) = words.split_last() else {
            return Err(WordGraphError::invalid_input(
                "input text contains no words to rewrite",
            ));
        };

        let mut output: Vec<String> = Vec::with_capacity(words.len() * 2);
        for pair in words.windows(2) {
            let current = fold_case(&pair[0]);
            let next = fold_case(&pair[1]);
            let bridge = self.pick_bridge(&current, &next, rng);
            output.push(current);
            if let Some(bridge) = bridge {
                output.push(bridge.to_string());
            }
        }
        output.push(last.clone());

        debug!("generated {} words from {} input words", output.len(), words.len());
        Ok(output.join(" "))
    }

    fn pick_bridge<R: Rng + ?Sized>(
        &self,
        current: &str,
        next: &str,
        rng: &mut R,
    ) -> Option<&'g str> {
        let graph = self.graph;
        let source = graph.node_id(current)?;
        let target = graph.node_id(next)?;
        let candidates: Vec<_> = bridge_ids(graph, source, target).collect();
        candidates.choose(rng).map(|&id| graph.word(id))
    }
}
