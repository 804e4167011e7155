//! Graph construction from a word sequence.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::{Analyzer, PipelineAnalyzer, fold_case};
use crate::error::{Result, WordGraphError};
use crate::graph::word_graph::WordGraph;

/// Builds a [`WordGraph`] from text.
///
/// The builder owns the analyzer that turns raw text into words; the default
/// one extracts `[A-Za-z]+` runs and case-folds them.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    analyzer: PipelineAnalyzer,
}

impl GraphBuilder {
    /// Create a builder with the default word analyzer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that uses a custom analyzer.
    pub fn with_analyzer(analyzer: PipelineAnalyzer) -> Self {
        GraphBuilder { analyzer }
    }

    /// Build the graph for an already tokenized word sequence.
    ///
    /// Words are case-folded here, so callers may pass tokens with their
    /// original spelling. Each consecutive pair adds one to the weight of its
    /// edge. A single word yields a one-node graph; no words yield an empty one.
    pub fn build<S: AsRef<str>>(words: &[S]) -> WordGraph {
        let mut graph = WordGraph::new();
        let folded: Vec<String> = words.iter().map(|w| fold_case(w.as_ref())).collect();

        if let [only] = folded.as_slice() {
            graph.add_node(only);
        }

        for pair in folded.windows(2) {
            let current = graph.add_node(&pair[0]);
            let next = graph.add_node(&pair[1]);
            let weight = graph.add_adjacency(current, next);
            if weight > 1 {
                debug!("edge {} -> {} now has weight {weight}", pair[0], pair[1]);
            }
        }

        info!(
            "built word graph from {} words: {} nodes, {} edges",
            folded.len(),
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Tokenize `text` and build its graph.
    pub fn build_text(&self, text: &str) -> Result<WordGraph> {
        let words = self.analyzer.words(text)?;
        if words.is_empty() {
            warn!("source text contains no words, graph is empty");
        }
        Ok(Self::build(&words))
    }

    /// Read a text file and build its graph.
    pub fn build_file<P: AsRef<Path>>(&self, path: P) -> Result<WordGraph> {
        let path = path.as_ref();
        info!("reading source text from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| WordGraphError::io(e, path))?;
        self.build_text(&text)
    }
}

impl WordGraph {
    /// Build a graph from raw text with the default analyzer.
    pub fn from_text(text: &str) -> Result<Self> {
        GraphBuilder::new().build_text(text)
    }
}
