//! Directed weighted graph of word adjacencies.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::fold_case;

/// Dense node identifier, assigned in first-seen order.
pub type NodeId = usize;

/// A directed graph whose nodes are words and whose edge weights count
/// adjacent occurrences.
///
/// Nodes keep the order in which they were first seen in the source text and
/// each successor list keeps the order in which its edges were created. Every
/// query that scans nodes or successors therefore produces a deterministic
/// order for a given text.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Node labels, indexed by [`NodeId`].
    words: Vec<String>,
    /// Label → id lookup.
    index: AHashMap<String, NodeId>,
    /// Outgoing neighbours of each node in edge-creation order.
    successors: Vec<Vec<NodeId>>,
    /// Weight of every edge. Never contains a zero.
    weights: AHashMap<(NodeId, NodeId), u64>,
}

/// A borrowed edge of a [`WordGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'g> {
    pub source: &'g str,
    pub target: &'g str,
    pub weight: u64,
}

/// Size summary of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub total_weight: u64,
    pub max_weight: u64,
    pub self_loops: usize,
    pub dead_ends: usize,
}

impl WordGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` as a node if it is not already one. `word` must already
    /// be case-folded.
    pub(crate) fn add_node(&mut self, word: &str) -> NodeId {
        if let Some(&id) = self.index.get(word) {
            return id;
        }
        let id = self.words.len();
        self.words.push(word.to_string());
        self.index.insert(word.to_string(), id);
        self.successors.push(Vec::new());
        id
    }

    /// Record one more adjacency `source → target`.
    pub(crate) fn add_adjacency(&mut self, source: NodeId, target: NodeId) -> u64 {
        let weight = self.weights.entry((source, target)).or_insert(0);
        if *weight == 0 {
            self.successors[source].push(target);
        }
        *weight += 1;
        *weight
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word, case-insensitively.
    pub fn node_id(&self, word: &str) -> Option<NodeId> {
        self.index.get(fold_case(word).as_str()).copied()
    }

    /// Whether the (case-folded) word is a node.
    pub fn contains(&self, word: &str) -> bool {
        self.node_id(word).is_some()
    }

    /// Label of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn word(&self, id: NodeId) -> &str {
        &self.words[id]
    }

    /// All node labels in first-seen order.
    pub fn nodes(&self) -> &[String] {
        &self.words
    }

    /// Outgoing neighbours of `id` in edge-creation order.
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of outgoing edges of `id`.
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.successors(id).len()
    }

    /// Weight of the edge between two node ids.
    pub fn edge_weight(&self, source: NodeId, target: NodeId) -> Option<u64> {
        self.weights.get(&(source, target)).copied()
    }

    /// Whether the edge `source → target` exists.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.weights.contains_key(&(source, target))
    }

    /// Weight of the edge between two words, looked up case-insensitively.
    pub fn weight(&self, source: &str, target: &str) -> Option<u64> {
        let source = self.node_id(source)?;
        let target = self.node_id(target)?;
        self.edge_weight(source, target)
    }

    /// Iterate over all edges, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(move |(source, targets)| {
                targets.iter().map(move |&target| Edge {
                    source: &self.words[source],
                    target: &self.words[target],
                    weight: self.weights[&(source, target)],
                })
            })
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> u64 {
        self.weights.values().sum()
    }

    /// Size summary for display.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            total_weight: self.total_weight(),
            max_weight: self.weights.values().copied().max().unwrap_or(0),
            self_loops: self.weights.keys().filter(|(s, t)| s == t).count(),
            dead_ends: self.successors.iter().filter(|s| s.is_empty()).count(),
        }
    }
}
