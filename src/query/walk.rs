//! Random walks over the graph.

use std::fmt;

use ahash::AHashSet;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordGraphError};
use crate::graph::{NodeId, WordGraph};

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The current word has no outgoing edges.
    DeadEnd,
    /// The randomly chosen edge had already been traversed in this walk.
    RepeatedEdge,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::DeadEnd => write!(f, "reached a word without outgoing edges"),
            StopReason::RepeatedEdge => write!(f, "chose an edge that was already traversed"),
        }
    }
}

/// Starts random walks over a graph.
///
/// A walk begins at a uniformly random word and repeatedly follows a uniformly
/// random outgoing edge. It stops at a word without outgoing edges, or as soon
/// as the chosen edge is one it already traversed; that edge's target is not
/// emitted a second time. No edge is traversed twice, so a walk visits at most
/// `edge_count + 1` words.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordgraph::graph::WordGraph;
/// use wordgraph::query::RandomWalker;
///
/// let graph = WordGraph::from_text("one two three").unwrap();
/// let walk = RandomWalker::new(&graph).walk(&mut StdRng::seed_from_u64(3)).unwrap();
/// assert_eq!(walk.last().map(String::as_str), Some("three"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomWalker<'g> {
    graph: &'g WordGraph,
}

impl<'g> RandomWalker<'g> {
    /// Create a walker over `graph`.
    pub fn new(graph: &'g WordGraph) -> Self {
        RandomWalker { graph }
    }

    /// Run a walk to completion and return the visited words.
    ///
    /// Fails with [`WordGraphError::EmptyGraph`] if the graph has no nodes.
    pub fn walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>> {
        let mut steps = self.steps(rng)?;
        let words: Vec<String> = steps.by_ref().map(str::to_string).collect();
        debug!("random walk of {} words ended: {:?}", words.len(), steps.stop_reason());
        Ok(words)
    }

    /// Start a walk that yields one word per step, beginning with the start
    /// word. Callers can stop pulling at any time.
    pub fn steps<'r, R: Rng + ?Sized>(&self, rng: &'r mut R) -> Result<Walk<'g, 'r, R>> {
        if self.graph.is_empty() {
            return Err(WordGraphError::EmptyGraph);
        }
        let start = rng.random_range(0..self.graph.node_count());
        Ok(Walk {
            graph: self.graph,
            rng,
            current: start,
            started: false,
            traversed: AHashSet::new(),
            stop_reason: None,
        })
    }
}

/// An in-progress random walk. See [`RandomWalker::steps`].
pub struct Walk<'g, 'r, R: Rng + ?Sized> {
    graph: &'g WordGraph,
    rng: &'r mut R,
    current: NodeId,
    started: bool,
    traversed: AHashSet<(NodeId, NodeId)>,
    stop_reason: Option<StopReason>,
}

impl<R: Rng + ?Sized> Walk<'_, '_, R> {
    /// Why the walk ended, or `None` while it can still continue.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Number of edges traversed so far.
    pub fn edges_traversed(&self) -> usize {
        self.traversed.len()
    }
}

impl<'g, R: Rng + ?Sized> Iterator for Walk<'g, '_, R> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stop_reason.is_some() {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.graph.word(self.current));
        }

        let Some(&next) = self.graph.successors(self.current).choose(&mut *self.rng) else {
            self.stop_reason = Some(StopReason::DeadEnd);
            return None;
        };
        if !self.traversed.insert((self.current, next)) {
            self.stop_reason = Some(StopReason::RepeatedEdge);
            return None;
        }

        self.current = next;
        Some(self.graph.word(next))
    }
}
