//! Minimum-weight paths between two words.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordGraphError};
use crate::graph::{HighlightView, NodeId, WordGraph};

/// A path through the graph together with its total edge weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Visited words, source first and target last.
    pub words: Vec<String>,
    /// Sum of the weights of the traversed edges.
    pub weight: u64,
}

impl Path {
    /// Number of words on the path.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the path has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consecutive word pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.words
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// A view of `graph` with this path's edges highlighted.
    pub fn highlight<'g>(&self, graph: &'g WordGraph) -> HighlightView<'g> {
        HighlightView::for_path(graph, &self.words)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

/// Dijkstra shortest-path search over a [`WordGraph`].
///
/// Edge weights are adjacency counts (always at least 1), so every path cost
/// is positive and the greedy settle order is exact. When several paths share
/// the minimum weight, any one of them may be returned.
///
/// ```
/// use wordgraph::graph::WordGraph;
/// use wordgraph::query::ShortestPathEngine;
///
/// let graph = WordGraph::from_text("a b c a c").unwrap();
/// let engine = ShortestPathEngine::new(&graph);
/// let path = engine.shortest_path("A", "c").unwrap();
/// assert_eq!(path.words, vec!["a", "c"]);
/// assert_eq!(path.weight, 1);
/// assert!(engine.shortest_path("a", "missing").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'g> {
    graph: &'g WordGraph,
}

impl<'g> ShortestPathEngine<'g> {
    /// Create an engine over `graph`.
    pub fn new(graph: &'g WordGraph) -> Self {
        ShortestPathEngine { graph }
    }

    /// The shortest path from `from` to `to`, or `None` when either word is
    /// unknown or `to` cannot be reached.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<Path> {
        self.find(from, to).ok()
    }

    /// Like [`shortest_path`](Self::shortest_path) but reports why no path was
    /// returned: [`WordGraphError::UnknownWord`] or
    /// [`WordGraphError::Unreachable`].
    pub fn find(&self, from: &str, to: &str) -> Result<Path> {
        let graph = self.graph;
        let source = graph
            .node_id(from)
            .ok_or_else(|| WordGraphError::unknown_word(from))?;
        let target = graph
            .node_id(to)
            .ok_or_else(|| WordGraphError::unknown_word(to))?;

        if source == target {
            return Ok(Path {
                words: vec![graph.word(source).to_string()],
                weight: 0,
            });
        }

        let tree = self.dijkstra(source, Some(target));
        let path = tree
            .path_to(graph, target)
            .ok_or_else(|| WordGraphError::unreachable(graph.word(source), graph.word(target)))?;
        debug!("shortest path {path} (weight {})", path.weight);
        Ok(path)
    }

    /// Shortest paths from `from` to every other reachable word, in node order.
    pub fn paths_from(&self, from: &str) -> Result<Vec<Path>> {
        let graph = self.graph;
        let source = graph
            .node_id(from)
            .ok_or_else(|| WordGraphError::unknown_word(from))?;
        let tree = self.dijkstra(source, None);

        Ok((0..graph.node_count())
            .filter(|&id| id != source)
            .filter_map(|id| tree.path_to(graph, id))
            .collect())
    }

    /// Settle nodes in order of tentative distance until `stop_at` is settled
    /// or every reachable node is.
    fn dijkstra(&self, source: NodeId, stop_at: Option<NodeId>) -> ShortestPathTree {
        let graph = self.graph;
        let n = graph.node_count();
        let mut distance: Vec<Option<u64>> = vec![None; n];
        let mut predecessor: Vec<Option<NodeId>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier = BinaryHeap::new();

        distance[source] = Some(0);
        frontier.push(Reverse((0u64, source)));

        while let Some(Reverse((dist, node))) = frontier.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;
            if Some(node) == stop_at {
                break;
            }

            for &next in graph.successors(node) {
                if settled[next] {
                    continue;
                }
                let weight = graph.edge_weight(node, next).unwrap_or(0);
                let candidate = dist + weight;
                if distance[next].is_none_or(|current| candidate < current) {
                    distance[next] = Some(candidate);
                    predecessor[next] = Some(node);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        ShortestPathTree {
            source,
            distance,
            predecessor,
        }
    }
}

/// Distances and predecessor links produced by one Dijkstra run.
struct ShortestPathTree {
    source: NodeId,
    distance: Vec<Option<u64>>,
    predecessor: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    fn path_to(&self, graph: &WordGraph, target: NodeId) -> Option<Path> {
        let weight = self.distance[target]?;
        let mut ids = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor[current]?;
            ids.push(current);
        }
        ids.reverse();

        Some(Path {
            words: ids.into_iter().map(|id| graph.word(id).to_string()).collect(),
            weight,
        })
    }
}
