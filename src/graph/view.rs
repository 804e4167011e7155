//! Highlight overlay on top of an immutable [`WordGraph`].

use ahash::AHashSet;
use serde::Serialize;

use crate::graph::word_graph::{NodeId, WordGraph};

/// An edge as seen through a [`HighlightView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeView<'g> {
    pub source: &'g str,
    pub target: &'g str,
    pub weight: u64,
    pub highlighted: bool,
}

/// A borrowed graph plus a set of highlighted edges.
///
/// Renderers draw from the view rather than from the graph, so marking the
/// edges of a path never copies or mutates the canonical graph. Each caller
/// builds its own view.
///
/// ```
/// use wordgraph::graph::{GraphBuilder, HighlightView};
///
/// let graph = GraphBuilder::build(&["a", "b", "c"]);
/// let view = HighlightView::for_path(&graph, &["a", "b"]);
/// let flags: Vec<bool> = view.edges().map(|e| e.highlighted).collect();
/// assert_eq!(flags, vec![true, false]);
/// ```
#[derive(Debug, Clone)]
pub struct HighlightView<'g> {
    graph: &'g WordGraph,
    highlighted: AHashSet<(NodeId, NodeId)>,
}

impl<'g> HighlightView<'g> {
    /// A view with nothing highlighted.
    pub fn new(graph: &'g WordGraph) -> Self {
        HighlightView {
            graph,
            highlighted: AHashSet::new(),
        }
    }

    /// A view highlighting every edge between consecutive words of `words`.
    pub fn for_path<S: AsRef<str>>(graph: &'g WordGraph, words: &[S]) -> Self {
        let mut view = Self::new(graph);
        for pair in words.windows(2) {
            view.highlight(pair[0].as_ref(), pair[1].as_ref());
        }
        view
    }

    /// Highlight the edge `source → target`. Returns `false` when the graph
    /// has no such edge, in which case nothing is marked.
    pub fn highlight(&mut self, source: &str, target: &str) -> bool {
        let (Some(s), Some(t)) = (self.graph.node_id(source), self.graph.node_id(target)) else {
            return false;
        };
        if !self.graph.has_edge(s, t) {
            return false;
        }
        self.highlighted.insert((s, t));
        true
    }

    /// Whether the edge between two node ids is highlighted.
    pub fn is_highlighted(&self, source: NodeId, target: NodeId) -> bool {
        self.highlighted.contains(&(source, target))
    }

    /// Number of highlighted edges.
    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g WordGraph {
        self.graph
    }

    /// Every edge of the graph with its highlight flag.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'g>> + '_ {
        let graph = self.graph;
        (0..graph.node_count()).flat_map(move |source| {
            graph.successors(source).iter().map(move |&target| EdgeView {
                source: graph.word(source),
                target: graph.word(target),
                weight: graph.edge_weight(source, target).unwrap_or(0),
                highlighted: self.is_highlighted(source, target),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_highlight_does_not_touch_graph() {
        let graph = GraphBuilder::build(&["a", "b", "c", "a"]);
        let before: Vec<_> = graph.edges().map(|e| (e.source, e.target, e.weight)).collect();

        let mut view = HighlightView::new(&graph);
        assert!(view.highlight("A", "b"));
        assert!(!view.highlight("b", "a"));
        assert!(!view.highlight("x", "a"));
        assert_eq!(view.highlighted_count(), 1);

        let after: Vec<_> = graph.edges().map(|e| (e.source, e.target, e.weight)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_for_path_marks_consecutive_pairs() {
        let graph = GraphBuilder::build(&["a", "b", "c", "a"]);
        let view = HighlightView::for_path(&graph, &["b", "c", "a"]);

        let flagged: Vec<_> = view
            .edges()
            .filter(|e| e.highlighted)
            .map(|e| (e.source, e.target))
            .collect();
        assert_eq!(flagged, vec![("b", "c"), ("c", "a")]);
        assert_eq!(view.edges().count(), graph.edge_count());
    }

    #[test]
    fn test_independent_views() {
        let graph = GraphBuilder::build(&["a", "b", "c"]);
        let first = HighlightView::for_path(&graph, &["a", "b"]);
        let second = HighlightView::for_path(&graph, &["b", "c"]);
        assert!(first.is_highlighted(0, 1));
        assert!(!second.is_highlighted(0, 1));
        assert!(second.is_highlighted(1, 2));
    }
}
