//! Bridge-word lookup.
//!
//! A bridge word between `w1` and `w2` is any word `m` with edges `w1 → m`
//! and `m → w2`. Only single-hop bridges are considered.

use log::debug;

use crate::graph::{NodeId, WordGraph};

/// Find the bridge words between `word1` and `word2`.
///
/// Returns `None` when either word (case-folded) is not in the graph, and
/// `Some(vec![])` when both are known but nothing bridges them. Results follow
/// the graph's node order. The two query words themselves are never reported.
///
/// ```
/// use wordgraph::graph::WordGraph;
/// use wordgraph::query::bridge_words;
///
/// let graph = WordGraph::from_text("explore strange new worlds").unwrap();
/// assert_eq!(bridge_words(&graph, "Explore", "new"), Some(vec!["strange".to_string()]));
/// assert_eq!(bridge_words(&graph, "explore", "worlds"), Some(vec![]));
/// assert_eq!(bridge_words(&graph, "sky", "new"), None);
/// ```
pub fn bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> Option<Vec<String>> {
    let source = graph.node_id(word1)?;
    let target = graph.node_id(word2)?;
    let bridges: Vec<String> = bridge_ids(graph, source, target)
        .map(|id| graph.word(id).to_string())
        .collect();
    debug!(
        "bridge words {} -> {}: {:?}",
        graph.word(source),
        graph.word(target),
        bridges
    );
    Some(bridges)
}

/// Bridge node ids between two known nodes, by a linear scan over all nodes.
pub(crate) fn bridge_ids(
    graph: &WordGraph,
    source: NodeId,
    target: NodeId,
) -> impl Iterator<Item = NodeId> + '_ {
    (0..graph.node_count()).filter(move |&m| {
        m != source && m != target && graph.has_edge(source, m) && graph.has_edge(m, target)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_multiple_bridges_in_node_order() {
        let graph = GraphBuilder::build(&["a", "y", "b", "a", "x", "b"]);
        assert_eq!(
            bridge_words(&graph, "a", "b"),
            Some(vec!["y".to_string(), "x".to_string()])
        );
    }

    #[test]
    fn test_endpoints_are_not_bridges() {
        // a -> a -> b gives edges a->a and a->b; `a` must not bridge itself.
        let graph = GraphBuilder::build(&["a", "a", "b", "b"]);
        assert_eq!(bridge_words(&graph, "a", "b"), Some(vec![]));
    }

    #[test]
    fn test_same_word_twice() {
        let graph = GraphBuilder::build(&["a", "m", "a"]);
        assert_eq!(bridge_words(&graph, "a", "a"), Some(vec!["m".to_string()]));
    }

    #[test]
    fn test_unknown_words() {
        let graph = GraphBuilder::build(&["a", "b"]);
        assert_eq!(bridge_words(&graph, "a", "zzz"), None);
        assert_eq!(bridge_words(&graph, "zzz", "b"), None);
        assert_eq!(bridge_words(&graph, "", ""), None);
    }
}
