//! The word-adjacency graph and its construction.
//!
//! A [`WordGraph`] has one node per distinct (case-folded) word and one edge
//! `u → v` per ordered pair of words that appear next to each other in the
//! source text. The edge weight counts how often that adjacency occurs.
//!
//! ```
//! use wordgraph::graph::GraphBuilder;
//!
//! let graph = GraphBuilder::new().build_text("new life and new civilizations").unwrap();
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.weight("new", "life"), Some(1));
//! assert_eq!(graph.weight("life", "new"), None);
//! ```
//!
//! The graph is read-only once built. Path highlighting is layered on top with
//! a [`HighlightView`] instead of touching the graph itself.

pub mod builder;
pub mod dot;
pub mod view;
pub mod word_graph;

pub use builder::GraphBuilder;
pub use dot::to_dot;
pub use view::{EdgeView, HighlightView};
pub use word_graph::{Edge, GraphStats, NodeId, WordGraph};
