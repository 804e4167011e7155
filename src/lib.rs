//! # wordgraph
//!
//! Builds a directed, weighted word-adjacency graph from a text and answers
//! questions about it.
//!
//! ## Features
//!
//! - Regex tokenization with case folding
//! - Edge weights counting how often one word directly follows another
//! - Bridge-word queries and bridge-word text generation
//! - Dijkstra shortest paths with Graphviz DOT export
//! - Random walks that stop on the first repeated edge
//!
//! ```
//! use wordgraph::prelude::*;
//!
//! let graph = WordGraph::from_text("To explore strange new worlds").unwrap();
//! assert_eq!(
//!     bridge_words(&graph, "explore", "new"),
//!     Some(vec!["strange".to_string()])
//! );
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod query;

pub mod prelude {
    pub use crate::config::WordGraphConfig;
    pub use crate::error::{Result, WordGraphError};
    pub use crate::graph::{GraphBuilder, HighlightView, WordGraph, to_dot};
    pub use crate::query::{
        Path, RandomWalker, ShortestPathEngine, StopReason, TextGenerator, bridge_words,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
