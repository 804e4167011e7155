//! Read-only queries over a [`WordGraph`](crate::graph::WordGraph).
//!
//! - [`bridge`] - words that sit between two given words
//! - [`generate`] - rewriting text by splicing in bridge words
//! - [`path`] - minimum-weight paths (Dijkstra)
//! - [`walk`] - random walks that stop on a dead end or a repeated edge
//!
//! Queries that use randomness take the generator as an argument, so a seeded
//! generator reproduces the same output.

pub mod bridge;
pub mod generate;
pub mod path;
pub mod walk;

pub use bridge::bridge_words;
pub use generate::TextGenerator;
pub use path::{Path, ShortestPathEngine};
pub use walk::{RandomWalker, StopReason, Walk};
