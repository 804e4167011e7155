//! Output formatting for CLI commands.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordGraphArgs};
use crate::error::Result;
use crate::graph::{Edge, GraphStats};
use crate::query::{Path, StopReason};

/// Result structure for `show`.
#[derive(Debug, Serialize)]
pub struct GraphSummary<'g> {
    pub stats: GraphStats,
    pub edges: Vec<Edge<'g>>,
    pub dot_file: Option<String>,
}

/// Result structure for `bridge`.
#[derive(Debug, Serialize)]
pub struct BridgeResult {
    pub word1: String,
    pub word2: String,
    /// `None` when either word is not in the graph.
    pub bridge_words: Option<Vec<String>>,
}

/// Result structure for `generate`.
#[derive(Debug, Serialize)]
pub struct GeneratedText {
    pub input: String,
    pub output: String,
}

/// Result structure for a single shortest-path query.
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub path: Option<Path>,
    /// Why no path was found.
    pub reason: Option<String>,
    pub dot_file: Option<String>,
}

/// Result structure for shortest paths from one word to all others.
#[derive(Debug, Serialize)]
pub struct PathsFromResult {
    pub from: String,
    pub paths: Vec<Path>,
}

/// Result structure for `walk`.
#[derive(Debug, Serialize)]
pub struct WalkResult {
    pub words: Vec<String>,
    pub stop_reason: Option<StopReason>,
    pub saved_to: Option<String>,
}

impl fmt::Display for GraphSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;
        writeln!(f, "Nodes: {}", stats.nodes)?;
        writeln!(f, "Edges: {}", stats.edges)?;
        writeln!(f, "Total weight: {}", stats.total_weight)?;
        writeln!(f, "Max edge weight: {}", stats.max_weight)?;
        writeln!(f, "Self loops: {}", stats.self_loops)?;
        write!(f, "Dead ends: {}", stats.dead_ends)?;
        if let Some(dot) = &self.dot_file {
            write!(f, "\nDOT graph written to {dot}")?;
        } else {
            for edge in &self.edges {
                write!(f, "\n  {} -> {} ({})", edge.source, edge.target, edge.weight)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for BridgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w1, w2) = (&self.word1, &self.word2);
        match self.bridge_words.as_deref() {
            None => write!(f, "No \"{w1}\" or \"{w2}\" in the graph!"),
            Some([]) => write!(f, "No bridge words from \"{w1}\" to \"{w2}\"!"),
            Some(words) => write!(
                f,
                "The bridge words from \"{w1}\" to \"{w2}\" are: {}.",
                words.join(", ")
            ),
        }
    }
}

impl fmt::Display for GeneratedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generated text: {}", self.output)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                writeln!(
                    f,
                    "Shortest path from \"{}\" to \"{}\": {path}",
                    self.from, self.to
                )?;
                write!(f, "Path weight: {}", path.weight)?;
                if let Some(dot) = &self.dot_file {
                    write!(f, "\nHighlighted DOT graph written to {dot}")?;
                }
                Ok(())
            }
            None => write!(
                f,
                "No path from \"{}\" to \"{}\": {}",
                self.from,
                self.to,
                self.reason.as_deref().unwrap_or("unreachable")
            ),
        }
    }
}

impl fmt::Display for PathsFromResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paths.is_empty() {
            return write!(f, "No word is reachable from \"{}\"", self.from);
        }
        write!(f, "Shortest paths from \"{}\":", self.from)?;
        for path in &self.paths {
            write!(f, "\n  {path} (weight {})", path.weight)?;
        }
        Ok(())
    }
}

impl fmt::Display for WalkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Random walk: {}", self.words.join(" "))?;
        if let Some(reason) = self.stop_reason {
            write!(f, "\nStopped: {reason}")?;
        }
        if let Some(saved) = &self.saved_to {
            write!(f, "\nSaved to {saved}")?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &WordGraphArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &WordGraphArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordGraphArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

/// Serialize a result for JSON output.
pub fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
