//! Command line argument parsing for the wordgraph CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordgraph - query the word-adjacency graph of a text file
#[derive(Parser, Debug, Clone)]
#[command(name = "wordgraph")]
#[command(about = "Build a directed word graph from a text file and query it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordGraphArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for random choices (overrides the config file)
    #[arg(long, env = "WORDGRAPH_SEED")]
    pub seed: Option<u64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordGraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the graph: statistics and every weighted edge
    Show(ShowArgs),

    /// Query the bridge words between two words
    Bridge(BridgeArgs),

    /// Rewrite a line of text by inserting bridge words
    Generate(GenerateArgs),

    /// Shortest path between two words, or from one word to all others
    Path(PathArgs),

    /// Random walk from a random word
    Walk(WalkArgs),

    /// Menu-driven interactive session
    Interactive(InteractiveArgs),
}

/// Arguments for showing the graph
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Write a Graphviz DOT file instead of listing edges
    #[arg(long, value_name = "DOT_FILE")]
    pub dot: Option<PathBuf>,
}

/// Arguments for bridge-word queries
#[derive(Parser, Debug, Clone)]
pub struct BridgeArgs {
    /// Source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// First word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// Second word
    #[arg(value_name = "WORD2")]
    pub word2: String,
}

/// Arguments for text generation
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Text to rewrite
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for shortest-path queries
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Start word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// Target word (omit to list paths to every reachable word)
    #[arg(value_name = "WORD2")]
    pub word2: Option<String>,

    /// Write a Graphviz DOT file with the path highlighted
    #[arg(long, value_name = "DOT_FILE", requires = "word2")]
    pub dot: Option<PathBuf>,
}

/// Arguments for random walks
#[derive(Parser, Debug, Clone)]
pub struct WalkArgs {
    /// Source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Save the walked words to a text file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the interactive session
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Source text file
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
