//! Command implementations for the wordgraph CLI.

use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::cli::args::*;
use crate::cli::interactive::{Session, absence_reason};
use crate::cli::output::*;
use crate::config::WordGraphConfig;
use crate::error::{Result, WordGraphError};
use crate::graph::{GraphBuilder, HighlightView, WordGraph, to_dot};
use crate::query::{RandomWalker, ShortestPathEngine, TextGenerator, bridge_words};

/// Execute a CLI command.
pub fn execute_command(args: WordGraphArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Show(show_args) => show_graph(show_args, &config, &args),
        Command::Bridge(bridge_args) => query_bridge(bridge_args, &config, &args),
        Command::Generate(generate_args) => generate_text(generate_args, &config, &args),
        Command::Path(path_args) => shortest_path(path_args, &config, &args),
        Command::Walk(walk_args) => random_walk(walk_args, &config, &args),
        Command::Interactive(interactive_args) => interactive(interactive_args, &config),
    }
}

/// Resolve the configuration: file first, then command line overrides.
pub fn load_config(args: &WordGraphArgs) -> Result<WordGraphConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            WordGraphConfig::load(path)?
        }
        None => WordGraphConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

/// Build the graph of a text file with the configured analyzer.
pub fn load_graph(path: &Path, config: &WordGraphConfig) -> Result<WordGraph> {
    GraphBuilder::with_analyzer(config.analyzer()?).build_file(path)
}

/// Write a text file, keeping the path in the error.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| WordGraphError::io(e, path))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Show graph statistics and edges, or export a DOT file.
fn show_graph(args: &ShowArgs, config: &WordGraphConfig, cli_args: &WordGraphArgs) -> Result<()> {
    let graph = load_graph(&args.text_file, config)?;

    let dot_file = match &args.dot {
        Some(dot_path) => {
            write_file(dot_path, &to_dot(&HighlightView::new(&graph)))?;
            Some(dot_path.to_string_lossy().to_string())
        }
        None => None,
    };

    output_result(
        &format!("Graph of {}", args.text_file.display()),
        &GraphSummary {
            stats: graph.stats(),
            edges: graph.edges().collect(),
            dot_file,
        },
        cli_args,
    )
}

/// Query the bridge words between two words.
fn query_bridge(
    args: &BridgeArgs,
    config: &WordGraphConfig,
    cli_args: &WordGraphArgs,
) -> Result<()> {
    let graph = load_graph(&args.text_file, config)?;

    output_result(
        "Bridge words",
        &BridgeResult {
            word1: args.word1.clone(),
            word2: args.word2.clone(),
            bridge_words: bridge_words(&graph, &args.word1, &args.word2),
        },
        cli_args,
    )
}

/// Rewrite a line of text with bridge words.
fn generate_text(
    args: &GenerateArgs,
    config: &WordGraphConfig,
    cli_args: &WordGraphArgs,
) -> Result<()> {
    let graph = load_graph(&args.text_file, config)?;
    let generator = TextGenerator::with_tokenizer(&graph, config.tokenizer()?);
    let mut rng = config.rng();

    output_result(
        "Generated text",
        &GeneratedText {
            input: args.text.clone(),
            output: generator.generate(&args.text, &mut rng)?,
        },
        cli_args,
    )
}

/// Shortest path between two words, or from one word to every other word.
fn shortest_path(
    args: &PathArgs,
    config: &WordGraphConfig,
    cli_args: &WordGraphArgs,
) -> Result<()> {
    let graph = load_graph(&args.text_file, config)?;
    let engine = ShortestPathEngine::new(&graph);

    let Some(to) = &args.word2 else {
        return output_result(
            "Shortest paths",
            &PathsFromResult {
                from: args.word1.clone(),
                paths: engine.paths_from(&args.word1)?,
            },
            cli_args,
        );
    };

    let (path, reason) = match engine.find(&args.word1, to) {
        Ok(path) => (Some(path), None),
        Err(e) if e.is_absent() => (None, Some(absence_reason(&e))),
        Err(e) => return Err(e),
    };

    let dot_file = match (&args.dot, &path) {
        (Some(dot_path), Some(path)) => {
            write_file(dot_path, &to_dot(&path.highlight(&graph)))?;
            Some(dot_path.to_string_lossy().to_string())
        }
        _ => None,
    };

    output_result(
        "Shortest path",
        &PathResult {
            from: args.word1.clone(),
            to: to.clone(),
            path,
            reason,
            dot_file,
        },
        cli_args,
    )
}

/// Random walk, optionally saved to a file.
fn random_walk(args: &WalkArgs, config: &WordGraphConfig, cli_args: &WordGraphArgs) -> Result<()> {
    let graph = load_graph(&args.text_file, config)?;
    let mut rng = config.rng();

    let mut steps = RandomWalker::new(&graph).steps(&mut rng)?;
    let words: Vec<String> = steps.by_ref().map(str::to_string).collect();
    let stop_reason = steps.stop_reason();

    let saved_to = match &args.output {
        Some(output) => {
            write_file(output, &words.join(" "))?;
            Some(output.to_string_lossy().to_string())
        }
        None => None,
    };

    output_result(
        "Random walk",
        &WalkResult {
            words,
            stop_reason,
            saved_to,
        },
        cli_args,
    )
}

/// Run the menu-driven session on stdin and stdout.
fn interactive(args: &InteractiveArgs, config: &WordGraphConfig) -> Result<()> {
    let graph = load_graph(&args.text_file, config)?;
    let generator = TextGenerator::with_tokenizer(&graph, config.tokenizer()?);
    let mut rng = config.rng();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&graph, generator, &mut rng, stdin.lock(), stdout.lock()).run()
}
