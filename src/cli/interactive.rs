//! Menu-driven interactive session over a loaded graph.

use std::io::{BufRead, Write};

use anyhow::Context;
use log::debug;
use rand::Rng;

use crate::cli::output::{BridgeResult, GeneratedText, GraphSummary, PathResult, PathsFromResult};
use crate::error::{Result, WordGraphError};
use crate::graph::WordGraph;
use crate::query::{RandomWalker, ShortestPathEngine, TextGenerator, bridge_words};

const MENU: &str = "\
Choose an action:
  1. Show the graph
  2. Query bridge words
  3. Generate text with bridge words
  4. Shortest path between two words
  5. Random walk
  6. Exit";

/// An interactive session reading commands from `input` and writing to `output`.
///
/// The session ends on choice `6` or when `input` is exhausted.
pub struct Session<'g, R, W, G: ?Sized> {
    graph: &'g WordGraph,
    generator: TextGenerator<'g>,
    input: R,
    output: W,
    rng: &'g mut G,
}

impl<'g, R, W, G> Session<'g, R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    pub fn new(
        graph: &'g WordGraph,
        generator: TextGenerator<'g>,
        rng: &'g mut G,
        input: R,
        output: W,
    ) -> Self {
        Session {
            graph,
            generator,
            input,
            output,
            rng,
        }
    }

    /// Run the menu loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}").context("failed to write menu")?;
            let Some(choice) = self.prompt("> ")? else {
                break;
            };
            debug!("interactive choice: {choice:?}");

            match choice.as_str() {
                "1" => self.show()?,
                "2" => self.bridge()?,
                "3" => self.generate()?,
                "4" => self.path()?,
                "5" => self.walk()?,
                "6" | "q" | "quit" | "exit" => break,
                other => {
                    self.say(&format!("Invalid choice \"{other}\", enter a number from 1 to 6."))?
                }
            }
        }
        Ok(())
    }

    /// Print `message` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("failed to write output")?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let summary = GraphSummary {
            stats: self.graph.stats(),
            edges: self.graph.edges().collect(),
            dot_file: None,
        };
        self.say(&summary.to_string())
    }

    fn bridge(&mut self) -> Result<()> {
        let Some(word1) = self.prompt("word1: ")? else {
            return Ok(());
        };
        let Some(word2) = self.prompt("word2: ")? else {
            return Ok(());
        };
        let result = BridgeResult {
            bridge_words: bridge_words(self.graph, &word1, &word2),
            word1,
            word2,
        };
        self.say(&result.to_string())
    }

    fn generate(&mut self) -> Result<()> {
        let Some(text) = self.prompt("text: ")? else {
            return Ok(());
        };
        match self.generator.generate(&text, &mut *self.rng) {
            Ok(output) => {
                let result = GeneratedText {
                    input: text,
                    output,
                };
                self.say(&result.to_string())
            }
            Err(WordGraphError::InvalidInput(msg)) => self.say(&msg),
            Err(e) => Err(e),
        }
    }

    fn path(&mut self) -> Result<()> {
        let Some(from) = self.prompt("word1: ")? else {
            return Ok(());
        };
        let Some(to) = self.prompt("word2 (empty for all words): ")? else {
            return Ok(());
        };

        let engine = ShortestPathEngine::new(self.graph);
        if to.is_empty() {
            return match engine.paths_from(&from) {
                Ok(paths) => self.say(&PathsFromResult { from, paths }.to_string()),
                Err(e) if e.is_absent() => self.say(&e.to_string()),
                Err(e) => Err(e),
            };
        }

        let (path, reason) = match engine.find(&from, &to) {
            Ok(path) => (Some(path), None),
            Err(e) if e.is_absent() => (None, Some(absence_reason(&e))),
            Err(e) => return Err(e),
        };
        let result = PathResult {
            from,
            to,
            path,
            reason,
            dot_file: None,
        };
        self.say(&result.to_string())
    }

    /// Walk one step at a time; an `s` answer stops the walk early.
    fn walk(&mut self) -> Result<()> {
        let graph = self.graph;
        let mut steps = match RandomWalker::new(graph).steps(&mut *self.rng) {
            Ok(steps) => steps,
            Err(WordGraphError::EmptyGraph) => return self.say("The graph is empty."),
            Err(e) => return Err(e),
        };

        let mut words = Vec::new();
        let mut interrupted = None;
        for word in steps.by_ref() {
            words.push(word);
            writeln!(self.output, "{word}").context("failed to write output")?;
            write!(self.output, "Enter to continue, s to stop: ")
                .context("failed to write prompt")?;
            self.output.flush().context("failed to flush output")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from input")?;
            if read == 0 {
                interrupted = Some("end of input");
                break;
            }
            if line.trim().eq_ignore_ascii_case("s") {
                interrupted = Some("stopped by user");
                break;
            }
        }

        let reason = match interrupted {
            Some(reason) => reason.to_string(),
            None => steps
                .stop_reason()
                .map(|r| r.to_string())
                .unwrap_or_default(),
        };
        self.say(&format!("Random walk: {} ({reason})", words.join(" ")))
    }
}

/// Short human-readable reason for a missing path.
pub(crate) fn absence_reason(err: &WordGraphError) -> String {
    match err {
        WordGraphError::UnknownWord(word) => format!("\"{word}\" is not in the graph"),
        WordGraphError::Unreachable { .. } => "unreachable".to_string(),
        other => other.to_string(),
    }
}
