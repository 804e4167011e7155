//! Graphviz DOT export.
//!
//! Rasterising the graph is left to external tools (`dot -Tpng graph.dot`);
//! this module only produces the description: every node, every edge labelled
//! with its weight, highlighted edges drawn in red.

use std::fmt::{self, Write};

use crate::graph::view::HighlightView;

const NODE_STYLE: &str = "shape=ellipse, style=filled, fillcolor=skyblue";
const EDGE_COLOR: &str = "gray";
const HIGHLIGHT_COLOR: &str = "red";

/// Render a view as a DOT digraph.
///
/// ```
/// use wordgraph::graph::{GraphBuilder, HighlightView, to_dot};
///
/// let graph = GraphBuilder::build(&["hello", "world"]);
/// let dot = to_dot(&HighlightView::new(&graph));
/// assert!(dot.contains("\"hello\" -> \"world\" [label=\"1\", color=gray];"));
/// ```
pub fn to_dot(view: &HighlightView<'_>) -> String {
    Dot(view).to_string()
}

/// Display adapter that writes a view in DOT syntax.
struct Dot<'v, 'g>(&'v HighlightView<'g>);

impl fmt::Display for Dot<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dot(f, self.0)
    }
}

fn write_dot<W: Write>(out: &mut W, view: &HighlightView<'_>) -> fmt::Result {
    writeln!(out, "digraph wordgraph {{")?;
    writeln!(out, "    node [{NODE_STYLE}];")?;

    for word in view.graph().nodes() {
        writeln!(out, "    \"{}\";", escape(word))?;
    }

    for edge in view.edges() {
        let (color, width) = if edge.highlighted {
            (HIGHLIGHT_COLOR, ", penwidth=2")
        } else {
            (EDGE_COLOR, "")
        };
        writeln!(
            out,
            "    \"{}\" -> \"{}\" [label=\"{}\", color={color}{width}];",
            escape(edge.source),
            escape(edge.target),
            edge.weight,
        )?;
    }

    writeln!(out, "}}")
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
