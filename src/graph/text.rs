//! Textual adjacency-list format.
//!
//! Serialization collaborators exchange graphs in the following line-oriented layout:
//!
//! ```text
//! 3        number of vertices
//! 0        one vertex id per line
//! 1
//! 4
//! 2        number of edges
//! 0 1      one "from to" pair per line
//! 1 4
//! ```
//!
//! [`Display`](std::fmt::Display) on [`Graph`] writes this layout with vertices and edges
//! in ascending order (undirected edges once, lower endpoint first), and
//! [`Graph::from_adjacency_text`] reads it back.

use std::{fmt, iter::Enumerate, str::Lines};

use crate::{
    graph::{
        node::NodeId,
        store::{EdgeKind, Graph},
    },
    Result,
};

/// Line reader that remembers 1-based positions for error reporting.
struct Cursor<'a> {
    lines: Enumerate<Lines<'a>>,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            lines: text.lines().enumerate(),
            position: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        match self.lines.next() {
            Some((index, line)) => {
                self.position = index + 1;
                Ok((self.position, line.trim()))
            }
            None => Err(malformed_error!(
                self.position + 1,
                "unexpected end of input, expected {}",
                expected
            )),
        }
    }

    fn next_number(&mut self, expected: &str) -> Result<(usize, usize)> {
        let (line, text) = self.next_line(expected)?;
        Ok((line, parse_number(line, text, expected)?))
    }

    /// Only blank lines may follow the last edge.
    fn finish(mut self) -> Result<()> {
        for (index, line) in self.lines.by_ref() {
            if !line.trim().is_empty() {
                return Err(malformed_error!(index + 1, "unexpected trailing content"));
            }
        }
        Ok(())
    }
}

fn parse_number(line: usize, text: &str, expected: &str) -> Result<usize> {
    text.parse::<usize>()
        .map_err(|_| malformed_error!(line, "invalid {} '{}'", expected, text))
}

impl<Ty: EdgeKind> Graph<Ty> {
    /// Parses a graph from the textual adjacency-list format.
    ///
    /// Every edge endpoint must be one of the declared vertices, and the stored graph
    /// holds exactly the declared number of vertices and edges. An undirected edge
    /// listed in both directions counts as a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`](crate::Error::Malformed) with the offending line for
    /// missing or non-numeric counts and ids, edges with the wrong number of fields,
    /// undeclared endpoints, duplicate vertices or edges, undirected self-loops and
    /// trailing content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphscope::graph::{DirectedGraph, NodeId};
    ///
    /// let graph = DirectedGraph::from_adjacency_text("3\n0\n1\n2\n2\n0 1\n1 2\n")?;
    /// assert!(graph.contains_edge(NodeId::new(1), NodeId::new(2)));
    /// assert_eq!(graph.to_adjacency_text(), "3\n0\n1\n2\n2\n0 1\n1 2\n");
    /// # Ok::<(), graphscope::Error>(())
    /// ```
    pub fn from_adjacency_text(text: &str) -> Result<Self> {
        let mut cursor = Cursor::new(text);
        let mut graph = Self::new();

        let (_, node_count) = cursor.next_number("vertex count")?;
        for _ in 0..node_count {
            let (line, id) = cursor.next_number("vertex id")?;
            if !graph.add_node(NodeId::new(id)) {
                return Err(malformed_error!(line, "duplicate vertex id {}", id));
            }
        }

        let (_, edge_count) = cursor.next_number("edge count")?;
        for _ in 0..edge_count {
            let (line, text) = cursor.next_line("edge")?;
            let fields: Vec<&str> = text.split_whitespace().collect();
            let [from, to] = fields.as_slice() else {
                return Err(malformed_error!(
                    line,
                    "expected 2 fields, found {}",
                    fields.len()
                ));
            };

            let from = NodeId::new(parse_number(line, from, "edge endpoint")?);
            let to = NodeId::new(parse_number(line, to, "edge endpoint")?);
            for endpoint in [from, to] {
                if !graph.contains_node(endpoint) {
                    return Err(malformed_error!(
                        line,
                        "edge endpoint {} is not a declared vertex",
                        endpoint
                    ));
                }
            }

            let added = graph
                .add_edge(from, to)
                .map_err(|error| malformed_error!(line, "{}", error))?;
            if !added {
                return Err(malformed_error!(line, "duplicate edge {} {}", from, to));
            }
        }

        cursor.finish()?;
        Ok(graph)
    }

    /// Renders the graph in the textual adjacency-list format.
    #[must_use]
    pub fn to_adjacency_text(&self) -> String {
        self.to_string()
    }
}

impl<Ty: EdgeKind> fmt::Display for Graph<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.node_count())?;
        for node in self.nodes() {
            writeln!(f, "{node}")?;
        }

        writeln!(f, "{}", self.edge_count())?;
        for (from, to) in self.edges() {
            writeln!(f, "{from} {to}")?;
        }
        Ok(())
    }
}
