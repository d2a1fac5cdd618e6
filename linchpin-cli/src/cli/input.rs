//! Plain-text graph file parsing.
//!
//! The format is line-based UTF-8. Blank lines and lines starting with `#`
//! are ignored. The first remaining line holds the vertex count; every
//! following line holds `source target weight`.
//!
//! ```text
//! # triangle
//! 3
//! 0 1 4
//! 1 2 2
//! 0 2 5
//! ```

use std::io::{self, BufRead};

use linchpin_core::{Edge, Graph, LinchpinError};
use thiserror::Error;

const COMMENT_PREFIX: char = '#';

/// Errors surfaced while reading a graph file.
#[derive(Debug, Error)]
pub enum GraphFileError {
    /// Reading a line from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file contained no vertex count.
    #[error("graph file is missing the vertex count line")]
    MissingNodeCount,
    /// A numeric field could not be parsed.
    #[error("line {line}: invalid {field} `{value}`")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Name of the field being parsed.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },
    /// An edge line did not hold exactly three fields.
    #[error("line {line}: expected `source target weight`, found {found} fields")]
    MalformedEdge {
        /// 1-based line number.
        line: usize,
        /// Number of whitespace-separated fields present.
        found: usize,
    },
    /// The parsed description was rejected by the graph model.
    #[error(transparent)]
    Graph(#[from] LinchpinError),
}

/// Parses a graph description from `reader`.
///
/// # Errors
/// Returns [`GraphFileError`] when a line cannot be read or parsed, or when
/// the resulting graph fails validation.
///
/// # Examples
/// ```
/// use linchpin_cli::cli::parse_graph;
///
/// let graph = parse_graph("# pair\n2\n0 1 5\n".as_bytes()).expect("graph must parse");
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub fn parse_graph(reader: impl BufRead) -> Result<Graph, GraphFileError> {
    let mut node_count: Option<usize> = None;
    let mut edges = Vec::new();

    for (offset, line) in reader.lines().enumerate() {
        let number = offset + 1;
        let line = line.map_err(|source| GraphFileError::Read {
            line: number,
            source,
        })?;
        let content = line.trim();
        if content.is_empty() || content.starts_with(COMMENT_PREFIX) {
            continue;
        }

        match node_count {
            None => node_count = Some(parse_field(content, number, "vertex count")?),
            Some(_) => edges.push(parse_edge(content, number)?),
        }
    }

    let node_count = node_count.ok_or(GraphFileError::MissingNodeCount)?;
    Ok(Graph::new(node_count, edges)?)
}

fn parse_edge(content: &str, line: usize) -> Result<Edge, GraphFileError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(GraphFileError::MalformedEdge {
            line,
            found: fields.len(),
        });
    };
    Ok(Edge::new(
        parse_field(source, line, "source")?,
        parse_field(target, line, "target")?,
        parse_field(weight, line, "weight")?,
    ))
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    line: usize,
    field: &'static str,
) -> Result<T, GraphFileError> {
    raw.parse().map_err(|_| GraphFileError::InvalidNumber {
        line,
        field,
        value: raw.to_owned(),
    })
}
