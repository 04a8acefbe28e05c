//! # EdgeList
//!
//! The EdgeList-Format consists of a header `n m`, followed by `m` non-comment-lines
//! `u v` (or `u v w`) representing an edge `Edge(u - 1, v - 1)` with weight `w`.
//!
//! ```
//! use adjgraph::{prelude::*, io::*};
//!
//! let input = "c a triangle\n3 3\n1 2\n2 3\n3 1\n";
//! let graph: AdjList = EdgeListReader::new().try_read_graph(input.as_bytes()).unwrap();
//! assert_eq!(graph.ordered_edges(false), vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
//!
//! let mut output = Vec::new();
//! graph.try_write_edge_list(&mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "3 3\n1 2\n2 3\n3 1\n");
//! ```

use std::io::Lines;

use tracing::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Whether every edge line carries a third column with its weight
    weighted: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            weighted: false,
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether weights are read from a third column
    pub fn weighted(mut self, weighted: bool) -> EdgeListReader {
        self.weighted = weighted;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader =
            EdgeListEdgesReader::try_new(reader, self.weighted, &self.comment_identifier)?;

        let n = edges_reader.number_of_nodes();
        let m = edges_reader.number_of_edges();

        let mut edges = Vec::with_capacity(m.min(1 << 16) as usize);
        for _ in 0..m {
            let edge = edges_reader.parse_edge_line()?;
            raise_error_unless!(
                edge.is_some(),
                ErrorKind::InvalidData,
                format!("Expected {m} edges but found only {}.", edges.len())
            );
            edges.extend(edge);
        }

        debug!(n, m, "edge list read");
        Ok(G::try_from_weighted_edges(n, edges)?)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Line-based parser behind [`EdgeListReader`]
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Whether a weight column is expected
    weighted: bool,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, weighted: bool, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            weighted,
            comment_identifier,
        };

        let header = edge_list_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::InvalidData, "Header not found"))?;

        let mut parts = header.split_whitespace();
        edge_list_reader.number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        edge_list_reader.number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of edges in the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line and converts its
    /// endpoints to 0-based ids
    pub fn parse_edge_line(&mut self) -> Result<Option<WeightedEdge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");
        let weight: Weight = if self.weighted {
            parse_next_value!(parts, "Weight")
        } else {
            DEFAULT_WEIGHT
        };

        raise_error_unless!(
            from > 0 && dest > 0,
            ErrorKind::InvalidData,
            format!("Node ids are 1-based, found edge ({from},{dest}).")
        );

        Ok(Some(WeightedEdge(from - 1, dest - 1, weight)))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Whether weights are written as a third column
    weighted: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether weights are written
    pub fn weighted(mut self, weighted: bool) -> EdgeListWriter {
        self.weighted = weighted;
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + GraphType> GraphWriter<G> for EdgeListWriter {
    /// Writes every edge once; undirected edges are written as `u v` with `u <= v`
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for WeightedEdge(u, v, w) in graph.weighted_edges(G::is_undirected()) {
            if self.weighted {
                writeln!(writer, "{} {} {}", u + 1, v + 1, w)?;
            } else {
                writeln!(writer, "{} {}", u + 1, v + 1)?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + GraphType> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_weighted_undirected() {
        let input = "c comment\n\n4 3\n1 2 0\nc inner comment\n2 3 1\n4 4 7\n";
        let graph: AdjListUndir = EdgeListReader::new()
            .weighted(true)
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.weight_of(1, 0), Some(0));
        assert_eq!(graph.weight_of(2, 1), Some(1));
        assert_eq!(graph.weight_of(3, 3), Some(7));
    }

    #[test]
    fn custom_comment_and_trailing_lines() {
        // lines after the `m` edges are not consumed
        let input = "# header follows\n2 1\n2 1\n# ignored\nnot an edge\n";
        let graph: AdjMatrix = EdgeListReader::new()
            .comment_identifier("#")
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(graph.ordered_edges(false), vec![Edge(1, 0)]);
    }

    #[test]
    fn malformed_input() {
        let read = |input: &str| -> Result<AdjList> {
            EdgeListReader::new().try_read_graph(input.as_bytes())
        };

        for input in [
            "",
            "3\n",
            "3 x\n",
            "3 2\n1 2\n",
            "3 1\n1\n",
            "3 1\n0 1\n",
            "3 1\n1 4\n",
            "3 1\n1 two\n",
            "3 4000000000\n1 2\n",
        ] {
            let err = read(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }

        let input = format!("2 1\n1 2 {}\n", Weight::MAX);
        let result: Result<AdjList> = EdgeListReader::new()
            .weighted(true)
            .try_read_graph(input.as_bytes());
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn write_and_read_back() {
        let mut graph = SparseAdjListUndir::new(5);
        graph.add_weighted_edge(3, 1, 4);
        graph.add_weighted_edge(0, 4, 0);
        graph.add_weighted_edge(2, 2, 9);

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .weighted(true)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "5 3\n1 5 0\n2 4 4\n3 3 9\n"
        );

        let read: SparseAdjListUndir = EdgeListReader::new()
            .weighted(true)
            .try_read_graph(buffer.as_slice())
            .unwrap();
        assert_eq!(
            read.weighted_edges(true).collect::<Vec<_>>(),
            graph.weighted_edges(true).collect::<Vec<_>>()
        );
    }
}
