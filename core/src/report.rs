//! Human-readable graph dumps: a stats header, optionally followed by the
//! adjacency lists and the neighbor/BFS/DFS listing of every vertex.

use std::fmt;
use std::io::{self, Write};

use crate::graph::{Graph, VertexId};
use crate::traversal::{bfs, dfs};

/// Size statistics for a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub title: String,
    pub vertices: usize,
    pub edges: usize,
    pub capacity: usize,
    pub memory_bytes: usize,
}

impl GraphSummary {
    pub fn of(graph: &Graph, title: &str) -> Self {
        Self {
            title: title.to_owned(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            capacity: graph.capacity(),
            memory_bytes: graph.memory_usage(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">>Graph: {}", self.title)?;
        writeln!(f, "  # of vertices: {}", self.vertices)?;
        write!(f, "  # of edges:    {}", self.edges)
    }
}

fn write_ids<W: Write>(out: &mut W, ids: Option<Vec<VertexId>>) -> io::Result<()> {
    for id in ids.unwrap_or_default() {
        write!(out, "{id}, ")?;
    }
    writeln!(out, "end")
}

/// Write the summary for `graph`; with `complete`, also every adjacency
/// list and the neighbors, BFS and DFS order from every vertex.
pub fn write_report<W: Write>(
    graph: &Graph,
    title: &str,
    complete: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", GraphSummary::of(graph, title))?;
    if !complete {
        return Ok(());
    }

    let names: Vec<&str> = graph.names().collect();

    writeln!(out, "  Adjacency Lists:")?;
    for (v, name) in names.iter().enumerate() {
        write!(out, "   {v} ({name}): ")?;
        let edges = graph.edges(v).unwrap_or_default();
        let rendered: Vec<String> = edges
            .iter()
            .map(|e| format!("({},{},{})", e.src, e.dest, e.weight))
            .collect();
        writeln!(out, "{}", rendered.join(", "))?;
    }

    let listings: [(&str, fn(&Graph, VertexId) -> Option<Vec<VertexId>>); 3] = [
        ("Neighbors", Graph::neighbors),
        ("BFS", bfs),
        ("DFS", dfs),
    ];
    for (label, listing) in listings {
        writeln!(out, "  {label}:")?;
        for (v, name) in names.iter().enumerate() {
            write!(out, "   {v} ({name}): ")?;
            write_ids(out, listing(graph, v))?;
        }
    }

    Ok(())
}
