use crate::error::{fatal, GraphError, Result};

/// Dense vertex identifier, assigned in insertion order starting at 0.
pub type VertexId = usize;

/// Edge weight. Weights are non-negative; shortest-path results are only
/// meaningful under that model.
pub type Weight = u32;

/// A directed edge in the adjacency list of `src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: VertexId,
    pub dest: VertexId,
    pub weight: Weight,
}

/// In-memory directed graph: vertex names + per-vertex adjacency lists.
///
/// Each adjacency list is ordered by `dest` (non-decreasing), so multi-edges
/// to the same destination sit next to each other. Loops and multi-edges are
/// stored as inserted; [`Graph::neighbors`] collapses them.
///
/// Vertex storage tracks its own capacity and doubles it when full. Ids are
/// never reused and there is no deletion API: dropping the graph releases
/// every name and edge at once.
#[derive(Debug)]
pub struct Graph {
    names: Vec<String>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
    capacity: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Pre-allocate for `capacity` vertices (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            names: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            edge_count: 0,
            capacity,
        }
    }

    /// Append a vertex named `name`, returning its id.
    ///
    /// No duplicate detection: call [`Graph::lookup`] first if uniqueness
    /// matters.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if self.names.len() == self.capacity {
            self.grow();
        }

        let id = self.names.len();
        self.names.push(name.to_owned());
        self.adjacency.push(Vec::new());
        id
    }

    /// Double the tracked capacity. Existing names and edge lists move into
    /// the new storage; the old buffers are released.
    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        tracing::debug!(from = self.capacity, to = new_capacity, "growing vertex storage");

        let mut names = Vec::with_capacity(new_capacity);
        names.append(&mut self.names);
        let mut adjacency = Vec::with_capacity(new_capacity);
        adjacency.append(&mut self.adjacency);

        self.names = names;
        self.adjacency = adjacency;
        self.capacity = new_capacity;
    }

    /// Find the first vertex whose name equals `name`. Linear in the vertex
    /// count.
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.names.iter().position(|n| n == name)
    }

    /// Name of vertex `v`.
    pub fn name(&self, v: VertexId) -> Option<&str> {
        self.names.get(v).map(String::as_str)
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.names.len()
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.names.len(),
            })
        }
    }

    /// Add a directed edge `src -> dest`.
    ///
    /// The edge goes in front of the first existing edge whose destination is
    /// `>= dest`, e.g. inserting `(0,2,150)` into `(0,1,100) (0,2,75)` gives
    /// `(0,1,100) (0,2,150) (0,2,75)`.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;

        let list = &mut self.adjacency[src];
        let at = list.partition_point(|e| e.dest < dest);
        list.insert(at, Edge { src, dest, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `v` in storage order, multi-edges included.
    pub fn edges(&self, v: VertexId) -> Option<&[Edge]> {
        self.adjacency.get(v).map(Vec::as_slice)
    }

    /// Distinct destinations of `v`'s edges, ascending.
    pub fn neighbors(&self, v: VertexId) -> Option<Vec<VertexId>> {
        let edges = self.edges(v)?;
        let mut out: Vec<VertexId> = Vec::with_capacity(edges.len());
        for edge in edges {
            if out.last() != Some(&edge.dest) {
                out.push(edge.dest);
            }
        }
        Some(out)
    }

    /// Minimum weight among the edges `src -> dest`.
    ///
    /// # Panics
    ///
    /// Panics if either id is invalid or no such edge exists. Callers only
    /// ask about edges they found through [`Graph::neighbors`].
    pub fn edge_weight(&self, src: VertexId, dest: VertexId) -> Weight {
        if !self.contains(src) {
            fatal("edge_weight", format_args!("src vertex ({src}) invalid"));
        }
        if !self.contains(dest) {
            fatal("edge_weight", format_args!("dest vertex ({dest}) invalid"));
        }

        let list = &self.adjacency[src];
        let start = list.partition_point(|e| e.dest < dest);
        list[start..]
            .iter()
            .take_while(|e| e.dest == dest)
            .map(|e| e.weight)
            .min()
            .unwrap_or_else(|| {
                fatal("edge_weight", format_args!("no edge found from {src} to {dest}"))
            })
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Current vertex capacity; doubles whenever an insertion finds it full.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All vertex names, indexed by id.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let slots = self.capacity * (size_of::<String>() + size_of::<Vec<Edge>>());
        let names: usize = self.names.iter().map(String::capacity).sum();
        let edges: usize = self
            .adjacency
            .iter()
            .map(|v| v.capacity() * size_of::<Edge>())
            .sum();

        slots + names + edges
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
