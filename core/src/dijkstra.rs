use crate::containers::{BoundedSet, BoundedStack};
use crate::error::checked;
use crate::graph::{Graph, VertexId};

/// A path `src -> ... -> dest` and its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: u64,
}

impl Path {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Outcome of a shortest-path query between two valid vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPath {
    Found(Path),
    Unreachable,
}

impl ShortestPath {
    pub fn is_found(&self) -> bool {
        matches!(self, ShortestPath::Found(_))
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            ShortestPath::Found(path) => Some(path),
            ShortestPath::Unreachable => None,
        }
    }
}

/// Pick the unvisited vertex with the smallest finite distance.
///
/// Linear scan in id order; the lowest id wins ties. `None` once every
/// unvisited vertex is at infinity.
fn pop_min(distance: &[Option<u64>], visited: &BoundedSet) -> Option<VertexId> {
    let mut best: Option<(VertexId, u64)> = None;
    for (v, d) in distance.iter().enumerate() {
        let Some(d) = *d else { continue };
        if visited.contains(v) {
            continue;
        }
        if best.map_or(true, |(_, b)| d < b) {
            best = Some((v, d));
        }
    }
    best.map(|(v, _)| v)
}

/// Dijkstra's shortest path from `src` to `dest`.
///
/// Edge weights come from [`Graph::edge_weight`], so multi-edges count at
/// their minimum weight. Minimum extraction is a linear scan, O(V²) overall.
///
/// Returns `None` if either id is not a vertex.
#[tracing::instrument(level = "trace", skip(graph))]
pub fn shortest_path(graph: &Graph, src: VertexId, dest: VertexId) -> Option<ShortestPath> {
    if !graph.contains(src) || !graph.contains(dest) {
        return None;
    }

    if src == dest {
        return Some(ShortestPath::Found(Path {
            vertices: vec![src],
            weight: 0,
        }));
    }

    let n = graph.vertex_count();
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = BoundedSet::new(n + 1);

    distance[src] = Some(0);

    while let Some(current) = pop_min(&distance, &visited) {
        checked("shortest_path", visited.add(current));

        if current == dest {
            break;
        }

        let base = distance[current].unwrap_or_default();
        for adj in graph.neighbors(current).unwrap_or_default() {
            if visited.contains(adj) {
                continue;
            }
            let alt = base + u64::from(graph.edge_weight(current, adj));
            if distance[adj].map_or(true, |d| alt < d) {
                distance[adj] = Some(alt);
                predecessor[adj] = Some(current);
            }
        }
    }

    let Some(weight) = distance[dest] else {
        tracing::trace!(src, dest, visited = visited.len(), "no path");
        return Some(ShortestPath::Unreachable);
    };

    // Walk predecessors back from dest; the stack reverses them into
    // src -> dest order.
    let mut stack = BoundedStack::new(n + 1);
    let mut v = dest;
    checked("shortest_path", stack.push(v));
    while let Some(p) = predecessor[v] {
        checked("shortest_path", stack.push(p));
        v = p;
    }

    let mut vertices = Vec::with_capacity(stack.len());
    while let Some(v) = stack.pop() {
        vertices.push(v);
    }

    Some(ShortestPath::Found(Path { vertices, weight }))
}
