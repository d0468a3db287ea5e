use crate::containers::{BoundedQueue, BoundedSet, BoundedStack};
use crate::error::checked;
use crate::graph::{Graph, VertexId};

/// Output of a depth-limited BFS: layer `d` holds the vertices first
/// discovered `d` hops from the start, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layers {
    layers: Vec<Vec<VertexId>>,
}

impl Layers {
    /// Number of non-empty layers (the start vertex is layer 0).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Vertices at exactly `distance` hops.
    pub fn layer(&self, distance: usize) -> Option<&[VertexId]> {
        self.layers.get(distance).map(Vec::as_slice)
    }

    /// `(distance, vertices)` pairs, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[VertexId])> {
        self.layers.iter().map(Vec::as_slice).enumerate()
    }

    /// Hop distance at which `v` was discovered.
    pub fn distance_of(&self, v: VertexId) -> Option<usize> {
        self.layers.iter().position(|layer| layer.contains(&v))
    }

    /// All vertices in emission order.
    pub fn flatten(&self) -> Vec<VertexId> {
        self.layers.iter().flatten().copied().collect()
    }

    pub fn into_inner(self) -> Vec<Vec<VertexId>> {
        self.layers
    }
}

fn neighbors_of(graph: &Graph, v: VertexId) -> Vec<VertexId> {
    graph.neighbors(v).unwrap_or_default()
}

/// Breadth-first search from `start`.
///
/// Every reachable vertex is emitted once, layer by layer; within a layer
/// the order follows the ascending-neighbor scans of the previous layer.
/// Returns `None` if `start` is not a vertex.
#[tracing::instrument(level = "trace", skip(graph))]
pub fn bfs(graph: &Graph, start: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains(start) {
        return None;
    }

    let n = graph.vertex_count() + 1;
    let mut frontier = BoundedQueue::new(n);
    let mut discovered = BoundedSet::new(n);
    let mut visited = Vec::with_capacity(n);

    checked("bfs", frontier.enqueue(start));
    checked("bfs", discovered.add(start));

    while let Some(current) = frontier.dequeue() {
        visited.push(current);

        for adj in neighbors_of(graph, current) {
            if !discovered.contains(adj) {
                checked("bfs", frontier.enqueue(adj));
                checked("bfs", discovered.add(adj));
            }
        }
    }

    Some(visited)
}

/// Breadth-first search from `start` that stops expanding at
/// `max_distance` hops.
///
/// The flattened result is the prefix of [`bfs`] covering every vertex
/// within `max_distance` hops. Layers stop early once nothing new is
/// reachable. Returns `None` if `start` is not a vertex.
#[tracing::instrument(level = "trace", skip(graph))]
pub fn bfs_limited(graph: &Graph, start: VertexId, max_distance: u32) -> Option<Layers> {
    if !graph.contains(start) {
        return None;
    }

    let n = graph.vertex_count() + 1;
    let mut frontier = BoundedQueue::new(n);
    let mut discovered = BoundedSet::new(n);

    checked("bfs_limited", frontier.enqueue(start));
    checked("bfs_limited", discovered.add(start));

    let mut layers = Vec::new();
    let mut layer = Vec::new();
    let mut depth: u32 = 0;
    // Vertices of the current layer still in the queue, and vertices
    // enqueued so far for the next one.
    let mut remaining: usize = 1;
    let mut next: usize = 0;

    while let Some(current) = frontier.dequeue() {
        layer.push(current);

        if depth < max_distance {
            for adj in neighbors_of(graph, current) {
                if !discovered.contains(adj) {
                    checked("bfs_limited", frontier.enqueue(adj));
                    checked("bfs_limited", discovered.add(adj));
                    next += 1;
                }
            }
        }

        remaining -= 1;
        if remaining == 0 {
            layers.push(std::mem::take(&mut layer));
            depth += 1;
            remaining = next;
            next = 0;
        }
    }

    Some(Layers { layers })
}

/// Depth-first search from `start` using an explicit stack.
///
/// Neighbors are pushed in descending order so they are explored in
/// ascending order. A vertex may be pushed more than once but is emitted
/// and expanded only the first time it is popped. Returns `None` if `start`
/// is not a vertex.
#[tracing::instrument(level = "trace", skip(graph))]
pub fn dfs(graph: &Graph, start: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains(start) {
        return None;
    }

    let n = graph.vertex_count() + 1;
    // One push for the start plus at most one per edge out of each visited vertex.
    let mut frontier = BoundedStack::new(n + graph.edge_count());
    let mut expanded = BoundedSet::new(n);
    let mut visited = Vec::with_capacity(n);

    checked("dfs", frontier.push(start));

    while let Some(current) = frontier.pop() {
        if !checked("dfs", expanded.add(current)) {
            continue;
        }
        visited.push(current);

        for adj in neighbors_of(graph, current).into_iter().rev() {
            if !expanded.contains(adj) {
                checked("dfs", frontier.push(adj));
            }
        }
    }

    Some(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_graph(n: usize, edges: &[(VertexId, VertexId)]) -> Graph {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_vertex(&format!("v{i}"));
        }
        for &(from, to) in edges {
            g.add_edge(from, to, 1).unwrap();
        }
        g
    }

    fn undirected(n: usize, edges: &[(VertexId, VertexId)]) -> Graph {
        let both: Vec<(VertexId, VertexId)> =
            edges.iter().flat_map(|&(a, b)| [(a, b), (b, a)]).collect();
        make_graph(n, &both)
    }

    fn make_chain(n: usize) -> Graph {
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        make_graph(n, &edges)
    }

    fn make_star(leaves: usize) -> Graph {
        let edges: Vec<_> = (1..=leaves).map(|i| (0, i)).collect();
        make_graph(leaves + 1, &edges)
    }

    fn make_cycle(n: usize) -> Graph {
        let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        make_graph(n, &edges)
    }

    // --- BFS tests ---

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(6);
        assert_eq!(bfs(&g, 0), Some(vec![0, 1, 2, 3, 4, 5]));
        assert_eq!(bfs(&g, 3), Some(vec![3, 4, 5]));
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(100);
        let visited = bfs(&g, 0).unwrap();
        assert_eq!(visited.len(), 101);
        assert_eq!(visited[0], 0);
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(5);
        assert_eq!(bfs(&g, 2), Some(vec![2, 3, 4, 0, 1]));
    }

    #[test]
    fn test_bfs_layer_order_follows_discovery() {
        // 0 -> {3, 1}; 3 -> 2; 1 -> 4. Layer 2 is [4, 2]: 1 is expanded
        // before 3, so its child comes first regardless of id.
        let g = make_graph(5, &[(0, 3), (0, 1), (3, 2), (1, 4)]);
        assert_eq!(bfs(&g, 0), Some(vec![0, 1, 3, 4, 2]));
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let g = make_chain(3);
        assert_eq!(bfs(&g, 999), None);
        assert_eq!(bfs(&Graph::new(), 0), None);
    }

    #[test]
    fn test_bfs_self_loop() {
        let g = make_graph(1, &[(0, 0)]);
        assert_eq!(bfs(&g, 0), Some(vec![0]));
    }

    #[test]
    fn test_bfs_parallel_edges() {
        let g = make_graph(2, &[(0, 1), (0, 1), (0, 1)]);
        assert_eq!(bfs(&g, 0), Some(vec![0, 1]));
    }

    #[test]
    fn test_bfs_directed() {
        let g = make_chain(3);
        assert_eq!(bfs(&g, 2), Some(vec![2]));
    }

    // --- Depth-limited BFS tests ---

    #[test]
    fn test_bfs_limited_chain() {
        let g = make_chain(10);
        let layers = bfs_limited(&g, 0, 3).unwrap();
        assert_eq!(layers.into_inner(), vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_bfs_limited_depth_zero() {
        let g = make_chain(5);
        let layers = bfs_limited(&g, 0, 0).unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers.layer(0), Some(&[0][..]));
    }

    #[test]
    fn test_bfs_limited_stops_when_exhausted() {
        let g = make_chain(3);
        let layers = bfs_limited(&g, 0, 10).unwrap();
        assert_eq!(layers.len(), 3);
        assert_eq!(layers.flatten(), vec![0, 1, 2]);
    }

    #[test]
    fn test_bfs_limited_boundary_vertex_still_emitted() {
        // Vertex 2 is discovered at the last allowed depth; its neighbor 3 is not.
        let g = undirected(4, &[(0, 1), (1, 2), (2, 3)]);
        let layers = bfs_limited(&g, 0, 2).unwrap();
        assert_eq!(layers.into_inner(), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_bfs_limited_layers() {
        //      0
        //    /   \
        //   1     2
        //  / \     \
        // 3   4     5 - 6
        let g = undirected(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (5, 6)]);
        let layers = bfs_limited(&g, 0, 2).unwrap();
        assert_eq!(layers.layer(0), Some(&[0][..]));
        assert_eq!(layers.layer(1), Some(&[1, 2][..]));
        assert_eq!(layers.layer(2), Some(&[3, 4, 5][..]));
        assert_eq!(layers.layer(3), None);
        assert_eq!(layers.distance_of(5), Some(2));
        assert_eq!(layers.distance_of(6), None);
    }

    #[test]
    fn test_bfs_limited_is_prefix_of_bfs() {
        let g = undirected(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (5, 6), (3, 6)]);
        let full = bfs(&g, 0).unwrap();
        for d in 0..5 {
            let limited = bfs_limited(&g, 0, d).unwrap().flatten();
            assert_eq!(&full[..limited.len()], limited.as_slice(), "depth {d}");
        }
    }

    #[test]
    fn test_bfs_limited_start_not_in_graph() {
        let g = make_chain(2);
        assert_eq!(bfs_limited(&g, 7, 3), None);
    }

    // --- DFS tests ---

    #[test]
    fn test_dfs_ascending_neighbor_order() {
        //   0 -> 2, 0 -> 1, 1 -> 3, 2 -> 4
        let g = make_graph(5, &[(0, 2), (0, 1), (1, 3), (2, 4)]);
        assert_eq!(dfs(&g, 0), Some(vec![0, 1, 3, 2, 4]));
    }

    #[test]
    fn test_dfs_vertex_pushed_twice_emitted_once() {
        // 0 -> {1, 2}, 1 -> 2: 2 is pushed by 0 and by 1.
        let g = make_graph(3, &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(dfs(&g, 0), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_dfs_cycle() {
        let g = make_cycle(4);
        assert_eq!(dfs(&g, 1), Some(vec![1, 2, 3, 0]));
    }

    #[test]
    fn test_dfs_dense_graph_does_not_overflow() {
        let mut edges = Vec::new();
        for a in 0..12 {
            for b in 0..12 {
                edges.push((a, b));
                edges.push((a, b));
            }
        }
        let g = make_graph(12, &edges);
        assert_eq!(dfs(&g, 5).unwrap().len(), 12);
    }

    #[test]
    fn test_dfs_same_set_as_bfs() {
        let g = undirected(8, &[(0, 4), (4, 2), (2, 7), (1, 3), (0, 6)]);
        for v in 0..8 {
            let b: HashSet<_> = bfs(&g, v).unwrap().into_iter().collect();
            let d: HashSet<_> = dfs(&g, v).unwrap().into_iter().collect();
            assert_eq!(b, d, "start {v}");
        }
    }

    #[test]
    fn test_dfs_start_not_in_graph() {
        let g = make_chain(2);
        assert_eq!(dfs(&g, 2), None);
    }
}
