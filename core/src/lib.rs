//! word-ladder-core: in-memory word graph engine.
//!
//! Stores a dictionary as a directed graph (one vertex per word, edges
//! between words one letter apart) and answers reachability queries with
//! BFS, depth-limited BFS and DFS, and weighted shortest-path queries with
//! Dijkstra's algorithm. No I/O beyond reading word lists; front ends own
//! prompting and presentation.

mod containers;
mod dijkstra;
mod error;
mod graph;
mod report;
mod traversal;
mod words;

pub use containers::{BoundedQueue, BoundedSet, BoundedStack};
pub use dijkstra::{shortest_path, Path, ShortestPath};
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, VertexId, Weight};
pub use report::{write_report, GraphSummary};
pub use traversal::{bfs, bfs_limited, dfs, Layers};
pub use words::{
    add_pairwise_edges, add_substitution_edges, build, load_words, one_letter_differ, read_words,
    BuildOptions, EdgePolicy, WordListFormat,
};
