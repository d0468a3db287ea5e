//! Word-list input and edge inference for word-ladder graphs.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};

/// How a word list file is split into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordListFormat {
    /// Any whitespace separates words.
    Tokens,
    /// One word per line, spaces included. Line endings are stripped and
    /// blank lines are skipped, so an empty line never becomes a vertex.
    #[default]
    Lines,
}

/// How edges between words are inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Compare every ordered pair of words and connect `i -> j` when they
    /// differ in exactly one position. Quadratic in the word count.
    Pairwise,
    /// For each word, substitute every alphabet letter at every position and
    /// connect to the word it spells, if present.
    #[default]
    Substitution,
}

/// Options for [`build`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub policy: EdgePolicy,
    /// Letters tried at each position by [`EdgePolicy::Substitution`].
    pub alphabet: Vec<char>,
    pub weight: Weight,
    pub initial_capacity: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            policy: EdgePolicy::default(),
            alphabet: ('a'..='z').collect(),
            weight: 1,
            initial_capacity: 256,
        }
    }
}

/// True when `a` and `b` have the same length and differ in exactly one
/// character position.
pub fn one_letter_differ(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut differences = 0;

    loop {
        match (left.next(), right.next()) {
            (None, None) => return differences == 1,
            (Some(x), Some(y)) => {
                if x != y {
                    differences += 1;
                    if differences > 1 {
                        return false;
                    }
                }
            }
            _ => return false,
        }
    }
}

/// Read words from `reader`. Duplicates are kept, in input order.
pub fn read_words<R: BufRead>(reader: R, format: WordListFormat) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match format {
            WordListFormat::Tokens => {
                words.extend(line.split_whitespace().map(str::to_owned));
            }
            WordListFormat::Lines => {
                let word = line.trim_end_matches(['\r', '\n']);
                if !word.is_empty() {
                    words.push(word.to_owned());
                }
            }
        }
    }
    Ok(words)
}

/// Read a word list from a file.
pub fn load_words(path: &Path, format: WordListFormat) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| GraphError::WordList {
        path: path.to_path_buf(),
        source,
    })?;
    let words = read_words(BufReader::new(file), format)?;
    tracing::debug!(path = %path.display(), words = words.len(), "word list read");
    Ok(words)
}

/// Build a word graph: one vertex per word, in order, then edges per
/// `options.policy`.
pub fn build<I, S>(words: I, options: &BuildOptions) -> Graph
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = Instant::now();
    let mut graph = Graph::with_capacity(options.initial_capacity);
    for word in words {
        graph.add_vertex(word.as_ref());
    }

    match options.policy {
        EdgePolicy::Pairwise => add_pairwise_edges(&mut graph, options.weight),
        EdgePolicy::Substitution => {
            add_substitution_edges(&mut graph, &options.alphabet, options.weight)
        }
    }

    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        policy = ?options.policy,
        elapsed = ?start.elapsed(),
        "word graph built"
    );
    graph
}

/// Connect `i -> j` for every ordered pair of distinct vertices whose names
/// differ by one letter.
pub fn add_pairwise_edges(graph: &mut Graph, weight: Weight) {
    let n = graph.vertex_count();
    let mut found: Vec<(VertexId, VertexId)> = Vec::new();
    {
        let names: Vec<&str> = graph.names().collect();
        for i in 0..n {
            for j in 0..n {
                if i != j && one_letter_differ(names[i], names[j]) {
                    found.push((i, j));
                }
            }
        }
    }

    for (i, j) in found {
        insert_edge(graph, i, j, weight);
    }
}

/// For every vertex `v`, try each letter of `alphabet` at each position of
/// its name and connect `v -> v2` when the result names a distinct vertex
/// `v2` (the first vertex with that name). A later duplicate of a word
/// spells its first occurrence once per position, so it gets one edge to it
/// per position.
pub fn add_substitution_edges(graph: &mut Graph, alphabet: &[char], weight: Weight) {
    let mut found: Vec<(VertexId, VertexId)> = Vec::new();
    {
        let mut index: HashMap<&str, VertexId> = HashMap::with_capacity(graph.vertex_count());
        for (id, name) in graph.names().enumerate() {
            index.entry(name).or_insert(id);
        }

        let mut candidate = String::new();
        for (v, name) in graph.names().enumerate() {
            let mut letters: Vec<char> = name.chars().collect();
            for pos in 0..letters.len() {
                let original = letters[pos];
                for &c in alphabet {
                    letters[pos] = c;
                    candidate.clear();
                    candidate.extend(letters.iter());
                    if let Some(&v2) = index.get(candidate.as_str()) {
                        if v2 != v {
                            found.push((v, v2));
                        }
                    }
                }
                letters[pos] = original;
            }
        }
    }

    for (v, v2) in found {
        insert_edge(graph, v, v2, weight);
    }
}

fn insert_edge(graph: &mut Graph, src: VertexId, dest: VertexId, weight: Weight) {
    // Both ids were taken from the graph itself.
    if let Err(err) = graph.add_edge(src, dest, weight) {
        crate::error::fatal("add_edge", format_args!("{err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FIVE: [&str; 5] = ["cat", "cot", "cog", "dog", "dot"];

    #[test]
    fn test_one_letter_differ() {
        assert!(one_letter_differ("cat", "cot"));
        assert!(one_letter_differ("cat", "bat"));
        assert!(!one_letter_differ("cat", "cat"));
        assert!(!one_letter_differ("cat", "dog"));
        assert!(!one_letter_differ("cat", "cats"));
        assert!(!one_letter_differ("", ""));
        assert!(one_letter_differ("a", "b"));
    }

    #[test]
    fn test_one_letter_differ_counts_chars() {
        assert!(one_letter_differ("café", "cafe"));
        assert!(!one_letter_differ("é", "ab"));
    }

    #[test]
    fn test_read_words_tokens() {
        let words = read_words(Cursor::new("cat  cot\n\ncog\tdog\n"), WordListFormat::Tokens).unwrap();
        assert_eq!(words, vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn test_read_words_lines_strips_crlf_and_keeps_duplicates() {
        let words = read_words(Cursor::new("cat\r\ncot\r\n\r\ncat\n"), WordListFormat::Lines).unwrap();
        assert_eq!(words, vec!["cat", "cot", "cat"]);
    }

    #[test]
    fn test_read_words_lines_keeps_spaces_and_skips_blank() {
        let words = read_words(Cursor::new("ice cream\n\nice creak\n"), WordListFormat::Lines).unwrap();
        assert_eq!(words, vec!["ice cream", "ice creak"]);
    }

    #[test]
    fn test_load_words_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = load_words(&path, WordListFormat::Lines).unwrap_err();
        assert!(matches!(err, GraphError::WordList { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_load_words_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cold\ncord\ncard\nward\nwarm\n").unwrap();
        let words = load_words(&path, WordListFormat::Lines).unwrap();
        assert_eq!(words.len(), 5);
        assert_eq!(words[4], "warm");
    }

    #[test]
    fn test_build_pairwise() {
        let options = BuildOptions {
            policy: EdgePolicy::Pairwise,
            ..BuildOptions::default()
        };
        let g = build(FIVE, &options);
        assert_eq!(g.vertex_count(), 5);
        // cat-cot, cot-cog, cot-dot, cog-dog, dog-dot; both directions.
        assert_eq!(g.edge_count(), 10);
        assert_eq!(g.neighbors(1), Some(vec![0, 2, 4]));
    }

    #[test]
    fn test_build_substitution_matches_pairwise() {
        let pairwise = build(
            FIVE,
            &BuildOptions {
                policy: EdgePolicy::Pairwise,
                ..BuildOptions::default()
            },
        );
        let substitution = build(FIVE, &BuildOptions::default());
        assert_eq!(pairwise.edge_count(), substitution.edge_count());
        for v in 0..FIVE.len() {
            assert_eq!(pairwise.neighbors(v), substitution.neighbors(v), "vertex {v}");
        }
    }

    #[test]
    fn test_substitution_respects_alphabet() {
        let options = BuildOptions {
            alphabet: vec!['a', 'o'],
            ..BuildOptions::default()
        };
        let g = build(FIVE, &options);
        // Only vowel swaps: cat <-> cot.
        assert_eq!(g.neighbors(0), Some(vec![1]));
        assert_eq!(g.neighbors(2), Some(vec![]));
    }

    #[test]
    fn test_substitution_duplicates_point_at_first() {
        let g = build(["cat", "cot", "cat"], &BuildOptions::default());
        assert_eq!(g.neighbors(0), Some(vec![1]));
        assert_eq!(g.neighbors(1), Some(vec![0]));
        // The duplicate spells the first "cat" at each of its three
        // positions, plus "cot" once.
        assert_eq!(g.neighbors(2), Some(vec![0, 1]));
        assert_eq!(g.edges(2).map(<[_]>::len), Some(1 + 3));
        assert_eq!(g.edge_weight(2, 0), 1);
    }

    #[test]
    fn test_build_weight_and_capacity() {
        let options = BuildOptions {
            weight: 4,
            initial_capacity: 2,
            ..BuildOptions::default()
        };
        let g = build(FIVE, &options);
        assert_eq!(g.capacity(), 8);
        assert_eq!(g.edge_weight(0, 1), 4);
    }
}
