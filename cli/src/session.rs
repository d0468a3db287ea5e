use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use word_ladder_core::{build, load_words, Graph, VertexId};

use crate::config::Cli;

/// The loaded word graph and how it was built.
pub struct Session {
    pub graph: Graph,
    pub source: PathBuf,
    pub build_time: Duration,
}

impl Session {
    /// Read the configured word list and build its graph.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let start = Instant::now();

        let words = load_words(&cli.words, cli.word_list_format())
            .with_context(|| format!("failed to load word list '{}'", cli.words.display()))?;
        let graph = build(&words, &cli.build_options());

        Ok(Self {
            graph,
            source: cli.words.clone(),
            build_time: start.elapsed(),
        })
    }

    /// Resolve a word typed by the user to its vertex.
    pub fn resolve(&self, word: &str) -> Option<VertexId> {
        self.graph.lookup(word)
    }

    /// Word for a vertex id produced by a query on this graph.
    pub fn word(&self, v: VertexId) -> &str {
        self.graph.name(v).unwrap_or("?")
    }

    /// `(id,word)` rendering used in listings.
    pub fn label(&self, v: VertexId) -> String {
        format!("({},{})", v, self.word(v))
    }

    pub fn json_vertex(&self, v: VertexId) -> serde_json::Value {
        serde_json::json!({ "id": v, "word": self.word(v) })
    }
}
