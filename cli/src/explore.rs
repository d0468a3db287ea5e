use std::io::{self, BufRead, Write};
use std::time::Instant;

use serde_json::json;
use word_ladder_core::{bfs_limited, VertexId};

use crate::console::Console;
use crate::session::Session;

/// Neighbors plus depth-limited BFS around words entered by the user.
/// Ends on a blank line or end of input.
pub fn run<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> io::Result<()> {
    loop {
        let Some(word) = console.ask("\n>> enter a word (ENTER to quit): ")? else {
            break;
        };
        if word.is_empty() {
            break;
        }

        let Some(v) = session.resolve(&word) else {
            if console.is_json() {
                console.emit(&json!({ "query": "explore", "word": word, "error": "word not found" }))?;
            } else {
                writeln!(console.out(), "Word not found, please try again...")?;
            }
            continue;
        };

        let neighbors = session.graph.neighbors(v).unwrap_or_default();
        if !console.is_json() {
            writeln!(console.out(), "** Neighbors:")?;
            writeln!(console.out(), "   {}", render(session, &neighbors))?;
        }

        let Some(answer) = console.ask(">> enter a BFS distance: ")? else {
            break;
        };
        let distance: u32 = match answer.trim().parse() {
            Ok(d) => d,
            Err(_) => {
                if console.is_json() {
                    console.emit(&json!({
                        "query": "explore",
                        "word": word,
                        "error": format!("invalid distance '{answer}'"),
                    }))?;
                } else {
                    writeln!(console.out(), "Invalid distance '{answer}', please try again...")?;
                }
                continue;
            }
        };

        let started = Instant::now();
        let layers = bfs_limited(&session.graph, v, distance).unwrap_or_default();
        tracing::debug!(
            word = %word,
            distance,
            layers = layers.len(),
            elapsed = ?started.elapsed(),
            "bfs_limited"
        );

        if console.is_json() {
            let rendered: Vec<Vec<serde_json::Value>> = layers
                .iter()
                .map(|(_, layer)| layer.iter().map(|&u| session.json_vertex(u)).collect())
                .collect();
            console.emit(&json!({
                "query": "explore",
                "word": word,
                "id": v,
                "neighbors": neighbors.iter().map(|&u| session.json_vertex(u)).collect::<Vec<_>>(),
                "distance": distance,
                "layers": rendered,
            }))?;
        } else {
            // One line per requested distance, empty once the reachable
            // set is exhausted.
            writeln!(console.out(), "** BFS:")?;
            for d in 0..=distance as usize {
                let layer = layers.layer(d).unwrap_or_default();
                writeln!(console.out(), "   distance {d}: {}", render(session, layer))?;
            }
        }
    }

    Ok(())
}

fn render(session: &Session, ids: &[VertexId]) -> String {
    ids.iter()
        .map(|&u| session.label(u))
        .collect::<Vec<_>>()
        .join(" ")
}
