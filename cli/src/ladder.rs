use std::io::{self, BufRead, Write};
use std::time::Instant;

use serde_json::json;
use word_ladder_core::{shortest_path, ShortestPath, VertexId};

use crate::console::Console;
use crate::session::Session;

/// Shortest word ladders between pairs of words entered by the user.
/// Ends on a blank line or end of input.
pub fn run<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> io::Result<()> {
    loop {
        let Some(first) = console.ask("\n>> enter a word (ENTER to quit): ")? else {
            break;
        };
        if first.is_empty() {
            break;
        }
        let Some(from) = resolve(session, console, &first)? else {
            continue;
        };

        let Some(second) = console.ask(">> enter another word (ENTER to quit): ")? else {
            break;
        };
        if second.is_empty() {
            break;
        }
        let Some(to) = resolve(session, console, &second)? else {
            continue;
        };

        let started = Instant::now();
        let result = shortest_path(&session.graph, from, to).unwrap_or(ShortestPath::Unreachable);
        let elapsed = started.elapsed();
        tracing::debug!(from = %first, to = %second, found = result.is_found(), ?elapsed, "shortest_path");

        match (result, console.is_json()) {
            (ShortestPath::Found(path), true) => console.emit(&json!({
                "query": "ladder",
                "from": first,
                "to": second,
                "ladder": path.vertices.iter().map(|&v| session.word(v)).collect::<Vec<_>>(),
                "length": path.hops(),
                "weight": path.weight,
                "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
            }))?,
            (ShortestPath::Unreachable, true) => console.emit(&json!({
                "query": "ladder",
                "from": first,
                "to": second,
                "ladder": null,
            }))?,
            (ShortestPath::Found(path), false) => {
                let out = console.out();
                writeln!(out, "** Shortest word ladder:")?;
                for &v in &path.vertices {
                    writeln!(out, "   {}", session.word(v))?;
                }
                writeln!(out, "   Length: {}", path.hops())?;
                writeln!(out, "   Time:   {:.6} seconds", elapsed.as_secs_f64())?;
            }
            (ShortestPath::Unreachable, false) => {
                writeln!(
                    console.out(),
                    "** There is no word ladder from '{}' to '{}'.",
                    session.word(from),
                    session.word(to)
                )?;
            }
        }
    }

    Ok(())
}

fn resolve<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
    word: &str,
) -> io::Result<Option<VertexId>> {
    let found = session.resolve(word);
    if found.is_none() {
        if console.is_json() {
            console.emit(&json!({ "query": "ladder", "word": word, "error": "word not found" }))?;
        } else {
            writeln!(console.out(), "Word '{word}' not found, please try again...")?;
        }
    }
    Ok(found)
}
