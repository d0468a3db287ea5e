//! word-ladder: build a word graph from a dictionary and answer neighbor,
//! BFS and shortest-ladder queries interactively.

mod config;
mod console;
mod explore;
mod ladder;
mod logging;
mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;
use word_ladder_core::{write_report, GraphSummary};

use config::{Cli, Mode, ReportArg};
use console::Console;
use session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.json {
        writeln!(out, "** Starting Word Ladder App **\n")?;
        writeln!(out, ">>Building Graph from '{}'...", cli.words.display())?;
    }

    let session = Session::load(cli)?;
    tracing::info!(
        source = %session.source.display(),
        vertices = session.graph.vertex_count(),
        edges = session.graph.edge_count(),
        "graph loaded"
    );

    if cli.json {
        let summary = GraphSummary::of(&session.graph, "Word Ladder");
        writeln!(
            out,
            "{}",
            json!({
                "event": "loaded",
                "source": session.source.display().to_string(),
                "vertices": summary.vertices,
                "edges": summary.edges,
                "capacity": summary.capacity,
                "memory_bytes": summary.memory_bytes,
                "build_ms": session.build_time.as_secs_f64() * 1000.0,
            })
        )?;
    } else {
        if cli.report != ReportArg::None {
            write_report(&session.graph, "Word Ladder", cli.report == ReportArg::Complete, &mut out)?;
        }
        writeln!(out, ">>Build time:    {:.6} seconds", session.build_time.as_secs_f64())?;
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), out, cli.json, cli.word_list_format());
    match cli.mode {
        Mode::Explore => explore::run(&session, &mut console)?,
        Mode::Ladder => ladder::run(&session, &mut console)?,
    }

    if !cli.json {
        writeln!(console.out(), "\n** Done **")?;
    }
    Ok(())
}
