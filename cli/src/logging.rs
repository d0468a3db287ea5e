use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging to stderr.
///
/// `WORD_LADDER_LOG` (or `RUST_LOG`) overrides the level chosen on the
/// command line.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("word_ladder={level}"),
        (true, None) => "word_ladder=debug".to_string(),
        (false, None) => "word_ladder=warn".to_string(),
    };

    let filter = EnvFilter::try_from_env("WORD_LADDER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
