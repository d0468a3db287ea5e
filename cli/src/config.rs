use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use word_ladder_core::{BuildOptions, EdgePolicy, WordListFormat};

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Interactive word ladders over a dictionary graph.
#[derive(Parser, Debug)]
#[command(name = "word-ladder", version, about)]
pub struct Cli {
    /// Word list to build the graph from
    #[arg(long, env = "WORD_LADDER_WORDS")]
    pub words: PathBuf,

    /// How the word list is split into words
    #[arg(long, value_enum, default_value_t = FormatArg::Lines)]
    pub format: FormatArg,

    /// How edges between words are inferred
    #[arg(long, value_enum, default_value_t = PolicyArg::Substitution)]
    pub policy: PolicyArg,

    /// Letters tried at each position by the substitution policy
    #[arg(long, default_value = DEFAULT_ALPHABET, value_parser = parse_alphabet)]
    pub alphabet: String,

    /// Weight given to every inferred edge
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    pub weight: u32,

    /// Initial vertex capacity; storage doubles when full
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u64).range(1..=1_000_000))]
    pub initial_capacity: u64,

    /// Query loop to run after the graph is built
    #[arg(long, value_enum, default_value_t = Mode::Ladder)]
    pub mode: Mode,

    /// Graph report printed after the build
    #[arg(long, value_enum, default_value_t = ReportArg::Stats)]
    pub report: ReportArg,

    /// Print one JSON object per answer instead of prompts and text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, env = "WORD_LADDER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Tokens,
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Pairwise,
    Substitution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Neighbors and depth-limited BFS around one word
    Explore,
    /// Shortest ladder between two words
    Ladder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    None,
    Stats,
    Complete,
}

fn parse_alphabet(s: &str) -> Result<String, String> {
    if s.chars().any(char::is_whitespace) {
        return Err("alphabet must not contain whitespace".to_string());
    }
    if s.is_empty() {
        return Err("alphabet must not be empty".to_string());
    }
    Ok(s.to_string())
}

impl Cli {
    pub fn word_list_format(&self) -> WordListFormat {
        match self.format {
            FormatArg::Tokens => WordListFormat::Tokens,
            FormatArg::Lines => WordListFormat::Lines,
        }
    }

    pub fn build_options(&self) -> BuildOptions {
        let mut alphabet: Vec<char> = self.alphabet.chars().collect();
        alphabet.sort_unstable();
        alphabet.dedup();

        BuildOptions {
            policy: match self.policy {
                PolicyArg::Pairwise => EdgePolicy::Pairwise,
                PolicyArg::Substitution => EdgePolicy::Substitution,
            },
            alphabet,
            weight: self.weight,
            initial_capacity: self.initial_capacity as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["word-ladder", "--words", "w.txt"]).unwrap();
        assert_eq!(cli.mode, Mode::Ladder);
        assert_eq!(cli.report, ReportArg::Stats);
        let options = cli.build_options();
        assert_eq!(options.policy, EdgePolicy::Substitution);
        assert_eq!(options.alphabet.len(), 26);
        assert_eq!(options.weight, 1);
        assert_eq!(options.initial_capacity, 256);
        assert_eq!(cli.word_list_format(), WordListFormat::Lines);
    }

    #[test]
    fn test_alphabet_deduplicated() {
        let cli = Cli::try_parse_from(["word-ladder", "--words", "w", "--alphabet", "zaza"]).unwrap();
        assert_eq!(cli.build_options().alphabet, vec!['a', 'z']);
    }

    #[test]
    fn test_rejects_empty_alphabet() {
        assert!(Cli::try_parse_from(["word-ladder", "--words", "w", "--alphabet", ""]).is_err());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert!(
            Cli::try_parse_from(["word-ladder", "--words", "w", "--initial-capacity", "0"]).is_err()
        );
    }
}
