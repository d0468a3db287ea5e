use std::io::{self, BufRead, Write};

use word_ladder_core::WordListFormat;

/// Line-oriented prompt/answer channel for the query loops.
///
/// Answers are split like the word list: the whole line for
/// [`WordListFormat::Lines`], the first token for [`WordListFormat::Tokens`].
/// In JSON mode prompts are suppressed and answers are written as one JSON
/// object per line.
pub struct Console<R, W> {
    input: R,
    output: W,
    json: bool,
    format: WordListFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, json: bool, format: WordListFormat) -> Self {
        Self {
            input,
            output,
            json,
            format,
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Show `prompt` and read one answer from the next line, or `""` for a
    /// blank line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !self.json {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = match self.format {
            WordListFormat::Tokens => line.split_whitespace().next().unwrap_or(""),
            WordListFormat::Lines => line.trim_end_matches(['\r', '\n']),
        };
        Ok(Some(answer.to_string()))
    }

    pub fn emit(&mut self, value: &serde_json::Value) -> io::Result<()> {
        writeln!(self.output, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_first_token() {
        let mut console = Console::new(
            Cursor::new("  cold warm\n\n"),
            Vec::new(),
            false,
            WordListFormat::Tokens,
        );
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("cold"));
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some(""));
        assert_eq!(console.ask("> ").unwrap(), None);
        assert_eq!(String::from_utf8(console.output).unwrap(), "> > > ");
    }

    #[test]
    fn test_ask_reads_whole_line() {
        let mut console = Console::new(
            Cursor::new("ice cream\r\n\n"),
            Vec::new(),
            false,
            WordListFormat::Lines,
        );
        assert_eq!(console.ask("").unwrap().as_deref(), Some("ice cream"));
        assert_eq!(console.ask("").unwrap().as_deref(), Some(""));
        assert_eq!(console.ask("").unwrap(), None);
    }

    #[test]
    fn test_json_mode_suppresses_prompts() {
        let mut console = Console::new(Cursor::new("cold\r\n"), Vec::new(), true, WordListFormat::Lines);
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("cold"));
        console.emit(&serde_json::json!({ "ok": true })).unwrap();
        assert_eq!(String::from_utf8(console.output).unwrap(), "{\"ok\":true}\n");
    }
}
