//! Line buffer for the widget text, printed in one write.

use std::io::{self, Write};

use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Starred,
    Alarm,
}

#[derive(Debug, Default, Clone)]
pub struct OutputBuilder {
    result: String,
}

impl OutputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn into_result(self) -> String {
        self.result
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Append `line` followed by `" \n"`, coloured if `emphasis` is set.
    pub fn add_line(&mut self, line: &str, emphasis: Option<Emphasis>) -> &mut Self {
        let line = format!("{line} \n");
        match emphasis {
            None => self.result.push_str(&line),
            Some(Emphasis::Starred) => self.result.push_str(&line.dark_yellow().to_string()),
            Some(Emphasis::Alarm) => self.result.push_str(&line.dark_red().to_string()),
        }
        self
    }

    pub fn add_separator(&mut self) -> &mut Self {
        self.add_line("", None)
    }

    /// Emit the whole buffer with a single write.
    pub fn print<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.result.as_bytes())?;
        sink.flush()
    }
}
