pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

/// How human-facing command output is rendered. Exports are always JSON.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Prints `lines` in text mode or `json_value` in JSON mode.
    pub fn emit<T, I, S>(&self, lines: I, json_value: &T) -> AppResult<()>
    where
        T: Serialize,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.mode {
            OutputMode::Text => text::print_lines(lines),
            OutputMode::Json => json::print(json_value),
        }
    }
}
