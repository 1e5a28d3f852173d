//! Interaction scripts.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! open
//! type ban
//! toggle fruit.banana
//! select-all
//! clear
//! scroll 1700
//! rows
//! commit
//! ```

use std::str::FromStr;

use thiserror::Error;

/// One widget interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Focus the input.
    Open,
    /// Replace the query text. The rest of the line is the query, so it may
    /// contain spaces or be empty.
    Type(String),
    /// Activate the row with this path-key.
    Toggle(String),
    /// Activate the select-all entry.
    SelectAll,
    /// Press the clear button.
    Clear,
    /// Blur the input.
    Commit,
    /// Scroll the list to this offset in pixels.
    Scroll(f64),
    /// Print the rendered rows.
    Rows,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument { line: usize, command: String },

    #[error("line {line}: invalid scroll offset '{value}'")]
    InvalidOffset { line: usize, value: String },
}

impl ScriptError {
    fn at_line(self, line: usize) -> Self {
        match self {
            Self::UnknownCommand { command, .. } => Self::UnknownCommand { line, command },
            Self::MissingArgument { command, .. } => Self::MissingArgument { line, command },
            Self::InvalidOffset { value, .. } => Self::InvalidOffset { line, value },
        }
    }
}

impl FromStr for Command {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, Some(rest)),
            None => (line, None),
        };
        let argument = || {
            rest.map(str::trim)
                .filter(|arg| !arg.is_empty())
                .map(str::to_string)
                .ok_or_else(|| ScriptError::MissingArgument {
                    line: 0,
                    command: command.to_string(),
                })
        };

        match command {
            "open" => Ok(Self::Open),
            "type" => Ok(Self::Type(rest.unwrap_or_default().to_string())),
            "toggle" => Ok(Self::Toggle(argument()?)),
            "select-all" => Ok(Self::SelectAll),
            "clear" => Ok(Self::Clear),
            "commit" => Ok(Self::Commit),
            "scroll" => {
                let value = argument()?;
                value
                    .parse()
                    .map(Self::Scroll)
                    .map_err(|_| ScriptError::InvalidOffset { line: 0, value })
            }
            "rows" => Ok(Self::Rows),
            other => Err(ScriptError::UnknownCommand {
                line: 0,
                command: other.to_string(),
            }),
        }
    }
}

/// Parse a whole script.
pub fn parse(script: &str) -> Result<Vec<Command>, ScriptError> {
    script
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            Some(line.parse::<Command>().map_err(|err| err.at_line(index + 1)))
        })
        .collect()
}
