use std::path::PathBuf;

use formtree::FormTreeError;
use thiserror::Error;

use crate::script::ScriptError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    FormTree(#[from] FormTreeError),

    #[error("invalid config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("failed to encode output: {0}")]
    Output(#[source] serde_json::Error),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl CliError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
