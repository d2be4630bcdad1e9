use std::path::PathBuf;

use thiserror::Error;

/// Failure reading screen descriptors from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid screen descriptor in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failure reported by a custom action or the service executing it.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("action '{action}' is not available on screen '{screen}'")]
    Unavailable { screen: String, action: String },

    #[error("action '{action}' failed: {message}")]
    Failed { action: String, message: String },
}

/// Failure of a CLI subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("no screen named '{0}'")]
    UnknownScreen(String),

    #[error("no screens found at {0}")]
    NoScreens(String),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
