//! CLI error types.

use shelf_config::ConfigError;
use shelf_index::IndexError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Sidebar(#[from] shelf_nav::ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}
