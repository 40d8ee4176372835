use super::config::ConfigError;
use crate::core::io::table::TableError;
use crate::render::error::RenderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read score table '{path}': {source}", path = path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("Failed to render chart '{path}': {source}", path = path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}
