use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to obtain the raw schema text.
#[derive(Debug, Error)]
pub enum SchemaRetrievalError {
    #[error("could not reach schema source {origin}")]
    Transport {
        origin: String,
        #[source]
        source: BoxError,
    },
    #[error("schema source {origin} answered with status {status}")]
    Status { origin: String, status: u16 },
}

impl SchemaRetrievalError {
    pub fn transport(origin: impl Into<String>, source: impl Into<BoxError>) -> Self {
        SchemaRetrievalError::Transport {
            origin: origin.into(),
            source: source.into(),
        }
    }

    pub fn status(origin: impl Into<String>, status: u16) -> Self {
        SchemaRetrievalError::Status {
            origin: origin.into(),
            status,
        }
    }
}

/// Where the tabular schema text comes from.
#[async_trait(?Send)]
pub trait SchemaSource {
    /// Human-readable location, used in diagnostics.
    fn origin(&self) -> String;

    async fn fetch_schema_text(&self) -> Result<String, SchemaRetrievalError>;
}

/// Schema text that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticSchemaSource {
    text: String,
}

impl StaticSchemaSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait(?Send)]
impl SchemaSource for StaticSchemaSource {
    fn origin(&self) -> String {
        "<inline>".to_string()
    }

    async fn fetch_schema_text(&self) -> Result<String, SchemaRetrievalError> {
        Ok(self.text.clone())
    }
}

/// Schema text read from a local CSV file.
#[derive(Debug, Clone)]
pub struct FileSchemaSource {
    path: PathBuf,
}

impl FileSchemaSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait(?Send)]
impl SchemaSource for FileSchemaSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_schema_text(&self) -> Result<String, SchemaRetrievalError> {
        debug!(path = %self.path.display(), "reading schema file");
        std::fs::read_to_string(&self.path)
            .map_err(|err| SchemaRetrievalError::transport(self.origin(), err))
    }
}
