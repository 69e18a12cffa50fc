use thiserror::Error;

use crate::catalog::BookId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("Duplicate book id {0} in seed data")]
    DuplicateId(BookId),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("No book ids left to allocate")]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
