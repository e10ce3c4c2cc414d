//! Error types for ADR operations.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level result type for ADR operations.
pub type Result<T> = std::result::Result<T, AdrError>;

/// Top-level error type for ADR operations.
#[derive(Debug, Error)]
pub enum AdrError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("record already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while parsing or rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unknown field '.{0}'")]
    UnknownField(String),

    #[error("cannot range over '.{0}': not a list")]
    NotIterable(String),

    #[error("template context cannot be serialized: {0}")]
    Context(String),
}
