use thiserror::Error;

/// Construction-time failures of markup nodes.
///
/// Rendering itself never fails: every node that could be built can be
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("command name must not be empty")]
    EmptyCommandName,

    #[error("invalid matrix shape: {0}")]
    InvalidMatrixShape(String),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
