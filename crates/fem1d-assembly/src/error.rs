//! Error types for fem1d-assembly

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssemblyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssemblyError {
    /// The problem description cannot be assembled (empty mesh, non-positive element size).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AssemblyError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        AssemblyError::InvalidInput(msg.into())
    }
}
