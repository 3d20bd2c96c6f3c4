//! FILENAME: core/functions/src/error.rs

use engine::EngineError;
use thiserror::Error;

/// A failed call. The host decides how to surface the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

pub type FunctionResult<T> = Result<T, FunctionError>;
