use std::error::Error;
use std::result;

use thiserror::Error;

pub type GenericResult<T> = result::Result<T, Box<dyn Error>>;
pub type EvalResult<T> = result::Result<T, EvalError>;

/// Failures the evaluator can raise. All three kinds are fatal to the
/// evaluation in progress; the language has no recovery construct.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Syntax error: {0}")]
    Syntax(String),
    #[error("Type error: {0}")]
    Type(String),
    #[error("Math error: {0}")]
    Math(String),
}
