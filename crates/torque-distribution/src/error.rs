//! Error types for distribution-function evaluation.
use thiserror::Error;

/// Why a distribution function could not be evaluated.
///
/// Every variant is a deterministic function of the input — callers decide
/// user-visible behavior (hide the reward, show a placeholder); retrying
/// never helps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("missing parameter: {0}")] MissingParameter(&'static str),
    #[error("step function has no tiers")] EmptyTierList,
    #[error("division by zero: curveWidth is zero")] DivisionByZero,
    #[error("unsupported function type")] UnsupportedFunctionType,
    #[error("decimal overflow")] Overflow,
}
