//! Build errors for closure-backed states.

use thiserror::Error;

/// Errors that can occur when building a [`FnState`](crate::builder::FnState).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State name not specified. Call .name(name) before .build()")]
    MissingName,

    #[error("Exit condition not specified. Call .exit_when(predicate) before .build()")]
    MissingExitCondition,
}
