use thiserror::Error;

/// Errors surfaced at the model boundary. The simulation core itself is
/// total: numeric degeneracies (zero-magnitude vectors, drained health) are
/// defined as no-ops, never faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("precondition failed: {0}")]
    PreconditionFailed(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
