//! Store error types.

use thiserror::Error;

/// Errors raised while dispatching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// Middleware kept queueing follow-up actions past the limit.
    ///
    /// The state reached before the limit was hit is kept.
    #[error("Dispatch exceeded {limit} follow-up actions; middleware is likely looping")]
    FollowUpLimit { limit: usize },
}
