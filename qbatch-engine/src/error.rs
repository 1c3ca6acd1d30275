//! Error types for the batch engine

use qbatch_core::ConstructionError;
use qbatch_state::StateError;
use thiserror::Error;

/// Result type for batch engine operations
pub type Result<T> = std::result::Result<T, BatchError>;

/// Errors that can occur during a batch expectation invocation
///
/// Every variant is terminal for the whole batch: there are no retries and
/// no partial-success contract. On failure the output matrix is unspecified.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BatchError {
    /// Mismatched input shapes or batch sizes, detected before any work
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A circuit failed to build during the parallel construction phase
    ///
    /// Reported after the full construction barrier completes; when several
    /// circuits fail, the first failure observed wins.
    #[error("circuit {index} failed to build")]
    Construction {
        index: usize,
        #[source]
        source: ConstructionError,
    },

    /// The simulation context could not be prepared for a circuit
    #[error("circuit {index} failed to simulate")]
    Simulation {
        index: usize,
        #[source]
        source: StateError,
    },

    /// An observable's expectation could not be estimated
    #[error("circuit {index}, observable {slot}: expectation failed")]
    Expectation {
        index: usize,
        slot: usize,
        #[source]
        source: StateError,
    },
}
