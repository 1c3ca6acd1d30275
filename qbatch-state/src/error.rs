//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Requested state too large to allocate
    #[error("cannot allocate a {num_qubits}-qubit state (limit {max_qubits})")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Dimension mismatch between buffers
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Memory allocation failure
    #[error("failed to allocate {size} bytes for state vector")]
    AllocationError { size: usize },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
