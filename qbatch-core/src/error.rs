//! Error types for circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors raised while translating a program and binding into a circuit
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    /// Program declares no qubits
    #[error("program must declare at least one qubit")]
    EmptyProgram,

    /// A gate references a symbol the binding does not contain
    #[error("gate {gate_index} references unknown symbol '{name}'")]
    UnknownSymbol { gate_index: usize, name: String },

    /// A gate was given the wrong number of qubits
    #[error("gate {gate_index} ('{gate}') requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate_index: usize,
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A gate addresses a qubit outside the declared range
    #[error("gate {gate_index} uses qubit {qubit}, but the program declares only {num_qubits} qubits")]
    QubitOutOfRange {
        gate_index: usize,
        qubit: QubitId,
        num_qubits: usize,
    },

    /// The same qubit appears twice in one gate operation
    #[error("gate {gate_index} ('{gate}') uses duplicate qubit {qubit}")]
    DuplicateQubit {
        gate_index: usize,
        gate: &'static str,
        qubit: QubitId,
    },

    /// A gate was given the wrong number of parameters
    #[error("gate {gate_index} ('{gate}') requires {expected} parameters, but {actual} were provided")]
    InvalidParamCount {
        gate_index: usize,
        gate: &'static str,
        expected: usize,
        actual: usize,
    },
}
