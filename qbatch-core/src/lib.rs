//! Core types for the qbatch batch-expectation engine
//!
//! This crate provides the circuit-model side of the pipeline:
//! - [`Program`]: abstract gate sequences with symbolic parameters
//! - [`SymbolBinding`]: numeric values for the symbols of one circuit
//! - [`build_circuit`]: resolve a program against a binding
//! - [`Circuit`]: the resolved gate list plus its fused form
//!
//! # Example
//! ```
//! use qbatch_core::{build_circuit, GateKind, Program, ProgramOp, SymbolBinding};
//!
//! let mut program = Program::new(2);
//! program.add(ProgramOp::fixed(GateKind::H, &[0]));
//! program.add(ProgramOp::fixed(GateKind::CNot, &[0, 1]));
//!
//! let binding = SymbolBinding::empty();
//! let circuit = build_circuit(&program, &binding).unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//! ```

pub mod builder;
pub mod circuit;
pub mod error;
pub mod fusion;
pub mod matrices;
pub mod program;
pub mod qubit;
pub mod symbol;

// Re-exports for convenience
pub use builder::build_circuit;
pub use circuit::{Circuit, FusedOp, ResolvedGate};
pub use error::ConstructionError;
pub use num_complex::Complex64;
pub use program::{GateKind, Param, Program, ProgramOp};
pub use qubit::QubitId;
pub use symbol::SymbolBinding;

/// Type alias for circuit-construction results
pub type Result<T> = std::result::Result<T, ConstructionError>;
