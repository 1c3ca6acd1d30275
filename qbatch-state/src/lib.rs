//! State-vector primitive for the qbatch expectation engine
//!
//! This crate is the "external collaborator" side of the pipeline: an
//! aligned dense [`StateVector`] with zero-reset and copy, scalar gate
//! kernels, and weighted-Pauli observables whose expectation is estimated
//! against a state buffer using a scratch buffer of equal size.
//!
//! Qubits are addressed by raw `usize` index here; the type-safe
//! [`qbatch_core::QubitId`](https://docs.rs/qbatch-core) wrapper stays in
//! the circuit-model layer.
//!
//! # Example
//! ```
//! use qbatch_state::{Pauli, PauliSum, PauliTerm, StateVector};
//!
//! let state = StateVector::new(1).unwrap();
//! let mut scratch = StateVector::new(1).unwrap();
//!
//! // ⟨0|Z|0⟩ = 1
//! let observable = PauliSum::from_term(PauliTerm::new(1.0, vec![(0, Pauli::Z)]));
//! let value = observable.expectation(&state, &mut scratch).unwrap();
//! assert!((value - 1.0).abs() < 1e-10);
//! ```

pub mod error;
pub mod kernels;
pub mod observable;
pub mod state_vector;

pub use error::{Result, StateError};
pub use num_complex::Complex64;
pub use observable::{Pauli, PauliSum, PauliTerm};
pub use state_vector::StateVector;
