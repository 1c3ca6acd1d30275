//! Batch expectation-value orchestration engine
//!
//! Given B parameterized programs, a shared symbol vocabulary, one numeric
//! value row per circuit, and B lists of M weighted-Pauli observables, the
//! engine produces the dense B×M matrix of expectation values. Circuits are
//! built in parallel behind an all-or-nothing barrier, then simulated
//! sequentially against one adaptively grown [`SimulationContext`].
//!
//! # Example
//! ```
//! use qbatch_core::{GateKind, Param, Program, ProgramOp};
//! use qbatch_engine::{BatchConfig, BatchEngine};
//! use qbatch_state::{Pauli, PauliSum, PauliTerm};
//!
//! // One RX(theta) circuit per theta value, measured in Z
//! let mut program = Program::new(1);
//! program.add(ProgramOp::with_param(GateKind::Rx, &[0], Param::symbol("theta")));
//!
//! let programs = vec![program.clone(), program];
//! let names = vec!["theta".to_string()];
//! let values = vec![vec![0.0], vec![std::f64::consts::PI]];
//! let z0 = PauliSum::from_term(PauliTerm::new(1.0, vec![(0, Pauli::Z)]));
//! let observables = vec![vec![z0.clone()], vec![z0]];
//!
//! let engine = BatchEngine::new(BatchConfig::default());
//! let matrix = engine
//!     .simulate_expectation(&programs, &names, &values, &observables)
//!     .unwrap();
//!
//! assert!((matrix.get(0, 0) - 1.0).abs() < 1e-10); // RX(0)  → ⟨Z⟩ = +1
//! assert!((matrix.get(1, 0) + 1.0).abs() < 1e-10); // RX(π)  → ⟨Z⟩ = -1
//! ```

pub mod collector;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod result;
pub mod scheduler;

pub use config::BatchConfig;
pub use context::SimulationContext;
pub use engine::{BatchEngine, EMPTY_CIRCUIT_SENTINEL};
pub use error::{BatchError, Result};
pub use result::ExpectationMatrix;
