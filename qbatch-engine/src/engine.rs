//! Batch expectation engine
//!
//! The engine couples a parallel construction front-end with a strictly
//! sequential, buffer-reusing simulation back-end. Construction fans out
//! over rayon and forms an all-or-nothing barrier; simulation then drives
//! one [`SimulationContext`] over the circuits in index order, growing it
//! as larger circuits appear, and fills one output row per circuit.

use crate::config::BatchConfig;
use crate::context::SimulationContext;
use crate::error::{BatchError, Result};
use crate::result::ExpectationMatrix;
use crate::scheduler::build_batch;
use qbatch_core::Program;
use qbatch_state::PauliSum;
use tracing::debug;

/// Row value written for circuits whose fused gate sequence is empty
///
/// A zero-gate circuit skips expectation estimation entirely and reports
/// this sentinel in every observable slot instead of simulating the
/// pristine |0…0⟩ state.
pub const EMPTY_CIRCUIT_SENTINEL: f64 = -2.0;

/// Batch expectation-value engine
///
/// # Example
/// ```
/// use qbatch_core::{GateKind, Program, ProgramOp};
/// use qbatch_engine::{BatchConfig, BatchEngine};
/// use qbatch_state::{Pauli, PauliSum, PauliTerm};
///
/// let mut program = Program::new(1);
/// program.add(ProgramOp::fixed(GateKind::X, &[0]));
///
/// let observable = PauliSum::from_term(PauliTerm::new(1.0, vec![(0, Pauli::Z)]));
/// let engine = BatchEngine::new(BatchConfig::default());
/// let matrix = engine
///     .simulate_expectation(&[program], &[], &[vec![]], &[vec![observable]])
///     .unwrap();
///
/// // ⟨1|Z|1⟩ = -1
/// assert!((matrix.get(0, 0) + 1.0).abs() < 1e-10);
/// ```
pub struct BatchEngine {
    config: BatchConfig,
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}

impl BatchEngine {
    /// Create an engine with the given configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Evaluate every observable against every circuit of a batch
    ///
    /// Inputs: `programs` (B abstract circuits), `symbol_names` (K shared
    /// names), `symbol_values` (B rows of K values), `observables` (B lists
    /// of M weighted-Pauli sums). Returns the B×M expectation matrix.
    ///
    /// # Errors
    /// - [`BatchError::InvalidArgument`] on any shape mismatch, before work
    ///   starts
    /// - [`BatchError::Construction`] if any circuit fails to build; no
    ///   circuit simulates in that case
    /// - [`BatchError::Simulation`] / [`BatchError::Expectation`] abort the
    ///   sequential pass immediately; the matrix is not returned
    pub fn simulate_expectation(
        &self,
        programs: &[Program],
        symbol_names: &[String],
        symbol_values: &[Vec<f64>],
        observables: &[Vec<PauliSum>],
    ) -> Result<ExpectationMatrix> {
        let num_columns = validate_inputs(programs, symbol_names, symbol_values, observables)?;
        debug!(
            batch = programs.len(),
            symbols = symbol_names.len(),
            observables = num_columns,
            "starting batch expectation"
        );

        // Parallel phase: all-or-nothing construction barrier
        let circuits = build_batch(programs, symbol_names, symbol_values, self.config.chunk_size)?;

        let mut matrix = ExpectationMatrix::zeros(circuits.len(), num_columns);
        if circuits.is_empty() {
            return Ok(matrix);
        }

        // Sequential phase: one shared context, grown on demand
        let mut context = SimulationContext::new()?;
        for (index, circuit) in circuits.iter().enumerate() {
            if circuit.fused_ops().is_empty() {
                matrix.fill_row(index, EMPTY_CIRCUIT_SENTINEL);
                continue;
            }

            context.run(index, circuit)?;

            let (state, scratch) = context.buffers();
            for (slot, observable) in observables[index].iter().enumerate() {
                let value = observable
                    .expectation(state, scratch)
                    .map_err(|source| BatchError::Expectation {
                        index,
                        slot,
                        source,
                    })?;
                matrix.set(index, slot, value);
            }
        }

        Ok(matrix)
    }
}

/// Check every shape precondition, returning the column count M
fn validate_inputs(
    programs: &[Program],
    symbol_names: &[String],
    symbol_values: &[Vec<f64>],
    observables: &[Vec<PauliSum>],
) -> Result<usize> {
    let batch = programs.len();
    if symbol_values.len() != batch {
        return Err(BatchError::InvalidArgument(format!(
            "got {} programs but {} symbol-value rows",
            batch,
            symbol_values.len()
        )));
    }
    if observables.len() != batch {
        return Err(BatchError::InvalidArgument(format!(
            "got {} programs but {} observable lists",
            batch,
            observables.len()
        )));
    }

    let num_symbols = symbol_names.len();
    for (index, row) in symbol_values.iter().enumerate() {
        if row.len() != num_symbols {
            return Err(BatchError::InvalidArgument(format!(
                "symbol-value row {} has {} entries, expected {}",
                index,
                row.len(),
                num_symbols
            )));
        }
    }

    // The column count is fixed by the observable batch's first row; every
    // other row must match it exactly, checked here rather than trusted at
    // write time.
    let num_columns = observables.first().map(Vec::len).unwrap_or(0);
    for (index, list) in observables.iter().enumerate() {
        if list.len() != num_columns {
            return Err(BatchError::InvalidArgument(format!(
                "circuit {} has {} observables, expected {}",
                index,
                list.len(),
                num_columns
            )));
        }
    }

    Ok(num_columns)
}
