//! Adaptive simulation context: a reusable state/scratch buffer pair
//!
//! One context is created per batch invocation and driven sequentially over
//! the batch's circuits. Capacity only ever grows: a circuit larger than
//! the current buffers triggers a reallocation, a smaller one simulates
//! inside the existing space with its idle qubits left in |0⟩, which does
//! not perturb any observable expectation. Reuse trades a small excess of
//! memory (sized to the batch's largest circuit) for avoiding one state
//! allocation per circuit.

use crate::error::{BatchError, Result};
use qbatch_core::{Circuit, FusedOp};
use qbatch_state::kernels::{apply_cnot, apply_cz, apply_single_qubit_gate};
use qbatch_state::StateVector;
use tracing::{debug, trace};

/// Reusable state and scratch buffers for sequential batch simulation
///
/// # Example
/// ```
/// use qbatch_engine::SimulationContext;
///
/// let mut context = SimulationContext::new().unwrap();
/// assert_eq!(context.capacity(), 1);
/// context.grow(0, 3).unwrap();
/// assert_eq!(context.capacity(), 3);
/// context.grow(0, 2).unwrap(); // never shrinks
/// assert_eq!(context.capacity(), 3);
/// ```
pub struct SimulationContext {
    capacity: usize,
    state: StateVector,
    scratch: StateVector,
}

impl SimulationContext {
    /// Create a context with the minimal one-qubit capacity
    pub fn new() -> Result<Self> {
        let state = StateVector::new(1).map_err(|source| BatchError::Simulation {
            index: 0,
            source,
        })?;
        let scratch = StateVector::new(1).map_err(|source| BatchError::Simulation {
            index: 0,
            source,
        })?;
        Ok(Self {
            capacity: 1,
            state,
            scratch,
        })
    }

    /// Current capacity in qubits (monotonically non-decreasing)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grow both buffers to hold `num_qubits` qubits if they are smaller
    ///
    /// `index` identifies the circuit being prepared, for error reporting.
    ///
    /// # Errors
    /// Fails if the larger buffers cannot be allocated.
    pub fn grow(&mut self, index: usize, num_qubits: usize) -> Result<()> {
        if num_qubits <= self.capacity {
            return Ok(());
        }

        debug!(from = self.capacity, to = num_qubits, "growing simulation context");
        self.state =
            StateVector::new(num_qubits).map_err(|source| BatchError::Simulation { index, source })?;
        self.scratch =
            StateVector::new(num_qubits).map_err(|source| BatchError::Simulation { index, source })?;
        self.capacity = num_qubits;
        Ok(())
    }

    /// Reset the state buffer to |0…0⟩ at the current capacity
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Apply one fused operation to the state buffer
    pub fn apply(&mut self, op: &FusedOp) {
        let n = self.capacity;
        let amps = self.state.amplitudes_mut();
        match op {
            FusedOp::Single { qubit, matrix } => {
                apply_single_qubit_gate(amps, matrix, qubit.index(), n);
            }
            FusedOp::CNot { control, target } => {
                apply_cnot(amps, control.index(), target.index(), n);
            }
            FusedOp::CZ { a, b } => {
                apply_cz(amps, a.index(), b.index(), n);
            }
        }
    }

    /// Prepare the context for circuit `index` and apply its fused sequence
    ///
    /// Grows the buffers if the circuit needs more qubits, resets the state
    /// to |0…0⟩, then applies every fused operation in order.
    pub fn run(&mut self, index: usize, circuit: &Circuit) -> Result<()> {
        self.grow(index, circuit.num_qubits())?;
        self.reset();

        trace!(
            index,
            qubits = circuit.num_qubits(),
            fused_ops = circuit.fused_ops().len(),
            "simulating circuit"
        );
        for op in circuit.fused_ops() {
            self.apply(op);
        }
        Ok(())
    }

    /// The current state buffer
    #[inline]
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Split borrow: the state buffer plus the mutable scratch buffer
    ///
    /// This is the shape the expectation primitive wants: it reads the
    /// state and clobbers the scratch.
    #[inline]
    pub fn buffers(&mut self) -> (&StateVector, &mut StateVector) {
        (&self.state, &mut self.scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qbatch_core::{build_circuit, GateKind, Program, ProgramOp, SymbolBinding};
    use qbatch_state::Complex64;

    fn circuit_of(program: Program) -> Circuit {
        build_circuit(&program, &SymbolBinding::empty()).unwrap()
    }

    #[test]
    fn test_new_context_has_unit_capacity() {
        let context = SimulationContext::new().unwrap();
        assert_eq!(context.capacity(), 1);
        assert_eq!(context.state().dimension(), 2);
    }

    #[test]
    fn test_grow_is_monotone() {
        let mut context = SimulationContext::new().unwrap();
        context.grow(0, 4).unwrap();
        assert_eq!(context.capacity(), 4);
        context.grow(1, 2).unwrap();
        assert_eq!(context.capacity(), 4);
        assert_eq!(context.state().dimension(), 16);
    }

    #[test]
    fn test_grow_failure_names_circuit() {
        let mut context = SimulationContext::new().unwrap();
        let err = context.grow(7, 64).unwrap_err();
        assert!(matches!(err, BatchError::Simulation { index: 7, .. }));
    }

    #[test]
    fn test_run_resets_between_circuits() {
        let mut flip = Program::new(1);
        flip.add(ProgramOp::fixed(GateKind::X, &[0]));
        let flip = circuit_of(flip);
        let identity = circuit_of(Program::new(1));

        let mut context = SimulationContext::new().unwrap();
        context.run(0, &flip).unwrap();
        assert_relative_eq!(context.state().amplitudes()[1].re, 1.0, epsilon = 1e-12);

        // Second run must not see the flipped amplitude
        context.run(1, &identity).unwrap();
        assert_relative_eq!(context.state().amplitudes()[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(context.state().amplitudes()[1].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_small_circuit_in_grown_buffer() {
        // Grow to 3 qubits, then run a 1-qubit circuit: idle qubits stay |0⟩
        let mut context = SimulationContext::new().unwrap();
        context.grow(0, 3).unwrap();

        let mut program = Program::new(1);
        program.add(ProgramOp::fixed(GateKind::H, &[0]));
        context.run(1, &circuit_of(program)).unwrap();

        let amps = context.state().amplitudes();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(amps[0].re, h, epsilon = 1e-12);
        assert_relative_eq!(amps[1].re, h, epsilon = 1e-12);
        for amp in &amps[2..] {
            assert_eq!(*amp, Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_bell_state_via_fused_sequence() {
        let mut program = Program::new(2);
        program.add(ProgramOp::fixed(GateKind::H, &[0]));
        program.add(ProgramOp::fixed(GateKind::CNot, &[0, 1]));

        let mut context = SimulationContext::new().unwrap();
        context.run(0, &circuit_of(program)).unwrap();

        let amps = context.state().amplitudes();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(amps[0].re, h, epsilon = 1e-12);
        assert_relative_eq!(amps[3].re, h, epsilon = 1e-12);
    }
}
