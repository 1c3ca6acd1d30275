//! Batched energy sweep over a hardware-efficient ansatz
//!
//! Builds one circuit per angle in a sweep, evaluates a transverse-field
//! Ising Hamiltonian against each, and prints the resulting energies. The
//! whole sweep is a single batch call: construction runs in parallel,
//! simulation reuses one state buffer across all circuits.
//!
//! Run with: cargo run --example ansatz_sweep

use qbatch_core::{GateKind, Param, Program, ProgramOp};
use qbatch_engine::{BatchConfig, BatchEngine};
use qbatch_state::{Pauli, PauliSum, PauliTerm};

const NUM_QUBITS: usize = 4;
const SWEEP_POINTS: usize = 16;

fn hardware_efficient_ansatz() -> Program {
    let mut program = Program::new(NUM_QUBITS);
    for q in 0..NUM_QUBITS {
        program.add(ProgramOp::with_param(
            GateKind::Ry,
            &[q],
            Param::symbol("theta"),
        ));
    }
    for q in 0..NUM_QUBITS - 1 {
        program.add(ProgramOp::fixed(GateKind::CNot, &[q, q + 1]));
    }
    for q in 0..NUM_QUBITS {
        program.add(ProgramOp::with_param(
            GateKind::Rz,
            &[q],
            Param::scaled_symbol("theta", 0.5),
        ));
    }
    program
}

/// Transverse-field Ising model: -Σ Z_q Z_{q+1} - 0.5 Σ X_q
fn ising_hamiltonian() -> PauliSum {
    let mut hamiltonian = PauliSum::new();
    for q in 0..NUM_QUBITS - 1 {
        hamiltonian.add_term(PauliTerm::new(-1.0, vec![(q, Pauli::Z), (q + 1, Pauli::Z)]));
    }
    for q in 0..NUM_QUBITS {
        hamiltonian.add_term(PauliTerm::new(-0.5, vec![(q, Pauli::X)]));
    }
    hamiltonian
}

fn main() {
    println!("=== Batched Ansatz Energy Sweep ===\n");
    println!(
        "{} qubits, {} sweep points, Hamiltonian with {} terms\n",
        NUM_QUBITS,
        SWEEP_POINTS,
        ising_hamiltonian().num_terms()
    );

    let programs = vec![hardware_efficient_ansatz(); SWEEP_POINTS];
    let names = vec!["theta".to_string()];
    let values: Vec<Vec<f64>> = (0..SWEEP_POINTS)
        .map(|i| vec![std::f64::consts::PI * i as f64 / SWEEP_POINTS as f64])
        .collect();
    let observables = vec![vec![ising_hamiltonian()]; SWEEP_POINTS];

    let engine = BatchEngine::new(BatchConfig::new().with_chunk_size(4));
    let matrix = engine
        .simulate_expectation(&programs, &names, &values, &observables)
        .expect("sweep batch failed");

    println!("{:>8}  {:>10}", "theta", "energy");
    let mut best = (0usize, f64::INFINITY);
    for i in 0..SWEEP_POINTS {
        let energy = matrix.get(i, 0);
        println!("{:>8.4}  {:>10.6}", values[i][0], energy);
        if energy < best.1 {
            best = (i, energy);
        }
    }

    println!(
        "\nminimum energy {:.6} at theta = {:.4}",
        best.1, values[best.0][0]
    );
}
