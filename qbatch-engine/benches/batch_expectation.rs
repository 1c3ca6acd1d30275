//! Benchmarks for the batch expectation pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qbatch_core::{GateKind, Param, Program, ProgramOp};
use qbatch_engine::{BatchConfig, BatchEngine};
use qbatch_state::{Pauli, PauliSum, PauliTerm};

fn layered_ansatz(num_qubits: usize, layers: usize) -> Program {
    let mut program = Program::new(num_qubits);
    for layer in 0..layers {
        for q in 0..num_qubits {
            program.add(ProgramOp::with_param(
                GateKind::Ry,
                &[q],
                Param::scaled_symbol("theta", (layer * num_qubits + q + 1) as f64),
            ));
        }
        for q in 0..num_qubits - 1 {
            program.add(ProgramOp::fixed(GateKind::CNot, &[q, q + 1]));
        }
    }
    program
}

fn batch_inputs(
    batch: usize,
    num_qubits: usize,
) -> (Vec<Program>, Vec<String>, Vec<Vec<f64>>, Vec<Vec<PauliSum>>) {
    let programs = vec![layered_ansatz(num_qubits, 3); batch];
    let names = vec!["theta".to_string()];
    let values: Vec<Vec<f64>> = (0..batch).map(|i| vec![0.017 * i as f64]).collect();

    let mut hamiltonian = PauliSum::new();
    for q in 0..num_qubits - 1 {
        hamiltonian.add_term(PauliTerm::new(1.0, vec![(q, Pauli::Z), (q + 1, Pauli::Z)]));
    }
    let observables = vec![vec![hamiltonian]; batch];

    (programs, names, values, observables)
}

fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_expectation");
    for batch in [8usize, 32, 128] {
        let (programs, names, values, observables) = batch_inputs(batch, 6);
        let engine = BatchEngine::new(BatchConfig::default());

        group.bench_with_input(BenchmarkId::from_parameter(batch), &batch, |b, _| {
            b.iter(|| {
                let matrix = engine
                    .simulate_expectation(
                        black_box(&programs),
                        black_box(&names),
                        black_box(&values),
                        black_box(&observables),
                    )
                    .unwrap();
                black_box(matrix)
            });
        });
    }
    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction_chunking");
    let (programs, names, values, observables) = batch_inputs(64, 6);

    for chunk_size in [1usize, 16, 64] {
        let engine = BatchEngine::new(BatchConfig::new().with_chunk_size(chunk_size));
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, _| {
                b.iter(|| {
                    let matrix = engine
                        .simulate_expectation(
                            black_box(&programs),
                            black_box(&names),
                            black_box(&values),
                            black_box(&observables),
                        )
                        .unwrap();
                    black_box(matrix)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_batch_sizes, bench_chunk_sizes);
criterion_main!(benches);
