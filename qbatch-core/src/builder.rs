//! Circuit construction: program + binding → resolved circuit
//!
//! Construction is a pure function of its inputs; it touches no shared
//! state, so the scheduler can run many builds concurrently.

use crate::circuit::{Circuit, ResolvedGate};
use crate::error::ConstructionError;
use crate::fusion::fuse;
use crate::matrices;
use crate::program::{GateKind, Param, Program, ProgramOp};
use crate::symbol::SymbolBinding;
use crate::Result;

/// Build a resolved circuit from a program and its symbol binding
///
/// Validates every gate (qubit arity, range, duplicates, parameter count),
/// substitutes symbol references, and computes the fused gate sequence.
///
/// # Errors
/// Returns a [`ConstructionError`] naming the offending gate if the program
/// declares no qubits, addresses a qubit out of range, or references a
/// symbol the binding does not contain.
///
/// # Example
/// ```
/// use qbatch_core::{build_circuit, GateKind, Param, Program, ProgramOp, SymbolBinding};
///
/// let mut program = Program::new(1);
/// program.add(ProgramOp::with_param(GateKind::Rx, &[0], Param::symbol("theta")));
///
/// let names = vec!["theta".to_string()];
/// let binding = SymbolBinding::from_rows(&names, &[std::f64::consts::PI]);
/// let circuit = build_circuit(&program, &binding).unwrap();
/// assert_eq!(circuit.len(), 1);
/// ```
pub fn build_circuit(program: &Program, binding: &SymbolBinding) -> Result<Circuit> {
    if program.num_qubits() == 0 {
        return Err(ConstructionError::EmptyProgram);
    }

    let mut ops = Vec::with_capacity(program.len());
    for (gate_index, op) in program.ops().iter().enumerate() {
        validate_qubits(gate_index, op, program.num_qubits())?;
        ops.push(resolve_gate(gate_index, op, binding)?);
    }

    let fused = fuse(&ops);
    Ok(Circuit::new(program.num_qubits(), ops, fused))
}

fn validate_qubits(gate_index: usize, op: &ProgramOp, num_qubits: usize) -> Result<()> {
    let expected = op.kind.num_qubits();
    if op.qubits.len() != expected {
        return Err(ConstructionError::InvalidQubitCount {
            gate_index,
            gate: op.kind.name(),
            expected,
            actual: op.qubits.len(),
        });
    }

    for &qubit in &op.qubits {
        if qubit.index() >= num_qubits {
            return Err(ConstructionError::QubitOutOfRange {
                gate_index,
                qubit,
                num_qubits,
            });
        }
    }

    if op.qubits.len() == 2 && op.qubits[0] == op.qubits[1] {
        return Err(ConstructionError::DuplicateQubit {
            gate_index,
            gate: op.kind.name(),
            qubit: op.qubits[0],
        });
    }

    Ok(())
}

fn resolve_gate(gate_index: usize, op: &ProgramOp, binding: &SymbolBinding) -> Result<ResolvedGate> {
    let expected = op.kind.num_params();
    if op.params.len() != expected {
        return Err(ConstructionError::InvalidParamCount {
            gate_index,
            gate: op.kind.name(),
            expected,
            actual: op.params.len(),
        });
    }

    let matrix = match op.kind {
        GateKind::H => matrices::HADAMARD,
        GateKind::X => matrices::PAULI_X,
        GateKind::Y => matrices::PAULI_Y,
        GateKind::Z => matrices::PAULI_Z,
        GateKind::S => matrices::S_GATE,
        GateKind::T => matrices::T_GATE,
        GateKind::Rx => matrices::rx(resolve_param(gate_index, &op.params[0], binding)?),
        GateKind::Ry => matrices::ry(resolve_param(gate_index, &op.params[0], binding)?),
        GateKind::Rz => matrices::rz(resolve_param(gate_index, &op.params[0], binding)?),
        GateKind::PhaseShift => {
            matrices::phase_shift(resolve_param(gate_index, &op.params[0], binding)?)
        }
        GateKind::CNot => {
            return Ok(ResolvedGate::CNot {
                control: op.qubits[0],
                target: op.qubits[1],
            })
        }
        GateKind::CZ => {
            return Ok(ResolvedGate::CZ {
                a: op.qubits[0],
                b: op.qubits[1],
            })
        }
    };

    Ok(ResolvedGate::Single {
        name: op.kind.name(),
        qubit: op.qubits[0],
        matrix,
    })
}

fn resolve_param(gate_index: usize, param: &Param, binding: &SymbolBinding) -> Result<f64> {
    match param {
        Param::Const(value) => Ok(*value),
        Param::Symbol { name, coeff } => {
            let value = binding
                .get(name)
                .ok_or_else(|| ConstructionError::UnknownSymbol {
                    gate_index,
                    name: name.clone(),
                })?;
            Ok(coeff * value)
        }
    }
}
