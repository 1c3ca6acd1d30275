//! Abstract program descriptions with symbolic parameters
//!
//! A [`Program`] is the pre-binding form of a circuit: an ordered list of
//! gate operations whose parameters may reference named symbols. The batch
//! engine receives these already parsed; [`crate::build_circuit`] turns a
//! program plus a [`crate::SymbolBinding`] into a concrete [`crate::Circuit`].

use crate::QubitId;
use smallvec::SmallVec;
use std::fmt;

/// The gate vocabulary understood by the builder
///
/// Fixed gates carry no parameters; the rotation and phase gates carry
/// exactly one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Hadamard
    H,
    /// Pauli-X
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// S gate (√Z)
    S,
    /// T gate (⁴√Z)
    T,
    /// X rotation, RX(θ)
    Rx,
    /// Y rotation, RY(θ)
    Ry,
    /// Z rotation, RZ(θ)
    Rz,
    /// Phase shift, diag(1, e^{iθ})
    PhaseShift,
    /// Controlled-NOT (control, target)
    CNot,
    /// Controlled-Z
    CZ,
}

impl GateKind {
    /// Gate name as written in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::Rx => "RX",
            GateKind::Ry => "RY",
            GateKind::Rz => "RZ",
            GateKind::PhaseShift => "PHASE",
            GateKind::CNot => "CNOT",
            GateKind::CZ => "CZ",
        }
    }

    /// Number of qubits this gate acts on
    pub const fn num_qubits(self) -> usize {
        match self {
            GateKind::CNot | GateKind::CZ => 2,
            _ => 1,
        }
    }

    /// Number of parameters this gate requires
    pub const fn num_params(self) -> usize {
        match self {
            GateKind::Rx | GateKind::Ry | GateKind::Rz | GateKind::PhaseShift => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A gate parameter: either a literal value or a scaled symbol reference
///
/// Symbol references resolve to `coeff * value(name)` during construction,
/// so a single symbol can drive several gates at different scales.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// A fixed numeric value
    Const(f64),
    /// A named symbol scaled by a constant coefficient
    Symbol { name: String, coeff: f64 },
}

impl Param {
    /// A symbol reference with coefficient 1.0
    pub fn symbol(name: impl Into<String>) -> Self {
        Param::Symbol {
            name: name.into(),
            coeff: 1.0,
        }
    }

    /// A symbol reference scaled by `coeff`
    pub fn scaled_symbol(name: impl Into<String>, coeff: f64) -> Self {
        Param::Symbol {
            name: name.into(),
            coeff,
        }
    }
}

/// One gate operation of a program
#[derive(Clone, Debug, PartialEq)]
pub struct ProgramOp {
    /// Which gate to apply
    pub kind: GateKind,
    /// The qubits it acts on, in gate order (e.g. control before target)
    pub qubits: SmallVec<[QubitId; 2]>,
    /// Its parameters, if any
    pub params: SmallVec<[Param; 1]>,
}

impl ProgramOp {
    /// Create a parameterless gate operation
    pub fn fixed(kind: GateKind, qubits: &[usize]) -> Self {
        Self {
            kind,
            qubits: qubits.iter().copied().map(QubitId::new).collect(),
            params: SmallVec::new(),
        }
    }

    /// Create a gate operation with a single parameter
    pub fn with_param(kind: GateKind, qubits: &[usize], param: Param) -> Self {
        let mut params = SmallVec::new();
        params.push(param);
        Self {
            kind,
            qubits: qubits.iter().copied().map(QubitId::new).collect(),
            params,
        }
    }
}

/// An abstract circuit description before parameter substitution
///
/// # Example
/// ```
/// use qbatch_core::{GateKind, Param, Program, ProgramOp};
///
/// let mut program = Program::new(2);
/// program.add(ProgramOp::fixed(GateKind::H, &[0]));
/// program.add(ProgramOp::with_param(GateKind::Rz, &[1], Param::symbol("theta")));
/// assert_eq!(program.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    num_qubits: usize,
    ops: Vec<ProgramOp>,
}

impl Program {
    /// Create an empty program over `num_qubits` qubits
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ops: Vec::new(),
        }
    }

    /// The declared qubit count
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Append a gate operation
    pub fn add(&mut self, op: ProgramOp) {
        self.ops.push(op);
    }

    /// The gate operations, in application order
    pub fn ops(&self) -> &[ProgramOp] {
        &self.ops
    }

    /// Number of gate operations
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the program has no gate operations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_kind_arity() {
        assert_eq!(GateKind::H.num_qubits(), 1);
        assert_eq!(GateKind::CNot.num_qubits(), 2);
        assert_eq!(GateKind::Rz.num_params(), 1);
        assert_eq!(GateKind::CZ.num_params(), 0);
    }

    #[test]
    fn test_program_accumulates_ops() {
        let mut program = Program::new(3);
        assert!(program.is_empty());

        program.add(ProgramOp::fixed(GateKind::X, &[2]));
        program.add(ProgramOp::with_param(
            GateKind::Rx,
            &[0],
            Param::scaled_symbol("alpha", 2.0),
        ));

        assert_eq!(program.len(), 2);
        assert_eq!(program.ops()[0].kind, GateKind::X);
        assert_eq!(program.ops()[0].qubits[0].index(), 2);
        assert_eq!(
            program.ops()[1].params[0],
            Param::Symbol {
                name: "alpha".to_string(),
                coeff: 2.0
            }
        );
    }
}
