//! Resolved circuit representation
//!
//! A [`Circuit`] is the post-binding form of a program: every parameter has
//! been substituted, every gate is a concrete matrix or a dedicated
//! two-qubit operation. Circuits also carry a fused form — adjacent
//! single-qubit gates on the same qubit collapsed into one matrix — which
//! is what the simulation context actually applies.

use crate::QubitId;
use num_complex::Complex64;
use std::fmt;

/// A concrete gate operation after parameter substitution
#[derive(Clone, Debug)]
pub enum ResolvedGate {
    /// A single-qubit gate with its 2×2 unitary
    Single {
        /// Gate name for diagnostics
        name: &'static str,
        /// Target qubit
        qubit: QubitId,
        /// Row-major unitary
        matrix: [[Complex64; 2]; 2],
    },
    /// Controlled-NOT
    CNot { control: QubitId, target: QubitId },
    /// Controlled-Z (symmetric in its qubits)
    CZ { a: QubitId, b: QubitId },
}

impl ResolvedGate {
    /// The qubits this gate touches
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        let (first, second) = match *self {
            ResolvedGate::Single { qubit, .. } => (qubit, None),
            ResolvedGate::CNot { control, target } => (control, Some(target)),
            ResolvedGate::CZ { a, b } => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

impl fmt::Display for ResolvedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedGate::Single { name, qubit, .. } => write!(f, "{}({})", name, qubit),
            ResolvedGate::CNot { control, target } => write!(f, "CNOT({}, {})", control, target),
            ResolvedGate::CZ { a, b } => write!(f, "CZ({}, {})", a, b),
        }
    }
}

/// One operation of a fused gate sequence
///
/// Runs of single-qubit gates on the same qubit appear here as a single
/// composed matrix; two-qubit gates pass through unchanged.
#[derive(Clone, Debug)]
pub enum FusedOp {
    /// A composed single-qubit unitary
    Single {
        qubit: QubitId,
        matrix: [[Complex64; 2]; 2],
    },
    /// Controlled-NOT
    CNot { control: QubitId, target: QubitId },
    /// Controlled-Z
    CZ { a: QubitId, b: QubitId },
}

/// A resolved circuit with its fused form
///
/// Immutable once built; constructed only through [`crate::build_circuit`].
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    ops: Vec<ResolvedGate>,
    fused: Vec<FusedOp>,
}

impl Circuit {
    pub(crate) fn new(num_qubits: usize, ops: Vec<ResolvedGate>, fused: Vec<FusedOp>) -> Self {
        Self {
            num_qubits,
            ops,
            fused,
        }
    }

    /// The declared qubit count
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The resolved gate operations, in application order
    pub fn ops(&self) -> &[ResolvedGate] {
        &self.ops
    }

    /// The fused gate sequence the simulator applies
    pub fn fused_ops(&self) -> &[FusedOp] {
        &self.fused
    }

    /// Number of resolved gate operations
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the circuit has no gate operations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} ops, {} fused)",
            self.num_qubits,
            self.ops.len(),
            self.fused.len()
        )?;
        for (i, op) in self.ops.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
