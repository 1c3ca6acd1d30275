//! Weighted-Pauli observables and expectation estimation
//!
//! Observables are sums of weighted Pauli terms. Each term is qubit-sparse:
//! it lists only the qubits carrying a non-identity Pauli factor. The
//! expectation ⟨ψ|P|ψ⟩ is estimated by building P|ψ⟩ in a caller-provided
//! scratch buffer and taking the inner product with the state, so a batch
//! loop can reuse one scratch allocation across every term.

use crate::error::{Result, StateError};
use crate::kernels::apply_single_qubit_gate;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use std::fmt;

/// Single-qubit Pauli operator (non-identity)
///
/// Identity factors are implicit: a term simply omits the qubits it acts
/// trivially on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Pauli X (bit flip)
    X,
    /// Pauli Y
    Y,
    /// Pauli Z (phase flip)
    Z,
}

impl Pauli {
    /// The operator's 2×2 matrix
    pub fn matrix(self) -> [[Complex64; 2]; 2] {
        const ZERO: Complex64 = Complex64::new(0.0, 0.0);
        const ONE: Complex64 = Complex64::new(1.0, 0.0);
        const I: Complex64 = Complex64::new(0.0, 1.0);
        const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
        const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

        match self {
            Pauli::X => [[ZERO, ONE], [ONE, ZERO]],
            Pauli::Y => [[ZERO, NEG_I], [I, ZERO]],
            Pauli::Z => [[ONE, ZERO], [ZERO, NEG_ONE]],
        }
    }

    /// Character representation
    pub fn to_char(self) -> char {
        match self {
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One weighted Pauli term: a real coefficient times a product of Pauli
/// factors over a subset of qubits
///
/// A term with no factors is the weighted identity; its expectation against
/// a normalized state is the coefficient itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliTerm {
    coefficient: f64,
    factors: Vec<(usize, Pauli)>,
}

impl PauliTerm {
    /// Create a term from a coefficient and its (qubit, Pauli) factors
    pub fn new(coefficient: f64, factors: Vec<(usize, Pauli)>) -> Self {
        Self {
            coefficient,
            factors,
        }
    }

    /// The term's coefficient
    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The term's (qubit, Pauli) factors
    pub fn factors(&self) -> &[(usize, Pauli)] {
        &self.factors
    }

    /// Highest qubit index this term touches, if any
    pub fn max_qubit(&self) -> Option<usize> {
        self.factors.iter().map(|&(q, _)| q).max()
    }

    /// Estimate this term's expectation against `state`
    ///
    /// Builds P|ψ⟩ in `scratch` and returns `coefficient · Re⟨ψ|P|ψ⟩`.
    ///
    /// # Errors
    /// Returns an error if a factor addresses a qubit outside the state, or
    /// if the buffers' dimensions differ.
    pub fn expectation(&self, state: &StateVector, scratch: &mut StateVector) -> Result<f64> {
        let num_qubits = state.num_qubits();
        for &(qubit, _) in &self.factors {
            if qubit >= num_qubits {
                return Err(StateError::InvalidQubitIndex {
                    index: qubit,
                    num_qubits,
                });
            }
        }

        scratch.copy_from(state)?;
        for &(qubit, pauli) in &self.factors {
            apply_single_qubit_gate(scratch.amplitudes_mut(), &pauli.matrix(), qubit, num_qubits);
        }

        Ok(self.coefficient * state.inner_product(scratch)?.re)
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.coefficient)?;
        for (qubit, pauli) in &self.factors {
            write!(f, "·{}{}", pauli, qubit)?;
        }
        Ok(())
    }
}

/// An ordered sum of weighted Pauli terms
///
/// # Example
/// ```
/// use qbatch_state::{Pauli, PauliSum, PauliTerm};
///
/// // 0.5·Z0 + 0.5·Z1
/// let mut sum = PauliSum::new();
/// sum.add_term(PauliTerm::new(0.5, vec![(0, Pauli::Z)]));
/// sum.add_term(PauliTerm::new(0.5, vec![(1, Pauli::Z)]));
/// assert_eq!(sum.num_terms(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PauliSum {
    terms: Vec<PauliTerm>,
}

impl PauliSum {
    /// Create an empty sum
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sum holding a single term
    pub fn from_term(term: PauliTerm) -> Self {
        Self { terms: vec![term] }
    }

    /// Append a term
    pub fn add_term(&mut self, term: PauliTerm) {
        self.terms.push(term);
    }

    /// The terms, in insertion order
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Whether the sum has no terms
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Estimate the expectation of the full sum against `state`
    ///
    /// An empty sum evaluates to 0.0.
    ///
    /// # Errors
    /// Fails on the first term whose estimation fails.
    pub fn expectation(&self, state: &StateVector, scratch: &mut StateVector) -> Result<f64> {
        let mut total = 0.0;
        for term in &self.terms {
            total += term.expectation(state, scratch)?;
        }
        Ok(total)
    }
}

impl fmt::Display for PauliSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
