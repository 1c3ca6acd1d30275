//! Scalar gate-application kernels
//!
//! These operate directly on amplitude slices so both the simulation loop
//! and the observable evaluator can share them. The two-qubit gates in the
//! supported vocabulary (CNOT, CZ) have dedicated kernels; the generic 4×4
//! path is not needed.

use num_complex::Complex64;

/// Apply a 2×2 matrix to a state vector (single-qubit gate)
///
/// # Arguments
/// * `state` - Mutable slice of state amplitudes, length 2^num_qubits
/// * `matrix` - 2×2 gate matrix in row-major order
/// * `qubit` - Index of the qubit to apply the gate to
/// * `num_qubits` - Total number of qubits in the state
pub fn apply_single_qubit_gate(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    qubit: usize,
    num_qubits: usize,
) {
    let dimension = 1usize << num_qubits;
    let qubit_mask = 1usize << qubit;

    // Extract matrix elements for better cache locality
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for i in 0..dimension {
        // Process amplitude pairs from their "low" member
        if i & qubit_mask != 0 {
            continue;
        }

        let j = i | qubit_mask;

        let amp0 = state[i];
        let amp1 = state[j];

        state[i] = m00 * amp0 + m01 * amp1;
        state[j] = m10 * amp0 + m11 * amp1;
    }
}

/// Apply a CNOT gate by direct amplitude swap
///
/// Swaps the pair of amplitudes whose control bit is set, which is much
/// faster than a general 4×4 multiplication.
pub fn apply_cnot(state: &mut [Complex64], control: usize, target: usize, num_qubits: usize) {
    let dimension = 1usize << num_qubits;
    let control_mask = 1usize << control;
    let target_mask = 1usize << target;

    for i in 0..dimension {
        // Visit each swap pair once, from the target-clear member
        if i & control_mask == 0 || i & target_mask != 0 {
            continue;
        }
        state.swap(i, i | target_mask);
    }
}

/// Apply a CZ gate: negate the amplitude where both qubits are |1⟩
pub fn apply_cz(state: &mut [Complex64], qubit_a: usize, qubit_b: usize, num_qubits: usize) {
    let dimension = 1usize << num_qubits;
    let mask = (1usize << qubit_a) | (1usize << qubit_b);

    for (i, amp) in state.iter_mut().enumerate().take(dimension) {
        if i & mask == mask {
            *amp = -*amp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ONE: Complex64 = Complex64::new(1.0, 0.0);
    const ZERO: Complex64 = Complex64::new(0.0, 0.0);

    const X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

    fn hadamard() -> [[Complex64; 2]; 2] {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        [
            [Complex64::new(h, 0.0), Complex64::new(h, 0.0)],
            [Complex64::new(h, 0.0), Complex64::new(-h, 0.0)],
        ]
    }

    #[test]
    fn test_x_flips_qubit() {
        let mut state = vec![ONE, ZERO, ZERO, ZERO];
        apply_single_qubit_gate(&mut state, &X, 1, 2);

        // |00⟩ → |10⟩ (qubit 1 set means index 2)
        assert_eq!(state[0], ZERO);
        assert_eq!(state[2], ONE);
    }

    #[test]
    fn test_hadamard_creates_superposition() {
        let mut state = vec![ONE, ZERO];
        apply_single_qubit_gate(&mut state, &hadamard(), 0, 1);

        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(state[0].re, h, epsilon = 1e-12);
        assert_relative_eq!(state[1].re, h, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_entangles() {
        // H on qubit 0, then CNOT(0→1): Bell state (|00⟩ + |11⟩)/√2
        let mut state = vec![ONE, ZERO, ZERO, ZERO];
        apply_single_qubit_gate(&mut state, &hadamard(), 0, 2);
        apply_cnot(&mut state, 0, 1, 2);

        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(state[0].re, h, epsilon = 1e-12);
        assert_relative_eq!(state[3].re, h, epsilon = 1e-12);
        assert_relative_eq!(state[1].norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(state[2].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_control_clear_is_identity() {
        let mut state = vec![ONE, ZERO, ZERO, ZERO];
        apply_cnot(&mut state, 0, 1, 2);
        assert_eq!(state[0], ONE);
    }

    #[test]
    fn test_cz_phases_only_11() {
        let amp = Complex64::new(0.5, 0.0);
        let mut state = vec![amp; 4];
        apply_cz(&mut state, 0, 1, 2);

        assert_eq!(state[0], amp);
        assert_eq!(state[1], amp);
        assert_eq!(state[2], amp);
        assert_eq!(state[3], -amp);
    }

    #[test]
    fn test_gate_on_padded_state_leaves_idle_qubits_alone() {
        // 3-qubit buffer, gate on qubit 0 only: amplitudes with qubit 1 or 2
        // set must stay zero
        let mut state = vec![ZERO; 8];
        state[0] = ONE;
        apply_single_qubit_gate(&mut state, &X, 0, 3);

        assert_eq!(state[1], ONE);
        for &i in &[0usize, 2, 3, 4, 5, 6, 7] {
            assert_eq!(state[i], ZERO, "index {}", i);
        }
    }
}
