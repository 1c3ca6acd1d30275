//! Gate matrices for the supported gate vocabulary
//!
//! Fixed gates are compile-time constants; rotation gates are computed from
//! their resolved angle. All matrices are 2×2 except the two-qubit gates,
//! which are applied through dedicated kernels and have no matrix here.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard gate matrix
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix (NOT gate)
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
pub const PAULI_Y: [[Complex64; 2]; 2] = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate matrix
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// S gate matrix (√Z)
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

/// T gate matrix (⁴√Z)
pub const T_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)],
];

/// RX(θ) rotation matrix
pub fn rx(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// RY(θ) rotation matrix
pub fn ry(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// RZ(θ) rotation matrix
pub fn rz(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    [
        [Complex64::new(half.cos(), -half.sin()), ZERO],
        [ZERO, Complex64::new(half.cos(), half.sin())],
    ]
}

/// Phase-shift gate matrix: diag(1, e^{iθ})
pub fn phase_shift(theta: f64) -> [[Complex64; 2]; 2] {
    [[ONE, ZERO], [ZERO, Complex64::new(theta.cos(), theta.sin())]]
}

/// Multiply two 2×2 complex matrices: result = a · b
///
/// Used by gate fusion to compose adjacent single-qubit gates. When gate A
/// is applied before gate B, the fused matrix is `multiply_2x2(&b, &a)`.
#[inline]
pub fn multiply_2x2(
    a: &[[Complex64; 2]; 2],
    b: &[[Complex64; 2]; 2],
) -> [[Complex64; 2]; 2] {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}
