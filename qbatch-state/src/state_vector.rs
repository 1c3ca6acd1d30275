//! State vector representation with aligned memory

use crate::error::{Result, StateError};
use num_complex::Complex64;
use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

/// Alignment requirement for vectorized kernels (64 bytes for AVX-512)
const ALIGNMENT: usize = 64;

/// Practical upper bound on qubit count for a dense amplitude vector
const MAX_QUBITS: usize = 30;

/// Dense quantum state vector with 64-byte aligned memory
///
/// Represents a quantum state over `num_qubits` qubits as 2^n complex
/// amplitudes. Allocation is aligned so downstream kernels may assume
/// vector-friendly layout.
///
/// # Example
/// ```
/// use qbatch_state::StateVector;
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
pub struct StateVector {
    /// Number of qubits
    num_qubits: usize,

    /// State dimension (2^num_qubits)
    dimension: usize,

    /// Pointer to aligned amplitude data
    data: NonNull<Complex64>,

    /// Memory layout for deallocation
    layout: Layout,
}

impl StateVector {
    /// Create a new state vector initialized to |0…0⟩
    ///
    /// # Errors
    /// Returns an error if `num_qubits` exceeds the dense-representation
    /// limit or the allocation fails.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        let size = dimension * std::mem::size_of::<Complex64>();
        let layout = Layout::from_size_align(size, ALIGNMENT)
            .map_err(|_| StateError::AllocationError { size })?;

        let data = unsafe {
            let ptr = alloc(layout) as *mut Complex64;
            if ptr.is_null() {
                return Err(StateError::AllocationError { size });
            }

            std::ptr::write_bytes(ptr, 0, dimension);
            (*ptr) = Complex64::new(1.0, 0.0);

            NonNull::new_unchecked(ptr)
        };

        Ok(Self {
            num_qubits,
            dimension,
            data,
            layout,
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.dimension) }
    }

    /// Get a mutable reference to the state amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        unsafe { std::slice::from_raw_parts_mut(self.data.as_ptr(), self.dimension) }
    }

    /// Reset the state to |0…0⟩
    pub fn reset(&mut self) {
        unsafe {
            std::ptr::write_bytes(self.data.as_ptr(), 0, self.dimension);
            (*self.data.as_ptr()) = Complex64::new(1.0, 0.0);
        }
    }

    /// Copy another state vector's amplitudes into this one
    ///
    /// # Errors
    /// Returns an error if the dimensions differ.
    pub fn copy_from(&mut self, other: &StateVector) -> Result<()> {
        if self.dimension != other.dimension {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension,
                actual: other.dimension,
            });
        }

        unsafe {
            std::ptr::copy_nonoverlapping(other.data.as_ptr(), self.data.as_ptr(), self.dimension);
        }
        Ok(())
    }

    /// Compute the inner product ⟨self|other⟩
    ///
    /// # Errors
    /// Returns an error if the dimensions differ.
    pub fn inner_product(&self, other: &StateVector) -> Result<Complex64> {
        if self.dimension != other.dimension {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension,
                actual: other.dimension,
            });
        }

        Ok(self
            .amplitudes()
            .iter()
            .zip(other.amplitudes().iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes()
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }
}

impl Drop for StateVector {
    fn drop(&mut self) {
        unsafe {
            dealloc(self.data.as_ptr() as *mut u8, self.layout);
        }
    }
}

impl std::fmt::Debug for StateVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateVector")
            .field("num_qubits", &self.num_qubits)
            .field("dimension", &self.dimension)
            .field("norm", &self.norm())
            .finish()
    }
}

// Safety: StateVector owns its data and ensures exclusive access
unsafe impl Send for StateVector {}
unsafe impl Sync for StateVector {}
