//! Batch result matrix

use std::fmt;

/// Dense B×M matrix of expectation values, row-major by circuit
///
/// Row `i` holds circuit `i`'s expectations, one column per observable
/// slot. Cells are independent scalars; the engine writes each exactly
/// once.
///
/// # Example
/// ```
/// use qbatch_engine::ExpectationMatrix;
///
/// let mut matrix = ExpectationMatrix::zeros(2, 3);
/// matrix.set(1, 2, 0.5);
/// assert_eq!(matrix.get(1, 2), 0.5);
/// assert_eq!(matrix.row(0), &[0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectationMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ExpectationMatrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows (circuits)
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (observable slots)
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read one cell
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Write one cell
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// One circuit's full row
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Fill an entire row with one value
    pub fn fill_row(&mut self, row: usize, value: f64) {
        self.data[row * self.cols..(row + 1) * self.cols].fill(value);
    }

    /// The raw row-major storage
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl fmt::Display for ExpectationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ExpectationMatrix({}×{})", self.rows, self.cols)?;
        for row in 0..self.rows {
            write!(f, "  [")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:+.6}", self.get(row, col))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let matrix = ExpectationMatrix::zeros(3, 2);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 2);
        assert!(matrix.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_row_major_layout() {
        let mut matrix = ExpectationMatrix::zeros(2, 3);
        matrix.set(0, 2, 1.0);
        matrix.set(1, 0, -1.0);
        assert_eq!(matrix.as_slice(), &[0.0, 0.0, 1.0, -1.0, 0.0, 0.0]);
        assert_eq!(matrix.row(1), &[-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fill_row() {
        let mut matrix = ExpectationMatrix::zeros(2, 2);
        matrix.fill_row(0, -2.0);
        assert_eq!(matrix.row(0), &[-2.0, -2.0]);
        assert_eq!(matrix.row(1), &[0.0, 0.0]);
    }

    #[test]
    fn test_zero_width_matrix() {
        let matrix = ExpectationMatrix::zeros(4, 0);
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 0);
        assert!(matrix.row(2).is_empty());
    }
}
