use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Data trait used throughout the package
/// to control for floating point numbers.
pub trait FloatData<T>:
    Mul<Output = T>
    + Display
    + Add<Output = T>
    + Div<Output = T>
    + Copy
    + Debug
    + PartialEq
    + PartialOrd
    + AddAssign
    + Sub<Output = T>
    + std::marker::Send
    + std::marker::Sync
{
    /// Zero value.
    const ZERO: T;
    /// Infinity value.
    const INFINITY: T;
    /// Check if value is NaN.
    fn is_nan(self) -> bool;
}

impl FloatData<f64> for f64 {
    const ZERO: f64 = 0.0;
    const INFINITY: f64 = f64::INFINITY;

    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

impl FloatData<f32> for f32 {
    const ZERO: f32 = 0.0;
    const INFINITY: f32 = f32::INFINITY;

    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

/// Contiguous column major matrix, where each column is a point
/// and each row is a feature.
///
/// The values of a single point are stored next to each other, so a point
/// can be handed out as a slice, and whole points can be swapped cheaply.
///
/// # Type Parameters
/// * `T` - The numeric type of the data (e.g., `f32`, `f64`).
pub struct Matrix<'a, T> {
    /// The raw data stored in a single slice.
    pub data: &'a [T],
    /// Number of rows (features) in the matrix.
    pub rows: usize,
    /// Number of columns (points) in the matrix.
    pub cols: usize,
}

impl<'a, T> Matrix<'a, T> {
    /// Create a new Matrix.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        Matrix { data, rows, cols }
    }

    /// Get a single reference to an item in the matrix.
    ///
    /// * `i` - The ith row (feature) of the data to get.
    /// * `j` - the jth column (point) of the data to get.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[j * self.rows + i]
    }

    /// Get all features of a single point.
    ///
    /// * `col` - The index of the point to get.
    pub fn get_col(&self, col: usize) -> &'a [T] {
        &self.data[col * self.rows..(col + 1) * self.rows]
    }
}

/// Mutable column major matrix, used during training where points
/// are reordered in place as nodes are partitioned.
pub struct MatrixMut<'a, T> {
    /// The raw data stored in a single slice.
    pub data: &'a mut [T],
    /// Number of rows (features) in the matrix.
    pub rows: usize,
    /// Number of columns (points) in the matrix.
    pub cols: usize,
}

impl<'a, T> MatrixMut<'a, T> {
    /// Create a new mutable Matrix.
    pub fn new(data: &'a mut [T], rows: usize, cols: usize) -> Self {
        MatrixMut { data, rows, cols }
    }

    /// Get a single reference to an item in the matrix.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[j * self.rows + i]
    }

    /// Get all features of a single point.
    pub fn get_col(&self, col: usize) -> &[T] {
        &self.data[col * self.rows..(col + 1) * self.rows]
    }

    /// Swap two points in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let rows = self.rows;
        let (head, tail) = self.data.split_at_mut(hi * rows);
        head[lo * rows..(lo + 1) * rows].swap_with_slice(&mut tail[..rows]);
    }
}

impl<'a, T> MatrixMut<'a, T>
where
    T: Copy,
{
    /// Copy the values of a feature for the points in `start..stop` into `buffer`.
    pub fn copy_row_range(&self, row: usize, start: usize, stop: usize, buffer: &mut Vec<T>) {
        buffer.clear();
        buffer.extend((start..stop).map(|j| *self.get(row, j)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_get() {
        let v = vec![1, 2, 3, 5, 6, 7];
        let m = Matrix::new(&v, 2, 3);
        assert_eq!(m.get(0, 0), &1);
        assert_eq!(m.get(1, 0), &2);
        assert_eq!(m.get(0, 2), &6);
        assert_eq!(m.get(1, 1), &5);
    }

    #[test]
    fn test_matrix_get_col() {
        let v = vec![1, 2, 3, 5, 6, 7];
        let m = Matrix::new(&v, 3, 2);
        assert_eq!(m.get_col(1), &vec![5, 6, 7]);
        assert_eq!(m.get_col(0), &vec![1, 2, 3]);
    }

    #[test]
    fn test_matrix_mut_swap_cols() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut m = MatrixMut::new(&mut v, 3, 3);
        m.swap_cols(2, 0);
        assert_eq!(m.get_col(0), &[7, 8, 9]);
        assert_eq!(m.get_col(2), &[1, 2, 3]);
        m.swap_cols(1, 1);
        assert_eq!(m.get_col(1), &[4, 5, 6]);
        m.swap_cols(0, 1);
        assert_eq!(m.data, &[4, 5, 6, 7, 8, 9, 1, 2, 3]);
    }

    #[test]
    fn test_matrix_mut_copy_row_range() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let m = MatrixMut::new(&mut v, 2, 4);
        let mut buffer = vec![100];
        m.copy_row_range(1, 1, 3, &mut buffer);
        assert_eq!(buffer, vec![4, 6]);
    }
}
