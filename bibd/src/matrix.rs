use crate::error::{Error, Result};
use crate::row::*;
use rand::Rng;
use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

/// A dense matrix of integers
///
/// The matrix is stored in row-major order in a single contiguous buffer, so entry `(i, j)` lives at
/// `data[i * cols + j]`. Matrices are never resized once created, and every operation that derives
/// a new matrix (transpose, product, basis, ...) allocates a fresh buffer, so no two matrices ever
/// share storage.
///
/// Entries of an incidence matrix are 0 or 1, but arithmetic is done over the integers. Methods that
/// work over GF(2) say so explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    /// the number of rows in the matrix
    rows: usize,

    /// the number of columns in the matrix
    cols: usize,

    /// the entries of the matrix, stored in row-major order
    data: Vec<Entry>,
}

/// Elementary row operations over GF(2)
pub trait RowOps {
    fn add_row(&mut self, from: usize, to: usize);
    fn swap_rows(&mut self, from: usize, to: usize);
}

impl Matrix {
    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({}, {}) out of bounds for a {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        i * self.cols + j
    }

    /// Returns the entry at row `i`, column `j`
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Entry {
        self.data[self.offset(i, j)]
    }

    /// Overwrites the entry at row `i`, column `j`
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Entry) {
        let k = self.offset(i, j);
        self.data[k] = value;
    }

    /// Adds `value` into the entry at `(i, j)` using integer addition
    #[inline]
    pub fn add_into(&mut self, i: usize, j: usize, value: Entry) {
        let k = self.offset(i, j);
        self.data[k] += value;
    }

    /// XORs `value` into the entry at `(i, j)`, i.e. addition over GF(2) for 0/1 entries
    #[inline]
    pub fn xor_into(&mut self, i: usize, j: usize, value: Entry) {
        let k = self.offset(i, j);
        self.data[k] ^= value;
    }

    /// Builds a matrix from a function `f` giving the value of each entry
    pub fn build(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Entry) -> Self {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Matrix { rows, cols, data }
    }

    /// Creates a `rows` x `cols` matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Creates a `rows` x `cols` matrix of ones
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![1; rows * cols],
        }
    }

    pub fn identity(size: usize) -> Self {
        Self::build(size, size, |i, j| if i == j { 1 } else { 0 })
    }

    /// Creates a matrix from a vector of rows
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_int_vec(data: &[Vec<Entry>]) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, |r| r.len());
        assert!(
            data.iter().all(|r| r.len() == cols),
            "All rows must have the same number of columns"
        );
        Self::build(rows, cols, |i, j| data[i][j])
    }

    /// Creates a `1` x `entries.len()` matrix
    pub fn row_vector(entries: &[Entry]) -> Self {
        Matrix {
            rows: 1,
            cols: entries.len(),
            data: entries.to_vec(),
        }
    }

    /// Creates a random 0/1 matrix
    #[inline]
    pub fn random(rng: &mut impl Rng, rows: usize, cols: usize) -> Self {
        Self::build(rows, cols, |_, _| if rng.random_bool(0.5) { 1 } else { 0 })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn row(&self, row: usize) -> &Row {
        assert!(row < self.rows, "Row {} out of bounds for {} rows", row, self.rows);
        Row::new(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut Row {
        assert!(row < self.rows, "Row {} out of bounds for {} rows", row, self.rows);
        Row::new_mut(&mut self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Returns an iterator over the rows of the matrix
    #[inline]
    pub fn row_iter(&self) -> impl Iterator<Item = &Row> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Returns a copy of column `col`
    pub fn col(&self, col: usize) -> Vec<Entry> {
        (0..self.rows).map(|i| self.get(i, col)).collect()
    }

    #[inline]
    pub fn row_sum(&self, row: usize) -> Entry {
        self.row(row).sum()
    }

    #[inline]
    pub fn col_sum(&self, col: usize) -> Entry {
        (0..self.rows).map(|i| self.get(i, col)).sum()
    }

    /// Returns the position of the first row with a nonzero entry in column `col`
    #[inline]
    pub fn first_nonzero_in_col(&self, col: usize) -> Option<usize> {
        (0..self.rows).find(|&i| self.get(i, col) != 0)
    }

    /// XORs every entry of column `from` into column `to`
    #[inline]
    pub fn xor_col(&mut self, from: usize, to: usize) {
        for i in 0..self.rows {
            let x = self.get(i, from);
            self.xor_into(i, to, x);
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0)
    }

    /// Returns a transposed copy of the matrix
    pub fn transposed(&self) -> Self {
        Self::build(self.cols, self.rows, |i, j| self.get(j, i))
    }

    /// Multiplies `self` by `rhs`, accumulating each entry of the product with integer addition
    ///
    /// # Errors
    ///
    /// If the number of columns of `self` differs from the number of rows of `rhs`.
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                for k in 0..self.cols {
                    res.add_into(i, j, self.get(i, k) * rhs.get(k, j));
                }
            }
        }

        Ok(res)
    }

    /// Returns a copy with every entry multiplied by `k`
    pub fn scaled(&self, k: Entry) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x * k).collect(),
        }
    }

    /// Returns a copy with every entry reduced to 0 or 1 modulo 2
    pub fn mod2(&self) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x.rem_euclid(2)).collect(),
        }
    }

    /// Returns a copy with `column` appended as a new last column
    ///
    /// # Panics
    ///
    /// Panics if `column.len()` is not the number of rows.
    pub fn hstack_col(&self, column: &[Entry]) -> Self {
        assert_eq!(
            column.len(),
            self.rows,
            "Appended column must have one entry per row"
        );
        Self::build(self.rows, self.cols + 1, |i, j| {
            if j < self.cols {
                self.get(i, j)
            } else {
                column[i]
            }
        })
    }

    /// Returns a copy with an all-ones column appended
    #[inline]
    pub fn with_ones_column(&self) -> Self {
        self.hstack_col(&vec![1; self.rows])
    }

    /// Returns a new matrix made of copies of the given rows, in the order given
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        Self::build(rows.len(), self.cols, |i, j| self.get(rows[i], j))
    }

    /// Returns a new matrix made of copies of the given columns, in the order given
    pub fn select_cols(&self, cols: &[usize]) -> Self {
        Self::build(self.rows, cols.len(), |i, j| self.get(i, cols[j]))
    }

    /// Perform gaussian elimination over GF(2) and return the pivot columns
    ///
    /// Assumes every entry is already 0 or 1.
    fn gauss_helper(&mut self, full: bool) -> Vec<usize> {
        let mut row = 0;
        let mut pcol = 0;
        let mut pcols = vec![];
        while row < self.rows() {
            let mut next_row = None;
            'outer: while pcol < self.cols() {
                for i in row..self.rows() {
                    if self[(i, pcol)] != 0 {
                        next_row = Some(i);
                        break 'outer;
                    }
                }
                pcol += 1;
            }

            if let Some(row1) = next_row {
                if row != row1 {
                    self.swap_rows(row, row1);
                }

                for i in (row1 + 1)..self.rows() {
                    if self[(i, pcol)] != 0 {
                        self.add_row(row, i);
                    }
                }

                row += 1;
                pcols.push(pcol);
                pcol += 1;
            } else {
                break;
            }
        }

        if full {
            for row in (0..pcols.len()).rev() {
                let pcol = pcols[row];
                for i in 0..row {
                    if self[(i, pcol)] != 0 {
                        self.add_row(row, i);
                    }
                }
            }
        }

        pcols
    }

    /// Perform gaussian elimination over GF(2)
    ///
    /// Entries are first reduced mod 2. If `full` is true, then perform full Gauss-Jordan to produce
    /// reduced echelon form, otherwise just return echelon form. Returns the pivot columns.
    #[inline]
    pub fn gauss(&mut self, full: bool) -> Vec<usize> {
        *self = self.mod2();
        self.gauss_helper(full)
    }

    /// Compute the rank over GF(2) using gaussian elimination
    #[inline]
    pub fn rank(&self) -> usize {
        self.mod2().gauss_helper(false).len()
    }
}

impl RowOps for Matrix {
    #[inline]
    fn add_row(&mut self, from: usize, to: usize) {
        let (rows, cols) = (self.rows, self.cols);
        assert!(from < rows && to < rows, "Row index out of bounds");
        if from == to {
            self.data[to * cols..(to + 1) * cols].fill(0);
            return;
        }
        // split the buffer so the source row can be borrowed alongside the target row
        let (lo, hi) = self.data.split_at_mut(from.max(to) * cols);
        let (src, dst) = if from < to {
            (&lo[from * cols..(from + 1) * cols], &mut hi[..cols])
        } else {
            (&hi[..cols], &mut lo[to * cols..(to + 1) * cols])
        };
        *Row::new_mut(dst) ^= Row::new(src);
    }

    #[inline]
    fn swap_rows(&mut self, from: usize, to: usize) {
        let cols = self.cols;
        for j in 0..cols {
            self.data.swap(from * cols + j, to * cols + j);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Entry;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.offset(index.0, index.1)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let k = self.offset(index.0, index.1);
        &mut self.data[k]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.row_iter() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs).unwrap_or_else(|_| {
            panic!(
                "Attempting to multiply matrices of incompatible dimensions: {} != {}",
                self.cols, rhs.rows
            )
        })
    }
}
