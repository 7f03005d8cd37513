//! Row basis extraction by column-wise elimination over GF(2)
//!
//! The elimination runs across columns: each column that still has a nonzero entry picks the
//! first such row as its pivot, and is XORed into every other column sharing a nonzero entry in
//! that pivot row. Once every column has been processed, the first nonzero row of each surviving
//! column is a pivot row of a reduced column echelon form. Those rows of the *original* matrix are
//! linearly independent and span its row space, so they are returned as the basis. Because the
//! output is copied from the input, a 0/1 matrix always yields a 0/1 basis.

use crate::matrix::Matrix;
use log::debug;

/// Runs the column elimination on a copy of `m` and returns the eliminated copy
fn eliminate_cols(m: &Matrix) -> Matrix {
    let mut work = m.clone();

    for i in 0..work.cols() {
        if let Some(pivot_pos) = work.first_nonzero_in_col(i) {
            for k in 0..work.cols() {
                if k != i && work[(pivot_pos, k)] != 0 {
                    work.xor_col(i, k);
                }
            }
        }
    }

    work
}

/// Returns the indices of the rows of `m` selected as basis rows, in column order
///
/// Column `i` contributes the first row (scanning from the top) holding a nonzero entry in column
/// `i` of the eliminated matrix. All-zero columns contribute nothing.
pub fn pivot_rows(m: &Matrix) -> Vec<usize> {
    let work = eliminate_cols(m);
    (0..work.cols())
        .filter_map(|i| work.first_nonzero_in_col(i))
        .collect()
}

/// Returns a matrix whose rows are a basis for the row space of `m` over GF(2)
///
/// The result has one row per independent column of `m` and the same number of columns as `m`.
/// For the zero matrix it has no rows at all. `m` itself is left untouched.
///
/// Ties are broken deterministically: columns are processed left to right, and each pivot is the
/// first nonzero row from the top.
pub fn row_basis(m: &Matrix) -> Matrix {
    let rows = pivot_rows(m);
    debug!(
        "row basis of a {}x{} matrix has rank {} (pivot rows {:?})",
        m.rows(),
        m.cols(),
        rows.len(),
        rows
    );
    m.select_rows(&rows)
}
