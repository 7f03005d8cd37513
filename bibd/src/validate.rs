//! Two independent checks that a 0/1 matrix is the incidence matrix of a BIBD
//!
//! [`validate_by_definition`] counts replications, block sizes and pair co-occurrences directly.
//! [`validate_by_identity`] uses the characterisation of BIBD incidence matrices `M` by
//! `M Mᵗ = (r - lambda) I + lambda J` together with `u_v M = k u_b`, where `u_n` is the all-ones
//! row vector of length `n`. The two agree on every 0/1 matrix.

use crate::matrix::Matrix;
use crate::row::Entry;

/// Returns `Some(x)` if every item of `iter` equals `x`, and `None` if two items differ or the
/// iterator is empty
fn constant<I: Iterator<Item = Entry>>(mut iter: I) -> Option<Entry> {
    let first = iter.next()?;
    iter.all(|x| x == first).then_some(first)
}

/// Points outnumber the block size, and blocks hold at least two points
#[inline]
fn non_degenerate(v: usize, k: Entry) -> bool {
    (v as Entry) > k && k >= 2
}

/// Checks the BIBD conditions straight from the definition
///
/// The matrix is accepted if every row has the same sum `r`, every column has the same sum `k`,
/// `v > k >= 2` where `v` is the number of rows, and every pair of distinct rows shares a `1` in the
/// same number `lambda` of columns.
pub fn validate_by_definition(m: &Matrix) -> bool {
    let v = m.rows();

    if constant(m.row_iter().map(|row| row.sum())).is_none() && v > 0 {
        return false;
    }

    let Some(k) = constant((0..m.cols()).map(|j| m.col_sum(j))) else {
        return false;
    };

    if !non_degenerate(v, k) {
        return false;
    }

    let pairs = (0..v).flat_map(|i| ((i + 1)..v).map(move |j| (i, j)));
    constant(pairs.map(|(i, j)| m.row(i).and_count(m.row(j)))).is_some()
}

/// Checks the BIBD conditions through the incidence matrix identities
///
/// The matrix is accepted if `M Mᵗ` has a constant diagonal `r` and a constant off-diagonal
/// `lambda`, the column sums `u_v M` all equal `k` (the size of the first block), and
/// `v > k >= 2`.
pub fn validate_by_identity(m: &Matrix) -> bool {
    let v = m.rows();
    let product = m * &m.transposed();

    if constant((0..v).map(|i| product[(i, i)])).is_none() && v > 0 {
        return false;
    }

    let off_diagonal = (0..v)
        .flat_map(|i| (0..v).map(move |j| (i, j)))
        .filter(|(i, j)| i != j)
        .map(|(i, j)| product[(i, j)]);
    if constant(off_diagonal).is_none() && v > 1 {
        return false;
    }

    if m.cols() == 0 {
        return false;
    }
    let k = m.col_sum(0);
    if !non_degenerate(v, k) {
        return false;
    }

    let u_v = Matrix::ones(1, v);
    let u_b = Matrix::ones(1, m.cols());
    &u_v * m == u_b.scaled(k)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn fano() -> Matrix {
        Matrix::from_int_vec(&[
            vec![1, 1, 1, 0, 0, 0, 0],
            vec![1, 0, 0, 1, 1, 0, 0],
            vec![1, 0, 0, 0, 0, 1, 1],
            vec![0, 1, 0, 1, 0, 1, 0],
            vec![0, 1, 0, 0, 1, 0, 1],
            vec![0, 0, 1, 1, 0, 0, 1],
            vec![0, 0, 1, 0, 1, 1, 0],
        ])
    }

    /// The (4, 6, 3, 2, 1) design: every pair of 4 points is a block
    fn pairs_of_four() -> Matrix {
        Matrix::from_int_vec(&[
            vec![1, 1, 1, 0, 0, 0],
            vec![1, 0, 0, 1, 1, 0],
            vec![0, 1, 0, 1, 0, 1],
            vec![0, 0, 1, 0, 1, 1],
        ])
    }

    fn both(m: &Matrix) -> (bool, bool) {
        (validate_by_definition(m), validate_by_identity(m))
    }

    #[test]
    fn fano_is_valid() {
        assert_eq!(both(&fano()), (true, true));
    }

    #[test]
    fn non_square_design_is_valid() {
        assert_eq!(both(&pairs_of_four()), (true, true));
        assert_eq!(both(&pairs_of_four().transposed()), (false, false));
    }

    #[test]
    fn complement_of_fano_is_valid() {
        // the complement of a symmetric (7, 3, 1) design is a (7, 4, 2) design
        let m = fano();
        let c = Matrix::build(7, 7, |i, j| 1 - m[(i, j)]);
        assert_eq!(both(&c), (true, true));
    }

    #[test]
    fn identity_is_degenerate() {
        // constant r, k and lambda, but blocks of size 1
        assert_eq!(both(&Matrix::identity(4)), (false, false));
    }

    #[test]
    fn complete_design_is_degenerate() {
        // a single block holding every point has k = v
        assert_eq!(both(&Matrix::ones(5, 1)), (false, false));
    }

    #[test]
    fn unequal_pair_counts_are_rejected() {
        // a pair count comparison that never fails would accept this; every pair must share lambda
        // r = 2 and k = 2 everywhere, but points 0 and 1 share two blocks while 0 and 2 share none
        let m = Matrix::from_int_vec(&[
            vec![1, 1, 0, 0],
            vec![1, 1, 0, 0],
            vec![0, 0, 1, 1],
            vec![0, 0, 1, 1],
        ]);
        assert!((0..4).all(|i| m.row_sum(i) == 2 && m.col_sum(i) == 2));
        assert_eq!(both(&m), (false, false));
    }

    #[test]
    fn inconsistent_sums_are_rejected() {
        let mut m = fano();
        m.set(0, 6, 1);
        assert_eq!(both(&m), (false, false));

        let mut m = pairs_of_four();
        m.set(0, 0, 0);
        m.set(0, 3, 1);
        assert_eq!(both(&m), (false, false));
    }

    #[test]
    fn empty_matrices_are_rejected() {
        assert_eq!(both(&Matrix::zeros(0, 0)), (false, false));
        assert_eq!(both(&Matrix::zeros(3, 0)), (false, false));
        assert_eq!(both(&Matrix::zeros(0, 3)), (false, false));
        assert_eq!(both(&Matrix::ones(1, 3)), (false, false));
    }

    #[test]
    fn random_matrices_agree() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..500 {
            let rows = rng.random_range(0..7);
            let cols = rng.random_range(0..7);
            let m = Matrix::random(&mut rng, rows, cols);
            assert_eq!(validate_by_definition(&m), validate_by_identity(&m), "{}", m);
        }
    }

    #[test]
    fn permuted_designs_agree() {
        // relabelling points and blocks preserves validity
        let m = fano();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut p = m.clone();
            for _ in 0..10 {
                let a = rng.random_range(0..7);
                let b = rng.random_range(0..7);
                crate::RowOps::swap_rows(&mut p, a, b);
            }
            let p = p.transposed();
            assert_eq!(both(&p), (true, true));
        }
    }
}
