use rustc_hash::FxHashMap;

use crate::basis::row_basis;
use crate::codeword::{enumerate_with_limit, MAX_ENUMERABLE_RANK};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// The binary linear code spanned by the rows of a design's incidence matrix
///
/// The generator matrix is a row basis, so its rows are independent over GF(2) and the
/// code has dimension equal to the number of rows. Weight data is computed once, by enumerating
/// every codeword, when the code is built.
pub struct DesignCode {
    pub(crate) n_codeword_length: usize,
    pub(crate) k_codespace_dimension: usize,
    pub(crate) d_code_distance: usize,
    pub(crate) g_generator_matrix: Matrix,
    weights: FxHashMap<usize, usize>,
}

impl DesignCode {
    /// Uses the rows of `basis` as the generator matrix
    ///
    /// # Errors
    ///
    /// If `basis` has more than [`MAX_ENUMERABLE_RANK`] rows.
    pub fn from_basis(basis: Matrix) -> Result<Self> {
        let mut weights = FxHashMap::default();
        for codeword in enumerate_with_limit(&basis, MAX_ENUMERABLE_RANK)? {
            *weights.entry(codeword.weight()).or_insert(0) += 1;
        }
        let d_code_distance = weights
            .keys()
            .copied()
            .filter(|&w| w != 0)
            .min()
            .unwrap_or(0);

        Ok(DesignCode {
            n_codeword_length: basis.cols(),
            k_codespace_dimension: basis.rows(),
            d_code_distance,
            g_generator_matrix: basis,
            weights,
        })
    }

    /// Extracts a row basis of `incidence` and uses it as the generator matrix
    ///
    /// # Errors
    ///
    /// If the rank of `incidence` exceeds [`MAX_ENUMERABLE_RANK`].
    pub fn from_design(incidence: &Matrix) -> Result<Self> {
        Self::from_basis(row_basis(incidence))
    }

    /// Each row of `to_encode` represents a message being encoded
    /// That is to say `to_encode` is R by `k_codespace_dimension`
    /// and after encoding we get a result of R by `n_codeword_length`, reduced mod 2
    ///
    /// # Errors
    ///
    /// If the number of columns of `to_encode` are incorrect for the dimension
    /// of the codespace
    pub fn encode(&self, to_encode: &Matrix) -> Result<Matrix> {
        if self.k_codespace_dimension != to_encode.cols() {
            return Err(Error::DimensionMismatch {
                lhs_rows: to_encode.rows(),
                lhs_cols: to_encode.cols(),
                rhs_rows: self.g_generator_matrix.rows(),
                rhs_cols: self.g_generator_matrix.cols(),
            });
        }
        Ok(to_encode.try_mul(&self.g_generator_matrix)?.mod2())
    }

    /// the standard `[n,k,d]_q` notation
    pub fn n_k_d_q(&self) -> [usize; 4] {
        [
            self.n_codeword_length,
            self.k_codespace_dimension,
            self.d_code_distance,
            2,
        ]
    }

    /// Give the rate of information transfer.
    /// For a codespace of dimension `k` and codewords of length `n`
    /// the information transfer is slowed by a factor of `k/n`.
    /// The code of length 0 has rate 0.
    pub fn rate(&self) -> f64 {
        let [n, k, _, _] = self.n_k_d_q();
        if n == 0 {
            return 0.0;
        }
        k as f64 / n as f64
    }

    #[inline]
    pub fn generator(&self) -> &Matrix {
        &self.g_generator_matrix
    }

    /// Number of codewords of each Hamming weight
    #[inline]
    pub fn weight_distribution(&self) -> &FxHashMap<usize, usize> {
        &self.weights
    }

    /// Weight distribution as `(weight, count)` pairs sorted by weight
    pub fn sorted_weights(&self) -> Vec<(usize, usize)> {
        let mut w: Vec<_> = self.weights.iter().map(|(&w, &c)| (w, c)).collect();
        w.sort_unstable();
        w
    }
}
