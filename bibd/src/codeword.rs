use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::row::{Entry, Row};
use log::debug;
use std::fmt;
use std::ops::{BitXor, BitXorAssign, Index};

/// Largest basis rank [`enumerate`] accepts, i.e. at most `2^24` codewords
pub const MAX_ENUMERABLE_RANK: usize = 24;

/// A wrapper around a one-row `Matrix`
///
/// A codeword is a GF(2) combination of basis rows. It is displayed as a string of `0`s and `1`s,
/// one character per coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codeword(Matrix);

impl Codeword {
    /// Gets the entry at position `i`
    #[inline]
    pub fn get(&self, i: usize) -> Entry {
        self.0.get(0, i)
    }

    /// Whether position `i` is set
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        self.get(i) != 0
    }

    /// Creates a new `Codeword` of size `length` initialized to zero
    pub fn zeros(length: usize) -> Self {
        Self(Matrix::zeros(1, length))
    }

    /// Creates a codeword from its entries
    pub fn from_int_vec(data: &[Entry]) -> Self {
        Self(Matrix::row_vector(data))
    }

    /// Checks if the codeword is the zero vector
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the length of the codeword
    #[inline]
    pub fn len(&self) -> usize {
        self.0.cols()
    }

    /// Returns true if the codeword has length 0
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nonzero positions (Hamming weight)
    #[inline]
    pub fn weight(&self) -> usize {
        self.as_row().weight()
    }

    /// XORs a row of the same length into this codeword
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[inline]
    pub fn xor_with(&mut self, row: &Row) {
        assert_eq!(
            self.len(),
            row.len(),
            "Codewords must have the same length for XOR"
        );
        for (j, x) in row.iter().enumerate() {
            self.0.xor_into(0, j, x);
        }
    }

    /// The rendering used by [`crate::classify`], e.g. `"0110"`
    #[inline]
    pub fn to_binary_string(&self) -> String {
        self.as_row().to_binary_string()
    }

    #[inline]
    pub fn as_row(&self) -> &Row {
        self.0.row(0)
    }

    /// Returns a reference to the underlying `Matrix`
    #[inline]
    pub fn as_matrix(&self) -> &Matrix {
        &self.0
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_binary_string())
    }
}

impl BitXorAssign<&Codeword> for Codeword {
    fn bitxor_assign(&mut self, rhs: &Codeword) {
        self.xor_with(rhs.as_row());
    }
}

impl BitXor for &Codeword {
    type Output = Codeword;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result ^= rhs;
        result
    }
}

/// `codeword[i]` is equivalent to `codeword.get(i)`
impl Index<usize> for Codeword {
    type Output = Entry;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[(0, index)]
    }
}

impl From<Codeword> for Matrix {
    fn from(codeword: Codeword) -> Self {
        codeword.0
    }
}

impl TryFrom<Matrix> for Codeword {
    type Error = &'static str;

    fn try_from(matrix: Matrix) -> std::result::Result<Self, Self::Error> {
        if matrix.rows() != 1 {
            return Err("Cannot convert Matrix to Codeword unless it has exactly one row");
        }
        Ok(Codeword(matrix))
    }
}

/// Lazy enumeration of every GF(2) combination of the rows of a basis
///
/// Yields one codeword per mask `0..2^rank`, where bit `i` of the mask selects basis row `i`. Mask
/// `0` yields the zero codeword, so even a basis with no rows yields exactly one codeword. The
/// iterator is cheap to clone, and cloning it before use restarts the enumeration.
#[derive(Clone, Debug)]
pub struct Codewords<'a> {
    basis: &'a Matrix,
    mask: u64,
    end: u64,
}

impl<'a> Codewords<'a> {
    /// The basis the codewords are combined from
    #[inline]
    pub fn basis(&self) -> &'a Matrix {
        self.basis
    }

    /// Builds the codeword selected by `mask`
    pub fn combination(&self, mask: u64) -> Codeword {
        let mut codeword = Codeword::zeros(self.basis.cols());
        for i in 0..self.basis.rows() {
            if mask & (1 << i) != 0 {
                codeword.xor_with(self.basis.row(i));
            }
        }
        codeword
    }
}

impl Iterator for Codewords<'_> {
    type Item = Codeword;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.end {
            return None;
        }
        let codeword = self.combination(self.mask);
        self.mask += 1;
        Some(codeword)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.mask) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Codewords<'_> {}

/// Enumerates all `2^rank` codewords spanned by the rows of `basis`
///
/// # Errors
///
/// If `basis` has more than [`MAX_ENUMERABLE_RANK`] rows.
pub fn enumerate(basis: &Matrix) -> Result<Codewords<'_>> {
    enumerate_with_limit(basis, MAX_ENUMERABLE_RANK)
}

/// Like [`enumerate`], with a caller-chosen ceiling on the rank
///
/// `limit` is capped at 63 so the codeword count fits in a `u64`.
///
/// # Errors
///
/// If `basis` has more than `limit` rows.
pub fn enumerate_with_limit(basis: &Matrix, limit: usize) -> Result<Codewords<'_>> {
    let limit = limit.min(63);
    let rank = basis.rows();
    if rank > limit {
        return Err(Error::RankTooLarge { rank, limit });
    }
    debug!(
        "enumerating {} codewords of length {}",
        1u64 << rank,
        basis.cols()
    );
    Ok(Codewords {
        basis,
        mask: 0,
        end: 1 << rank,
    })
}
