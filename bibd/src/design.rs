use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::fmt;

/// The parameters `(v, b, r, k, lambda)` of a balanced incomplete block design
///
/// `v` points are arranged into `b` blocks of size `k`, so that every point lies in `r` blocks and
/// every pair of distinct points lies in `lambda` blocks. Valid parameters satisfy `vr = bk` and
/// `lambda(v - 1) = r(k - 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DesignParams {
    pub v: usize,
    pub b: usize,
    pub r: usize,
    pub k: usize,
    pub lambda: usize,
}

impl DesignParams {
    /// Derives `r = lambda(v - 1)/(k - 1)` and `b = vr/k` from the three free parameters
    ///
    /// # Errors
    ///
    /// If `v > k >= 2` and `lambda >= 1` do not hold, or if either division is not exact.
    pub fn from_vkl(v: usize, k: usize, lambda: usize) -> Result<Self> {
        if k < 2 {
            return Err(Error::InvalidParameters(format!(
                "block size k = {} must be at least 2",
                k
            )));
        }
        if v <= k {
            return Err(Error::InvalidParameters(format!(
                "number of points v = {} must exceed the block size k = {}",
                v, k
            )));
        }
        if lambda == 0 {
            return Err(Error::InvalidParameters(
                "lambda must be at least 1".to_owned(),
            ));
        }
        let overflow = |what: &str| {
            Error::InvalidParameters(format!(
                "{} overflows for v = {}, k = {}, lambda = {}",
                what, v, k, lambda
            ))
        };
        let pair_blocks = lambda
            .checked_mul(v - 1)
            .ok_or_else(|| overflow("lambda(v - 1)"))?;
        if pair_blocks % (k - 1) != 0 {
            return Err(Error::InvalidParameters(format!(
                "k - 1 = {} does not divide lambda(v - 1) = {}",
                k - 1,
                pair_blocks
            )));
        }
        let r = pair_blocks / (k - 1);
        let incidences = v.checked_mul(r).ok_or_else(|| overflow("vr"))?;
        if incidences % k != 0 {
            return Err(Error::InvalidParameters(format!(
                "k = {} does not divide vr = {}",
                k, incidences
            )));
        }
        let b = incidences / k;

        Ok(DesignParams { v, b, r, k, lambda })
    }

    /// Reads the parameters off an incidence matrix, if it is the incidence matrix of a BIBD
    ///
    /// Returns `None` unless [`crate::validate_by_definition`] accepts the matrix.
    pub fn of(m: &Matrix) -> Option<Self> {
        if !crate::validate::validate_by_definition(m) {
            return None;
        }
        let v = m.rows();
        let r = m.row_sum(0) as usize;
        let k = m.col_sum(0) as usize;
        let lambda = m.row(0).and_count(m.row(1)) as usize;
        Some(DesignParams {
            v,
            b: m.cols(),
            r,
            k,
            lambda,
        })
    }

    /// Whether the incidence matrix gets an all-ones column appended before basis extraction
    #[inline]
    pub fn needs_augmentation(&self) -> bool {
        self.r % 2 == 1
    }

    /// Checks that `m` is a valid incidence matrix of a design with exactly these parameters
    ///
    /// # Errors
    ///
    /// If `m` is not a valid BIBD incidence matrix, or if its parameters differ from `self`.
    pub fn check_against(&self, m: &Matrix) -> Result<()> {
        match DesignParams::of(m) {
            None => Err(Error::ParameterMismatch(
                "not the incidence matrix of a BIBD".to_owned(),
            )),
            Some(found) if found != *self => Err(Error::ParameterMismatch(format!(
                "expected {}, found {}",
                self, found
            ))),
            Some(_) => Ok(()),
        }
    }
}

impl fmt::Display for DesignParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(v={}, b={}, r={}, k={}, lambda={})",
            self.v, self.b, self.r, self.k, self.lambda
        )
    }
}

/// Returns the matrix to extract a basis from: `m` itself, or `m` with an all-ones column appended
/// when `r` is odd
pub fn augment(m: &Matrix, params: &DesignParams) -> Matrix {
    if params.needs_augmentation() {
        m.with_ones_column()
    } else {
        m.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fano_parameters() {
        let p = DesignParams::from_vkl(7, 3, 1).unwrap();
        assert_eq!(
            p,
            DesignParams {
                v: 7,
                b: 7,
                r: 3,
                k: 3,
                lambda: 1
            }
        );
        assert!(p.needs_augmentation());
    }

    #[test]
    fn derived_parameters() {
        let p = DesignParams::from_vkl(9, 3, 1).unwrap();
        assert_eq!((p.r, p.b), (4, 12));
        assert!(!p.needs_augmentation());

        let p = DesignParams::from_vkl(4, 2, 1).unwrap();
        assert_eq!((p.r, p.b), (3, 6));
    }

    #[test]
    fn rejects_inexact_parameters() {
        // r = 1 * 7 / 2 is not an integer
        assert!(matches!(
            DesignParams::from_vkl(8, 3, 1),
            Err(Error::InvalidParameters(_))
        ));
        // r = 5, vr = 30 is not divisible by k = 4
        assert!(DesignParams::from_vkl(6, 4, 3).is_err());
        assert!(DesignParams::from_vkl(3, 3, 1).is_err());
        assert!(DesignParams::from_vkl(5, 1, 1).is_err());
        assert!(DesignParams::from_vkl(7, 3, 0).is_err());
    }

    #[test]
    fn rejects_overflowing_parameters() {
        let huge = 4_294_967_297;
        assert!(matches!(
            DesignParams::from_vkl(huge, 2, huge),
            Err(Error::InvalidParameters(_))
        ));
        // lambda(v - 1) fits, but vr does not
        assert!(matches!(
            DesignParams::from_vkl(usize::MAX / 2, 2, 1),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn augmentation() {
        let m = Matrix::identity(3);
        let p = DesignParams {
            v: 3,
            b: 3,
            r: 1,
            k: 1,
            lambda: 0,
        };
        let a = augment(&m, &p);
        assert_eq!(a.cols(), 4);
        assert_eq!(a.col(3), vec![1, 1, 1]);

        let even = DesignParams { r: 2, ..p };
        assert_eq!(augment(&m, &even), m);
    }
}
