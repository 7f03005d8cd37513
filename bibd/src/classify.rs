use crate::codeword::{enumerate_with_limit, Codeword};
use crate::error::Result;
use crate::matrix::Matrix;

/// Codewords sorted into one bucket per coordinate
///
/// Bucket `j` lists, in enumeration order, the binary rendering of every codeword whose position `j`
/// is set. A codeword of weight `w` therefore appears in `w` buckets. There is always one bucket per
/// column, even when it ends up empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: Vec<Vec<String>>,
}

impl Classification {
    /// Creates `cols` empty buckets
    pub fn new(cols: usize) -> Self {
        Classification {
            buckets: vec![Vec::new(); cols],
        }
    }

    /// Files `codeword` under every position where it is set
    ///
    /// # Panics
    ///
    /// Panics if the codeword is longer than the number of buckets.
    pub fn insert(&mut self, codeword: &Codeword) {
        assert!(
            codeword.len() <= self.buckets.len(),
            "Codeword of length {} does not fit {} buckets",
            codeword.len(),
            self.buckets.len()
        );
        let rendered = codeword.to_binary_string();
        for (j, c) in rendered.chars().enumerate() {
            if c == '1' {
                self.buckets[j].push(rendered.clone());
            }
        }
    }

    /// Number of buckets, i.e. the codeword length
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The codewords with position `col` set
    #[inline]
    pub fn bucket(&self, col: usize) -> &[String] {
        &self.buckets[col]
    }

    /// Iterates over `(column, bucket)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }

    /// Total number of entries across all buckets
    pub fn total_entries(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Sorts `codewords` into per-column buckets
///
/// `cols` fixes the number of buckets, so that an empty sequence still produces one (empty) bucket
/// per column.
pub fn classify(cols: usize, codewords: impl IntoIterator<Item = Codeword>) -> Classification {
    let mut classes = Classification::new(cols);
    for codeword in codewords {
        classes.insert(&codeword);
    }
    classes
}

/// Enumerates the codewords spanned by `basis` and classifies them
///
/// # Errors
///
/// If the rank of `basis` exceeds `limit`, see [`crate::enumerate_with_limit`].
pub fn classify_basis(basis: &Matrix, limit: usize) -> Result<Classification> {
    let codewords = enumerate_with_limit(basis, limit)?;
    Ok(classify(basis.cols(), codewords))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codeword::{enumerate, MAX_ENUMERABLE_RANK};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn identity_2x2() {
        let classes = classify_basis(&Matrix::identity(2), MAX_ENUMERABLE_RANK).unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.bucket(0), &["10".to_owned(), "11".to_owned()]);
        assert_eq!(classes.bucket(1), &["01".to_owned(), "11".to_owned()]);
        assert_eq!(classes.total_entries(), 4);
    }

    #[test]
    #[should_panic(expected = "Codeword of length 3 does not fit 2 buckets")]
    fn codeword_longer_than_buckets() {
        classify(2, [Codeword::from_int_vec(&[1, 0, 1])]);
    }

    #[test]
    fn empty_basis_keeps_buckets() {
        let classes = classify_basis(&Matrix::zeros(0, 3), MAX_ENUMERABLE_RANK).unwrap();
        assert_eq!(classes.len(), 3);
        assert!(classes.iter().all(|(_, bucket)| bucket.is_empty()));
    }

    #[test]
    fn zero_column_bucket_is_empty() {
        let basis = Matrix::from_int_vec(&[vec![1, 0, 1], vec![0, 0, 1]]);
        let classes = classify_basis(&basis, MAX_ENUMERABLE_RANK).unwrap();
        assert!(classes.bucket(1).is_empty());
        assert_eq!(classes.bucket(2).len(), 2);
        assert_eq!(classes.bucket(0), &["101".to_owned(), "100".to_owned()]);
    }

    #[test]
    fn totals_match_weights() {
        let mut rng = SmallRng::seed_from_u64(1);
        let basis = Matrix::random(&mut rng, 6, 10);
        let weights: usize = enumerate(&basis).unwrap().map(|c| c.weight()).sum();
        let classes = classify_basis(&basis, MAX_ENUMERABLE_RANK).unwrap();
        assert_eq!(classes.total_entries(), weights);
        for (j, bucket) in classes.iter() {
            assert!(bucket.iter().all(|w| w.as_bytes()[j] == b'1'));
        }
    }

    #[test]
    fn too_large() {
        assert!(classify_basis(&Matrix::identity(5), 4).is_err());
    }
}
