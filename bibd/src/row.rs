use ref_cast::RefCast;
use std::fmt;
pub use std::ops::{AddAssign, BitXorAssign, Index, IndexMut, Range};

/// A single matrix entry. This is an alias for [`i64`]
///
/// Incidence matrices only ever hold 0 and 1, but products and sums are computed with ordinary
/// integer arithmetic, so entries are not masked to a single bit.
pub type Entry = i64;

/// A borrowed row (or any contiguous run) of [`Entry`]s.
///
/// [`crate::Matrix::row`] hands these out as views into the matrix buffer, so no data is copied.
/// Provides the per-row reductions used by the validators and the binary rendering used by the
/// classifier.
#[derive(RefCast, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct Row([Entry]);

impl Row {
    /// Wraps a slice of entries as a [`Row`] without copying.
    #[inline]
    pub fn new(entries: &[Entry]) -> &Row {
        Row::ref_cast(entries)
    }

    /// Mutable version of [`Row::new`].
    #[inline]
    pub fn new_mut(entries: &mut [Entry]) -> &mut Row {
        Row::ref_cast_mut(entries)
    }

    /// Returns an owned copy of the entries.
    #[inline]
    pub fn to_vec(&self) -> Vec<Entry> {
        self.0.to_vec()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Entry] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Entry>> {
        self.0.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer sum of the entries. For an incidence row this is the replication number of the point.
    #[inline]
    pub fn sum(&self) -> Entry {
        self.0.iter().sum()
    }

    /// Number of nonzero entries (Hamming weight).
    #[inline]
    pub fn weight(&self) -> usize {
        self.0.iter().filter(|&&x| x != 0).count()
    }

    /// Ordinary integer dot product.
    #[inline]
    pub fn dot(&self, rhs: &Row) -> Entry {
        self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// Sum of the bitwise ANDs of matching entries.
    ///
    /// For two incidence rows this counts the blocks containing both points.
    #[inline]
    pub fn and_count(&self, rhs: &Row) -> Entry {
        self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a & b).sum()
    }

    /// Returns the position of the first nonzero entry, if any.
    #[inline]
    pub fn first_nonzero(&self) -> Option<usize> {
        self.0.iter().position(|&x| x != 0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&x| x == 0)
    }

    /// Renders the row as a string of `'0'` and `'1'` characters, with `'1'` for every nonzero entry.
    pub fn to_binary_string(&self) -> String {
        self.0
            .iter()
            .map(|&x| if x != 0 { '1' } else { '0' })
            .collect()
    }
}

impl Index<usize> for Row {
    type Output = Entry;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Row {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Index<Range<usize>> for Row {
    type Output = Row;

    fn index(&self, index: Range<usize>) -> &Self::Output {
        Row::ref_cast(&self.0[index])
    }
}

impl IndexMut<Range<usize>> for Row {
    fn index_mut(&mut self, index: Range<usize>) -> &mut Self::Output {
        Row::ref_cast_mut(&mut self.0[index])
    }
}

/// Entrywise XOR, the GF(2) sum of two 0/1 rows
impl BitXorAssign<&Row> for Row {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Row) {
        assert_eq!(self.len(), rhs.len(), "Rows must have the same length for XOR");
        for (x, y) in self.0.iter_mut().zip(rhs.0.iter()) {
            *x ^= y;
        }
    }
}

/// Entrywise integer addition
impl AddAssign<&Row> for Row {
    #[inline]
    fn add_assign(&mut self, rhs: &Row) {
        assert_eq!(self.len(), rhs.len(), "Rows must have the same length for addition");
        for (x, y) in self.0.iter_mut().zip(rhs.0.iter()) {
            *x += y;
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in self.iter() {
            write!(f, "{} ", x)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = Entry;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Entry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
