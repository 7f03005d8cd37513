//! Plain-text input and output
//!
//! Input is a stream of whitespace-separated integers. A bare matrix is given as `rows cols`
//! followed by the entries in row-major order; a design is given as `v k lambda` followed by the
//! `v x b` incidence matrix, with `b` derived from the parameters. Classifications are written as
//! one file per column, `file1.txt`, `file2.txt`, ..., holding one codeword per line.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::classify::Classification;
use crate::design::DesignParams;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::row::Entry;

/// Whitespace-separated integers read from a stream
struct Tokens {
    inner: std::vec::IntoIter<String>,
}

impl Tokens {
    fn read(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let tokens: Vec<String> = input.split_whitespace().map(str::to_owned).collect();
        Ok(Tokens {
            inner: tokens.into_iter(),
        })
    }

    /// Reads the next integer, `remaining` being how many values the caller still expects
    fn next_int(&mut self, remaining: usize) -> Result<Entry> {
        let token = self
            .inner
            .next()
            .ok_or(Error::UnexpectedEof { expected: remaining })?;
        token.parse().map_err(|_| Error::Parse { token })
    }

    fn next_dim(&mut self, remaining: usize) -> Result<usize> {
        let x = self.next_int(remaining)?;
        usize::try_from(x).map_err(|_| Error::NegativeDimension(x))
    }

    /// Allocates a `rows x cols` matrix only if enough tokens remain to fill it
    fn matrix(&mut self, rows: usize, cols: usize) -> Result<Matrix> {
        let total = rows
            .checked_mul(cols)
            .ok_or(Error::TooLarge { rows, cols })?;
        let available = self.inner.len();
        if total > available {
            return Err(Error::UnexpectedEof {
                expected: total - available,
            });
        }
        let mut m = Matrix::zeros(rows, cols);
        self.fill(&mut m)?;
        Ok(m)
    }

    fn fill(&mut self, m: &mut Matrix) -> Result<()> {
        let total = m.rows() * m.cols();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                let x = self.next_int(total - i * m.cols() - j)?;
                m.set(i, j, x);
            }
        }
        Ok(())
    }
}

/// Reads `rows cols` followed by `rows * cols` entries
///
/// # Errors
///
/// On a read failure, a token that is not an integer, a negative dimension, a header whose entry
/// count overflows, or input that ends before the matrix is complete. The entry count is checked
/// before the matrix is allocated. Tokens after the last entry are ignored.
pub fn read_matrix(reader: impl Read) -> Result<Matrix> {
    let mut tokens = Tokens::read(reader)?;
    let rows = tokens.next_dim(2)?;
    let cols = tokens.next_dim(1)?;
    let m = tokens.matrix(rows, cols)?;
    debug!("read a {}x{} matrix", rows, cols);
    Ok(m)
}

/// Reads `v k lambda` followed by the `v x b` incidence matrix of a design with those parameters
///
/// # Errors
///
/// As [`read_matrix`], and additionally if the parameters are not those of a BIBD
/// (see [`DesignParams::from_vkl`]).
pub fn read_design(reader: impl Read) -> Result<(DesignParams, Matrix)> {
    let mut tokens = Tokens::read(reader)?;
    let mut param = |remaining| -> Result<usize> {
        let x = tokens.next_int(remaining)?;
        usize::try_from(x)
            .map_err(|_| Error::InvalidParameters(format!("negative parameter {}", x)))
    };
    let v = param(3)?;
    let k = param(2)?;
    let lambda = param(1)?;
    let params = DesignParams::from_vkl(v, k, lambda)?;

    let m = tokens.matrix(params.v, params.b)?;
    debug!("read the incidence matrix of a {} design", params);
    Ok((params, m))
}

/// Writes the dimensions, then one line per row
pub fn write_matrix(mut writer: impl Write, m: &Matrix) -> Result<()> {
    writeln!(writer, "rows: {}", m.rows())?;
    writeln!(writer, "columns: {}", m.cols())?;
    write!(writer, "{}", m)?;
    Ok(())
}

/// Path of the file holding the bucket of column `col` (0-based)
pub fn class_file_name(dir: &Path, col: usize) -> PathBuf {
    dir.join(format!("file{}.txt", col + 1))
}

/// Writes one file per bucket into `dir`, creating `dir` if needed, and returns the paths written
///
/// Existing files with the same names are overwritten.
pub fn write_classification(dir: &Path, classes: &Classification) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut paths = Vec::with_capacity(classes.len());
    for (col, bucket) in classes.iter() {
        let path = class_file_name(dir, col);
        let mut out = BufWriter::new(File::create(&path)?);
        for word in bucket {
            writeln!(out, "{}", word)?;
        }
        out.flush()?;
        info!("wrote {} codeword(s) to {}", bucket.len(), path.display());
        paths.push(path);
    }
    Ok(paths)
}
