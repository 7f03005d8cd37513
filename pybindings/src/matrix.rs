use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use bibd::{
    classify_basis, enumerate_with_limit, pivot_rows, row_basis, validate_by_definition,
    validate_by_identity, DesignParams, Entry, Matrix, MAX_ENUMERABLE_RANK,
};
use rand::{rngs::SmallRng, SeedableRng};

use crate::codeword::PyCodeword;

pub(crate) fn to_py_err(e: bibd::Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyclass(name = "Matrix")]
#[derive(Clone)]
pub struct PyMatrix {
    pub(crate) inner: Matrix,
}

impl PyMatrix {
    fn check_index(&self, i: usize, j: usize) -> PyResult<()> {
        if i >= self.inner.rows() || j >= self.inner.cols() {
            return Err(PyValueError::new_err("Index out of bounds"));
        }
        Ok(())
    }
}

#[pymethods]
impl PyMatrix {
    /// Creates a new matrix of zeros
    #[new]
    pub fn new(rows: usize, cols: usize) -> Self {
        PyMatrix {
            inner: Matrix::zeros(rows, cols),
        }
    }

    /// Creates an identity matrix
    #[staticmethod]
    pub fn identity(size: usize) -> Self {
        PyMatrix {
            inner: Matrix::identity(size),
        }
    }

    /// Creates a matrix of ones
    #[staticmethod]
    pub fn ones(rows: usize, cols: usize) -> Self {
        PyMatrix {
            inner: Matrix::ones(rows, cols),
        }
    }

    /// Creates a random 0/1 matrix
    #[staticmethod]
    #[pyo3(signature = (rows, cols, seed=None))]
    pub fn random(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        let mut rng = if let Some(s) = seed {
            SmallRng::seed_from_u64(s)
        } else {
            SmallRng::from_os_rng()
        };
        PyMatrix {
            inner: Matrix::random(&mut rng, rows, cols),
        }
    }

    /// Creates a matrix from a list of rows
    #[staticmethod]
    pub fn from_list(data: Vec<Vec<Entry>>) -> PyResult<Self> {
        let cols = data.first().map_or(0, |r| r.len());
        if data.iter().any(|r| r.len() != cols) {
            return Err(PyValueError::new_err(
                "All rows must have the same number of columns",
            ));
        }
        Ok(PyMatrix {
            inner: Matrix::from_int_vec(&data),
        })
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn get(&self, i: usize, j: usize) -> PyResult<Entry> {
        self.check_index(i, j)?;
        Ok(self.inner.get(i, j))
    }

    pub fn set(&mut self, i: usize, j: usize, value: Entry) -> PyResult<()> {
        self.check_index(i, j)?;
        self.inner.set(i, j, value);
        Ok(())
    }

    /// Adds `value` into entry (i, j) with integer addition
    pub fn add_into(&mut self, i: usize, j: usize, value: Entry) -> PyResult<()> {
        self.check_index(i, j)?;
        self.inner.add_into(i, j, value);
        Ok(())
    }

    /// XORs `value` into entry (i, j)
    pub fn xor_into(&mut self, i: usize, j: usize, value: Entry) -> PyResult<()> {
        self.check_index(i, j)?;
        self.inner.xor_into(i, j, value);
        Ok(())
    }

    pub fn transposed(&self) -> Self {
        PyMatrix {
            inner: self.inner.transposed(),
        }
    }

    pub fn scaled(&self, k: Entry) -> Self {
        PyMatrix {
            inner: self.inner.scaled(k),
        }
    }

    /// Rank over GF(2)
    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    /// Returns a matrix whose rows are a basis of the row space over GF(2)
    pub fn row_basis(&self) -> Self {
        PyMatrix {
            inner: row_basis(&self.inner),
        }
    }

    /// Indices of the rows selected by `row_basis`
    pub fn pivot_rows(&self) -> Vec<usize> {
        pivot_rows(&self.inner)
    }

    pub fn validate_by_definition(&self) -> bool {
        validate_by_definition(&self.inner)
    }

    pub fn validate_by_identity(&self) -> bool {
        validate_by_identity(&self.inner)
    }

    /// Returns `(v, b, r, k, lambda)` if this is the incidence matrix of a BIBD
    pub fn design_parameters(&self) -> Option<(usize, usize, usize, usize, usize)> {
        DesignParams::of(&self.inner).map(|p| (p.v, p.b, p.r, p.k, p.lambda))
    }

    /// Every GF(2) combination of the rows, treating them as a basis
    #[pyo3(signature = (max_rank=None))]
    pub fn codewords(&self, max_rank: Option<usize>) -> PyResult<Vec<PyCodeword>> {
        let words = enumerate_with_limit(&self.inner, max_rank.unwrap_or(MAX_ENUMERABLE_RANK))
            .map_err(to_py_err)?;
        Ok(words.map(PyCodeword::from).collect())
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn to_list(&self) -> Vec<Vec<Entry>> {
        self.inner.row_iter().map(|r| r.to_vec()).collect()
    }

    pub fn __getitem__(&self, key: (usize, usize)) -> PyResult<Entry> {
        self.get(key.0, key.1)
    }

    pub fn __setitem__(&mut self, key: (usize, usize), value: Entry) -> PyResult<()> {
        self.set(key.0, key.1, value)
    }

    /// Integer matrix product using the @ operator
    pub fn __matmul__(&self, other: &PyMatrix) -> PyResult<Self> {
        let inner = self.inner.try_mul(&other.inner).map_err(to_py_err)?;
        Ok(PyMatrix { inner })
    }

    pub fn __eq__(&self, other: &PyMatrix) -> bool {
        self.inner == other.inner
    }

    pub fn __ne__(&self, other: &PyMatrix) -> bool {
        !self.__eq__(other)
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix(rows={}, cols={})", self.inner.rows(), self.inner.cols())
    }
}

impl From<Matrix> for PyMatrix {
    fn from(inner: Matrix) -> Self {
        PyMatrix { inner }
    }
}

/// Classifies the codewords spanned by `basis` into one list per column
#[pyfunction]
#[pyo3(signature = (basis, max_rank=None))]
pub fn classify(basis: &PyMatrix, max_rank: Option<usize>) -> PyResult<Vec<Vec<String>>> {
    let classes = classify_basis(&basis.inner, max_rank.unwrap_or(MAX_ENUMERABLE_RANK))
        .map_err(to_py_err)?;
    Ok(classes.iter().map(|(_, bucket)| bucket.to_vec()).collect())
}

/// Derives `(v, b, r, k, lambda)` from `v`, `k` and `lambda`
#[pyfunction]
pub fn design_parameters(
    v: usize,
    k: usize,
    lambda: usize,
) -> PyResult<(usize, usize, usize, usize, usize)> {
    let p = DesignParams::from_vkl(v, k, lambda).map_err(to_py_err)?;
    Ok((p.v, p.b, p.r, p.k, p.lambda))
}
