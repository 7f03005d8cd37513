use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use bibd::{Codeword, Entry, Matrix};

use crate::matrix::PyMatrix;

#[pyclass(name = "Codeword")]
#[derive(Clone)]
pub struct PyCodeword {
    pub(crate) inner: Codeword,
}

#[pymethods]
impl PyCodeword {
    /// Creates a zero codeword of the given length
    #[new]
    pub fn new(length: usize) -> Self {
        PyCodeword {
            inner: Codeword::zeros(length),
        }
    }

    /// Returns the length of the codeword
    #[getter]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    /// Returns the number of set positions (Hamming weight)
    pub fn weight(&self) -> usize {
        self.inner.weight()
    }

    /// XORs another codeword into this one
    pub fn xor_with(&mut self, other: &PyCodeword) -> PyResult<()> {
        if self.inner.len() != other.inner.len() {
            return Err(PyValueError::new_err(
                "Codewords must have the same length for XOR",
            ));
        }
        self.inner ^= &other.inner;
        Ok(())
    }

    /// The '0'/'1' rendering of the codeword
    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Codeword('{}')", self.inner)
    }

    pub fn __getitem__(&self, i: usize) -> PyResult<Entry> {
        if i >= self.inner.len() {
            return Err(PyValueError::new_err("Index out of bounds"));
        }
        Ok(self.inner.get(i))
    }

    /// XOR operation using the ^ operator
    pub fn __xor__(&self, other: &PyCodeword) -> PyResult<Self> {
        if self.inner.len() != other.inner.len() {
            return Err(PyValueError::new_err(
                "Codewords must have the same length for XOR",
            ));
        }
        Ok(PyCodeword {
            inner: &self.inner ^ &other.inner,
        })
    }

    pub fn __eq__(&self, other: &PyCodeword) -> bool {
        self.inner == other.inner
    }

    pub fn __ne__(&self, other: &PyCodeword) -> bool {
        !self.__eq__(other)
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    pub fn to_list(&self) -> Vec<Entry> {
        self.inner.as_row().to_vec()
    }

    #[staticmethod]
    pub fn from_list(data: Vec<Entry>) -> Self {
        PyCodeword {
            inner: Codeword::from_int_vec(&data),
        }
    }

    /// Convert to a single-row Matrix
    pub fn to_matrix(&self) -> PyMatrix {
        PyMatrix::from(Matrix::from(self.inner.clone()))
    }

    /// Create a Codeword from a single-row Matrix
    #[staticmethod]
    pub fn from_matrix(matrix: &PyMatrix) -> PyResult<Self> {
        match Codeword::try_from(matrix.inner.clone()) {
            Ok(inner) => Ok(PyCodeword { inner }),
            Err(e) => Err(PyValueError::new_err(format!(
                "Cannot convert Matrix to Codeword: {}",
                e
            ))),
        }
    }
}

impl From<Codeword> for PyCodeword {
    fn from(inner: Codeword) -> Self {
        PyCodeword { inner }
    }
}
