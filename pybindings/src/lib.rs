// There seems to be some issues with the pyo3 bindings generation on methods returning
// a `PyResult<T>`.
#![allow(clippy::useless_conversion)]

pub mod codeword;
pub mod matrix;

use crate::codeword::PyCodeword;
use crate::matrix::PyMatrix;
use pyo3::prelude::*;

#[pymodule]
fn bibd(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    m.add_class::<PyCodeword>()?;
    m.add_function(wrap_pyfunction!(matrix::classify, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::design_parameters, m)?)?;
    Ok(())
}
