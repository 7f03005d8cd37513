//! `bibd` is a Rust library for checking and analysing the incidence matrices of balanced
//! incomplete block designs (BIBDs). Some features include:
//! - a dense integer [`Matrix`] with transpose, multiplication and separate integer and XOR
//!   accumulation
//! - two independent validity checks: [`validate_by_definition`] and [`validate_by_identity`]
//! - row basis extraction over GF(2) with deterministic tie-breaking ([`row_basis`])
//! - lazy enumeration of every codeword spanned by a basis ([`enumerate`]) and classification of
//!   the codewords by the coordinates they set ([`classify`])
//! - the `[n, k, d]` parameters and weight distribution of the code of a design ([`DesignCode`])
//!
//! A typical run reads a design with [`io::read_design`], checks it, appends an all-ones column when
//! the replication number is odd ([`augment`]), extracts a basis and writes the classification
//! with [`io::write_classification`].

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::bool_assert_comparison,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
pub mod basis;
pub mod classify;
pub mod code;
pub mod codeword;
pub mod design;
pub mod error;
pub mod io;
pub mod matrix;
pub mod row;
pub mod validate;

pub use basis::{pivot_rows, row_basis};
pub use classify::{classify, classify_basis, Classification};
pub use code::DesignCode;
pub use codeword::{enumerate, enumerate_with_limit, Codeword, Codewords, MAX_ENUMERABLE_RANK};
pub use design::{augment, DesignParams};
pub use error::{Error, Result};
pub use matrix::{Matrix, RowOps};
pub use row::{Entry, Row};
pub use validate::{validate_by_definition, validate_by_identity};
