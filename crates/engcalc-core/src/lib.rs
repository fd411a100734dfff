#![deny(warnings)]
//! Formula evaluation engine for the engineering calculator API.
//!
//! This crate implements the calculation-endpoint contract: parameter
//! validation ([`inputs`]), the [`Formula`] trait every calculator
//! implements, the built-in formulas ([`built_in`]), the work-shown
//! derivation builder ([`derivation`]) and the failure taxonomy
//! ([`error`]). No HTTP types appear anywhere here; the API crate maps
//! [`CalcError`] kinds to status codes at its own boundary.

pub mod built_in;
pub mod derivation;
pub mod error;
pub mod formula;
pub mod inputs;
pub mod registry;

pub use derivation::{Derivation, num};
pub use error::{CalcError, CalcResult, ErrorKind};
pub use formula::{Evaluation, Formula};
pub use inputs::{GivenPair, RequestParams};
pub use registry::FormulaRegistry;
