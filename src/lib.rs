//! Sorption isotherm equations and a small catalogue describing them.
//!
//! ```rust
//! use isotherms_rs::{Isotherm, Values, evaluate, langmuir};
//!
//! assert_eq!(langmuir(1.0, 10.0, 1.0), 5.0);
//!
//! let iso = Isotherm::Freundlich { k: 2.0, n: 0.5 };
//! let q = evaluate(&iso, &Values::Array(vec![0.0, 4.0]));
//! assert_eq!(q, Values::Array(vec![0.0, 4.0]));
//! ```

pub mod adapters;
pub mod catalog;
pub mod error;
pub mod isotherm;
pub mod loading;
pub mod models;

pub use crate::error::AppError;
pub use crate::isotherm::{
    Isotherm, ModelKind, freundlich, general_langmuir, langmuir, langmuir_freundlich, linear,
    redlich_peterson, temkin,
};
pub use crate::loading::calculator::{
    EvaluationSummary, ParameterValue, compute_summary, evaluate, evaluate_checked, round_to,
};
pub use crate::models::{Assumptions, Concentration, Inputs, Loading, Values};
