//! Isotherm module: scalar sorption isotherm equations.
//!
//! This module provides one pure function per model, each mapping a
//! mobile-phase concentration `c` and the model's fitting parameters to a
//! solid-phase loading `q`:
//! - Linear: `q = k*c`
//! - Freundlich: `q = k*c^n`
//! - Temkin: `q = k1*ln(c) + k2`
//! - Langmuir: `q = q_max*(k*c)/(1 + k*c)`
//! - Langmuir-Freundlich: `q = q_max*(k*c^n)/(1 + (k*c)^n)`
//! - Generalized Langmuir: `q = q_max*((k*c)/(1 + k*c))^n`
//! - Redlich-Peterson: `q = q_max*(k*c)/(1 + (k*c)^n)`
//!
//! Units conventions:
//! - `c` is kg solute per L solution
//! - `q` is kg solute per kg adsorbent
//! - Parameter units depend on the model (see [`crate::catalog`])
//!
//! Design notes:
//! - Functions never clamp or validate; domain violations propagate as IEEE-754
//!   NaN or infinity (e.g. `temkin` at `c <= 0`, fractional powers of negative bases)
//! - The Langmuir-Freundlich numerator raises only `c` to `n`, the denominator raises `k*c`
//! - Strict validation lives on [`Isotherm::check_domain`]
//!
//! # Examples
//! ```rust
//! use isotherms_rs::isotherm::{freundlich, langmuir, linear};
//!
//! assert_eq!(linear(2.0, 3.0), 6.0);
//! assert_eq!(freundlich(4.0, 2.0, 0.5), 4.0);
//! assert_eq!(langmuir(1.0, 10.0, 1.0), 5.0);
//! ```
//!
//! # Panics
//! None of the functions panic.
//!
//! # Errors
//! No error types produced; use [`Isotherm::check_domain`] if deterministic rejection is needed.

pub mod model;

pub use model::{Isotherm, ModelKind};

/// Linear model: `q = k*c`. Defined for every real `c`.
pub fn linear(c: f64, k: f64) -> f64 {
    k * c
}

/// Freundlich model: `q = k*c^n`.
///
/// Negative `c` with a non-integer `n` yields NaN.
pub fn freundlich(c: f64, k: f64, n: f64) -> f64 {
    k * c.powf(n)
}

/// Temkin model: `q = k1*ln(c) + k2`.
///
/// At `c = 0` the logarithm is `-inf`; for `c < 0` the result is NaN.
pub fn temkin(c: f64, k1: f64, k2: f64) -> f64 {
    k1 * c.ln() + k2
}

/// Langmuir model: `q = q_max*(k*c)/(1 + k*c)`.
///
/// For `c >= 0` and `k >= 0` the result lies in `[0, q_max)`.
pub fn langmuir(c: f64, q_max: f64, k: f64) -> f64 {
    let kc = k * c;
    q_max * kc / (1.0 + kc)
}

/// Langmuir-Freundlich (Sips) model: `q = q_max*(k*c^n)/(1 + (k*c)^n)`.
pub fn langmuir_freundlich(c: f64, q_max: f64, k: f64, n: f64) -> f64 {
    q_max * (k * c.powf(n)) / (1.0 + (k * c).powf(n))
}

/// Generalized Langmuir model: `q = q_max*((k*c)/(1 + k*c))^n`.
pub fn general_langmuir(c: f64, q_max: f64, k: f64, n: f64) -> f64 {
    let kc = k * c;
    q_max * (kc / (1.0 + kc)).powf(n)
}

/// Redlich-Peterson model: `q = q_max*(k*c)/(1 + (k*c)^n)`.
pub fn redlich_peterson(c: f64, q_max: f64, k: f64, n: f64) -> f64 {
    let kc = k * c;
    q_max * kc / (1.0 + kc.powf(n))
}
