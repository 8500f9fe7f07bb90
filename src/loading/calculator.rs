use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::isotherm::{Isotherm, ModelKind};
use crate::models::{Assumptions, Concentration, Inputs, Loading, Values};

/// A named fitting parameter value as reported in summaries.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ParameterValue {
    pub name: &'static str,
    pub value: f64,
}

/// Result of evaluating one isotherm over a concentration input.
///
/// Fields:
/// - `model`: snake-case model tag
/// - `title`, `formula`: catalogue entries for the model
/// - `parameters`: fitting parameters in catalogue order
/// - `concentration`, `loading`: input and output, same shape
/// - `non_finite`: number of loadings that are NaN or infinite
///
/// JSON has no NaN or infinity, so non-finite loadings serialize as the
/// strings `"NaN"`, `"inf"` and `"-inf"`.
#[derive(Serialize, Debug, Clone)]
pub struct EvaluationSummary {
    pub model: ModelKind,
    pub title: &'static str,
    pub formula: &'static str,
    pub parameters: Vec<ParameterValue>,
    pub concentration: Concentration,
    #[serde(serialize_with = "serialize_loading")]
    pub loading: Loading,
    pub non_finite: usize,
}

struct JsonReal(f64);

impl Serialize for JsonReal {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_nan() {
            s.serialize_str("NaN")
        } else if v == f64::INFINITY {
            s.serialize_str("inf")
        } else if v == f64::NEG_INFINITY {
            s.serialize_str("-inf")
        } else {
            s.serialize_f64(v)
        }
    }
}

fn serialize_loading<S: Serializer>(loading: &Loading, s: S) -> Result<S::Ok, S::Error> {
    match loading {
        Values::Scalar(v) => JsonReal(*v).serialize(s),
        Values::Array(vs) => s.collect_seq(vs.iter().map(|&v| JsonReal(v))),
    }
}

impl EvaluationSummary {
    /// `(c, q)` pairs in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.concentration.iter().zip(self.loading.iter())
    }
}

/// Evaluate `isotherm` at every concentration with native floating-point semantics.
///
/// Scalar input gives a scalar loading, array input an array of equal length.
/// Domain violations come back as NaN or infinity.
pub fn evaluate(isotherm: &Isotherm, c: &Concentration) -> Loading {
    c.map(|v| isotherm.evaluate(v))
}

#[cfg(feature = "parallel")]
fn evaluate_parallel(isotherm: &Isotherm, c: &Concentration) -> Loading {
    crate::adapters::parallel::evaluate_par(isotherm, c)
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel(isotherm: &Isotherm, c: &Concentration) -> Loading {
    evaluate(isotherm, c)
}

/// Evaluate `isotherm` honoring the evaluation options in `ass`.
///
/// - `strict_domain`: every concentration is checked with
///   [`Isotherm::check_domain`] first; the first violation is returned as
///   `AppError::InvalidDomain` and nothing is evaluated.
/// - `parallel`: arrays go through the rayon adapter when the `parallel`
///   feature is compiled in.
/// - `round_digits`: loadings are rounded with [`round_to`].
pub fn evaluate_checked(
    isotherm: &Isotherm,
    c: &Concentration,
    ass: &Assumptions,
) -> Result<Loading, AppError> {
    if ass.strict_domain {
        for v in c.iter() {
            isotherm.check_domain(v)?;
        }
    }

    let loading = if ass.parallel {
        evaluate_parallel(isotherm, c)
    } else {
        evaluate(isotherm, c)
    };

    Ok(match ass.round_digits {
        Some(digits) => loading.map(|q| round_to(q, digits)),
        None => loading,
    })
}

/// Evaluate a request and package the result with its catalogue description.
///
/// Logs a warning when some loadings are not finite, which in non-strict mode
/// signals concentrations outside the model's domain.
pub fn compute_summary(inputs: &Inputs, ass: &Assumptions) -> Result<EvaluationSummary, AppError> {
    let kind = inputs.isotherm.kind();
    debug!(
        model = %kind,
        points = inputs.concentration.len(),
        strict = ass.strict_domain,
        "evaluating isotherm"
    );

    let loading = evaluate_checked(&inputs.isotherm, &inputs.concentration, ass)?;
    let non_finite = loading.iter().filter(|q| !q.is_finite()).count();
    if non_finite > 0 {
        warn!(
            model = %kind,
            non_finite,
            "some loadings are not finite; concentrations may lie outside the model domain"
        );
    }

    let info = kind.info();
    Ok(EvaluationSummary {
        model: kind,
        title: info.title,
        formula: info.formula,
        parameters: inputs
            .isotherm
            .parameters()
            .into_iter()
            .map(|(name, value)| ParameterValue { name, value })
            .collect(),
        concentration: inputs.concentration.clone(),
        loading,
        non_finite,
    })
}

/// Round a floating-point value to `digits` decimal places.
///
/// Returns `x` unchanged when the scaled value is not exactly representable
/// as an integer-valued f64 (|x * 10^digits| >= 2^52) or when `10^digits`
/// over- or underflows; rounding cannot change such values.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    if !p.is_finite() || p == 0.0 {
        return x;
    }
    let scaled = x * p;
    // 2^52: every f64 at or above this magnitude is already an integer
    if scaled.is_nan() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return x;
    }
    scaled.round() / p
}
