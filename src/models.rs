use serde::{Deserialize, Serialize};

use crate::isotherm::Isotherm;

/// Scalar or array of reals. Used for both concentrations and loadings.
///
/// JSON form is untagged: `1.5` or `[0.0, 1.0, 2.0]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    Scalar(f64),
    Array(Vec<f64>),
}

/// Mobile-phase concentration C.
pub type Concentration = Values;
/// Solid-phase loading Q.
pub type Loading = Values;

impl Values {
    /// Apply `f` elementwise, keeping the shape.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Values {
        match self {
            Values::Scalar(v) => Values::Scalar(f(*v)),
            Values::Array(vs) => Values::Array(vs.iter().map(|&v| f(v)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Scalar(_) => 1,
            Values::Array(vs) => vs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Values::Scalar(v) => std::slice::from_ref(v),
            Values::Array(vs) => vs,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }
}

impl From<f64> for Values {
    fn from(v: f64) -> Self {
        Values::Scalar(v)
    }
}

impl From<Vec<f64>> for Values {
    fn from(vs: Vec<f64>) -> Self {
        Values::Array(vs)
    }
}

/// Evaluation options. Every field may be omitted in JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Reject concentrations outside the model's real domain instead of returning NaN/inf.
    pub strict_domain: bool,
    /// Round every loading to this many decimals.
    pub round_digits: Option<i32>,
    /// Evaluate arrays in parallel (only with the `parallel` feature).
    pub parallel: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inputs {
    pub isotherm: Isotherm,
    pub concentration: Concentration,
}
