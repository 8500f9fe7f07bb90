use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{
    freundlich, general_langmuir, langmuir, langmuir_freundlich, linear, redlich_peterson, temkin,
};
use crate::error::AppError;

/// Discriminant of the supported isotherm models, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Linear,
    Freundlich,
    Temkin,
    Langmuir,
    LangmuirFreundlich,
    GeneralLangmuir,
    RedlichPeterson,
}

impl ModelKind {
    pub const ALL: [ModelKind; 7] = [
        ModelKind::Linear,
        ModelKind::Freundlich,
        ModelKind::Temkin,
        ModelKind::Langmuir,
        ModelKind::LangmuirFreundlich,
        ModelKind::GeneralLangmuir,
        ModelKind::RedlichPeterson,
    ];

    /// Snake-case tag used in JSON documents.
    pub fn tag(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Freundlich => "freundlich",
            ModelKind::Temkin => "temkin",
            ModelKind::Langmuir => "langmuir",
            ModelKind::LangmuirFreundlich => "langmuir_freundlich",
            ModelKind::GeneralLangmuir => "general_langmuir",
            ModelKind::RedlichPeterson => "redlich_peterson",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ModelKind {
    type Err = AppError;

    /// Accepts the snake-case tag, its kebab-case spelling and a few common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let kind = match key.as_str() {
            "linear" | "henry" => ModelKind::Linear,
            "freundlich" => ModelKind::Freundlich,
            "temkin" => ModelKind::Temkin,
            "langmuir" => ModelKind::Langmuir,
            "langmuir_freundlich" | "sips" => ModelKind::LangmuirFreundlich,
            "general_langmuir" | "generalized_langmuir" => ModelKind::GeneralLangmuir,
            "redlich_peterson" | "rp" => ModelKind::RedlichPeterson,
            _ => return Err(AppError::UnknownModel(s.to_string())),
        };
        Ok(kind)
    }
}

/// An isotherm model together with its fitting parameters.
///
/// JSON form is internally tagged by `model`:
/// `{"model": "langmuir", "q_max": 10.0, "k": 1.0}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case", deny_unknown_fields)]
pub enum Isotherm {
    Linear { k: f64 },
    Freundlich { k: f64, n: f64 },
    Temkin { k1: f64, k2: f64 },
    Langmuir { q_max: f64, k: f64 },
    LangmuirFreundlich { q_max: f64, k: f64, n: f64 },
    GeneralLangmuir { q_max: f64, k: f64, n: f64 },
    RedlichPeterson { q_max: f64, k: f64, n: f64 },
}

impl Isotherm {
    pub fn kind(&self) -> ModelKind {
        match self {
            Isotherm::Linear { .. } => ModelKind::Linear,
            Isotherm::Freundlich { .. } => ModelKind::Freundlich,
            Isotherm::Temkin { .. } => ModelKind::Temkin,
            Isotherm::Langmuir { .. } => ModelKind::Langmuir,
            Isotherm::LangmuirFreundlich { .. } => ModelKind::LangmuirFreundlich,
            Isotherm::GeneralLangmuir { .. } => ModelKind::GeneralLangmuir,
            Isotherm::RedlichPeterson { .. } => ModelKind::RedlichPeterson,
        }
    }

    /// Loading at concentration `c`, with native floating-point semantics.
    pub fn evaluate(&self, c: f64) -> f64 {
        match *self {
            Isotherm::Linear { k } => linear(c, k),
            Isotherm::Freundlich { k, n } => freundlich(c, k, n),
            Isotherm::Temkin { k1, k2 } => temkin(c, k1, k2),
            Isotherm::Langmuir { q_max, k } => langmuir(c, q_max, k),
            Isotherm::LangmuirFreundlich { q_max, k, n } => langmuir_freundlich(c, q_max, k, n),
            Isotherm::GeneralLangmuir { q_max, k, n } => general_langmuir(c, q_max, k, n),
            Isotherm::RedlichPeterson { q_max, k, n } => redlich_peterson(c, q_max, k, n),
        }
    }

    /// Elementwise [`Isotherm::evaluate`]; output has the length and order of `cs`.
    pub fn evaluate_many(&self, cs: &[f64]) -> Vec<f64> {
        cs.iter().map(|&c| self.evaluate(c)).collect()
    }

    /// Parameter values in catalogue order, keyed by their JSON field names.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Isotherm::Linear { k } => vec![("k", k)],
            Isotherm::Freundlich { k, n } => vec![("k", k), ("n", n)],
            Isotherm::Temkin { k1, k2 } => vec![("k1", k1), ("k2", k2)],
            Isotherm::Langmuir { q_max, k } => vec![("q_max", q_max), ("k", k)],
            Isotherm::LangmuirFreundlich { q_max, k, n }
            | Isotherm::GeneralLangmuir { q_max, k, n }
            | Isotherm::RedlichPeterson { q_max, k, n } => {
                vec![("q_max", q_max), ("k", k), ("n", n)]
            }
        }
    }

    /// Reject `c` (and the parameters) where the model has no finite real value.
    ///
    /// Rules:
    /// - `c` and all parameters must be finite
    /// - Temkin: `c > 0`
    /// - Freundlich: `c >= 0` unless `n` is an integer; `c != 0` when `n < 0`
    /// - Langmuir-Freundlich: the Freundlich rules for both `c` and `k*c`, plus
    ///   `1 + (k*c)^n != 0`
    /// - Redlich-Peterson: `k*c >= 0` unless `n` is an integer, `1 + (k*c)^n != 0`
    /// - Langmuir, Generalized Langmuir: `1 + k*c != 0`; Generalized Langmuir also
    ///   needs `k*c >= 0` unless `n` is an integer
    /// - the resulting loading must be finite (catches overflow)
    pub fn check_domain(&self, c: f64) -> Result<(), AppError> {
        let fail = |reason: &str| AppError::InvalidDomain {
            model: self.kind(),
            concentration: c,
            reason: reason.to_string(),
        };

        if !c.is_finite() {
            return Err(fail("concentration must be finite"));
        }
        if let Some((name, _)) = self.parameters().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(fail(&format!("parameter '{name}' must be finite")));
        }

        match *self {
            Isotherm::Linear { .. } => {}
            Isotherm::Temkin { .. } => {
                if c <= 0.0 {
                    return Err(fail("logarithm requires c > 0"));
                }
            }
            Isotherm::Freundlich { n, .. } => check_power(c, n).map_err(fail)?,
            Isotherm::LangmuirFreundlich { k, n, .. } => {
                check_power(c, n).map_err(fail)?;
                check_power(k * c, n).map_err(fail)?;
                if 1.0 + (k * c).powf(n) == 0.0 {
                    return Err(fail("denominator 1 + (k*c)^n is zero"));
                }
            }
            Isotherm::RedlichPeterson { k, n, .. } => {
                if k * c < 0.0 && !is_integer(n) {
                    return Err(fail("fractional exponent of a negative base"));
                }
                if 1.0 + (k * c).powf(n) == 0.0 {
                    return Err(fail("denominator 1 + (k*c)^n is zero"));
                }
            }
            Isotherm::GeneralLangmuir { k, n, .. } => {
                if 1.0 + k * c == 0.0 {
                    return Err(fail("denominator 1 + k*c is zero"));
                }
                if k * c < 0.0 && !is_integer(n) {
                    return Err(fail("fractional exponent of a negative base"));
                }
            }
            Isotherm::Langmuir { k, .. } => {
                if 1.0 + k * c == 0.0 {
                    return Err(fail("denominator 1 + k*c is zero"));
                }
            }
        }

        if !self.evaluate(c).is_finite() {
            return Err(fail("loading is not finite"));
        }
        Ok(())
    }
}

/// Domain of `base^n` over the reals with a finite result.
fn check_power(base: f64, n: f64) -> Result<(), &'static str> {
    if base < 0.0 && !is_integer(n) {
        return Err("fractional exponent of a negative base");
    }
    if base == 0.0 && n < 0.0 {
        return Err("negative exponent of zero");
    }
    Ok(())
}

fn is_integer(x: f64) -> bool {
    x.fract() == 0.0
}
