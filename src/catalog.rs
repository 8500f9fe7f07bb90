//! Static descriptions of the isotherm models: titles, formulas and parameter tables.
//!
//! Units are given as plain text. Parameters whose units are not established
//! in the reference table carry `units: None`.

use crate::isotherm::ModelKind;
use serde::Serialize;

/// Literature source for the model set.
pub const REFERENCE: &str = "Limousin et al., 2007";
pub const REFERENCE_DOI: &str = "10.1016/j.apgeochem.2006.09.010";

/// Generic form shared by every model.
pub const GENERAL_FORM: &str = "Q = f(C)";

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ParameterInfo {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ModelInfo {
    pub kind: ModelKind,
    pub title: &'static str,
    /// Plain-text formula.
    pub formula: &'static str,
    pub latex: &'static str,
    pub parameters: &'static [ParameterInfo],
}

/// The two state variables every model relates.
pub const VARIABLES: &[ParameterInfo] = &[
    ParameterInfo {
        symbol: "Q",
        description: "Concentration of compound retained on the solid phase",
        units: Some("kg solute / kg adsorbent"),
    },
    ParameterInfo {
        symbol: "C",
        description: "Solute concentration remaining in the mobile phase",
        units: Some("kg solute / L solution"),
    },
];

const fn fitting(symbol: &'static str, units: Option<&'static str>) -> ParameterInfo {
    ParameterInfo {
        symbol,
        description: "Fitting parameter",
        units,
    }
}

const QMAX_K_N: &[ParameterInfo] = &[
    fitting("Qmax", None),
    fitting("k", None),
    fitting("n", None),
];

static MODELS: [ModelInfo; 7] = [
    ModelInfo {
        kind: ModelKind::Linear,
        title: "Linear model",
        formula: "Q = k*C",
        latex: r"Q = kC",
        parameters: &[fitting("k", Some("L solution / kg adsorbent"))],
    },
    ModelInfo {
        kind: ModelKind::Freundlich,
        title: "Freundlich model",
        formula: "Q = k*C^n",
        latex: r"Q = kC^n",
        parameters: &[
            fitting("k", Some("(L solution / kg adsorbent)^n")),
            fitting("n", Some("-")),
        ],
    },
    ModelInfo {
        kind: ModelKind::Temkin,
        title: "Temkin model",
        formula: "Q = k1*ln(C) + k2",
        latex: r"Q = k_1 \ln{C} + k_2",
        parameters: &[fitting("k1", None), fitting("k2", None)],
    },
    ModelInfo {
        kind: ModelKind::Langmuir,
        title: "Langmuir model",
        formula: "Q = Qmax*(k*C)/(1 + k*C)",
        latex: r"Q = Q_{\textsf{max}} \, \dfrac{kC}{1 + kC}",
        parameters: &[fitting("Qmax", None), fitting("k", None)],
    },
    ModelInfo {
        kind: ModelKind::LangmuirFreundlich,
        title: "Langmuir-Freundlich model",
        formula: "Q = Qmax*(k*C^n)/(1 + (k*C)^n)",
        latex: r"Q = Q_{\textsf{max}} \, \dfrac{kC^n}{1 + \left(kC\right)^n}",
        parameters: QMAX_K_N,
    },
    ModelInfo {
        kind: ModelKind::GeneralLangmuir,
        title: "Generalized Langmuir model",
        formula: "Q = Qmax*((k*C)/(1 + k*C))^n",
        latex: r"Q = Q_{\textsf{max}} \, \left(\dfrac{kC}{1 + kC}\right)^n",
        parameters: QMAX_K_N,
    },
    ModelInfo {
        kind: ModelKind::RedlichPeterson,
        title: "Redlich-Peterson model",
        formula: "Q = Qmax*(k*C)/(1 + (k*C)^n)",
        latex: r"Q = Q_{\textsf{max}} \, \dfrac{kC}{1 + \left(kC\right)^n}",
        parameters: QMAX_K_N,
    },
];

impl ModelKind {
    pub fn info(self) -> &'static ModelInfo {
        // MODELS follows the declaration order of ModelKind.
        &MODELS[self as usize]
    }
}

/// All model descriptions in presentation order.
pub fn models() -> &'static [ModelInfo] {
    &MODELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_matches_kind_order() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.info().kind, kind);
        }
        assert_eq!(models().len(), ModelKind::ALL.len());
    }

    #[test]
    fn parameter_tables_match_isotherm_arity() {
        use crate::isotherm::Isotherm;
        let samples = [
            Isotherm::Linear { k: 1.0 },
            Isotherm::Freundlich { k: 1.0, n: 1.0 },
            Isotherm::Temkin { k1: 1.0, k2: 1.0 },
            Isotherm::Langmuir { q_max: 1.0, k: 1.0 },
            Isotherm::LangmuirFreundlich { q_max: 1.0, k: 1.0, n: 1.0 },
            Isotherm::GeneralLangmuir { q_max: 1.0, k: 1.0, n: 1.0 },
            Isotherm::RedlichPeterson { q_max: 1.0, k: 1.0, n: 1.0 },
        ];
        for iso in samples {
            assert_eq!(iso.kind().info().parameters.len(), iso.parameters().len());
        }
    }

    #[test]
    fn unknown_units_are_none() {
        let lang = ModelKind::Langmuir.info();
        assert!(lang.parameters.iter().all(|p| p.units.is_none()));
        assert_eq!(
            ModelKind::Linear.info().parameters[0].units,
            Some("L solution / kg adsorbent")
        );
    }
}
