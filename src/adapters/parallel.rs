use rayon::prelude::*;

use crate::isotherm::Isotherm;
use crate::models::Values;

/// Arrays shorter than this are evaluated serially; the per-element cost is too small to split.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Elementwise evaluation backed by rayon. Output order matches input order.
pub fn evaluate_par(isotherm: &Isotherm, c: &Values) -> Values {
    match c {
        Values::Array(cs) if cs.len() >= PARALLEL_THRESHOLD => {
            Values::Array(cs.par_iter().map(|&v| isotherm.evaluate(v)).collect())
        }
        _ => c.map(|v| isotherm.evaluate(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_matches_serial() {
        let iso = Isotherm::GeneralLangmuir {
            q_max: 4.0,
            k: 0.3,
            n: 0.8,
        };
        let cs: Vec<f64> = (0..5000).map(|i| i as f64 * 0.01).collect();
        let par = evaluate_par(&iso, &Values::Array(cs.clone()));
        assert_eq!(par, Values::Array(iso.evaluate_many(&cs)));
    }
}
