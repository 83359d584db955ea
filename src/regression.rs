//! Least-Squares Capability
//!
//! # Design
//!
//! The continuation-value estimator treats ordinary least squares as a
//! pluggable capability: anything that can turn feature vectors and scalar
//! targets into a fitted predictor works, as long as it is deterministic for
//! deterministic input and tolerates degenerate (empty or rank-deficient)
//! systems without raising.
//!
//! The default implementation solves the normal equations `X'X b = X'y` with
//! an intercept column prepended, via LU decomposition. A singular system
//! falls back to all-zero coefficients instead of failing: a degenerate fit
//! then predicts zero continuation value everywhere, which the exercise
//! policy handles like any other estimate.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// Fitted predictor mapping a feature vector to an estimated target
pub trait Predictor {
    fn predict(&self, features: &[f64]) -> f64;
}

/// Capability interface: fit a predictor to (features, targets)
///
/// `features` is row-major, one row per observation; `targets` holds one
/// scalar per row.
pub trait LeastSquaresFit {
    type Fitted: Predictor;

    fn fit(&self, features: &Array2<f64>, targets: &Array1<f64>) -> Self::Fitted;
}

/// Polynomial-in-features predictor produced by [`NormalEquationsOls`]
///
/// Coefficients are `[intercept, b_1, ..., b_k]` for `k` feature columns.
#[derive(Debug, Clone)]
pub struct OlsPredictor {
    coefficients: Vec<f64>,
}

impl OlsPredictor {
    /// Fitted coefficients, intercept first
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Predictor for OlsPredictor {
    fn predict(&self, features: &[f64]) -> f64 {
        let mut value = self.coefficients[0];
        for (b, x) in self.coefficients[1..].iter().zip(features.iter()) {
            value += b * x;
        }
        value
    }
}

/// Ordinary least squares via the normal equations
///
/// Accumulates `X'X` and `X'y` in one pass over the observations (with an
/// implicit intercept column) and LU-solves the resulting `(k+1)x(k+1)`
/// system.
#[derive(Debug, Clone, Default)]
pub struct NormalEquationsOls;

impl LeastSquaresFit for NormalEquationsOls {
    type Fitted = OlsPredictor;

    fn fit(&self, features: &Array2<f64>, targets: &Array1<f64>) -> OlsPredictor {
        let k = features.ncols();
        let d = k + 1;

        let mut xtx = DMatrix::<f64>::zeros(d, d);
        let mut xty = DVector::<f64>::zeros(d);
        let mut row = vec![0.0_f64; d];

        for (obs, &y) in features.rows().into_iter().zip(targets.iter()) {
            row[0] = 1.0;
            for (j, &x) in obs.iter().enumerate() {
                row[j + 1] = x;
            }
            for a in 0..d {
                for b in 0..d {
                    xtx[(a, b)] += row[a] * row[b];
                }
                xty[a] += row[a] * y;
            }
        }

        // Singular (empty or rank-deficient) systems degrade to a zero fit.
        let coefficients = xtx
            .lu()
            .solve(&xty)
            .map(|beta| beta.iter().copied().collect())
            .unwrap_or_else(|| vec![0.0; d]);

        OlsPredictor { coefficients }
    }
}
