//! Cashflow Realization and Discounting
//!
//! Once every path has at most one stopping time, the realized cashflow
//! matrix is a pure map over (resolved decisions, exercise values): the put
//! payoff where the indicator is 1, zero everywhere else. Present values
//! discount each cashflow continuously over unit-spaced steps and the option
//! value is the plain Monte Carlo average across paths.

use crate::grid::PriceGrid;
use crate::lsm::decision::ResolvedDecisions;
use crate::payoff::put_exercise_value;
use ndarray::{Array1, Array2};

/// Realized cashflow matrix over exercise steps `1..=T`
///
/// `cashflows[[path, t - 1]]` is the payoff collected by `path` at step `t`.
pub fn realize_cashflows(
    grid: &PriceGrid,
    resolved: &ResolvedDecisions,
    strike: f64,
) -> Array2<f64> {
    let num_paths = grid.num_paths();
    let num_steps = grid.num_steps();
    let mut cashflows = Array2::zeros((num_paths, num_steps));
    for path in 0..num_paths {
        for t in 1..=num_steps {
            if resolved.indicator(path, t) == 1 {
                cashflows[[path, t - 1]] = put_exercise_value(grid.price(path, t), strike);
            }
        }
    }
    cashflows
}

/// Per-path present value: sum of cashflows discounted by `e^(-r t)`
///
/// Time steps are one unit apart regardless of the grid's literal column
/// labels.
pub fn present_values(cashflows: &Array2<f64>, rate: f64) -> Array1<f64> {
    let num_steps = cashflows.ncols();
    let discounts: Vec<f64> = (1..=num_steps).map(|t| (-rate * t as f64).exp()).collect();
    cashflows
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(discounts.iter())
                .map(|(cf, d)| cf * d)
                .sum()
        })
        .collect()
}

/// Option value: arithmetic mean of per-path present values
pub fn option_value(pvs: &Array1<f64>) -> f64 {
    pvs.sum() / pvs.len() as f64
}
