//! Put Exercise Valuation
//!
//! Intrinsic value of immediate exercise for a plain put:
//! `max(K - S, 0)`. Pure functions, usable at any (path, time) node.

use ndarray::{Array1, ArrayView1};

/// Exercise value of a put at price `price` with strike `strike`
#[inline]
pub fn put_exercise_value(price: f64, strike: f64) -> f64 {
    (strike - price).max(0.0)
}

/// Exercise values for a whole column of prices (one time step, all paths)
pub fn exercise_values(prices: ArrayView1<'_, f64>, strike: f64) -> Array1<f64> {
    prices.mapv(|s| put_exercise_value(s, strike))
}
