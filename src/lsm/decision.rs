//! Exercise Decisions and Stopping-Rule Resolution
//!
//! # Decision grid
//!
//! The backward induction writes one {0, 1} decision column per time step,
//! from maturity `T` down to step 1. Each column is decided locally, without
//! knowledge of which earlier step will eventually win, so a path may carry
//! more than one 1 before resolution.
//!
//! # Resolution
//!
//! An American option is exercised at most once. The resolver scans each
//! path chronologically and keeps only the first 1; every later 1 on the
//! same path is overwritten with 0. Steps where a path was never evaluated
//! (out of the money) count as 0.

use ndarray::{Array1, Array2, ArrayView1};

/// Path x time matrix of exercise decisions, built backward from maturity
///
/// Column 0 exists for direct time indexing but is never written: time 0 is
/// not a candidate exercise time.
#[derive(Debug, Clone)]
pub struct DecisionGrid {
    indicators: Array2<u8>,
    // Lowest time step written so far; columns are written strictly backward.
    frontier: usize,
}

impl DecisionGrid {
    /// Empty grid for `num_paths` paths and exercise steps `1..=num_steps`
    pub fn new(num_paths: usize, num_steps: usize) -> Self {
        Self {
            indicators: Array2::zeros((num_paths, num_steps + 1)),
            frontier: num_steps + 1,
        }
    }

    pub fn num_paths(&self) -> usize {
        self.indicators.nrows()
    }

    pub fn num_steps(&self) -> usize {
        self.indicators.ncols() - 1
    }

    /// Record the decision column for step `t`.
    ///
    /// Columns must arrive in strictly backward order `T, T-1, ..., 1`;
    /// columns already written for later times are never modified again.
    pub fn record_column(&mut self, t: usize, column: Array1<u8>) {
        debug_assert!(t >= 1 && t + 1 == self.frontier, "decision columns must be written backward");
        debug_assert_eq!(column.len(), self.num_paths());
        self.indicators.column_mut(t).assign(&column);
        self.frontier = t;
    }

    /// Decision at (path, t); unwritten entries read as 0
    pub fn decision(&self, path: usize, t: usize) -> u8 {
        self.indicators[[path, t]]
    }

    /// Earliest recorded decision time strictly after `t` for `path`
    ///
    /// Only columns later than the current frontier have been written, which
    /// during backward induction is exactly the set of already-decided steps.
    pub fn first_decision_after(&self, path: usize, t: usize) -> Option<usize> {
        (t + 1..=self.num_steps()).find(|&tt| self.indicators[[path, tt]] == 1)
    }

    /// Reduce the multi-entry grid to one optimal stopping time per path.
    pub fn resolve(&self) -> ResolvedDecisions {
        let mut resolved = self.indicators.clone();
        for mut row in resolved.rows_mut() {
            let mut stopped = false;
            for entry in row.iter_mut().skip(1) {
                if stopped {
                    *entry = 0;
                } else if *entry == 1 {
                    stopped = true;
                }
            }
        }
        ResolvedDecisions { indicators: resolved }
    }
}

/// Decision grid after stopping-rule resolution: at most one 1 per path
#[derive(Debug, Clone)]
pub struct ResolvedDecisions {
    indicators: Array2<u8>,
}

impl ResolvedDecisions {
    pub fn num_paths(&self) -> usize {
        self.indicators.nrows()
    }

    pub fn num_steps(&self) -> usize {
        self.indicators.ncols() - 1
    }

    pub fn indicator(&self, path: usize, t: usize) -> u8 {
        self.indicators[[path, t]]
    }

    /// Stopping time per path; `None` means the path never exercises
    pub fn stopping_times(&self) -> Vec<Option<usize>> {
        (0..self.num_paths())
            .map(|p| (1..=self.num_steps()).find(|&t| self.indicators[[p, t]] == 1))
            .collect()
    }
}

/// Terminal-step policy: exercise wherever the payoff is nonzero
///
/// Equivalent to the European decision at maturity.
pub fn terminal_decisions(exercise: ArrayView1<'_, f64>) -> Array1<u8> {
    exercise.mapv(|v| u8::from(v > 0.0))
}

/// Interior-step policy, restricted to the in-the-money subset.
///
/// `itm_paths` are row positions of the in-the-money paths at this step and
/// `continuation[i]` is the estimated continuation value of `itm_paths[i]`.
/// Out-of-the-money paths stay at 0.
pub fn interior_decisions(
    num_paths: usize,
    itm_paths: &[usize],
    exercise: ArrayView1<'_, f64>,
    continuation: &[f64],
) -> Array1<u8> {
    let mut column = Array1::zeros(num_paths);
    for (&path, &cont) in itm_paths.iter().zip(continuation.iter()) {
        if exercise[path] > cont {
            column[path] = 1;
        }
    }
    column
}
