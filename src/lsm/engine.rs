// src/lsm/engine.rs
use crate::error::{validation::*, LsmResult};
use crate::grid::PriceGrid;
use crate::lsm::cashflow::{option_value, present_values, realize_cashflows};
use crate::lsm::decision::{interior_decisions, terminal_decisions, DecisionGrid};
use crate::output;
use crate::payoff::{exercise_values, put_exercise_value};
use crate::regression::{LeastSquaresFit, Predictor};
use ndarray::{Array1, Array2};

/// Regression target used for the continuation-value fit at interior steps
///
/// The two policies differ only for steps more than one period before
/// maturity; on the canonical Longstaff-Schwartz worked example they produce
/// the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionTarget {
    /// Discounted one-period-ahead exercise value:
    /// `exercise(price(path, t+1)) * e^(-r)`.
    ///
    /// Matches the reference behavior this engine reproduces.
    ImmediatePayoff,
    /// Canonical recursive LSM target: the exercise value at the path's
    /// earliest already-decided later step, discounted over the intervening
    /// periods; zero when no later step exercises.
    ResolvedCashflow,
}

/// Valuation parameters
#[derive(Debug, Clone)]
pub struct LsmConfig {
    /// Strike price K (> 0)
    pub strike: f64,
    /// Continuously compounded risk-free rate per unit time step
    pub rate: f64,
    /// Continuation-value regression target policy
    pub target: RegressionTarget,
    /// Emit the per-path cashflow/PV table; never affects the returned value
    pub verbose: bool,
}

impl LsmConfig {
    /// Validate the valuation configuration
    pub fn validate(&self) -> LsmResult<()> {
        validate_positive("strike", self.strike)?;
        validate_finite("rate", self.rate)?;
        Ok(())
    }
}

impl Default for LsmConfig {
    fn default() -> Self {
        LsmConfig {
            strike: 1.10,
            rate: 0.06,
            target: RegressionTarget::ImmediatePayoff,
            verbose: false,
        }
    }
}

/// Full valuation output
///
/// `option_value` is the estimate proper; the per-path tables are a
/// diagnostic side channel for inspection and testing, not consumed by any
/// downstream stage.
#[derive(Debug, Clone)]
pub struct Valuation {
    /// Estimated option value (mean of per-path present values)
    pub option_value: f64,
    /// Present value per path, in grid row order
    pub present_values: Array1<f64>,
    /// Realized cashflows over exercise steps `1..=T` (`[path, t - 1]`)
    pub cashflows: Array2<f64>,
}

/// Value an American put on pre-simulated paths by Longstaff-Schwartz LSM.
///
/// # Algorithm
///
/// Backward induction from maturity:
/// 1. Terminal step: exercise wherever the put finishes in the money.
/// 2. Each interior step `t`: restrict to in-the-money paths
///    (`price(t) <= K`), regress the configured target on `[S, S^2]` via the
///    supplied least-squares capability, and mark exercise where the
///    immediate payoff beats the estimated continuation value. A step with
///    no in-the-money paths skips the fit entirely; no path can be
///    triggered to exercise there.
/// 3. Resolve each path to its first marked step, realize that single
///    cashflow, discount continuously, and average across paths.
///
/// # Errors
///
/// Returns `LsmError::InvalidParameters` for a non-positive strike or
/// non-finite rate. Grid schema and shape problems are rejected earlier, at
/// `PriceGrid` construction.
pub fn valuate<L: LeastSquaresFit>(
    grid: &PriceGrid,
    cfg: &LsmConfig,
    solver: &L,
) -> LsmResult<Valuation> {
    cfg.validate()?;

    let num_paths = grid.num_paths();
    let maturity = grid.num_steps();
    let step_discount = (-cfg.rate).exp();

    let mut decisions = DecisionGrid::new(num_paths, maturity);

    let terminal_exercise = exercise_values(grid.prices_at(maturity), cfg.strike);
    decisions.record_column(maturity, terminal_decisions(terminal_exercise.view()));

    for t in (1..maturity).rev() {
        let itm: Vec<usize> = (0..num_paths)
            .filter(|&p| grid.price(p, t) <= cfg.strike)
            .collect();

        // Degenerate step: nothing in the money, so there is no regression
        // to fit and no path may exercise here.
        if itm.is_empty() {
            decisions.record_column(t, Array1::zeros(num_paths));
            continue;
        }

        let mut features = Array2::zeros((itm.len(), 2));
        let mut targets = Array1::zeros(itm.len());
        for (i, &p) in itm.iter().enumerate() {
            let s = grid.price(p, t);
            features[[i, 0]] = s;
            features[[i, 1]] = s * s;
            targets[i] = match cfg.target {
                RegressionTarget::ImmediatePayoff => {
                    put_exercise_value(grid.price(p, t + 1), cfg.strike) * step_discount
                }
                RegressionTarget::ResolvedCashflow => match decisions.first_decision_after(p, t) {
                    Some(td) => {
                        put_exercise_value(grid.price(p, td), cfg.strike)
                            * (-cfg.rate * (td - t) as f64).exp()
                    }
                    None => 0.0,
                },
            };
        }

        let fit = solver.fit(&features, &targets);
        let continuation: Vec<f64> = itm
            .iter()
            .map(|&p| {
                let s = grid.price(p, t);
                fit.predict(&[s, s * s])
            })
            .collect();

        let exercise = exercise_values(grid.prices_at(t), cfg.strike);
        decisions.record_column(
            t,
            interior_decisions(num_paths, &itm, exercise.view(), &continuation),
        );
    }

    let resolved = decisions.resolve();
    let cashflows = realize_cashflows(grid, &resolved, cfg.strike);
    let pvs = present_values(&cashflows, cfg.rate);
    let value = option_value(&pvs);

    if cfg.verbose {
        output::print_cashflow_table(grid.path_ids(), &cashflows, &pvs);
    }

    Ok(Valuation {
        option_value: value,
        present_values: pvs,
        cashflows,
    })
}

/// Estimated fair value of the American put; the single-number entry point.
pub fn price_american_put<L: LeastSquaresFit>(
    grid: &PriceGrid,
    cfg: &LsmConfig,
    solver: &L,
) -> LsmResult<f64> {
    valuate(grid, cfg, solver).map(|v| v.option_value)
}
