//! Longstaff-Schwartz Reference Tests
//!
//! The canonical 8-path, 3-step worked example from Longstaff & Schwartz
//! (2001) "Valuing American Options by Simulation", K = 1.10, r = 0.06.
//! The paper's stopping rule exercises paths 4, 6, 7, 8 at t=1 and path 3
//! at t=3, giving an option value of about 0.1144.

use lsm_put::grid::{PathRecord, PriceGrid};
use lsm_put::lsm::{price_american_put, valuate, LsmConfig, RegressionTarget};
use lsm_put::regression::NormalEquationsOls;
use lsm_put::LsmError;

fn worked_example_grid() -> PriceGrid {
    PriceGrid::from_table(
        &["path", "t0", "t1", "t2", "t3"],
        vec![
            PathRecord::new(1, vec![1.00, 1.09, 1.08, 1.34]),
            PathRecord::new(2, vec![1.00, 1.16, 1.26, 1.54]),
            PathRecord::new(3, vec![1.00, 1.22, 1.07, 1.03]),
            PathRecord::new(4, vec![1.00, 0.93, 0.97, 0.92]),
            PathRecord::new(5, vec![1.00, 1.11, 1.56, 1.52]),
            PathRecord::new(6, vec![1.00, 0.76, 0.77, 0.90]),
            PathRecord::new(7, vec![1.00, 0.92, 0.84, 1.01]),
            PathRecord::new(8, vec![1.00, 0.88, 1.22, 1.34]),
        ],
    )
    .expect("worked example table is valid")
}

fn worked_example_config() -> LsmConfig {
    LsmConfig {
        strike: 1.10,
        rate: 0.06,
        ..Default::default()
    }
}

#[test]
fn test_worked_example_option_value() {
    let grid = worked_example_grid();
    let cfg = worked_example_config();

    let value = price_american_put(&grid, &cfg, &NormalEquationsOls).unwrap();
    assert!(
        (value - 0.1144).abs() < 1e-2,
        "worked example value should be ~0.1144, got {:.6}",
        value
    );
    // The exact figure for this policy on this dataset.
    assert!(
        (value - 0.114434).abs() < 1e-4,
        "got {:.6}",
        value
    );

    println!("Worked example value: {:.6}", value);
}

#[test]
fn test_worked_example_per_path_present_values() {
    let grid = worked_example_grid();
    let cfg = worked_example_config();
    let rate: f64 = cfg.rate;

    let valuation = valuate(&grid, &cfg, &NormalEquationsOls).unwrap();

    // Paper stopping rule: paths 4, 6, 7, 8 exercise at t=1; path 3 at t=3;
    // paths 1, 2, 5 never exercise.
    let expected = [
        0.0,
        0.0,
        0.07 * (-3.0 * rate).exp(),
        0.17 * (-rate).exp(),
        0.0,
        0.34 * (-rate).exp(),
        0.18 * (-rate).exp(),
        0.22 * (-rate).exp(),
    ];
    for (i, (&got, &want)) in valuation
        .present_values
        .iter()
        .zip(expected.iter())
        .enumerate()
    {
        assert!(
            (got - want).abs() < 1e-10,
            "path {}: pv {:.6} expected {:.6}",
            i + 1,
            got,
            want
        );
    }
}

#[test]
fn test_regression_target_policies_agree_on_worked_example() {
    let grid = worked_example_grid();

    let immediate = LsmConfig {
        target: RegressionTarget::ImmediatePayoff,
        ..worked_example_config()
    };
    let resolved = LsmConfig {
        target: RegressionTarget::ResolvedCashflow,
        ..worked_example_config()
    };

    let solver = NormalEquationsOls;
    let a = price_american_put(&grid, &immediate, &solver).unwrap();
    let b = price_american_put(&grid, &resolved, &solver).unwrap();

    assert!(
        (a - b).abs() < 1e-10,
        "policies should agree here: immediate={:.6} resolved={:.6}",
        a,
        b
    );
}

#[test]
fn test_determinism() {
    let grid = worked_example_grid();
    let cfg = worked_example_config();
    let solver = NormalEquationsOls;

    let a = price_american_put(&grid, &cfg, &solver).unwrap();
    let b = price_american_put(&grid, &cfg, &solver).unwrap();
    assert_eq!(
        a.to_bits(),
        b.to_bits(),
        "identical inputs must produce bit-identical output"
    );
}

#[test]
fn test_schema_error_before_any_numeric_work() {
    // Leading column is a time step, not the identifier column.
    let result = PriceGrid::from_table(
        &["t0", "t1", "t2", "t3"],
        vec![PathRecord::new(1, vec![1.00, 1.09, 1.08])],
    );
    match result {
        Err(LsmError::Schema { found, expected }) => {
            assert_eq!(found, "t0");
            assert_eq!(expected, "path");
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_value_is_non_negative() {
    let grid = worked_example_grid();
    for strike in [0.5, 1.10, 2.0] {
        let cfg = LsmConfig {
            strike,
            ..worked_example_config()
        };
        let value = price_american_put(&grid, &cfg, &NormalEquationsOls).unwrap();
        assert!(value >= 0.0, "K={}: value {} is negative", strike, value);
    }
}
