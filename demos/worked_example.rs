// demos/worked_example.rs
use lsm_put::grid::{PathRecord, PriceGrid};
use lsm_put::lsm::{valuate, LsmConfig};
use lsm_put::output;
use lsm_put::regression::NormalEquationsOls;

/// Reproduces the 8-path worked example from Longstaff & Schwartz (2001),
/// K = 1.10, r = 0.06; the estimated value is about 0.1144.
fn main() {
    let grid = PriceGrid::from_table(
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
    .expect("worked example table is valid");

    let cfg = LsmConfig {
        strike: 1.10,
        rate: 0.06,
        verbose: true,
        ..Default::default()
    };

    let valuation = valuate(&grid, &cfg, &NormalEquationsOls).expect("valid configuration");

    println!();
    println!("American put value: {:.4}", valuation.option_value);

    let csv = "worked_example_cashflows.csv";
    match output::write_cashflow_table_csv(
        csv,
        grid.path_ids(),
        &valuation.cashflows,
        &valuation.present_values,
    ) {
        Ok(()) => println!("Cashflow table written to {}", csv),
        Err(e) => eprintln!("Could not write {}: {}", csv, e),
    }
}
