// src/output.rs
use ndarray::{Array1, Array2};
use std::fs::File;
use std::io::{self, Write};

/// Print the per-path cashflow/PV table to stdout (verbose diagnostic).
pub fn print_cashflow_table(ids: &[u64], cashflows: &Array2<f64>, pvs: &Array1<f64>) {
    let num_steps = cashflows.ncols();
    print!("path");
    for t in 1..=num_steps {
        print!("\tcf_t{}", t);
    }
    println!("\tpv");
    for (i, &id) in ids.iter().enumerate() {
        print!("{}", id);
        for t in 0..num_steps {
            print!("\t{:.6}", cashflows[[i, t]]);
        }
        println!("\t{:.6}", pvs[i]);
    }
}

/// Write the per-path cashflow/PV table as CSV.
pub fn write_cashflow_table_csv(
    filename: &str,
    ids: &[u64],
    cashflows: &Array2<f64>,
    pvs: &Array1<f64>,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    let num_steps = cashflows.ncols();
    write!(file, "path")?;
    for t in 1..=num_steps {
        write!(file, ",cf_t{}", t)?;
    }
    writeln!(file, ",pv")?;
    for (i, &id) in ids.iter().enumerate() {
        write!(file, "{}", id)?;
        for t in 0..num_steps {
            write!(file, ",{}", cashflows[[i, t]])?;
        }
        writeln!(file, ",{}", pvs[i])?;
    }
    Ok(())
}
