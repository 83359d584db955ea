//! Validated Price Grid
//!
//! # Design
//!
//! The grid is the only long-lived object in a valuation: a rectangular table
//! of simulated prices indexed by path and discrete time step. It is validated
//! once at construction and read-only afterwards; every later stage of the
//! pipeline borrows it immutably.
//!
//! The caller supplies the table with a header row. The first column must be
//! the path-identifier column (header `"path"`, case-insensitive); only then
//! are the remaining columns interpreted as prices at time steps `0..=T`.
//! Time 0 holds the common initial price and is never a candidate exercise
//! time.

use crate::error::{LsmError, LsmResult};
use ndarray::{Array2, ArrayView1};

/// Recognized header label for the path-identifier column
pub const PATH_ID_COLUMN: &str = "path";

/// One row of the input table: a path identifier and its price sequence
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    pub id: u64,
    pub prices: Vec<f64>,
}

impl PathRecord {
    pub fn new(id: u64, prices: Vec<f64>) -> Self {
        Self { id, prices }
    }
}

/// Rectangular table of price paths, indexed by path and time step
///
/// Invariants (checked at construction):
/// - the leading header column is the recognized identifier column,
/// - every path has the same length `T + 1` with `T >= 1`,
/// - path identifiers are unique,
/// - all prices are finite.
#[derive(Debug, Clone)]
pub struct PriceGrid {
    ids: Vec<u64>,
    prices: Array2<f64>,
}

impl PriceGrid {
    /// Build a grid from a caller-supplied table.
    ///
    /// `columns` is the header row; `columns[0]` must be the identifier
    /// column. The remaining column labels are positional: column order
    /// implies time order `0..=T` regardless of the literal labels.
    ///
    /// # Errors
    ///
    /// Returns `LsmError::Schema` if the leading column is not recognized
    /// (checked before any numeric work), or `LsmError::GridShape` if the
    /// table is empty, ragged, too short, has duplicate identifiers, or
    /// contains non-finite prices.
    pub fn from_table<S: AsRef<str>>(columns: &[S], rows: Vec<PathRecord>) -> LsmResult<Self> {
        let leading = columns.first().map(|c| c.as_ref()).unwrap_or("");
        if !leading.trim().eq_ignore_ascii_case(PATH_ID_COLUMN) {
            return Err(LsmError::Schema {
                found: leading.to_string(),
                expected: PATH_ID_COLUMN.to_string(),
            });
        }

        if rows.is_empty() {
            return Err(LsmError::GridShape {
                reason: "table contains no paths".to_string(),
            });
        }

        // Identifier column plus prices at 0..=T, so at least three columns.
        let width = columns.len();
        if width < 3 {
            return Err(LsmError::GridShape {
                reason: format!(
                    "table has {} columns; need the identifier column plus prices at time 0 and at least one exercisable step",
                    width
                ),
            });
        }
        let expected_len = width - 1;

        let mut ids = Vec::with_capacity(rows.len());
        let mut flat = Vec::with_capacity(rows.len() * expected_len);
        for row in &rows {
            if row.prices.len() != expected_len {
                return Err(LsmError::GridShape {
                    reason: format!(
                        "path {} has {} prices; header declares {}",
                        row.id,
                        row.prices.len(),
                        expected_len
                    ),
                });
            }
            if ids.contains(&row.id) {
                return Err(LsmError::GridShape {
                    reason: format!("duplicate path identifier {}", row.id),
                });
            }
            for (t, &price) in row.prices.iter().enumerate() {
                if !price.is_finite() {
                    return Err(LsmError::GridShape {
                        reason: format!("path {} has non-finite price {} at step {}", row.id, price, t),
                    });
                }
                flat.push(price);
            }
            ids.push(row.id);
        }

        let prices = Array2::from_shape_vec((rows.len(), expected_len), flat).map_err(|e| {
            LsmError::GridShape {
                reason: format!("table is not rectangular: {}", e),
            }
        })?;

        Ok(Self { ids, prices })
    }

    /// Number of paths in the grid
    pub fn num_paths(&self) -> usize {
        self.prices.nrows()
    }

    /// Time to maturity in discrete steps (`T`); prices cover `0..=T`
    pub fn num_steps(&self) -> usize {
        self.prices.ncols() - 1
    }

    /// Price of path `path` (row position, not identifier) at step `t`
    pub fn price(&self, path: usize, t: usize) -> f64 {
        self.prices[[path, t]]
    }

    /// All path prices at time step `t`, in row order
    pub fn prices_at(&self, t: usize) -> ArrayView1<'_, f64> {
        self.prices.column(t)
    }

    /// Path identifiers in row order
    pub fn path_ids(&self) -> &[u64] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<&'static str> {
        vec!["path", "t0", "t1", "t2"]
    }

    #[test]
    fn test_from_table_valid() {
        let grid = PriceGrid::from_table(
            &header(),
            vec![
                PathRecord::new(1, vec![1.00, 1.09, 1.08]),
                PathRecord::new(2, vec![1.00, 1.16, 1.26]),
            ],
        )
        .unwrap();

        assert_eq!(grid.num_paths(), 2);
        assert_eq!(grid.num_steps(), 2);
        assert_eq!(grid.price(0, 1), 1.09);
        assert_eq!(grid.prices_at(2)[1], 1.26);
        assert_eq!(grid.path_ids(), &[1, 2]);
    }

    #[test]
    fn test_identifier_column_recognized_case_insensitively() {
        let rows = vec![PathRecord::new(1, vec![1.0, 0.9, 0.8])];
        assert!(PriceGrid::from_table(&["Path", "t0", "t1", "t2"], rows.clone()).is_ok());
        assert!(PriceGrid::from_table(&[" PATH ", "t0", "t1", "t2"], rows).is_ok());
    }

    #[test]
    fn test_schema_error_on_wrong_leading_column() {
        let result = PriceGrid::from_table(
            &["t0", "t1", "t2", "t3"],
            vec![PathRecord::new(1, vec![1.0, 0.9, 0.8])],
        );
        assert!(matches!(result, Err(LsmError::Schema { .. })));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = PriceGrid::from_table(
            &header(),
            vec![
                PathRecord::new(1, vec![1.0, 0.9, 0.8]),
                PathRecord::new(2, vec![1.0, 0.9]),
            ],
        );
        assert!(matches!(result, Err(LsmError::GridShape { .. })));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = PriceGrid::from_table(
            &header(),
            vec![
                PathRecord::new(7, vec![1.0, 0.9, 0.8]),
                PathRecord::new(7, vec![1.0, 1.1, 1.2]),
            ],
        );
        assert!(matches!(result, Err(LsmError::GridShape { .. })));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let result = PriceGrid::from_table(
            &header(),
            vec![PathRecord::new(1, vec![1.0, f64::NAN, 0.8])],
        );
        assert!(matches!(result, Err(LsmError::GridShape { .. })));
    }

    #[test]
    fn test_empty_and_too_short_tables_rejected() {
        assert!(PriceGrid::from_table(&header(), vec![]).is_err());
        // Time 0 alone leaves no exercisable step.
        let result =
            PriceGrid::from_table(&["path", "t0"], vec![PathRecord::new(1, vec![1.0])]);
        assert!(matches!(result, Err(LsmError::GridShape { .. })));
    }
}
