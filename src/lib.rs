//! # lsm-put: Longstaff-Schwartz Valuation of American Puts
//!
//! A Rust library for estimating the fair value of an American-style put
//! option from pre-simulated underlying-price paths, using the
//! Longstaff-Schwartz least-squares Monte Carlo (LSM) method.
//!
//! ## Key Features
//!
//! - **Backward-induction engine**: per-step continuation-value regression,
//!   exercise-vs-continuation decisions, stopping-time resolution,
//!   cashflow realization and discounting
//! - **Validated input**: schema-checked rectangular price grid, rejected
//!   before any numeric work when malformed
//! - **Pluggable regression**: any deterministic least-squares solver fits
//!   behind a small capability trait; a normal-equations OLS ships as the
//!   default
//! - **Deterministic**: fully synchronous, single-threaded batch
//!   computation; identical inputs give identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use lsm_put::grid::{PathRecord, PriceGrid};
//! use lsm_put::lsm::{price_american_put, LsmConfig};
//! use lsm_put::regression::NormalEquationsOls;
//!
//! // Two pre-simulated paths over time steps 0..=2
//! let grid = PriceGrid::from_table(
//!     &["path", "t0", "t1", "t2"],
//!     vec![
//!         PathRecord::new(1, vec![1.00, 0.93, 0.97]),
//!         PathRecord::new(2, vec![1.00, 1.16, 1.26]),
//!     ],
//! ).expect("valid table");
//!
//! let cfg = LsmConfig { strike: 1.10, rate: 0.06, ..Default::default() };
//! let value = price_american_put(&grid, &cfg, &NormalEquationsOls)
//!     .expect("valid configuration");
//! assert!(value >= 0.0);
//! ```
//!
//! ## Mathematical Foundation
//!
//! At each interior time step the expected discounted value of continuing is
//! approximated by regressing a discounted payoff target on the basis
//! `[S, S^2]` over the in-the-money paths; each path exercises at the first
//! step where immediate payoff beats the estimated continuation value.

// Module declarations
pub mod error;
pub mod grid;
pub mod lsm;
pub mod output;
pub mod payoff;
pub mod regression;

// Re-export commonly used types for convenience
pub use error::{LsmError, LsmResult};
