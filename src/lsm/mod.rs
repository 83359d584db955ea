//! Longstaff-Schwartz backward-induction valuation pipeline

pub mod cashflow;
pub mod decision;
pub mod engine;

pub use engine::{price_american_put, valuate, LsmConfig, RegressionTarget, Valuation};
