//! Discounted-cash-flow valuation engine for Ronda.
//!
//! This crate turns a company's quarterly financial history into an
//! equity valuation:
//! - Free-cash-flow series derivation (future-dated filtering, calendar
//!   quarter deduplication, trailing-year aggregation)
//! - Historical growth estimation with a configured ceiling
//! - Sector-branched valuation (Gordon perpetuity, technology blend,
//!   multiple blend for negative cash flow)
//! - Plausibility checks against book value and annualized profit
//!
//! # Example
//!
//! ```rust,ignore
//! use ronda_engine::ValuationEngine;
//! use ronda_traits::{Sector, ValuationParameters};
//!
//! let engine = ValuationEngine::default();
//! let result = engine.run(&history, sector, &benchmark, &ValuationParameters::default())?;
//! println!("equity: {:.0}, per share: {:.2}", result.equity_value, result.per_share_value);
//! ```

#![warn(missing_docs)]

pub mod checks;
pub mod engine;
pub mod fcf;

// Re-export main types
pub use engine::{EngineConfig, ValuationEngine};
pub use fcf::{FcfSeries, QUARTERS_PER_YEAR};
