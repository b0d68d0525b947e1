//! Core types and trait definitions for the Ronda valuation framework.
//!
//! This crate provides the foundational abstractions for discounted-cash-flow
//! equity valuation: the quarterly statement record, valuation parameters,
//! industry benchmark multiples, the provider traits through which data is
//! injected, and the shared error taxonomy.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod provider;
pub mod sector;
pub mod types;

// Re-exports
pub use error::{Result, RondaError};
pub use provider::{FinancialHistoryProvider, IndustryBenchmarkProvider};
pub use sector::Sector;
pub use types::{
    IndustryBenchmark, ParameterWarning, QuarterlyRecord, ValuationChecks, ValuationParameters,
    ValuationResult,
};
