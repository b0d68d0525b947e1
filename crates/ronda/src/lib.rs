//! # ronda
//!
//! Discounted-cash-flow equity valuation from quarterly statement data.
//!
//! ronda is an umbrella crate that re-exports all ronda sub-crates for
//! convenience. It turns a company's quarterly financial history into an
//! enterprise value, an equity value, and a per-share estimate, together
//! with plausibility ratios against industry benchmarks.
//!
//! ## Quick Start
//!
//! ```
//! use ronda::prelude::*;
//! use ronda::data::{InMemoryHistoryProvider, StaticBenchmarkProvider};
//! use chrono::NaiveDate;
//!
//! # fn main() -> ronda::Result<()> {
//! let history = vec![
//!     QuarterlyRecord {
//!         symbol: "600309".to_string(),
//!         name: Some("Wanhua Chemical".to_string()),
//!         report_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
//!         revenue: 25_000_000.0,
//!         net_profit: 2_500_000.0,
//!         operating_cash_flow: 3_000_000.0,
//!         capital_expenditure: 1_000_000.0,
//!         total_assets: 200_000_000.0,
//!         total_liabilities: 100_000_000.0,
//!         financial_assets: 0.0,
//!         long_term_investments: 0.0,
//!         minority_interest_ratio: 0.1,
//!         total_shares: 100_000_000.0,
//!     },
//!     // ... one record per quarter, at least four
//! #   QuarterlyRecord {
//! #       symbol: "600309".to_string(),
//! #       name: None,
//! #       report_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
//! #       revenue: 25_000_000.0,
//! #       net_profit: 2_500_000.0,
//! #       operating_cash_flow: 3_000_000.0,
//! #       capital_expenditure: 1_000_000.0,
//! #       total_assets: 200_000_000.0,
//! #       total_liabilities: 100_000_000.0,
//! #       financial_assets: 0.0,
//! #       long_term_investments: 0.0,
//! #       minority_interest_ratio: 0.1,
//! #       total_shares: 100_000_000.0,
//! #   },
//! #   QuarterlyRecord {
//! #       symbol: "600309".to_string(),
//! #       name: None,
//! #       report_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
//! #       revenue: 25_000_000.0,
//! #       net_profit: 2_500_000.0,
//! #       operating_cash_flow: 3_000_000.0,
//! #       capital_expenditure: 1_000_000.0,
//! #       total_assets: 200_000_000.0,
//! #       total_liabilities: 100_000_000.0,
//! #       financial_assets: 0.0,
//! #       long_term_investments: 0.0,
//! #       minority_interest_ratio: 0.1,
//! #       total_shares: 100_000_000.0,
//! #   },
//! #   QuarterlyRecord {
//! #       symbol: "600309".to_string(),
//! #       name: None,
//! #       report_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! #       revenue: 25_000_000.0,
//! #       net_profit: 2_500_000.0,
//! #       operating_cash_flow: 3_000_000.0,
//! #       capital_expenditure: 1_000_000.0,
//! #       total_assets: 200_000_000.0,
//! #       total_liabilities: 100_000_000.0,
//! #       financial_assets: 0.0,
//! #       long_term_investments: 0.0,
//! #       minority_interest_ratio: 0.1,
//! #       total_shares: 100_000_000.0,
//! #   },
//! ];
//!
//! let provider = InMemoryHistoryProvider::from_records(history);
//! let benchmarks = StaticBenchmarkProvider::builtin();
//! let engine = ValuationEngine::default();
//!
//! let result = engine.value_company(
//!     &provider,
//!     &benchmarks,
//!     "600309",
//!     &ValuationParameters::default(),
//! )?;
//!
//! assert!(result.per_share_value > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types, provider traits, error taxonomy
//! - [`engine`] - The valuation engine (FCF series, growth, sector
//!   branches, checks)
//! - [`data`] - In-memory provider implementations
//!
//! ## Architecture
//!
//! ronda follows a modular architecture:
//!
//! 1. **Providers** supply quarterly records and benchmark multiples
//! 2. **The engine** derives the free-cash-flow series and applies the
//!    sector-appropriate valuation method
//! 3. **Checks** flag valuations outside plausible P/B, P/E, and EV/FCF
//!    bands
//!
//! The engine is a pure function of its inputs: no I/O, no shared state,
//! safe to call concurrently for different companies.

/// Version information for the ronda crate.
///
/// This constant contains the current version of ronda as specified in
/// Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits and Types
// ============================================================================

/// Core types and trait definitions for ronda.
///
/// This module re-exports the foundational pieces that define the ronda
/// API:
///
/// - [`QuarterlyRecord`] - One quarter's statement data
/// - [`ValuationParameters`] / [`ValuationResult`] - Run inputs and output
/// - [`FinancialHistoryProvider`] / [`IndustryBenchmarkProvider`] - The
///   collaborator interfaces the engine depends on
pub mod traits {
    pub use ronda_traits::*;
}

// Re-export core types at top level for convenience
pub use ronda_traits::{
    FinancialHistoryProvider, IndustryBenchmark, IndustryBenchmarkProvider, ParameterWarning,
    QuarterlyRecord, Sector, ValuationChecks, ValuationParameters, ValuationResult,
};

// Re-export error types
pub use ronda_traits::{Result, RondaError};

// Re-export the engine at top level
pub use ronda_engine::{EngineConfig, ValuationEngine};

// ============================================================================
// Valuation Engine
// ============================================================================

/// The discounted-cash-flow valuation engine.
///
/// ## Key Components
///
/// - **FcfSeries**: deduplicated quarterly free-cash-flow series with
///   trailing-year aggregation and a clamped growth estimate
/// - **ValuationEngine**: sector-branched valuation with a book-value
///   floor and per-share attribution
/// - **checks**: plausibility ratio computation with explicit undefined
///   sentinels
///
/// ## Valuation Methods
///
/// | Situation | Method |
/// |---|---|
/// | Non-tech, positive trailing FCF | Gordon growth perpetuity |
/// | Non-tech, non-positive FCF | P/E / P/B / P/S multiple blend |
/// | Technology | 40/60 revenue- and profit-based blend |
pub mod engine {
    pub use ronda_engine::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// In-memory provider implementations.
///
/// - [`InMemoryHistoryProvider`](ronda_data::InMemoryHistoryProvider) -
///   quarterly records keyed by symbol
/// - [`StaticBenchmarkProvider`](ronda_data::StaticBenchmarkProvider) -
///   per-sector multiples from a built-in table or JSON
pub mod data {
    pub use ronda_data::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use ronda::prelude::*;
/// ```
///
/// This brings into scope:
/// - The engine: [`ValuationEngine`], [`EngineConfig`]
/// - Core types: [`QuarterlyRecord`], [`ValuationParameters`],
///   [`ValuationResult`], [`IndustryBenchmark`], [`Sector`]
/// - Provider traits and error types
pub mod prelude {
    pub use ronda_engine::{EngineConfig, ValuationEngine};
    pub use ronda_traits::{
        FinancialHistoryProvider, IndustryBenchmark, IndustryBenchmarkProvider, ParameterWarning,
        QuarterlyRecord, Result, RondaError, Sector, ValuationChecks, ValuationParameters,
        ValuationResult,
    };
}

// ============================================================================
// Tests
// ============================================================================
