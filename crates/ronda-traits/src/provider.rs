//! Provider traits for the data the engine depends on.
//!
//! The valuation engine performs no I/O of its own; quarterly financial
//! history and industry benchmark multiples are injected through these two
//! collaborator interfaces. Implementations should be thread-safe
//! (`Send + Sync`) so independent valuations can run concurrently.

use crate::error::Result;
use crate::sector::Sector;
use crate::types::{IndustryBenchmark, QuarterlyRecord};

/// Supplies the quarterly financial history for a company.
///
/// The returned sequence may be empty and carries no ordering guarantee;
/// the engine sorts and deduplicates before use.
///
/// # Example
///
/// ```no_run
/// use ronda_traits::{FinancialHistoryProvider, QuarterlyRecord, Result};
///
/// struct EmptyProvider;
///
/// impl FinancialHistoryProvider for EmptyProvider {
///     fn history(&self, _symbol: &str) -> Result<Vec<QuarterlyRecord>> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait FinancialHistoryProvider: Send + Sync {
    /// Returns all known quarterly records for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store itself fails. A company
    /// with no data is reported as an empty vec, not an error; the engine
    /// turns that into [`crate::RondaError::NotFound`].
    fn history(&self, symbol: &str) -> Result<Vec<QuarterlyRecord>>;
}

/// Maps a sector to its benchmark valuation multiples.
///
/// Lookups are total: an unknown or uncovered sector yields
/// [`IndustryBenchmark::default()`] (all fields absent) rather than
/// failing, and the engine falls back to its own defaults per field.
pub trait IndustryBenchmarkProvider: Send + Sync {
    /// Returns the benchmark multiples for `sector`.
    fn benchmark(&self, sector: Sector) -> IndustryBenchmark;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FixedHistory {
        records: Vec<QuarterlyRecord>,
    }

    impl FinancialHistoryProvider for FixedHistory {
        fn history(&self, symbol: &str) -> Result<Vec<QuarterlyRecord>> {
            Ok(self
                .records
                .iter()
                .filter(|r| r.symbol == symbol)
                .cloned()
                .collect())
        }
    }

    struct EmptyBenchmarks;

    impl IndustryBenchmarkProvider for EmptyBenchmarks {
        fn benchmark(&self, _sector: Sector) -> IndustryBenchmark {
            IndustryBenchmark::default()
        }
    }

    fn record(symbol: &str) -> QuarterlyRecord {
        QuarterlyRecord {
            symbol: symbol.to_string(),
            name: None,
            report_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            revenue: 1.0,
            net_profit: 1.0,
            operating_cash_flow: 1.0,
            capital_expenditure: 0.0,
            total_assets: 2.0,
            total_liabilities: 1.0,
            financial_assets: 0.0,
            long_term_investments: 0.0,
            minority_interest_ratio: 0.0,
            total_shares: 1.0,
        }
    }

    #[test]
    fn test_history_provider_filters_by_symbol() {
        let provider = FixedHistory {
            records: vec![record("600519"), record("600309")],
        };
        let history = provider.history("600519").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].symbol, "600519");
    }

    #[test]
    fn test_missing_symbol_is_empty_not_error() {
        let provider = FixedHistory { records: vec![] };
        assert!(provider.history("000001").unwrap().is_empty());
    }

    #[test]
    fn test_benchmark_lookup_is_total() {
        let provider = EmptyBenchmarks;
        let benchmark = provider.benchmark(Sector::Other);
        assert!(benchmark.avg_pe.is_none());
        assert!(benchmark.avg_pb.is_none());
    }

    #[test]
    fn test_providers_are_object_safe_and_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn FinancialHistoryProvider>();
        assert_send_sync::<dyn IndustryBenchmarkProvider>();
    }
}
