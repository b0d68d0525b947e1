//! Static industry benchmark tables.

use ronda_traits::{
    IndustryBenchmark, IndustryBenchmarkProvider, Result, RondaError, Sector,
};
use std::collections::HashMap;

/// Hard cap applied to every growth-rate suggestion.
const SUGGESTED_GROWTH_CAP: f64 = 0.05;

/// An [`IndustryBenchmarkProvider`] backed by a fixed per-sector table.
///
/// Sectors absent from the table yield [`IndustryBenchmark::default()`]
/// (all fields empty), leaving the engine to apply its own defaults. The
/// table can be the built-in one or loaded from a JSON object keyed by
/// sector label:
///
/// ```json
/// {
///   "chemicals": { "avg_pe": 15.0, "avg_pb": 2.5, "ps_ratio": 1.2, "avg_growth_rate": 0.03 }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticBenchmarkProvider {
    table: HashMap<Sector, IndustryBenchmark>,
}

impl StaticBenchmarkProvider {
    /// Create an empty provider: every lookup yields the default
    /// benchmark.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in benchmark table.
    ///
    /// Coarse sector-level multiples for the covered sectors; `Other` is
    /// deliberately absent so uncovered companies fall through to the
    /// engine defaults.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = HashMap::new();
        table.insert(
            Sector::Consumer,
            IndustryBenchmark {
                avg_pe: Some(22.0),
                avg_pb: Some(4.0),
                ps_ratio: Some(2.5),
                avg_growth_rate: Some(0.04),
            },
        );
        table.insert(
            Sector::Chemicals,
            IndustryBenchmark {
                avg_pe: Some(15.0),
                avg_pb: Some(2.5),
                ps_ratio: Some(1.2),
                avg_growth_rate: Some(0.03),
            },
        );
        table.insert(
            Sector::Automotive,
            IndustryBenchmark {
                avg_pe: Some(18.0),
                avg_pb: Some(2.0),
                ps_ratio: Some(1.0),
                avg_growth_rate: Some(0.03),
            },
        );
        table.insert(
            Sector::Technology,
            IndustryBenchmark {
                avg_pe: Some(25.0),
                avg_pb: Some(3.5),
                ps_ratio: Some(3.0),
                avg_growth_rate: Some(0.05),
            },
        );
        table.insert(
            Sector::Finance,
            IndustryBenchmark {
                avg_pe: Some(8.0),
                avg_pb: Some(1.0),
                ps_ratio: Some(2.0),
                avg_growth_rate: Some(0.03),
            },
        );
        table.insert(
            Sector::Energy,
            IndustryBenchmark {
                avg_pe: Some(12.0),
                avg_pb: Some(1.2),
                ps_ratio: Some(1.0),
                avg_growth_rate: Some(0.02),
            },
        );
        Self { table }
    }

    /// Load a benchmark table from a JSON object keyed by sector label.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidInput`] when the document is not a
    /// valid benchmark table.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: HashMap<Sector, IndustryBenchmark> = serde_json::from_str(json)
            .map_err(|e| RondaError::InvalidInput(format!("benchmark table: {e}")))?;
        Ok(Self { table })
    }

    /// Insert or replace the benchmark for one sector.
    pub fn insert(&mut self, sector: Sector, benchmark: IndustryBenchmark) {
        self.table.insert(sector, benchmark);
    }

    /// Suggest a terminal growth rate for a sector.
    ///
    /// Averages the observed historical growth with the sector's average
    /// growth rate (0.03 when the table has none) and caps the blend at
    /// 5%. Advisory only: the engine's own growth handling clamps against
    /// the caller-configured rate and never blends.
    #[must_use]
    pub fn suggest_growth_rate(&self, sector: Sector, historical_growth: f64) -> f64 {
        let industry_growth = self
            .benchmark(sector)
            .avg_growth_rate
            .unwrap_or(0.03);
        ((historical_growth + industry_growth) / 2.0).min(SUGGESTED_GROWTH_CAP)
    }
}

impl IndustryBenchmarkProvider for StaticBenchmarkProvider {
    fn benchmark(&self, sector: Sector) -> IndustryBenchmark {
        self.table.get(&sector).copied().unwrap_or_default()
    }
}
