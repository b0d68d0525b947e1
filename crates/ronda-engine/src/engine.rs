//! The valuation engine.
//!
//! A pure function of (quarterly history, sector, benchmark multiples,
//! parameters) to a [`ValuationResult`]. The engine performs no I/O, keeps
//! no state between calls, and either returns a complete result or fails
//! fast with a descriptive error.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use ronda_traits::{
    FinancialHistoryProvider, IndustryBenchmark, IndustryBenchmarkProvider, QuarterlyRecord,
    Result, RondaError, Sector, ValuationParameters, ValuationResult,
};

use crate::checks;
use crate::fcf::FcfSeries;

/// Weight of the revenue-based leg in the technology blend.
const TECH_REVENUE_WEIGHT: f64 = 0.4;
/// Weight of the profit-based leg in the technology blend.
const TECH_PROFIT_WEIGHT: f64 = 0.6;

/// Multiple-blend weights for a profitable non-tech company (P/E, P/B, P/S).
const BLEND_PROFITABLE: (f64, f64, f64) = (0.5, 0.3, 0.2);
/// Multiple-blend weights for a loss-making non-tech company (P/B, P/S).
const BLEND_LOSS_MAKING: (f64, f64) = (0.6, 0.4);

/// Configuration for the valuation engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Most recent quarters retained for analysis (five years by default).
    pub max_quarters: usize,
    /// Minimum usable quarterly records required to run at all.
    pub min_quarters: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_quarters: 20,
            min_quarters: 4,
        }
    }
}

/// Discounted-cash-flow valuation engine.
///
/// Stateless between calls and free of shared mutable state: one engine
/// value can serve concurrent valuations for different companies.
///
/// # Example
///
/// ```ignore
/// use ronda_engine::ValuationEngine;
/// use ronda_traits::{Sector, ValuationParameters};
///
/// let engine = ValuationEngine::default();
/// let result = engine.run(
///     &history,
///     Sector::from_symbol("600309"),
///     &benchmark,
///     &ValuationParameters::default(),
/// )?;
/// println!("per share: {:.2}", result.per_share_value);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    config: EngineConfig,
}

impl ValuationEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Value a company from its quarterly history, as of today.
    ///
    /// See [`Self::run_as_of`] for the full contract; this entry point
    /// uses the current local date to reject future-dated records.
    ///
    /// # Errors
    ///
    /// Propagates every error documented on [`Self::run_as_of`].
    pub fn run(
        &self,
        history: &[QuarterlyRecord],
        sector: Sector,
        benchmark: &IndustryBenchmark,
        params: &ValuationParameters,
    ) -> Result<ValuationResult> {
        self.run_as_of(history, sector, benchmark, params, Local::now().date_naive())
    }

    /// Value a company from its quarterly history with an explicit clock.
    ///
    /// The history may arrive unsorted and may contain several records for
    /// the same calendar quarter; the engine sorts descending by report
    /// date, drops records dated after `as_of`, retains at most
    /// `max_quarters`, and deduplicates by (year, quarter) with the most
    /// recent report winning.
    ///
    /// # Errors
    ///
    /// - [`RondaError::InvalidInput`] when the discount rate does not
    ///   exceed the terminal growth rate, or the latest quarter reports
    ///   non-positive total shares.
    /// - [`RondaError::NotFound`] when `history` is empty.
    /// - [`RondaError::InsufficientData`] when fewer than `min_quarters`
    ///   records are dated on or before `as_of`.
    pub fn run_as_of(
        &self,
        history: &[QuarterlyRecord],
        sector: Sector,
        benchmark: &IndustryBenchmark,
        params: &ValuationParameters,
        as_of: NaiveDate,
    ) -> Result<ValuationResult> {
        let warnings = params.validate()?;

        if history.is_empty() {
            return Err(RondaError::NotFound(
                "no quarterly records supplied".to_string(),
            ));
        }

        let mut usable: Vec<QuarterlyRecord> = history
            .iter()
            .filter(|r| r.report_date <= as_of)
            .cloned()
            .collect();
        usable.sort_by(|a, b| b.report_date.cmp(&a.report_date));

        if usable.len() < self.config.min_quarters {
            return Err(RondaError::InsufficientData(format!(
                "need at least {} quarterly reports on or before {}, have {}",
                self.config.min_quarters,
                as_of,
                usable.len()
            )));
        }
        usable.truncate(self.config.max_quarters);

        let latest = &usable[0];
        if latest.total_shares <= 0.0 {
            return Err(RondaError::InvalidInput(format!(
                "total shares outstanding must be positive, got {}",
                latest.total_shares
            )));
        }

        let series = FcfSeries::from_records(&usable);
        let annual_fcf = series.annual_fcf();
        let growth_rate = series.growth_estimate(params.growth_rate);

        let enterprise_value = if sector == Sector::Technology {
            technology_value(latest, benchmark)
        } else if annual_fcf > 0.0 {
            // Gordon growth perpetuity. The growth estimate is clamped to
            // params.growth_rate, which validate() proved strictly below
            // the discount rate, so the denominator stays positive.
            annual_fcf * (1.0 + growth_rate) / (params.discount_rate - growth_rate)
        } else {
            multiple_blend_value(latest, benchmark, sector)
        };

        let mut equity_value = enterprise_value + latest.financial_assets
            + latest.long_term_investments
            - latest.total_liabilities;

        // Floor against the book: a DCF output below net assets is
        // replaced by a P/B-multiple valuation of the book itself.
        let net_assets = latest.net_assets();
        if equity_value < net_assets {
            equity_value = net_assets * benchmark.pb_or_default();
        }

        let per_share_value =
            equity_value * (1.0 - latest.minority_interest_ratio) / latest.total_shares;

        let checks = checks::compute(
            enterprise_value,
            equity_value,
            net_assets,
            latest.annualized_profit(),
            annual_fcf,
        );

        Ok(ValuationResult {
            symbol: latest.symbol.clone(),
            sector,
            enterprise_value,
            equity_value,
            per_share_value,
            quarterly_fcf: series.trailing_year().to_vec(),
            checks,
            warnings,
        })
    }

    /// Value a company by symbol, wiring the two collaborator interfaces.
    ///
    /// Fetches the history from `histories`, classifies the sector from
    /// the symbol, looks up the benchmark, and runs the valuation as of
    /// today.
    ///
    /// # Errors
    ///
    /// Propagates provider failures and every error documented on
    /// [`Self::run_as_of`]; an empty history is reported as
    /// [`RondaError::NotFound`] carrying the symbol.
    pub fn value_company(
        &self,
        histories: &dyn FinancialHistoryProvider,
        benchmarks: &dyn IndustryBenchmarkProvider,
        symbol: &str,
        params: &ValuationParameters,
    ) -> Result<ValuationResult> {
        let history = histories.history(symbol)?;
        if history.is_empty() {
            return Err(RondaError::NotFound(symbol.to_string()));
        }
        let sector = Sector::from_symbol(symbol);
        let benchmark = benchmarks.benchmark(sector);
        self.run(&history, sector, &benchmark, params)
    }
}

/// Technology valuation: weighted blend of a revenue-based and a
/// profit-based leg, each with a fallback for non-positive inputs.
fn technology_value(latest: &QuarterlyRecord, benchmark: &IndustryBenchmark) -> f64 {
    let annual_revenue = latest.annualized_revenue();
    let revenue_based = if annual_revenue > 0.0 {
        annual_revenue * benchmark.ps_or_default(Sector::Technology)
    } else {
        latest.net_assets() * 2.0
    };

    let annual_profit = latest.annualized_profit();
    let profit_based = if annual_profit > 0.0 {
        annual_profit * benchmark.pe_or_default(Sector::Technology)
    } else {
        revenue_based
    };

    TECH_REVENUE_WEIGHT * revenue_based + TECH_PROFIT_WEIGHT * profit_based
}

/// Multiple-blend valuation for a non-tech company without positive
/// trailing-year free cash flow.
fn multiple_blend_value(
    latest: &QuarterlyRecord,
    benchmark: &IndustryBenchmark,
    sector: Sector,
) -> f64 {
    let annual_profit = latest.annualized_profit();
    let pb_value = latest.net_assets() * benchmark.pb_or_default();
    let ps_value = latest.annualized_revenue() * benchmark.ps_or_default(sector);

    if annual_profit > 0.0 {
        let pe_value = annual_profit * benchmark.pe_or_default(sector);
        let (w_pe, w_pb, w_ps) = BLEND_PROFITABLE;
        w_pe * pe_value + w_pb * pb_value + w_ps * ps_value
    } else {
        let (w_pb, w_ps) = BLEND_LOSS_MAKING;
        w_pb * pb_value + w_ps * ps_value
    }
}
