//! Core data types for the Ronda valuation framework.
//!
//! This module defines the statement-level input record, the valuation
//! parameter set, industry benchmark multiples, and the result types
//! produced by the engine.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RondaError};
use crate::sector::Sector;

/// One fiscal quarter's statement data for one company.
///
/// Records are created by the surrounding data layer and consumed read-only
/// by the engine. The report date uniquely identifies a record within a
/// company's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyRecord {
    /// Stock identifier.
    pub symbol: String,
    /// Company name, when known.
    #[serde(default)]
    pub name: Option<String>,
    /// Quarter-end report date.
    pub report_date: NaiveDate,
    /// Quarterly revenue.
    #[serde(default)]
    pub revenue: f64,
    /// Quarterly net profit. May be negative.
    #[serde(default)]
    pub net_profit: f64,
    /// Cash flow from operating activities.
    #[serde(default)]
    pub operating_cash_flow: f64,
    /// Capital expenditure. Sign conventions vary by source; the engine
    /// always subtracts the absolute value.
    #[serde(default)]
    pub capital_expenditure: f64,
    /// Total assets at quarter end.
    #[serde(default)]
    pub total_assets: f64,
    /// Total liabilities at quarter end.
    #[serde(default)]
    pub total_liabilities: f64,
    /// Financial assets held (cash-like, tradable securities).
    #[serde(default)]
    pub financial_assets: f64,
    /// Long-term equity investments.
    #[serde(default)]
    pub long_term_investments: f64,
    /// Minority (non-controlling) interest as a fraction in [0, 1].
    #[serde(default)]
    pub minority_interest_ratio: f64,
    /// Total shares outstanding. Must be positive for per-share output.
    #[serde(default)]
    pub total_shares: f64,
}

impl QuarterlyRecord {
    /// Free cash flow for this quarter: operating cash flow minus the
    /// absolute value of capital expenditure.
    #[must_use]
    pub fn free_cash_flow(&self) -> f64 {
        self.operating_cash_flow - self.capital_expenditure.abs()
    }

    /// Net assets (book value) at quarter end.
    #[must_use]
    pub const fn net_assets(&self) -> f64 {
        self.total_assets - self.total_liabilities
    }

    /// Revenue annualized from this single quarter.
    #[must_use]
    pub const fn annualized_revenue(&self) -> f64 {
        self.revenue * 4.0
    }

    /// Net profit annualized from this single quarter.
    #[must_use]
    pub const fn annualized_profit(&self) -> f64 {
        self.net_profit * 4.0
    }

    /// Calendar (year, quarter) key for this record's report date.
    #[must_use]
    pub fn year_quarter(&self) -> (i32, u32) {
        let quarter = (self.report_date.month() - 1) / 3 + 1;
        (self.report_date.year(), quarter)
    }
}

/// Non-fatal advisory raised during parameter validation.
///
/// Warnings never block a valuation run; they are surfaced to the caller
/// in [`ValuationResult::warnings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterWarning {
    /// Terminal growth above 5% is rarely defensible for a perpetuity.
    HighTerminalGrowth,
    /// A discount rate below 5% tends to overstate enterprise value.
    LowDiscountRate,
}

/// Inputs to one valuation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValuationParameters {
    /// Discount rate as a fraction. Must exceed `growth_rate`.
    pub discount_rate: f64,
    /// Terminal growth rate as a fraction.
    pub growth_rate: f64,
    /// Forecast horizon in years. Accepted for forward compatibility; the
    /// perpetuity formula does not consume it.
    pub forecast_years: u32,
}

impl Default for ValuationParameters {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            growth_rate: 0.03,
            forecast_years: 5,
        }
    }
}

impl ValuationParameters {
    /// Domain-check the parameter set.
    ///
    /// Returns the list of non-fatal advisories on success.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidInput`] when the discount rate does not
    /// exceed the terminal growth rate, which would blow up the perpetuity
    /// denominator.
    pub fn validate(&self) -> Result<Vec<ParameterWarning>> {
        if self.discount_rate <= self.growth_rate {
            return Err(RondaError::InvalidInput(format!(
                "discount rate {} must exceed terminal growth rate {}",
                self.discount_rate, self.growth_rate
            )));
        }

        let mut warnings = Vec::new();
        if self.growth_rate > 0.05 {
            warnings.push(ParameterWarning::HighTerminalGrowth);
        }
        if self.discount_rate < 0.05 {
            warnings.push(ParameterWarning::LowDiscountRate);
        }
        Ok(warnings)
    }
}

/// Per-industry valuation multiples.
///
/// Absent fields fall back to engine-defined, sector-aware defaults; an
/// unknown industry is represented by the all-`None` default value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    /// Average price-to-earnings ratio.
    #[serde(default)]
    pub avg_pe: Option<f64>,
    /// Average price-to-book ratio.
    #[serde(default)]
    pub avg_pb: Option<f64>,
    /// Price-to-sales ratio.
    #[serde(default)]
    pub ps_ratio: Option<f64>,
    /// Average historical growth rate.
    #[serde(default)]
    pub avg_growth_rate: Option<f64>,
}

impl IndustryBenchmark {
    /// P/E multiple, falling back to the sector default (25 for
    /// technology, 15 otherwise).
    #[must_use]
    pub fn pe_or_default(&self, sector: Sector) -> f64 {
        self.avg_pe
            .unwrap_or(if sector == Sector::Technology { 25.0 } else { 15.0 })
    }

    /// P/B multiple, falling back to 1.5.
    #[must_use]
    pub fn pb_or_default(&self) -> f64 {
        self.avg_pb.unwrap_or(1.5)
    }

    /// P/S multiple, falling back to the sector default (3.0 for
    /// technology, 1.0 otherwise).
    #[must_use]
    pub fn ps_or_default(&self, sector: Sector) -> f64 {
        self.ps_ratio
            .unwrap_or(if sector == Sector::Technology { 3.0 } else { 1.0 })
    }
}

/// Plausibility ratios computed against the latest quarter's book value
/// and annualized net profit.
///
/// A `None` ratio is the explicit "undefined" sentinel used when the
/// denominator is not positive; serialized output never carries a
/// non-finite number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ValuationChecks {
    /// Equity value over book value.
    pub pb_ratio: Option<f64>,
    /// Equity value over annualized net profit.
    pub pe_ratio: Option<f64>,
    /// Enterprise value over annual free cash flow.
    pub ev_fcf_ratio: Option<f64>,
    /// Whether every ratio falls inside its reasonableness band. An
    /// undefined ratio makes its clause false.
    pub is_reasonable: bool,
}

/// Output of one valuation run.
///
/// Constructed fresh per call and immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Stock identifier the valuation was computed for.
    pub symbol: String,
    /// Sector the company was classified into.
    pub sector: Sector,
    /// Value of the operating business before non-operating adjustments.
    pub enterprise_value: f64,
    /// Enterprise value adjusted for financial assets, long-term
    /// investments, and total liabilities.
    pub equity_value: f64,
    /// Equity value attributable per share, net of minority interest.
    pub per_share_value: f64,
    /// The four most recent quarterly free-cash-flow figures used,
    /// most recent first.
    pub quarterly_fcf: Vec<f64>,
    /// Plausibility checks for the computed valuation.
    pub checks: ValuationChecks,
    /// Non-fatal advisories raised during parameter validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParameterWarning>,
}
