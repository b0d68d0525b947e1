//! Free-cash-flow series derivation.
//!
//! Turns a prepared (non-future, date-descending) slice of quarterly
//! records into the per-quarter free-cash-flow series the engine values:
//! one figure per calendar (year, quarter), the trailing-year sum, and a
//! historical growth estimate.

use ronda_traits::QuarterlyRecord;
use std::collections::HashSet;

/// Quarters that make up one trailing year.
pub const QUARTERS_PER_YEAR: usize = 4;

/// Per-quarter free-cash-flow series for one company, most recent first.
///
/// The series is deduplicated by calendar (year, quarter): when several
/// records map to the same period, the first encountered after the
/// date-descending sort wins, so the most recent report for a period is
/// the one that counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FcfSeries {
    quarterly: Vec<f64>,
}

impl FcfSeries {
    /// Build the series from records already filtered to non-future dates
    /// and sorted descending by report date.
    #[must_use]
    pub fn from_records(records: &[QuarterlyRecord]) -> Self {
        let mut seen = HashSet::new();
        let quarterly = records
            .iter()
            .filter(|r| seen.insert(r.year_quarter()))
            .map(QuarterlyRecord::free_cash_flow)
            .collect();
        Self { quarterly }
    }

    /// The deduplicated quarterly FCF figures, most recent first.
    #[must_use]
    pub fn quarterly(&self) -> &[f64] {
        &self.quarterly
    }

    /// Number of distinct quarters in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quarterly.len()
    }

    /// Whether the series holds no quarters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quarterly.is_empty()
    }

    /// The up-to-four most recent quarterly figures, most recent first.
    #[must_use]
    pub fn trailing_year(&self) -> &[f64] {
        &self.quarterly[..self.quarterly.len().min(QUARTERS_PER_YEAR)]
    }

    /// Annual free cash flow: the sum of the trailing-year figures.
    ///
    /// A short series (fewer than four distinct quarters after
    /// deduplication) sums what is there rather than failing.
    #[must_use]
    pub fn annual_fcf(&self) -> f64 {
        self.trailing_year().iter().sum()
    }

    /// Normalized annual free cash flow.
    ///
    /// When the trailing year sums negative, returns the mean of the
    /// positive quarterly figures across the whole series, annualized
    /// (zero when no quarter is positive). Otherwise the plain
    /// trailing-year sum. Offered as a smoothing view for companies in a
    /// capex trough; the valuation path uses [`Self::annual_fcf`].
    #[must_use]
    pub fn normalized_annual_fcf(&self) -> f64 {
        let annual = self.annual_fcf();
        if annual >= 0.0 {
            return annual;
        }
        let positive: Vec<f64> = self.quarterly.iter().copied().filter(|f| *f > 0.0).collect();
        if positive.is_empty() {
            0.0
        } else {
            positive.iter().sum::<f64>() / positive.len() as f64 * QUARTERS_PER_YEAR as f64
        }
    }

    /// Historical growth estimate, clamped by `default_growth`.
    ///
    /// With at least eight distinct quarters, compares the trailing-year
    /// FCF sum against the prior year's and converts the ratio to a
    /// quarterly-compounded annual rate, `(recent / prior)^(1/4) - 1`.
    /// The result never exceeds `default_growth`: the configured rate is
    /// a ceiling, not a blend. When either year's sum is non-positive, or
    /// the series is shorter than eight quarters, the configured rate is
    /// returned unchanged.
    #[must_use]
    pub fn growth_estimate(&self, default_growth: f64) -> f64 {
        if self.quarterly.len() < 2 * QUARTERS_PER_YEAR {
            return default_growth;
        }
        let recent: f64 = self.quarterly[..QUARTERS_PER_YEAR].iter().sum();
        let prior: f64 = self.quarterly[QUARTERS_PER_YEAR..2 * QUARTERS_PER_YEAR]
            .iter()
            .sum();
        if recent > 0.0 && prior > 0.0 {
            ((recent / prior).powf(0.25) - 1.0).min(default_growth)
        } else {
            default_growth
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn record(date: NaiveDate, ocf: f64, capex: f64) -> QuarterlyRecord {
        QuarterlyRecord {
            symbol: "600309".to_string(),
            name: None,
            report_date: date,
            revenue: 0.0,
            net_profit: 0.0,
            operating_cash_flow: ocf,
            capital_expenditure: capex,
            total_assets: 0.0,
            total_liabilities: 0.0,
            financial_assets: 0.0,
            long_term_investments: 0.0,
            minority_interest_ratio: 0.0,
            total_shares: 1.0,
        }
    }

    fn quarter_end(year: i32, quarter: u32) -> NaiveDate {
        let (month, day) = match quarter {
            1 => (3, 31),
            2 => (6, 30),
            3 => (9, 30),
            _ => (12, 31),
        };
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Records for `n` quarters counting back from 2024 Q4, newest first.
    fn descending_history(fcf_per_quarter: &[f64]) -> Vec<QuarterlyRecord> {
        let mut year = 2024;
        let mut quarter = 4;
        fcf_per_quarter
            .iter()
            .map(|fcf| {
                let r = record(quarter_end(year, quarter), *fcf, 0.0);
                if quarter == 1 {
                    quarter = 4;
                    year -= 1;
                } else {
                    quarter -= 1;
                }
                r
            })
            .collect()
    }

    #[test]
    fn test_annual_fcf_sums_four_quarters() {
        let history = descending_history(&[2.0e6, 2.0e6, 2.0e6, 2.0e6, 9.9e6]);
        let series = FcfSeries::from_records(&history);
        assert_relative_eq!(series.annual_fcf(), 8.0e6);
        assert_eq!(series.trailing_year(), &[2.0e6, 2.0e6, 2.0e6, 2.0e6]);
    }

    #[test]
    fn test_short_series_sums_what_is_there() {
        let history = descending_history(&[3.0e6, 1.0e6]);
        let series = FcfSeries::from_records(&history);
        assert_relative_eq!(series.annual_fcf(), 4.0e6);
        assert_eq!(series.trailing_year().len(), 2);
    }

    #[test]
    fn test_dedup_keeps_most_recent_report_per_quarter() {
        // Two records for 2024 Q2: a restated one dated later in the
        // quarter and the original. After the descending sort the
        // restatement comes first and wins.
        let restated = record(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(), 5.0e6, 0.0);
        let original = record(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 1.0e6, 0.0);
        let q1 = record(quarter_end(2024, 1), 2.0e6, 0.0);

        let series = FcfSeries::from_records(&[restated, original, q1]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.quarterly(), &[5.0e6, 2.0e6]);
    }

    #[test]
    fn test_capex_subtracted_by_absolute_value() {
        let history = vec![record(quarter_end(2024, 4), 3.0e6, -1.0e6)];
        let series = FcfSeries::from_records(&history);
        assert_relative_eq!(series.quarterly()[0], 2.0e6);
    }

    #[test]
    fn test_growth_estimate_needs_eight_quarters() {
        let history = descending_history(&[1.0; 7]);
        let series = FcfSeries::from_records(&history);
        assert_relative_eq!(series.growth_estimate(0.03), 0.03);
    }

    #[test]
    fn test_growth_estimate_clamped_to_configured_rate() {
        // Recent year doubles the prior year: raw estimate is
        // 2^(1/4) - 1 ~ 18.9%, clamped to the configured 3%.
        let history = descending_history(&[2.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0]);
        let series = FcfSeries::from_records(&history);
        assert_relative_eq!(series.growth_estimate(0.03), 0.03);
    }

    #[test]
    fn test_growth_estimate_below_ceiling_passes_through() {
        // Recent year grows ~4% over the prior year: the quarterly
        // compounded annual estimate stays below a 5% ceiling.
        let history = descending_history(&[1.04, 1.04, 1.04, 1.04, 1.0, 1.0, 1.0, 1.0]);
        let series = FcfSeries::from_records(&history);
        let estimate = series.growth_estimate(0.05);
        assert_relative_eq!(estimate, 1.04_f64.powf(0.25) - 1.0, epsilon = 1e-12);
        assert!(estimate < 0.05);
    }

    #[test]
    fn test_growth_estimate_falls_back_on_nonpositive_years() {
        let negative_recent = descending_history(&[-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0]);
        let series = FcfSeries::from_records(&negative_recent);
        assert_relative_eq!(series.growth_estimate(0.03), 0.03);

        let negative_prior = descending_history(&[1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0]);
        let series = FcfSeries::from_records(&negative_prior);
        assert_relative_eq!(series.growth_estimate(0.03), 0.03);
    }

    #[test]
    fn test_normalized_annual_fcf() {
        // Positive trailing year: identical to the plain sum.
        let positive = FcfSeries::from_records(&descending_history(&[1.0, 1.0, 1.0, 1.0]));
        assert_relative_eq!(positive.normalized_annual_fcf(), 4.0);

        // Negative trailing year: mean of the positive quarters, annualized.
        let trough =
            FcfSeries::from_records(&descending_history(&[-5.0, -5.0, 2.0, 2.0, 4.0, 4.0]));
        assert_relative_eq!(trough.annual_fcf(), -6.0);
        assert_relative_eq!(trough.normalized_annual_fcf(), 3.0 * 4.0);

        // Nothing positive at all: zero.
        let hopeless = FcfSeries::from_records(&descending_history(&[-1.0, -2.0, -3.0, -4.0]));
        assert_relative_eq!(hopeless.normalized_annual_fcf(), 0.0);
    }
}
