//! Valuation plausibility checks.
//!
//! After a valuation run the engine sanity-checks its output against the
//! latest quarter's book value and annualized net profit. Ratios with a
//! non-positive denominator are reported as `None` (undefined) instead of
//! leaking a non-finite number into serialized results.

use ronda_traits::ValuationChecks;

/// Reasonable band for equity value over book value.
pub const PB_BAND: (f64, f64) = (0.5, 5.0);
/// Reasonable band for equity value over annualized profit.
pub const PE_BAND: (f64, f64) = (5.0, 30.0);
/// Reasonable band for enterprise value over annual free cash flow.
pub const EV_FCF_BAND: (f64, f64) = (5.0, 20.0);

/// Divide, treating a non-positive denominator as undefined.
fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Whether a ratio is defined and inside its band. Undefined is never
/// reasonable.
fn within(value: Option<f64>, band: (f64, f64)) -> bool {
    value.is_some_and(|v| v >= band.0 && v <= band.1)
}

/// Compute the validation block for one valuation run.
///
/// `book_value` and `annualized_profit` come from the latest quarter;
/// `annual_fcf` is the trailing-year free cash flow the engine valued.
#[must_use]
pub fn compute(
    enterprise_value: f64,
    equity_value: f64,
    book_value: f64,
    annualized_profit: f64,
    annual_fcf: f64,
) -> ValuationChecks {
    let pb_ratio = ratio(equity_value, book_value);
    let pe_ratio = ratio(equity_value, annualized_profit);
    let ev_fcf_ratio = ratio(enterprise_value, annual_fcf);

    let is_reasonable = within(pb_ratio, PB_BAND)
        && within(pe_ratio, PE_BAND)
        && within(ev_fcf_ratio, EV_FCF_BAND);

    ValuationChecks {
        pb_ratio,
        pe_ratio,
        ev_fcf_ratio,
        is_reasonable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_ratios_in_band() {
        // equity 150 vs book 100 -> P/B 1.5; profit 10 -> P/E 15;
        // EV 120 vs FCF 8 -> EV/FCF 15.
        let checks = compute(120.0, 150.0, 100.0, 10.0, 8.0);
        assert_relative_eq!(checks.pb_ratio.unwrap(), 1.5);
        assert_relative_eq!(checks.pe_ratio.unwrap(), 15.0);
        assert_relative_eq!(checks.ev_fcf_ratio.unwrap(), 15.0);
        assert!(checks.is_reasonable);
    }

    #[test]
    fn test_loss_maker_has_undefined_pe() {
        let checks = compute(120.0, 150.0, 100.0, -10.0, 8.0);
        assert!(checks.pe_ratio.is_none());
        assert!(!checks.is_reasonable);
    }

    #[test]
    fn test_negative_fcf_has_undefined_ev_fcf() {
        let checks = compute(120.0, 150.0, 100.0, 10.0, -2.0);
        assert!(checks.ev_fcf_ratio.is_none());
        assert!(!checks.is_reasonable);
    }

    #[test]
    fn test_zero_book_value_has_undefined_pb() {
        let checks = compute(120.0, 150.0, 0.0, 10.0, 8.0);
        assert!(checks.pb_ratio.is_none());
        assert!(!checks.is_reasonable);
    }

    #[test]
    fn test_out_of_band_ratio_is_unreasonable() {
        // P/B of 6 falls outside [0.5, 5.0].
        let checks = compute(120.0, 600.0, 100.0, 30.0, 8.0);
        assert_relative_eq!(checks.pb_ratio.unwrap(), 6.0);
        assert!(!checks.is_reasonable);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        // P/B 0.5, P/E 5, EV/FCF 5 all sit exactly on a band edge.
        let checks = compute(50.0, 50.0, 100.0, 10.0, 10.0);
        assert!(checks.is_reasonable);
    }
}
