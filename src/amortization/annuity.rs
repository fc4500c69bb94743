//! Closed-form annuity formulas
//!
//! Used for the fixed monthly payment and for its inverse (largest loan a
//! given payment can carry).

use crate::error::{require_non_negative, require_positive, MortgageError, Result};

/// Payment per unit of principal: `r / (1 - (1+r)^-n)`, or `1/n` when `r == 0`.
///
/// Evaluated as `r / -expm1(-n * ln1p(r))`, which stays finite and positive
/// for rates near zero and for any `u32` month count.
pub fn annuity_factor(monthly_rate: f64, total_months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return 1.0 / total_months as f64;
    }

    let discount = (-(total_months as f64) * monthly_rate.ln_1p()).exp_m1();
    monthly_rate / -discount
}

/// Calculate the fixed monthly payment for a fully amortizing loan.
///
/// # Arguments
/// * `principal` - Amount borrowed, must be positive
/// * `monthly_rate` - Periodic rate as a decimal (0.005 for 6% annual)
/// * `total_months` - Number of payments, at least 1
///
/// A zero rate amortizes straight-line (`principal / total_months`).
pub fn compute_monthly_payment(principal: f64, monthly_rate: f64, total_months: u32) -> Result<f64> {
    require_positive("principal", principal)?;
    require_non_negative("monthly_rate", monthly_rate)?;
    require_months("total_months", total_months)?;

    if monthly_rate == 0.0 {
        return Ok(principal / total_months as f64);
    }

    Ok(principal * annuity_factor(monthly_rate, total_months))
}

/// Largest principal that `monthly_payment` fully amortizes over `total_months`.
///
/// A zero rate gives `monthly_payment * total_months`.
pub fn max_principal_for_payment(monthly_payment: f64, monthly_rate: f64, total_months: u32) -> Result<f64> {
    require_positive("affordable_monthly_payment", monthly_payment)?;
    require_non_negative("monthly_rate", monthly_rate)?;
    require_months("total_months", total_months)?;

    if monthly_rate == 0.0 {
        return Ok(monthly_payment * total_months as f64);
    }

    Ok(monthly_payment / annuity_factor(monthly_rate, total_months))
}

fn require_months(field: &str, total_months: u32) -> Result<u32> {
    if total_months == 0 {
        Err(MortgageError::invalid(field, "must be at least one month"))
    } else {
        Ok(total_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_standard_payment() {
        // 737,000 at 6% over 20 years
        let payment = compute_monthly_payment(737_000.0, 0.005, 240).unwrap();
        assert_abs_diff_eq!(payment, 5280.0969, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = compute_monthly_payment(120_000.0, 0.0, 360).unwrap();
        assert_eq!(payment, 120_000.0 / 360.0);
    }

    #[test]
    fn test_single_period_repays_principal_plus_interest() {
        let payment = compute_monthly_payment(1_000.0, 0.01, 1).unwrap();
        assert_relative_eq!(payment, 1_010.0, epsilon = 1e-9);
    }

    #[test]
    fn test_payment_positive_across_inputs() {
        for &principal in &[1.0, 50_000.0, 2_500_000.0] {
            for &rate in &[0.0, 0.0001, 0.005, 0.0125] {
                for &months in &[1, 12, 180, 480] {
                    let payment = compute_monthly_payment(principal, rate, months).unwrap();
                    assert!(payment > 0.0, "non-positive payment for {principal}/{rate}/{months}");
                    assert_eq!(payment, compute_monthly_payment(principal, rate, months).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_huge_month_count_tends_to_interest_only() {
        // Past i32::MAX payments the balance is effectively never repaid
        let payment = compute_monthly_payment(100_000.0, 0.005, 3_000_000_000).unwrap();
        assert!(payment > 0.0);
        assert_relative_eq!(payment, 500.0, max_relative = 1e-12);

        let principal = max_principal_for_payment(500.0, 0.005, u32::MAX).unwrap();
        assert_relative_eq!(principal, 100_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_tiny_rate_approaches_straight_line() {
        let payment = compute_monthly_payment(360_000.0, 1e-18, 360).unwrap();
        assert!(payment.is_finite());
        assert_relative_eq!(payment, 1_000.0, max_relative = 1e-9);
        assert_relative_eq!(annuity_factor(1e-17, 12), 1.0 / 12.0, max_relative = 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compute_monthly_payment(0.0, 0.005, 240).is_err());
        assert!(compute_monthly_payment(-10.0, 0.005, 240).is_err());
        assert!(compute_monthly_payment(100.0, 0.005, 0).is_err());
        assert!(compute_monthly_payment(100.0, -0.001, 12).is_err());
        assert!(compute_monthly_payment(100.0, f64::NAN, 12).is_err());
    }

    #[test]
    fn test_max_principal_inverts_payment() {
        let payment = compute_monthly_payment(300_000.0, 0.06 / 12.0, 360).unwrap();
        let principal = max_principal_for_payment(payment, 0.06 / 12.0, 360).unwrap();
        assert_relative_eq!(principal, 300_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_max_principal_zero_rate() {
        let principal = max_principal_for_payment(1_500.0, 0.0, 240).unwrap();
        assert_eq!(principal, 360_000.0);
    }

    #[test]
    fn test_max_principal_rejects_non_positive_payment() {
        assert!(max_principal_for_payment(0.0, 0.005, 240).is_err());
        assert!(max_principal_for_payment(1_000.0, 0.005, 0).is_err());
    }
}
