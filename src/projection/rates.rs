//! Rate conversions shared by the projector and the savings solver
//!
//! Annual rates are converted to monthly rates through the twelfth root of the
//! annual growth factor, never by dividing by 12.

/// Monthly rate whose 12-fold compounding equals the given annual growth factor
///
/// # Arguments
/// * `annual_factor` - One plus the net annual rate (e.g., 1.07 for 7%)
pub fn monthly_rate_from_factor(annual_factor: f64) -> f64 {
    annual_factor.powf(1.0 / 12.0) - 1.0
}

/// Effective monthly rate for a nominal annual rate
pub fn effective_monthly_rate(annual_rate: f64) -> f64 {
    monthly_rate_from_factor(1.0 + annual_rate)
}

/// Effective monthly rate for a fund, net of its expense ratio
///
/// The expense ratio is taken off the annual rate before conversion, as
/// `(1 + return - expense)^(1/12) - 1`. Subtracting a monthly fee after the
/// conversion gives a different figure.
pub fn net_monthly_rate(annual_return_rate: f64, expense_ratio: f64) -> f64 {
    monthly_rate_from_factor(1.0 + annual_return_rate - expense_ratio)
}

/// Growth of one unit over whole years at an annual rate
pub fn annual_growth(annual_rate: f64, years: i32) -> f64 {
    (1.0 + annual_rate).powi(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_twelve_months_compound_to_annual_rate() {
        let monthly = effective_monthly_rate(0.07);
        let compounded = (1.0 + monthly).powi(12) - 1.0;
        assert_relative_eq!(compounded, 0.07, epsilon = 1e-12);

        // Geometric conversion is always below simple division for positive rates
        assert!(monthly < 0.07 / 12.0);
    }

    #[test]
    fn test_zero_rate_is_exactly_zero() {
        assert_eq!(effective_monthly_rate(0.0), 0.0);
        assert_eq!(net_monthly_rate(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_expense_comes_off_annual_rate() {
        let net = net_monthly_rate(0.08, 0.0025);
        assert_relative_eq!(net, effective_monthly_rate(0.0775), epsilon = 1e-15);

        // Subtracting the fee monthly after conversion is a different number
        let after = effective_monthly_rate(0.08) - 0.0025 / 12.0;
        assert!((net - after).abs() > 1e-7);
    }

    #[test]
    fn test_annual_growth_negative_years_discounts() {
        assert_relative_eq!(annual_growth(0.05, 2), 1.1025, epsilon = 1e-12);
        assert_relative_eq!(annual_growth(0.05, -1), 1.0 / 1.05, epsilon = 1e-12);
        assert_eq!(annual_growth(0.05, 0), 1.0);
    }
}
