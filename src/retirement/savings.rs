//! Monthly savings needed to reach a retirement target

use log::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::projection::rates::{annual_growth, effective_monthly_rate};

/// Level payment whose ordinary-annuity future value equals `future_value`
///
/// Solves `FV = PMT * ((1 + r)^n - 1) / r` for `PMT`. A zero rate accrues
/// linearly, `PMT = FV / n`.
///
/// # Arguments
/// * `future_value` - Amount to accumulate
/// * `rate` - Periodic rate
/// * `periods` - Number of end-of-period payments (must be positive)
pub fn annuity_payment(future_value: f64, rate: f64, periods: i64) -> f64 {
    if rate == 0.0 {
        return future_value / periods as f64;
    }
    future_value * rate / ((1.0 + rate).powf(periods as f64) - 1.0)
}

/// Monthly contribution needed on top of current savings to fund retirement
///
/// Current savings are grown at the annual return until retirement; only the
/// shortfall is funded by monthly contributions compounding at the effective
/// monthly rate.
///
/// # Returns
/// * `Ok(0.0)` when current savings already cover the need
/// * `Err(PlannerError::NoSavingsHorizon)` when there is a shortfall but no months left
pub fn solve_monthly_savings(
    retirement_needs: f64,
    current_age: i32,
    retirement_age: i32,
    current_savings: f64,
    annual_return: f64,
) -> Result<f64> {
    let years_until_retirement = retirement_age - current_age;
    let months_until_retirement = i64::from(years_until_retirement) * 12;
    let monthly_rate = effective_monthly_rate(annual_return);

    let future_value_of_savings =
        current_savings * annual_growth(annual_return, years_until_retirement);
    let additional_needs = retirement_needs - future_value_of_savings;
    debug!(
        "savings grow to {:.2}; shortfall {:.2} over {} months",
        future_value_of_savings, additional_needs, months_until_retirement
    );

    if additional_needs <= 0.0 {
        return Ok(0.0);
    }

    if months_until_retirement <= 0 {
        return Err(PlannerError::NoSavingsHorizon {
            additional_needs,
            months: months_until_retirement,
        });
    }

    if monthly_rate == 0.0 {
        warn!("zero return rate; monthly savings accrue without growth");
    }

    Ok(annuity_payment(
        additional_needs,
        monthly_rate,
        months_until_retirement,
    ))
}
