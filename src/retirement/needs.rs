//! Inflation-adjusted retirement funding requirement

use log::{debug, warn};

use crate::projection::rates::annual_growth;

/// Total money needed to cover living expenses over the whole retirement
///
/// Today's monthly expense is inflated forward to the retirement date, then
/// each retirement year's annual expense is inflated once more per year.
///
/// # Arguments
/// * `current_age` - Age today
/// * `retirement_age` - Age at which contributions stop and spending starts
/// * `life_expectancy` - Age at which spending stops
/// * `monthly_expense` - Living expense per month in today's money
/// * `inflation_rate` - Annual inflation as a decimal (e.g., 0.02 for 2%)
///
/// # Returns
/// * Sum of every retirement year's expense; 0 when `life_expectancy <= retirement_age`
pub fn estimate_retirement_needs(
    current_age: i32,
    retirement_age: i32,
    life_expectancy: i32,
    monthly_expense: f64,
    inflation_rate: f64,
) -> f64 {
    let years_until_retirement = retirement_age - current_age;
    let retirement_duration = life_expectancy - retirement_age;

    if years_until_retirement < 0 {
        warn!(
            "retirement age {} is before current age {}; discounting expenses backward",
            retirement_age, current_age
        );
    }

    let monthly_expense_at_retirement =
        monthly_expense * annual_growth(inflation_rate, years_until_retirement);
    debug!(
        "monthly expense at retirement {:.2} over {} years",
        monthly_expense_at_retirement, retirement_duration
    );

    (0..retirement_duration.max(0)).fold(0.0, |total, year| {
        total + monthly_expense_at_retirement * 12.0 * annual_growth(inflation_rate, year)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scenario_a() {
        let total = estimate_retirement_needs(30, 65, 85, 50_000.0, 0.02);

        // Closed form of the same geometric series
        let at_retirement = 50_000.0 * 1.02_f64.powi(35);
        let expected = at_retirement * 12.0 * (1.02_f64.powi(20) - 1.0) / 0.02;
        assert_relative_eq!(total, expected, max_relative = 1e-12);

        // About 29.2M: 50k/month at 2% for 35 years is ~100k/month at 65
        assert!(total > 29_000_000.0 && total < 29_500_000.0, "total: {}", total);
    }

    #[test]
    fn test_no_retirement_years_needs_nothing() {
        assert_eq!(estimate_retirement_needs(30, 65, 65, 50_000.0, 0.02), 0.0);
        assert_eq!(estimate_retirement_needs(30, 65, 60, 50_000.0, 0.02), 0.0);
    }

    #[test]
    fn test_zero_inflation_is_flat() {
        let total = estimate_retirement_needs(40, 60, 80, 3_000.0, 0.0);
        assert_eq!(total, 3_000.0 * 12.0 * 20.0);
    }

    #[test]
    fn test_single_year_of_retirement() {
        let total = estimate_retirement_needs(64, 65, 66, 1_000.0, 0.03);
        assert_relative_eq!(total, 1_000.0 * 1.03 * 12.0, max_relative = 1e-12);
    }

    #[test]
    fn test_retirement_in_the_past_discounts() {
        // Already retired two years ago: today's expense is deflated back
        let total = estimate_retirement_needs(67, 65, 66, 1_000.0, 0.05);
        assert_relative_eq!(total, 1_000.0 / 1.05_f64.powi(2) * 12.0, max_relative = 1e-12);
    }
}
