//! Running state of a growth projection

use super::engine::EtfParameters;
use super::trajectory::YearPoint;

/// State of an investment at a month boundary during projection
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Months simulated so far (0 before the first month)
    pub month: u32,

    /// Market value at the end of the current month
    pub value: f64,

    /// Cumulative money put in, including the initial lump sum
    pub contributions: f64,
}

impl GrowthState {
    /// Initialize state at projection start
    pub fn from_params(params: &EtfParameters) -> Self {
        Self {
            month: 0,
            value: params.initial_investment,
            contributions: params.initial_investment,
        }
    }

    /// Grow one month, then add the contribution at month end
    ///
    /// The contribution is not itself compounded in the month it is added.
    pub fn advance_month(&mut self, monthly_rate: f64, monthly_contribution: f64) {
        self.month += 1;
        self.value = self.value * (1.0 + monthly_rate) + monthly_contribution;
        self.contributions += monthly_contribution;
    }

    /// Whole years elapsed
    pub fn year(&self) -> u32 {
        self.month / 12
    }

    /// True after the 12th, 24th, ... month
    pub fn is_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }

    pub fn gain(&self) -> f64 {
        self.value - self.contributions
    }

    /// Snapshot of the current state as a trajectory point
    pub fn snapshot(&self) -> YearPoint {
        YearPoint::new(self.year(), self.value, self.contributions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> EtfParameters {
        EtfParameters {
            initial_investment: 1_000.0,
            monthly_contribution: 100.0,
            annual_return_rate: 0.06,
            expense_ratio: 0.0,
            years: 1,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GrowthState::from_params(&params());
        assert_eq!(state.month, 0);
        assert_eq!(state.value, 1_000.0);
        assert_eq!(state.contributions, 1_000.0);
        assert_eq!(state.gain(), 0.0);
        assert!(!state.is_year_end());
    }

    #[test]
    fn test_contribution_added_after_growth() {
        let mut state = GrowthState::from_params(&params());
        state.advance_month(0.01, 100.0);

        assert_relative_eq!(state.value, 1_110.0, epsilon = 1e-9);
        assert_eq!(state.contributions, 1_100.0);
        assert_relative_eq!(state.gain(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_year_end_detection() {
        let mut state = GrowthState::from_params(&params());
        for _ in 0..11 {
            state.advance_month(0.0, 0.0);
            assert!(!state.is_year_end());
        }
        state.advance_month(0.0, 0.0);
        assert!(state.is_year_end());
        assert_eq!(state.snapshot().year, 1);
    }
}
