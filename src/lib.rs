//! Savings Planner - Retirement funding and ETF growth projection engine
//!
//! This library provides:
//! - Inflation-adjusted retirement funding requirements
//! - Monthly savings needed to close the gap to that requirement
//! - Month-by-month compounding of lump-sum plus recurring ETF investments, net of fees
//! - Side-by-side comparison of investment strategies
//!
//! All computations are pure; monetary values are raw `f64` amounts left to the
//! caller to format.

pub mod error;
pub mod retirement;
pub mod projection;
pub mod strategy;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use retirement::{
    estimate_retirement_needs, plan_retirement, solve_monthly_savings, RetirementParameters,
    RetirementResult,
};
pub use projection::{
    project, project_final, project_trajectory, EtfParameters, EtfResult, EtfSummary,
    GrowthEngine, YearPoint,
};
pub use strategy::{compare_strategies, ComparisonEntry, Strategy, StrategySet, StrategyTrajectory};
