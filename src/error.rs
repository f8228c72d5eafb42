//! Error types for planner computations

use thiserror::Error;

/// Failures a computation cannot degrade from without producing a misleading figure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// A strategy's trajectory has no points to compare
    #[error("strategy '{name}' has an empty trajectory")]
    EmptyTrajectory { name: String },

    /// Growth percentage would divide by a zero starting value
    #[error("strategy '{name}' starts at zero value; growth percentage is undefined")]
    ZeroInitialValue { name: String },

    /// Money is still needed but there are no months left to save it in
    #[error("{additional_needs:.2} still needed with {months} months until retirement")]
    NoSavingsHorizon { additional_needs: f64, months: i64 },

    /// Comparison requested before a strategy was projected
    #[error("strategy '{id}' has not been projected")]
    NotProjected { id: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
