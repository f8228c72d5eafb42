//! Compound growth projector for lump-sum plus monthly contribution investments

mod state;
mod engine;
mod trajectory;
pub mod rates;

pub use state::GrowthState;
pub use engine::{project, project_final, project_trajectory, EtfParameters, GrowthEngine};
pub use trajectory::{write_trajectory_csv, EtfResult, EtfSummary, YearPoint};
