mod boundary;
mod plan;

pub use boundary::BoundaryService;
pub use plan::{GenerateOutcome, PlanService};
