pub mod plan;
pub mod properties;

pub use plan::{PlanArgs, plan_command};
pub use properties::properties_command;
