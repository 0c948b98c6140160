mod plan_log;

pub use plan_log::{append_plan_log, load_plan_log, PlanLogEntry};

/// Plan log used when none is named.
pub const DEFAULT_PLAN_LOG: &str = "plan_log.json";
