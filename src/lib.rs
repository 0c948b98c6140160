pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::{CatalogProvider, JsonCatalog, MemoryCatalog};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use models::{FoodItem, MealPlanResult, PlanRequest};
pub use planner::{generate_plan, plan_from_pool};
