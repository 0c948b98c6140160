pub mod food;
pub mod goal;
pub mod meal;
pub mod plan;

pub use food::{FoodItem, MealType};
pub use goal::{DietaryMode, Goal, GoalProfile, MacroRatios};
pub use meal::{CandidateMeal, MacroTotals};
pub use plan::{MacroBreakdown, MealPlanResult, PlanItem, PlanRequest};
