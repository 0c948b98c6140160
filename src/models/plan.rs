use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{DietaryMode, FoodItem, Goal, MacroTotals, MealType};

/// One meal-plan generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Dining hall name, matched partially and case-insensitively.
    pub location: String,
    pub target_calories: f64,
    pub target_protein_g: f64,
    pub meal_type: MealType,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub dietary_mode: DietaryMode,
    #[serde(default)]
    pub date: Option<String>,
}

impl PlanRequest {
    pub fn new(
        location: impl Into<String>,
        target_calories: f64,
        target_protein_g: f64,
        meal_type: MealType,
    ) -> Self {
        Self {
            location: location.into(),
            target_calories,
            target_protein_g,
            meal_type,
            goal: Goal::default(),
            dietary_mode: DietaryMode::default(),
            date: None,
        }
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_dietary_mode(mut self, mode: DietaryMode) -> Self {
        self.dietary_mode = mode;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Reject non-positive (or non-finite) targets.
    pub fn validate(&self) -> Result<()> {
        check_positive("target_calories", self.target_calories)?;
        check_positive("target_protein_g", self.target_protein_g)
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidTarget { field, value })
    }
}

/// A selected item with the macros it contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub serving_size: Option<String>,
    pub calories: f64,
    #[serde(rename = "protein")]
    pub protein_g: f64,
    #[serde(rename = "fat")]
    pub fat_g: f64,
    #[serde(rename = "carbs")]
    pub carbohydrate_g: f64,
    #[serde(rename = "fiber")]
    pub fiber_g: f64,
}

impl From<&FoodItem> for PlanItem {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            serving_size: item.serving_size.clone(),
            calories: item.calories,
            protein_g: item.protein_g,
            fat_g: item.fat_g,
            carbohydrate_g: item.carbohydrate_g,
            fiber_g: item.fiber_g,
        }
    }
}

/// Share of macro calories from each macronutrient, in whole percent.
///
/// Each value is rounded on its own, so the three may not add up to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein_percent: u32,
    pub fat_percent: u32,
    pub carb_percent: u32,
}

/// The reportable outcome of a successful plan search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResult {
    pub dining_hall: String,
    pub meal_type: MealType,
    pub date: Option<String>,
    pub dietary: DietaryMode,
    pub goal: Goal,
    pub goal_description: String,
    pub target_calories: f64,
    pub target_protein: f64,
    pub score: f64,
    pub items: Vec<PlanItem>,
    pub totals: MacroTotals,
    pub breakdown: MacroBreakdown,
    pub meets_calorie_target: bool,
    pub meets_protein_target: bool,
}
