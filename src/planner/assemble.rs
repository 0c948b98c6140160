use crate::config::PlannerConfig;
use crate::models::{
    CandidateMeal, GoalProfile, MacroBreakdown, MacroTotals, MealPlanResult, PlanItem, PlanRequest,
};
use crate::planner::constants::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Percent of macro calories from protein, fat and carbohydrate.
///
/// All zero when the meal has no macro calories.
pub fn macro_breakdown(totals: &MacroTotals) -> MacroBreakdown {
    let protein = totals.protein_g * KCAL_PER_G_PROTEIN;
    let fat = totals.fat_g * KCAL_PER_G_FAT;
    let carb = totals.carbohydrate_g * KCAL_PER_G_CARB;
    let sum = protein + fat + carb;

    if sum <= 0.0 {
        return MacroBreakdown::default();
    }

    let percent = |kcal: f64| (kcal / sum * 100.0).round() as u32;
    MacroBreakdown {
        protein_percent: percent(protein),
        fat_percent: percent(fat),
        carb_percent: percent(carb),
    }
}

/// Turn the winning meal into a reportable plan.
pub fn assemble(
    meal: &CandidateMeal<'_>,
    request: &PlanRequest,
    profile: &GoalProfile,
    config: &PlannerConfig,
    score: f64,
) -> MealPlanResult {
    let totals = meal.totals();
    let dining_hall = meal
        .items()
        .iter()
        .find_map(|item| item.dining_hall.clone())
        .unwrap_or_else(|| request.location.clone());

    MealPlanResult {
        dining_hall,
        meal_type: request.meal_type,
        date: request.date.clone(),
        dietary: request.dietary_mode,
        goal: profile.goal,
        goal_description: profile.description().to_string(),
        target_calories: request.target_calories,
        target_protein: request.target_protein_g,
        score,
        items: meal.items().iter().map(|item| PlanItem::from(*item)).collect(),
        totals,
        breakdown: macro_breakdown(&totals),
        meets_calorie_target: config
            .calorie_tolerance
            .is_met(totals.calories, request.target_calories),
        meets_protein_target: config
            .protein_tolerance
            .is_met(totals.protein_g, request.target_protein_g),
    }
}
