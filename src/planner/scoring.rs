use crate::models::{CandidateMeal, GoalProfile, MacroRatios, MacroTotals};
use crate::planner::constants::{
    CALORIE_WEIGHT, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, MACRO_WEIGHT,
    MAX_SUB_SCORE, PROTEIN_WEIGHT, SCORE_FALLOFF, UNUSABLE_MEAL_SCORE,
};

/// Points for how close `actual` is to `target`, relative to the target.
fn closeness_score(actual: f64, target: f64) -> f64 {
    (MAX_SUB_SCORE - SCORE_FALLOFF * (actual - target).abs() / target).max(0.0)
}

pub fn calorie_score(total_calories: f64, target_calories: f64) -> f64 {
    closeness_score(total_calories, target_calories)
}

pub fn protein_score(total_protein: f64, target_protein: f64) -> f64 {
    closeness_score(total_protein, target_protein)
}

/// Realized share of total calories from each macro.
pub fn realized_ratios(totals: &MacroTotals) -> MacroRatios {
    MacroRatios::new(
        KCAL_PER_G_PROTEIN * totals.protein_g / totals.calories,
        KCAL_PER_G_FAT * totals.fat_g / totals.calories,
        KCAL_PER_G_CARB * totals.carbohydrate_g / totals.calories,
    )
}

pub fn macro_score(totals: &MacroTotals, target: &MacroRatios) -> f64 {
    let distance = realized_ratios(totals).distance(target);
    (MAX_SUB_SCORE - SCORE_FALLOFF * distance).max(0.0)
}

/// Score totals against the targets; higher is better.
pub fn score_totals(
    totals: &MacroTotals,
    target_calories: f64,
    target_protein: f64,
    profile: &GoalProfile,
) -> f64 {
    if totals.calories <= 0.0 {
        return UNUSABLE_MEAL_SCORE;
    }

    CALORIE_WEIGHT * calorie_score(totals.calories, target_calories)
        + PROTEIN_WEIGHT * protein_score(totals.protein_g, target_protein)
        + MACRO_WEIGHT * macro_score(totals, &profile.ratios)
}

/// Score a candidate meal. Pure: the same inputs always give the same score.
pub fn score_meal(
    meal: &CandidateMeal<'_>,
    target_calories: f64,
    target_protein: f64,
    profile: &GoalProfile,
) -> f64 {
    score_totals(&meal.totals(), target_calories, target_protein, profile)
}
