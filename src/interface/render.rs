use crate::config::PlannerConfig;
use crate::models::{FoodItem, Goal, MealPlanResult};
use crate::state::PlanLogEntry;

fn check_mark(met: bool) -> &'static str {
    if met { "yes" } else { "no" }
}

/// Display a meal plan in a formatted table.
pub fn display_meal_plan(plan: &MealPlanResult) {
    println!();
    println!(
        "=== {} Plan: {} ({}) ===",
        plan.meal_type, plan.dining_hall, plan.goal_description
    );
    if let Some(date) = &plan.date {
        println!("Date: {}", date);
    }
    println!("Dietary: {}", plan.dietary);
    println!();

    let max_name_len = plan.items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (i, item) in plan.items.iter().enumerate() {
        let serving = item
            .serving_size
            .as_deref()
            .map(|s| format!("  ({})", s))
            .unwrap_or_default();
        println!(
            "{:>3}. {:<width$} - {:>4.0} cal | P {:>5.1}g F {:>5.1}g C {:>5.1}g{}",
            i + 1,
            item.name,
            item.calories,
            item.protein_g,
            item.fat_g,
            item.carbohydrate_g,
            serving,
            width = max_name_len
        );
    }

    let totals = &plan.totals;
    println!();
    println!("--- Summary ---");
    println!("Total items: {}", plan.items.len());
    println!(
        "Calories: {:.0} / {:.0} target (met: {})",
        totals.calories,
        plan.target_calories,
        check_mark(plan.meets_calorie_target)
    );
    println!(
        "Protein: {:.1}g / {:.1}g target (met: {})",
        totals.protein_g,
        plan.target_protein,
        check_mark(plan.meets_protein_target)
    );
    println!(
        "Fat: {:.1}g | Carbs: {:.1}g | Fiber: {:.1}g | Sodium: {:.0}mg",
        totals.fat_g, totals.carbohydrate_g, totals.fiber_g, totals.sodium_mg
    );
    println!(
        "Macro split: {}% protein / {}% fat / {}% carbs",
        plan.breakdown.protein_percent, plan.breakdown.fat_percent, plan.breakdown.carb_percent
    );
    println!("Score: {:.1}", plan.score);
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} [{}] - {} cal, P:{} F:{} C:{} ({})",
            food.name,
            food.category,
            food.calories,
            food.protein_g,
            food.fat_g,
            food.carbohydrate_g,
            food.meal_type
        );
    }

    println!();
}

pub fn display_halls(halls: &[String]) {
    println!();
    println!("=== Dining Halls ({}) ===", halls.len());
    for hall in halls {
        println!("  {}", hall);
    }
    println!();
}

/// List every goal with its effective macro split.
pub fn display_goals(config: &PlannerConfig) {
    println!();
    println!("=== Goals ===");
    for goal in Goal::ALL {
        let ratios = config.goal_profile(goal).ratios;
        println!(
            "  {:<12} {:<28} P {:>3.0}% F {:>3.0}% C {:>3.0}%",
            goal.as_str(),
            goal.description(),
            ratios.protein * 100.0,
            ratios.fat * 100.0,
            ratios.carb * 100.0
        );
    }
    println!();
}

pub fn display_history(entries: &[PlanLogEntry]) {
    if entries.is_empty() {
        println!("No logged plans.");
        return;
    }

    println!();
    println!("=== Plan History ({} plans) ===", entries.len());
    for entry in entries {
        let plan = &entry.plan;
        println!(
            "  #{} {} | {} at {} | {:.0} cal, {:.1}g protein | {}",
            entry.id,
            entry.logged_at,
            plan.meal_type,
            plan.dining_hall,
            plan.totals.calories,
            plan.totals.protein_g,
            plan.items
                .iter()
                .map(|i| i.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!();
}
