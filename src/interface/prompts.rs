use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{Goal, MealType};

/// Prompt for a dining hall from the catalog's list.
pub fn prompt_dining_hall(halls: &[String]) -> Result<String> {
    if halls.is_empty() {
        return Err(PlannerError::InvalidInput(
            "Catalog lists no dining halls".to_string(),
        ));
    }

    let selection = Select::new()
        .with_prompt("Which dining hall?")
        .items(halls)
        .default(0)
        .interact()?;

    Ok(halls[selection].clone())
}

/// Prompt for a calorie target for this meal.
pub fn prompt_target_calories() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("How many calories for this meal?")
        .default("600".to_string())
        .interact_text()?;

    let calories: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    if calories <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "Calories must be positive".to_string(),
        ));
    }

    Ok(calories)
}

/// Prompt for a meal period, defaulting to `current`.
pub fn prompt_meal_type(current: MealType) -> Result<MealType> {
    let default = MealType::ALL
        .iter()
        .position(|m| *m == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Which meal?")
        .items(&MealType::ALL)
        .default(default)
        .interact()?;

    Ok(MealType::ALL[selection])
}

pub fn prompt_goal() -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(|g| g.description()).collect();
    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Simple yes/no prompt.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
