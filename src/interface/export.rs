use std::path::Path;

use crate::error::Result;
use crate::models::MealPlanResult;

/// Write the plan's items to a CSV file, followed by a totals row.
pub fn write_plan_csv(plan: &MealPlanResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "item",
        "category",
        "serving_size",
        "calories",
        "protein_g",
        "fat_g",
        "carbs_g",
        "fiber_g",
    ])?;

    for item in &plan.items {
        wtr.write_record([
            item.name.clone(),
            item.category.clone(),
            item.serving_size.clone().unwrap_or_default(),
            format!("{:.0}", item.calories),
            format!("{:.1}", item.protein_g),
            format!("{:.1}", item.fat_g),
            format!("{:.1}", item.carbohydrate_g),
            format!("{:.1}", item.fiber_g),
        ])?;
    }

    let totals = &plan.totals;
    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        format!("{:.0}", totals.calories),
        format!("{:.1}", totals.protein_g),
        format!("{:.1}", totals.fat_g),
        format!("{:.1}", totals.carbohydrate_g),
        format!("{:.1}", totals.fiber_g),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Print the plan as pretty JSON on stdout.
pub fn print_plan_json(plan: &MealPlanResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}
