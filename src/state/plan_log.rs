use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::MealPlanResult;

/// One logged plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLogEntry {
    pub id: u64,
    /// RFC 3339 UTC timestamp.
    pub logged_at: String,
    pub plan: MealPlanResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PlanLog {
    #[serde(default)]
    plans: Vec<PlanLogEntry>,
}

/// Load logged plans, oldest first. A missing file is an empty log.
pub fn load_plan_log<P: AsRef<Path>>(path: P) -> Result<Vec<PlanLogEntry>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let log: PlanLog = serde_json::from_str(&content)?;
    Ok(log.plans)
}

/// Append a plan to the log, creating the file if needed.
pub fn append_plan_log<P: AsRef<Path>>(path: P, plan: &MealPlanResult) -> Result<PlanLogEntry> {
    let path = path.as_ref();
    let mut plans = load_plan_log(path)?;

    let entry = PlanLogEntry {
        id: plans.iter().map(|e| e.id).max().map_or(1, |id| id + 1),
        logged_at: Utc::now().to_rfc3339(),
        plan: plan.clone(),
    };
    plans.push(entry.clone());

    let json = serde_json::to_string_pretty(&PlanLog { plans })?;
    fs::write(path, json)?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryMode, Goal, MacroBreakdown, MacroTotals, MealType, PlanItem};
    use chrono::DateTime;
    use tempfile::TempDir;

    fn sample_plan(name: &str) -> MealPlanResult {
        MealPlanResult {
            dining_hall: "PAR".to_string(),
            meal_type: MealType::Dinner,
            date: Some("Monday, October 6, 2025".to_string()),
            dietary: DietaryMode::Vegetarian,
            goal: Goal::Bulking,
            goal_description: Goal::Bulking.description().to_string(),
            target_calories: 800.0,
            target_protein: 40.0,
            score: 61.5,
            items: vec![PlanItem {
                name: name.to_string(),
                category: "Entree".to_string(),
                serving_size: None,
                calories: 650.0,
                protein_g: 22.0,
                fat_g: 18.0,
                carbohydrate_g: 96.0,
                fiber_g: 7.0,
            }],
            totals: MacroTotals {
                calories: 650.0,
                protein_g: 22.0,
                fat_g: 18.0,
                carbohydrate_g: 96.0,
                fiber_g: 7.0,
                sodium_mg: 900.0,
            },
            breakdown: MacroBreakdown {
                protein_percent: 13,
                fat_percent: 24,
                carb_percent: 63,
            },
            meets_calorie_target: false,
            meets_protein_target: false,
        }
    }

    #[test]
    fn test_missing_log_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_plan_log(dir.path().join("plans.json")).unwrap().is_empty());
    }

    #[test]
    fn test_append_assigns_ids_and_timestamps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plans.json");

        let first = append_plan_log(&path, &sample_plan("Bean Burrito")).unwrap();
        let second = append_plan_log(&path, &sample_plan("Pasta Primavera")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(DateTime::parse_from_rfc3339(&second.logged_at).is_ok());

        let entries = load_plan_log(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].plan.items[0].name, "Bean Burrito");
        assert_eq!(entries[1], second);
    }
}
