mod json;
mod memory;
mod persistence;

pub use json::JsonCatalog;
pub use memory::MemoryCatalog;
pub use persistence::{
    hall_file_name, load_dining_halls, load_hall_menu, save_dining_halls, save_hall_menu,
    DiningHallIndex, DINING_HALLS_FILE,
};

use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, MealType};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only source of food items.
pub trait CatalogProvider {
    /// Known dining hall names.
    fn locations(&self) -> Result<Vec<String>>;

    /// Items served at `location`, optionally narrowed to a meal type and date.
    fn get_items(
        &self,
        location: &str,
        meal_type: Option<MealType>,
        date: Option<&str>,
    ) -> Result<Vec<FoodItem>>;
}

/// Resolve a user-supplied location against known halls.
///
/// Exact (case-insensitive) names win; otherwise the first hall containing the
/// query. With no match the error carries the closest name, if any is close enough.
pub fn resolve_location(halls: &[String], location: &str) -> Result<String> {
    let query = location.trim().to_lowercase();

    if let Some(hall) = halls.iter().find(|h| h.to_lowercase() == query) {
        return Ok(hall.clone());
    }
    if !query.is_empty() {
        if let Some(hall) = halls.iter().find(|h| h.to_lowercase().contains(&query)) {
            return Ok(hall.clone());
        }
    }

    let suggestion = halls
        .iter()
        .map(|h| (h, strsim::jaro_winkler(&h.to_lowercase(), &query)))
        .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(h, _)| h.clone());

    Err(PlannerError::UnknownLocation {
        location: location.to_string(),
        suggestion,
    })
}

/// Meal type must match exactly; date is a case-insensitive substring match.
pub fn matches_filters(item: &FoodItem, meal_type: Option<MealType>, date: Option<&str>) -> bool {
    let meal_ok = meal_type.is_none_or(|m| item.meal_type == m);
    let date_ok = date.is_none_or(|d| item.date.to_lowercase().contains(&d.to_lowercase()));
    meal_ok && date_ok
}
