use std::fs;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::models::FoodItem;

/// Index file listing every exported dining hall.
pub const DINING_HALLS_FILE: &str = "dining-halls.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningHallIndex {
    pub dining_halls: Vec<String>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HallMenuFile<T> {
    dining_hall: String,
    foods: Vec<T>,
    #[serde(default)]
    count: usize,
    #[serde(default)]
    last_updated: Option<String>,
}

/// File name of a hall's menu export ("Ikenberry Dining Center" -> "ikenberry-dining-center.json").
pub fn hall_file_name(hall: &str) -> String {
    format!("{}.json", hall.replace([' ', '/'], "-").to_lowercase())
}

pub fn load_dining_halls<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(dir.as_ref().join(DINING_HALLS_FILE))?;
    let index: DiningHallIndex = serde_json::from_str(&content)?;
    Ok(index.dining_halls)
}

/// Load a hall's menu.
///
/// Entries that fail to parse or carry negative amounts are skipped with a warning.
/// Every loaded item is tagged with the hall name.
pub fn load_hall_menu<P: AsRef<Path>>(dir: P, hall: &str) -> Result<Vec<FoodItem>> {
    let path = dir.as_ref().join(hall_file_name(hall));
    let content = fs::read_to_string(&path)?;
    let file: HallMenuFile<serde_json::Value> = serde_json::from_str(&content)?;

    let mut foods = Vec::with_capacity(file.foods.len());
    for (index, raw) in file.foods.into_iter().enumerate() {
        match serde_json::from_value::<FoodItem>(raw) {
            Ok(item) if item.is_valid() => foods.push(item.with_dining_hall(&file.dining_hall)),
            Ok(item) => warn!(hall, index, item = %item.debug_string(), "skipping invalid item"),
            Err(e) => warn!(hall, index, error = %e, "skipping unreadable item"),
        }
    }

    Ok(foods)
}

/// Write the dining hall index, stamped with the current local time.
pub fn save_dining_halls<P: AsRef<Path>>(dir: P, halls: &[String]) -> Result<()> {
    let index = DiningHallIndex {
        dining_halls: halls.to_vec(),
        count: halls.len(),
        last_updated: Some(Local::now().to_rfc3339()),
    };
    let json = serde_json::to_string_pretty(&index)?;
    fs::write(dir.as_ref().join(DINING_HALLS_FILE), json)?;
    Ok(())
}

/// Write one hall's menu in the export layout.
pub fn save_hall_menu<P: AsRef<Path>>(dir: P, hall: &str, foods: &[FoodItem]) -> Result<()> {
    let file = HallMenuFile {
        dining_hall: hall.to_string(),
        foods: foods.iter().collect::<Vec<_>>(),
        count: foods.len(),
        last_updated: Some(Local::now().to_rfc3339()),
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(dir.as_ref().join(hall_file_name(hall)), json)?;
    Ok(())
}
