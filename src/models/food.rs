use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PlannerError;

/// Meal period a catalog item is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    /// Meal period served at the given local hour (0-23).
    ///
    /// Late night and early morning roll over to breakfast.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            6..=9 => MealType::Breakfast,
            10..=14 => MealType::Lunch,
            15..=20 => MealType::Dinner,
            _ => MealType::Breakfast,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str().to_lowercase() == wanted)
            .ok_or_else(|| PlannerError::InvalidInput(format!("Unknown meal type: {}", s)))
    }
}

/// One catalog entry with its nutrition facts.
///
/// Field names follow the catalog export. Missing or `null` amounts read as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(default, deserialize_with = "nullable_text")]
    pub category: String,

    #[serde(default)]
    pub serving_size: Option<String>,

    #[serde(default, deserialize_with = "nullable_amount")]
    pub calories: f64,

    #[serde(rename = "protein", default, deserialize_with = "nullable_amount")]
    pub protein_g: f64,

    #[serde(rename = "total_fat", default, deserialize_with = "nullable_amount")]
    pub fat_g: f64,

    #[serde(
        rename = "total_carbohydrate",
        default,
        deserialize_with = "nullable_amount"
    )]
    pub carbohydrate_g: f64,

    #[serde(rename = "dietary_fiber", default, deserialize_with = "nullable_amount")]
    pub fiber_g: f64,

    #[serde(rename = "sugars", default, deserialize_with = "nullable_amount")]
    pub sugar_g: f64,

    #[serde(rename = "sodium", default, deserialize_with = "nullable_amount")]
    pub sodium_mg: f64,

    pub meal_type: MealType,

    #[serde(default)]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dining_hall: Option<String>,
}

fn nullable_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FoodItem {
    /// Minimal item with zeroed nutrition, mostly useful for building fixtures.
    pub fn new(name: impl Into<String>, category: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            serving_size: None,
            calories: 0.0,
            protein_g: 0.0,
            fat_g: 0.0,
            carbohydrate_g: 0.0,
            fiber_g: 0.0,
            sugar_g: 0.0,
            sodium_mg: 0.0,
            meal_type,
            date: String::new(),
            dining_hall: None,
        }
    }

    /// Builder-style setter for the four macro fields.
    pub fn with_macros(mut self, calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        self.calories = calories;
        self.protein_g = protein;
        self.fat_g = fat;
        self.carbohydrate_g = carbs;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_dining_hall(mut self, hall: impl Into<String>) -> Self {
        self.dining_hall = Some(hall.into());
        self
    }

    /// Non-empty name and non-negative amounts.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [
                self.calories,
                self.protein_g,
                self.fat_g,
                self.carbohydrate_g,
                self.fiber_g,
                self.sugar_g,
                self.sodium_mg,
            ]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Canonical key for identity checks (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn same_food(&self, other: &FoodItem) -> bool {
        self.key() == other.key()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} cal, P:{} F:{} C:{}",
            self.name,
            self.category,
            self.calories,
            self.protein_g,
            self.fat_g,
            self.carbohydrate_g
        )
    }
}
