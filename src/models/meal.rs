use serde::{Deserialize, Serialize};

use crate::models::FoodItem;

/// Summed nutrition over a set of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrate_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: f64,
}

impl MacroTotals {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a FoodItem>) -> Self {
        items.into_iter().fold(Self::default(), |mut acc, item| {
            acc.calories += item.calories;
            acc.protein_g += item.protein_g;
            acc.fat_g += item.fat_g;
            acc.carbohydrate_g += item.carbohydrate_g;
            acc.fiber_g += item.fiber_g;
            acc.sodium_mg += item.sodium_mg;
            acc
        })
    }
}

/// A trial meal built during search.
///
/// Holds borrowed items from the filtered pool; no food appears twice.
#[derive(Debug, Clone, Default)]
pub struct CandidateMeal<'a> {
    items: Vec<&'a FoodItem>,
}

impl<'a> CandidateMeal<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn singleton(item: &'a FoodItem) -> Self {
        Self { items: vec![item] }
    }

    /// Add an item unless the same food is already selected.
    ///
    /// Returns whether the item was added.
    pub fn push(&mut self, item: &'a FoodItem) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &FoodItem) -> bool {
        self.items.iter().any(|i| i.same_food(item))
    }

    pub fn items(&self) -> &[&'a FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_calories(&self) -> f64 {
        self.items.iter().map(|i| i.calories).sum()
    }

    pub fn totals(&self) -> MacroTotals {
        MacroTotals::from_items(self.items.iter().copied())
    }
}
