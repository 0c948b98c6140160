use crate::catalog::{matches_filters, resolve_location, CatalogProvider};
use crate::error::Result;
use crate::models::{FoodItem, MealType};

/// In-memory catalog; hall names come from each item's `dining_hall`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: Vec<FoodItem>,
}

impl MemoryCatalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Add items served at `hall`.
    pub fn with_hall(mut self, hall: &str, items: Vec<FoodItem>) -> Self {
        self.items
            .extend(items.into_iter().map(|item| item.with_dining_hall(hall)));
        self
    }
}

impl CatalogProvider for MemoryCatalog {
    fn locations(&self) -> Result<Vec<String>> {
        let mut halls: Vec<String> = Vec::new();
        for hall in self.items.iter().filter_map(|i| i.dining_hall.as_ref()) {
            if !halls.contains(hall) {
                halls.push(hall.clone());
            }
        }
        Ok(halls)
    }

    fn get_items(
        &self,
        location: &str,
        meal_type: Option<MealType>,
        date: Option<&str>,
    ) -> Result<Vec<FoodItem>> {
        let hall = resolve_location(&self.locations()?, location)?;
        Ok(self
            .items
            .iter()
            .filter(|item| item.dining_hall.as_deref() == Some(hall.as_str()))
            .filter(|item| matches_filters(item, meal_type, date))
            .cloned()
            .collect())
    }
}
