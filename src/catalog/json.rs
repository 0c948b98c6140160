use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::persistence::{load_dining_halls, load_hall_menu};
use crate::catalog::{matches_filters, resolve_location, CatalogProvider};
use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, MealType};

/// Catalog backed by a directory of exported JSON menus.
///
/// Read or parse failures surface as `UpstreamUnavailable`.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    dir: PathBuf,
}

impl JsonCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

fn unavailable(what: &str, dir: &Path, err: PlannerError) -> PlannerError {
    PlannerError::UpstreamUnavailable(format!("{} in {}: {}", what, dir.display(), err))
}

impl CatalogProvider for JsonCatalog {
    fn locations(&self) -> Result<Vec<String>> {
        load_dining_halls(&self.dir)
            .map_err(|e| unavailable("cannot read dining hall index", &self.dir, e))
    }

    fn get_items(
        &self,
        location: &str,
        meal_type: Option<MealType>,
        date: Option<&str>,
    ) -> Result<Vec<FoodItem>> {
        let hall = resolve_location(&self.locations()?, location)?;
        let menu = load_hall_menu(&self.dir, &hall)
            .map_err(|e| unavailable(&format!("cannot read menu for {}", hall), &self.dir, e))?;

        let total = menu.len();
        let items: Vec<FoodItem> = menu
            .into_iter()
            .filter(|item| matches_filters(item, meal_type, date))
            .collect();
        debug!(hall = %hall, total, matched = items.len(), "loaded catalog items");
        Ok(items)
    }
}
