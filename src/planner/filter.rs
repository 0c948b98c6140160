use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{DietaryMode, FoodItem};
use crate::planner::keywords::KeywordMatcher;

/// Decides whether an item violates a dietary mode.
///
/// Implement this to swap the keyword heuristic for something stricter,
/// such as explicit ingredient tags.
pub trait DietaryClassifier {
    fn is_excluded(&self, item: &FoodItem, mode: DietaryMode) -> bool;
}

/// Keyword classifier over item names and categories.
///
/// Matching is substring based, so plant names that contain a keyword
/// ("eggplant", "graham") are excluded too.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    meat: KeywordMatcher,
    meat_category: KeywordMatcher,
    dairy_egg: KeywordMatcher,
    dairy_egg_category: KeywordMatcher,
}

impl KeywordClassifier {
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        Ok(Self {
            meat: KeywordMatcher::from_config(config, "meat")?,
            meat_category: KeywordMatcher::from_config(config, "meat_category")?,
            dairy_egg: KeywordMatcher::from_config(config, "dairy_egg")?,
            dairy_egg_category: KeywordMatcher::from_config(config, "dairy_egg_category")?,
        })
    }

    pub fn contains_meat(&self, item: &FoodItem) -> bool {
        self.meat.is_match(&item.name)
            || self.meat.is_match(&item.category)
            || self.meat_category.is_match(&item.category)
    }

    pub fn contains_dairy_or_egg(&self, item: &FoodItem) -> bool {
        self.dairy_egg.is_match(&item.name)
            || self.dairy_egg.is_match(&item.category)
            || self.dairy_egg_category.is_match(&item.category)
    }
}

impl DietaryClassifier for KeywordClassifier {
    fn is_excluded(&self, item: &FoodItem, mode: DietaryMode) -> bool {
        (mode.excludes_meat() && self.contains_meat(item))
            || (mode.excludes_dairy_and_egg() && self.contains_dairy_or_egg(item))
    }
}

/// Drop every item the classifier excludes under `mode`.
///
/// `DietaryMode::Standard` returns the pool untouched.
pub fn apply_dietary_filter<C>(
    pool: Vec<FoodItem>,
    mode: DietaryMode,
    classifier: &C,
) -> Vec<FoodItem>
where
    C: DietaryClassifier + ?Sized,
{
    if mode == DietaryMode::Standard {
        return pool;
    }

    pool.into_iter()
        .filter(|item| !classifier.is_excluded(item, mode))
        .collect()
}

/// Filter with the built-in keyword sets.
pub fn filter_by_dietary_restrictions(
    pool: Vec<FoodItem>,
    vegetarian: bool,
    vegan: bool,
) -> Result<Vec<FoodItem>> {
    let classifier = KeywordClassifier::from_config(&PlannerConfig::default())?;
    Ok(apply_dietary_filter(
        pool,
        DietaryMode::from_flags(vegetarian, vegan),
        &classifier,
    ))
}
