use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::FoodItem;
use crate::planner::constants::PROTEIN_HEAVY_GRAMS;
use crate::planner::keywords::KeywordMatcher;

/// Loose food groups used to bias meal construction.
///
/// Buckets overlap; `all` is always the whole filtered pool.
#[derive(Debug, Clone, Default)]
pub struct Buckets<'a> {
    pub protein: Vec<&'a FoodItem>,
    pub carbs: Vec<&'a FoodItem>,
    pub vegetable: Vec<&'a FoodItem>,
    pub all: Vec<&'a FoodItem>,
}

impl Buckets<'_> {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Assigns items to buckets by category pattern, name keyword, or protein content.
#[derive(Debug, Clone)]
pub struct Categorizer {
    protein_category: KeywordMatcher,
    protein_name: KeywordMatcher,
    carb_category: KeywordMatcher,
    carb_name: KeywordMatcher,
    vegetable_category: KeywordMatcher,
    vegetable_name: KeywordMatcher,
}

impl Categorizer {
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        Ok(Self {
            protein_category: KeywordMatcher::from_config(config, "protein_category")?,
            protein_name: KeywordMatcher::from_config(config, "protein_name")?,
            carb_category: KeywordMatcher::from_config(config, "carb_category")?,
            carb_name: KeywordMatcher::from_config(config, "carb_name")?,
            vegetable_category: KeywordMatcher::from_config(config, "vegetable_category")?,
            vegetable_name: KeywordMatcher::from_config(config, "vegetable_name")?,
        })
    }

    pub fn is_protein(&self, item: &FoodItem) -> bool {
        self.protein_category.is_match(&item.category)
            || item.protein_g > PROTEIN_HEAVY_GRAMS
            || self.protein_name.is_match(&item.name)
    }

    pub fn is_carb(&self, item: &FoodItem) -> bool {
        self.carb_category.is_match(&item.category) || self.carb_name.is_match(&item.name)
    }

    pub fn is_vegetable(&self, item: &FoodItem) -> bool {
        self.vegetable_category.is_match(&item.category)
            || self.vegetable_name.is_match(&item.name)
    }

    pub fn categorize<'a>(&self, pool: &'a [FoodItem]) -> Buckets<'a> {
        let mut buckets = Buckets {
            all: pool.iter().collect(),
            ..Default::default()
        };

        for item in pool {
            if self.is_protein(item) {
                buckets.protein.push(item);
            }
            if self.is_carb(item) {
                buckets.carbs.push(item);
            }
            if self.is_vegetable(item) {
                buckets.vegetable.push(item);
            }
        }

        buckets
    }
}

/// Categorize with the built-in keyword sets.
pub fn categorize(pool: &[FoodItem]) -> Result<Buckets<'_>> {
    Ok(Categorizer::from_config(&PlannerConfig::default())?.categorize(pool))
}
