/// Score returned for a meal with no calories.
pub const UNUSABLE_MEAL_SCORE: f64 = -1000.0;

/// Score weights: calorie fit, protein fit, macro-ratio fit.
pub const CALORIE_WEIGHT: f64 = 0.4;
pub const PROTEIN_WEIGHT: f64 = 0.3;
pub const MACRO_WEIGHT: f64 = 0.3;

/// Sub-score points lost per unit of relative error (0 points at 50% off).
pub const SCORE_FALLOFF: f64 = 200.0;

/// Maximum points of a sub-score.
pub const MAX_SUB_SCORE: f64 = 100.0;

/// Kilocalories per gram of each macronutrient.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

/// Chance of seeding a meal with a protein item.
pub const PROTEIN_PICK_PROBABILITY: f64 = 0.9;

/// Chance of adding a carb item after the protein.
pub const CARB_PICK_PROBABILITY: f64 = 0.8;

/// Random draws used to fill the remaining calorie budget.
pub const FILL_ATTEMPTS: usize = 10;

/// Filling stops once the meal reaches this fraction of the target.
pub const FILL_STOP_FRACTION: f64 = 0.9;

/// A fill item is rejected if it pushes the meal past this fraction of the target.
pub const FILL_CEILING_FRACTION: f64 = 1.2;

/// Items with more protein than this (grams) count as protein-heavy.
pub const PROTEIN_HEAVY_GRAMS: f64 = 15.0;

/// Construction trials per search.
pub const DEFAULT_POPULATION_SIZE: usize = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Target checks
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie target is met within this fraction of the target.
pub const DEFAULT_CALORIE_TOLERANCE: f64 = 0.15;

/// Protein target is met at this fraction of the target.
pub const DEFAULT_PROTEIN_MINIMUM_FRACTION: f64 = 0.8;

/// Allowed drift of configured goal ratios from summing to 1.
pub const RATIO_SUM_TOLERANCE: f64 = 0.02;

// ─────────────────────────────────────────────────────────────────────────────
// Keyword sets
// ─────────────────────────────────────────────────────────────────────────────

pub const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "fish", "salmon", "tuna", "cod", "tilapia", "shrimp",
    "crab", "lobster", "clams", "oyster", "lamb", "veal", "bacon", "ham", "sausage", "pepperoni",
    "salami", "steak", "burger", "meatball", "wings",
];

pub const MEAT_CATEGORY_KEYWORDS: &[&str] = &["meat", "fish", "poultry"];

pub const DAIRY_EGG_KEYWORDS: &[&str] = &[
    "milk", "cheese", "cream", "yogurt", "butter", "egg", "whey", "casein", "honey",
    "mayonnaise", "gelato", "custard", "alfredo", "ranch", "caesar",
];

pub const DAIRY_EGG_CATEGORY_KEYWORDS: &[&str] = &["dairy", "egg"];

pub const PROTEIN_CATEGORY_KEYWORDS: &[&str] = &[
    "entree", "protein", "meat", "chicken", "beef", "fish", "pork", "turkey", "tofu", "egg",
];

pub const PROTEIN_NAME_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "salmon", "turkey", "egg", "tofu", "bean", "lentil",
];

pub const CARB_CATEGORY_KEYWORDS: &[&str] =
    &["grain", "rice", "pasta", "bread", "potato", "starch", "cereal"];

pub const CARB_NAME_KEYWORDS: &[&str] = &[
    "rice", "pasta", "bread", "potato", "noodle", "tortilla", "quinoa", "oat",
];

pub const VEGETABLE_CATEGORY_KEYWORDS: &[&str] = &["vegetable", "veggie", "salad", "green"];

pub const VEGETABLE_NAME_KEYWORDS: &[&str] = &[
    "broccoli", "carrot", "spinach", "lettuce", "tomato", "pepper", "green", "salad", "veggie",
];

/// Names under which keyword sets can be overridden in the config file.
pub const KEYWORD_SET_NAMES: &[&str] = &[
    "meat",
    "meat_category",
    "dairy_egg",
    "dairy_egg_category",
    "protein_category",
    "protein_name",
    "carb_category",
    "carb_name",
    "vegetable_category",
    "vegetable_name",
];

/// Built-in keywords for a named set.
pub fn default_keyword_set(name: &str) -> Option<&'static [&'static str]> {
    Some(match name {
        "meat" => MEAT_KEYWORDS,
        "meat_category" => MEAT_CATEGORY_KEYWORDS,
        "dairy_egg" => DAIRY_EGG_KEYWORDS,
        "dairy_egg_category" => DAIRY_EGG_CATEGORY_KEYWORDS,
        "protein_category" => PROTEIN_CATEGORY_KEYWORDS,
        "protein_name" => PROTEIN_NAME_KEYWORDS,
        "carb_category" => CARB_CATEGORY_KEYWORDS,
        "carb_name" => CARB_NAME_KEYWORDS,
        "vegetable_category" => VEGETABLE_CATEGORY_KEYWORDS,
        "vegetable_name" => VEGETABLE_NAME_KEYWORDS,
        _ => return None,
    })
}
