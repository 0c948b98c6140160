pub mod assemble;
pub mod categorize;
pub mod constants;
pub mod construct;
pub mod filter;
pub mod keywords;
pub mod pipeline;
pub mod scoring;
pub mod search;

pub use assemble::{assemble, macro_breakdown};
pub use categorize::{categorize, Buckets, Categorizer};
pub use construct::construct_meal;
pub use filter::{
    apply_dietary_filter, filter_by_dietary_restrictions, DietaryClassifier, KeywordClassifier,
};
pub use keywords::KeywordMatcher;
pub use pipeline::{generate_plan, plan_from_pool, prepare_pool};
pub use scoring::{calorie_score, macro_score, protein_score, score_meal, score_totals};
pub use search::{search_plan, SearchOutcome};
