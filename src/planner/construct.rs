use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::CandidateMeal;
use crate::planner::categorize::Buckets;
use crate::planner::constants::{
    CARB_PICK_PROBABILITY, FILL_ATTEMPTS, FILL_CEILING_FRACTION, FILL_STOP_FRACTION,
    PROTEIN_PICK_PROBABILITY,
};

/// Build one randomized candidate meal.
///
/// Seeds with a protein item, then a carb, then fills the calorie budget with
/// random draws from the whole pool. Any bucket may be empty.
pub fn construct_meal<'a, R>(
    buckets: &Buckets<'a>,
    target_calories: f64,
    rng: &mut R,
) -> CandidateMeal<'a>
where
    R: Rng + ?Sized,
{
    let mut meal = CandidateMeal::new();

    if rng.gen_bool(PROTEIN_PICK_PROBABILITY) {
        if let Some(item) = buckets.protein.choose(rng).copied() {
            meal.push(item);
        }
    }

    if rng.gen_bool(CARB_PICK_PROBABILITY) {
        if let Some(item) = buckets.carbs.choose(rng).copied() {
            meal.push(item);
        }
    }

    let stop_at = target_calories * FILL_STOP_FRACTION;
    let ceiling = target_calories * FILL_CEILING_FRACTION;
    let mut total = meal.total_calories();

    for _ in 0..FILL_ATTEMPTS {
        if total >= stop_at {
            break;
        }
        let Some(item) = buckets.all.choose(rng).copied() else {
            break;
        };
        if total + item.calories <= ceiling && meal.push(item) {
            total += item.calories;
        }
    }

    meal
}
