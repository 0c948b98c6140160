use rand::Rng;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{CandidateMeal, GoalProfile, PlanRequest};
use crate::planner::categorize::Buckets;
use crate::planner::construct::construct_meal;
use crate::planner::scoring::score_meal;

/// The winning meal and its score.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub meal: CandidateMeal<'a>,
    pub score: f64,
}

/// Run `population_size` construction trials and keep the best meal.
///
/// Ties go to the first meal seen. Empty meals are never kept.
pub fn search_plan<'a, R>(
    buckets: &Buckets<'a>,
    request: &PlanRequest,
    profile: &GoalProfile,
    population_size: usize,
    rng: &mut R,
) -> Result<SearchOutcome<'a>>
where
    R: Rng + ?Sized,
{
    request.validate()?;

    let Some(first) = buckets.all.first().copied() else {
        return Err(PlannerError::EmptyPool {
            meal_type: request.meal_type,
            date: request.date.clone(),
            dietary_mode: request.dietary_mode,
        });
    };

    debug!(
        pool = buckets.all.len(),
        protein = buckets.protein.len(),
        carbs = buckets.carbs.len(),
        vegetable = buckets.vegetable.len(),
        population_size,
        "starting plan search"
    );

    let mut best: Option<SearchOutcome<'a>> = None;

    for trial in 0..population_size {
        let meal = construct_meal(buckets, request.target_calories, rng);
        if meal.is_empty() {
            continue;
        }

        let score = score_meal(
            &meal,
            request.target_calories,
            request.target_protein_g,
            profile,
        );
        if best.as_ref().is_none_or(|b| score > b.score) {
            debug!(trial, score, items = meal.len(), "new best meal");
            best = Some(SearchOutcome { meal, score });
        }
    }

    Ok(best.unwrap_or_else(|| {
        warn!(
            item = %first.name,
            "no trial produced a meal, falling back to the first pool item"
        );
        let meal = CandidateMeal::singleton(first);
        let score = score_meal(
            &meal,
            request.target_calories,
            request.target_protein_g,
            profile,
        );
        SearchOutcome { meal, score }
    }))
}
