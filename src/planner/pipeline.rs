use rand::Rng;
use tracing::debug;

use crate::catalog::CatalogProvider;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, MealPlanResult, PlanRequest};
use crate::planner::assemble::assemble;
use crate::planner::categorize::Categorizer;
use crate::planner::filter::{apply_dietary_filter, KeywordClassifier};
use crate::planner::search::search_plan;

/// Keep items served for the request's meal and date that can carry a score.
pub fn prepare_pool(items: Vec<FoodItem>, request: &PlanRequest) -> Vec<FoodItem> {
    let date = request.date.as_deref().map(str::to_lowercase);
    items
        .into_iter()
        .filter(|item| item.meal_type == request.meal_type)
        .filter(|item| {
            date.as_deref()
                .is_none_or(|d| item.date.to_lowercase().contains(d))
        })
        .filter(|item| item.is_valid() && item.calories > 0.0)
        .collect()
}

/// Generate a plan from an already fetched set of items.
pub fn plan_from_pool<R>(
    items: Vec<FoodItem>,
    request: &PlanRequest,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<MealPlanResult>
where
    R: Rng + ?Sized,
{
    request.validate()?;

    let fetched = items.len();
    let pool = prepare_pool(items, request);
    let classifier = KeywordClassifier::from_config(config)?;
    let pool = apply_dietary_filter(pool, request.dietary_mode, &classifier);
    debug!(
        fetched,
        usable = pool.len(),
        dietary = %request.dietary_mode,
        "prepared candidate pool"
    );

    if pool.is_empty() {
        return Err(PlannerError::EmptyPool {
            meal_type: request.meal_type,
            date: request.date.clone(),
            dietary_mode: request.dietary_mode,
        });
    }

    let buckets = Categorizer::from_config(config)?.categorize(&pool);
    let profile = config.goal_profile(request.goal);
    let outcome = search_plan(&buckets, request, &profile, config.population_size, rng)?;

    Ok(assemble(
        &outcome.meal,
        request,
        &profile,
        config,
        outcome.score,
    ))
}

/// Fetch the catalog slice for a request and plan a meal from it.
///
/// Targets are checked before the catalog is touched.
pub fn generate_plan<C, R>(
    catalog: &C,
    request: &PlanRequest,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<MealPlanResult>
where
    C: CatalogProvider + ?Sized,
    R: Rng + ?Sized,
{
    request.validate()?;
    let items = catalog.get_items(
        &request.location,
        Some(request.meal_type),
        request.date.as_deref(),
    )?;
    plan_from_pool(items, request, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::models::{DietaryMode, MealType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FailingCatalog;

    impl CatalogProvider for FailingCatalog {
        fn locations(&self) -> Result<Vec<String>> {
            Err(PlannerError::UpstreamUnavailable("offline".to_string()))
        }

        fn get_items(
            &self,
            _location: &str,
            _meal_type: Option<MealType>,
            _date: Option<&str>,
        ) -> Result<Vec<FoodItem>> {
            Err(PlannerError::UpstreamUnavailable("offline".to_string()))
        }
    }

    fn sample_items() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Grilled Chicken", "Entree", MealType::Dinner)
                .with_macros(300.0, 40.0, 10.0, 5.0)
                .with_date("Monday, October 6, 2025"),
            FoodItem::new("Brown Rice", "Grain", MealType::Dinner)
                .with_macros(200.0, 5.0, 1.0, 45.0)
                .with_date("Monday, October 6, 2025"),
            FoodItem::new("Diet Soda", "Beverages", MealType::Dinner)
                .with_date("Monday, October 6, 2025"),
            FoodItem::new("Pancakes", "Breakfast", MealType::Breakfast)
                .with_macros(350.0, 8.0, 12.0, 50.0)
                .with_date("Monday, October 6, 2025"),
        ]
    }

    #[test]
    fn test_prepare_pool_drops_zero_calorie_and_other_meals() {
        let request = PlanRequest::new("Hall", 600.0, 40.0, MealType::Dinner);
        let pool = prepare_pool(sample_items(), &request);
        let names: Vec<&str> = pool.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Grilled Chicken", "Brown Rice"]);

        let tuesday = request.with_date("Tuesday");
        assert!(prepare_pool(sample_items(), &tuesday).is_empty());
    }

    #[test]
    fn test_plan_from_pool_produces_result() {
        let request = PlanRequest::new("Hall", 600.0, 40.0, MealType::Dinner);
        let mut rng = StdRng::seed_from_u64(17);
        let result =
            plan_from_pool(sample_items(), &request, &PlannerConfig::default(), &mut rng).unwrap();

        assert!(!result.items.is_empty());
        assert!(result.items.iter().all(|i| i.name != "Diet Soda"));
        assert!(result.items.iter().all(|i| i.name != "Pancakes"));
    }

    #[test]
    fn test_vegan_pool_of_meat_is_empty() {
        let request = PlanRequest::new("Hall", 600.0, 40.0, MealType::Dinner)
            .with_dietary_mode(DietaryMode::Vegan);
        let items = vec![
            FoodItem::new("Grilled Chicken", "Entree", MealType::Dinner)
                .with_macros(300.0, 40.0, 10.0, 5.0),
            FoodItem::new("Cheese Pizza", "Pizza", MealType::Dinner)
                .with_macros(280.0, 12.0, 10.0, 34.0),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            plan_from_pool(items, &request, &PlannerConfig::default(), &mut rng),
            Err(PlannerError::EmptyPool {
                dietary_mode: DietaryMode::Vegan,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_target_checked_before_fetch() {
        let request = PlanRequest::new("Hall", 0.0, 40.0, MealType::Dinner);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_plan(&FailingCatalog, &request, &PlannerConfig::default(), &mut rng),
            Err(PlannerError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_upstream_failure_propagates() {
        let request = PlanRequest::new("Hall", 600.0, 40.0, MealType::Dinner);
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_plan(&FailingCatalog, &request, &PlannerConfig::default(), &mut rng)
            .unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_generate_plan_from_memory_catalog() {
        let catalog = MemoryCatalog::default().with_hall("Ikenberry Dining Center", sample_items());
        let request = PlanRequest::new("ikenberry", 600.0, 40.0, MealType::Dinner)
            .with_date("October 6");
        let mut rng = StdRng::seed_from_u64(23);

        let result =
            generate_plan(&catalog, &request, &PlannerConfig::default(), &mut rng).unwrap();
        assert_eq!(result.dining_hall, "Ikenberry Dining Center");
        assert_eq!(result.date.as_deref(), Some("October 6"));
    }
}
