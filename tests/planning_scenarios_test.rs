use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use harvest_planner_rs::config::PlannerConfig;
use harvest_planner_rs::error::PlannerError;
use harvest_planner_rs::models::{DietaryMode, FoodItem, Goal, MealType, PlanRequest};
use harvest_planner_rs::planner::{categorize, plan_from_pool, search_plan, Buckets};

fn sample_foods() -> Vec<FoodItem> {
    vec![
        FoodItem::new("Grilled Chicken", "Entree", MealType::Lunch)
            .with_macros(300.0, 40.0, 10.0, 5.0),
        FoodItem::new("Brown Rice", "Grain", MealType::Lunch).with_macros(200.0, 5.0, 1.0, 45.0),
        FoodItem::new("Steamed Broccoli", "Vegetable", MealType::Lunch)
            .with_macros(50.0, 3.0, 0.0, 10.0),
    ]
}

fn lunch_request() -> PlanRequest {
    PlanRequest::new("Test Hall", 600.0, 40.0, MealType::Lunch).with_goal(Goal::Balanced)
}

#[test]
fn test_balanced_lunch_usually_includes_chicken_near_target() {
    let config = PlannerConfig::default();
    let runs = 30;

    let mut good = 0;
    for seed in 0..runs {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = plan_from_pool(sample_foods(), &lunch_request(), &config, &mut rng).unwrap();

        let within = (plan.totals.calories - 600.0).abs() <= 0.15 * 600.0;
        let has_chicken = plan.items.iter().any(|i| i.name == "Grilled Chicken");
        if within && has_chicken {
            good += 1;
        }
    }

    assert!(
        good * 2 > runs,
        "only {} of {} plans had chicken within 15% of target",
        good,
        runs
    );
}

#[test]
fn test_vegetarian_never_returns_chicken() {
    let config = PlannerConfig::default();
    let request = lunch_request().with_dietary_mode(DietaryMode::Vegetarian);
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..100 {
        let plan = plan_from_pool(sample_foods(), &request, &config, &mut rng).unwrap();
        assert!(!plan.items.is_empty());
        assert!(
            plan.items.iter().all(|i| i.name != "Grilled Chicken"),
            "chicken in a vegetarian plan"
        );
    }
}

#[test]
fn test_vegan_on_animal_only_pool_is_empty_pool() {
    let foods = vec![
        FoodItem::new("Beef Tacos", "Entree", MealType::Dinner).with_macros(450.0, 25.0, 20.0, 35.0),
        FoodItem::new("Mac and Cheese", "Pasta", MealType::Dinner)
            .with_macros(380.0, 14.0, 18.0, 40.0),
        FoodItem::new("Scrambled Eggs", "Breakfast", MealType::Dinner)
            .with_macros(200.0, 13.0, 15.0, 2.0),
        FoodItem::new("Chocolate Milk", "Beverages", MealType::Dinner)
            .with_macros(190.0, 8.0, 5.0, 30.0),
    ];
    let request = PlanRequest::new("Test Hall", 700.0, 35.0, MealType::Dinner)
        .with_date("Friday")
        .with_dietary_mode(DietaryMode::Vegan);
    let foods: Vec<FoodItem> = foods.into_iter().map(|f| f.with_date("Friday, Oct 10")).collect();
    let mut rng = StdRng::seed_from_u64(1);

    let err = plan_from_pool(foods, &request, &PlannerConfig::default(), &mut rng).unwrap_err();
    assert!(matches!(
        err,
        PlannerError::EmptyPool {
            meal_type: MealType::Dinner,
            dietary_mode: DietaryMode::Vegan,
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.contains("Dinner"));
    assert!(message.contains("Friday"));
    assert!(message.contains("Vegan"));
}

#[test]
fn test_zero_calorie_target_fails_before_construction() {
    // Empty buckets would otherwise give EmptyPool, so InvalidTarget proves the
    // check runs first.
    let request = PlanRequest::new("Test Hall", 0.0, 40.0, MealType::Lunch);
    let mut rng = StdRng::seed_from_u64(1);
    let err = search_plan(
        &Buckets::default(),
        &request,
        &Goal::Balanced.default_profile(),
        50,
        &mut rng,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        PlannerError::InvalidTarget {
            field: "target_calories",
            ..
        }
    ));
    assert!(!err.is_retryable());
}

#[test]
fn test_search_always_returns_a_meal_for_non_empty_pools() {
    let mut gen_rng = StdRng::seed_from_u64(77);
    let categories = ["Entree", "Grain", "Vegetable", "Dessert", "Soup", ""];

    for round in 0..25 {
        let size = gen_rng.gen_range(1..12);
        let pool: Vec<FoodItem> = (0..size)
            .map(|i| {
                let category = categories[gen_rng.gen_range(0..categories.len())];
                FoodItem::new(format!("Item {}-{}", round, i), category, MealType::Lunch)
                    .with_macros(
                        gen_rng.gen_range(1.0..900.0),
                        gen_rng.gen_range(0.0..60.0),
                        gen_rng.gen_range(0.0..40.0),
                        gen_rng.gen_range(0.0..90.0),
                    )
            })
            .collect();

        let buckets = categorize(&pool).unwrap();
        let target = gen_rng.gen_range(100.0..1500.0);
        let request = PlanRequest::new("Test Hall", target, 30.0, MealType::Lunch);
        let mut rng = StdRng::seed_from_u64(round);

        let outcome = search_plan(
            &buckets,
            &request,
            &Goal::Keto.default_profile(),
            50,
            &mut rng,
        )
        .unwrap();
        assert!(!outcome.meal.is_empty(), "round {} returned an empty meal", round);
    }
}

#[test]
fn test_same_seed_same_plan() {
    let config = PlannerConfig::default();
    let mut a = StdRng::seed_from_u64(31);
    let mut b = StdRng::seed_from_u64(31);

    let first = plan_from_pool(sample_foods(), &lunch_request(), &config, &mut a).unwrap();
    let second = plan_from_pool(sample_foods(), &lunch_request(), &config, &mut b).unwrap();
    assert_eq!(first, second);
}
