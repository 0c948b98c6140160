use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use harvest_planner_rs::catalog::{CatalogProvider, JsonCatalog};
use harvest_planner_rs::cli::{Cli, Command, PlanArgs};
use harvest_planner_rs::config::{load_config, PlannerConfig};
use harvest_planner_rs::error::{PlannerError, Result};
use harvest_planner_rs::interface::{
    display_food_list, display_goals, display_halls, display_history, display_meal_plan,
    print_plan_json, prompt_dining_hall, prompt_goal, prompt_meal_type, prompt_target_calories,
    prompt_yes_no, write_plan_csv,
};
use harvest_planner_rs::models::{DietaryMode, Goal, MealType, PlanRequest};
use harvest_planner_rs::planner::constants::KCAL_PER_G_PROTEIN;
use harvest_planner_rs::planner::{apply_dietary_filter, generate_plan, KeywordClassifier};
use harvest_planner_rs::state::{append_plan_log, load_plan_log, DEFAULT_PLAN_LOG};

fn main() {
    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("harvest_planner_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = matches!(&cli.command, Some(Command::Plan(args)) if args.json);

    if let Err(e) = run(cli) {
        if json {
            match serde_json::to_string_pretty(&e.to_body()) {
                Ok(body) => println!("{}", body),
                Err(_) => eprintln!("Error: {}", e),
            }
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };
    let catalog = JsonCatalog::new(&cli.catalog);

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(&catalog, config, args),
        Command::Menu {
            hall,
            meal,
            date,
            vegetarian,
            vegan,
        } => cmd_menu(
            &catalog,
            &config,
            &hall,
            meal.as_deref(),
            date.as_deref(),
            DietaryMode::from_flags(vegetarian, vegan),
        ),
        Command::Halls => {
            display_halls(&catalog.locations()?);
            Ok(())
        }
        Command::Goals => {
            display_goals(&config);
            Ok(())
        }
        Command::History { log } => cmd_history(&log),
    }
}

fn parse_meal(meal: Option<&str>) -> Result<Option<MealType>> {
    meal.map(str::parse::<MealType>).transpose()
}

fn require<T>(value: Option<T>, json: bool, flag: &str) -> Result<Option<T>> {
    match value {
        Some(v) => Ok(Some(v)),
        None if json => Err(PlannerError::InvalidInput(format!(
            "{} is required with --json",
            flag
        ))),
        None => Ok(None),
    }
}

/// Generate, show, and optionally export or log a meal plan.
fn cmd_plan(catalog: &JsonCatalog, mut config: PlannerConfig, args: PlanArgs) -> Result<()> {
    if let Some(population) = args.population {
        config.population_size = population;
        config.validate()?;
    }

    // Interactive when the hall has to be asked for.
    let interactive = !args.json && args.hall.is_none();
    let current_meal = MealType::for_hour(Local::now().hour());

    let hall = match require(args.hall, args.json, "--hall")? {
        Some(hall) => hall,
        None => prompt_dining_hall(&catalog.locations()?)?,
    };

    let meal_type = match parse_meal(args.meal.as_deref())? {
        Some(meal) => meal,
        None if interactive => prompt_meal_type(current_meal)?,
        None => current_meal,
    };
    let goal = match args.goal.as_deref().map(str::parse::<Goal>).transpose()? {
        Some(goal) => goal,
        None if interactive => prompt_goal()?,
        None => Goal::default(),
    };

    let calories = match require(args.calories, args.json, "--calories")? {
        Some(calories) => calories,
        None => prompt_target_calories()?,
    };
    let protein = args.protein.unwrap_or_else(|| {
        calories * config.goal_profile(goal).ratios.protein / KCAL_PER_G_PROTEIN
    });

    let mut request = PlanRequest::new(hall, calories, protein, meal_type)
        .with_goal(goal)
        .with_dietary_mode(DietaryMode::from_flags(args.vegetarian, args.vegan));
    if let Some(date) = args.date {
        request = request.with_date(date);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        location = %request.location,
        meal = %request.meal_type,
        calories = request.target_calories,
        protein = request.target_protein_g,
        goal = %request.goal,
        "generating plan"
    );
    let plan = generate_plan(catalog, &request, &config, &mut rng)?;

    if args.json {
        print_plan_json(&plan)?;
    } else {
        display_meal_plan(&plan);
    }

    if let Some(path) = &args.csv {
        write_plan_csv(&plan, path)?;
        if !args.json {
            println!("Plan items written to {}", path.display());
        }
    }

    let log_path = match args.log {
        Some(path) => Some(path),
        None if interactive && prompt_yes_no("Log this plan?", false)? => {
            Some(PathBuf::from(DEFAULT_PLAN_LOG))
        }
        None => None,
    };
    if let Some(path) = &log_path {
        let entry = append_plan_log(path, &plan)?;
        if !args.json {
            println!("Logged as plan #{} in {}", entry.id, path.display());
        }
    }

    Ok(())
}

/// List a hall's menu, optionally narrowed and filtered by diet.
fn cmd_menu(
    catalog: &JsonCatalog,
    config: &PlannerConfig,
    hall: &str,
    meal: Option<&str>,
    date: Option<&str>,
    mode: DietaryMode,
) -> Result<()> {
    let meal_type = parse_meal(meal)?;
    let items = catalog.get_items(hall, meal_type, date)?;
    let classifier = KeywordClassifier::from_config(config)?;
    let items = apply_dietary_filter(items, mode, &classifier);

    let title = match meal_type {
        Some(m) => format!("{} menu: {} ({})", m, hall, mode),
        None => format!("Menu: {} ({})", hall, mode),
    };
    display_food_list(&items, &title);
    Ok(())
}

fn cmd_history(log: &Path) -> Result<()> {
    display_history(&load_plan_log(log)?);
    Ok(())
}
