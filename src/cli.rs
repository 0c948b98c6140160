use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Harvest Planner: builds dining-hall meals that match calorie, protein and macro targets.
#[derive(Parser, Debug)]
#[command(name = "harvest_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the exported dining hall JSON files.
    #[arg(long, default_value = "api", global = true)]
    pub catalog: PathBuf,

    /// Planner configuration file (JSON).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan for one meal.
    Plan(PlanArgs),

    /// List a dining hall's menu.
    Menu {
        /// Dining hall (partial names match).
        hall: String,

        /// Breakfast, Lunch, Dinner or Snack.
        #[arg(long)]
        meal: Option<String>,

        /// Date filter, matched as a substring (e.g. "October 6").
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        vegetarian: bool,

        #[arg(long)]
        vegan: bool,
    },

    /// List dining halls in the catalog.
    Halls,

    /// List goal profiles and their macro splits.
    Goals,

    /// Show logged plans.
    History {
        /// Plan log file.
        #[arg(long, default_value = "plan_log.json")]
        log: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Dining hall (partial names match). Prompted when missing.
    #[arg(long)]
    pub hall: Option<String>,

    /// Calorie target for the meal. Prompted when missing.
    #[arg(long)]
    pub calories: Option<f64>,

    /// Protein target in grams. Defaults to the goal's protein share of the calories.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Breakfast, Lunch, Dinner or Snack. Defaults to the current time of day.
    #[arg(long)]
    pub meal: Option<String>,

    /// balanced, weight_loss, bulking or keto.
    #[arg(long)]
    pub goal: Option<String>,

    /// Date filter, matched as a substring (e.g. "October 6").
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub vegetarian: bool,

    #[arg(long)]
    pub vegan: bool,

    /// Seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Construction trials per search (overrides the config).
    #[arg(long)]
    pub population: Option<usize>,

    /// Print the plan (or error) as JSON instead of a table. Never prompts.
    #[arg(long)]
    pub json: bool,

    /// Also write the plan items to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Append the plan to this JSON plan log.
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_flags_parse() {
        let cli = Cli::parse_from([
            "harvest_planner",
            "plan",
            "--hall",
            "ikenberry",
            "--calories",
            "650",
            "--vegan",
            "--seed",
            "7",
        ]);
        match cli.command {
            Some(Command::Plan(args)) => {
                assert_eq!(args.hall.as_deref(), Some("ikenberry"));
                assert_eq!(args.calories, Some(650.0));
                assert!(args.vegan);
                assert_eq!(args.seed, Some(7));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.catalog, PathBuf::from("api"));
    }

    #[test]
    fn test_no_subcommand_defaults_to_plan() {
        let cli = Cli::parse_from(["harvest_planner", "--catalog", "data"]);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan(_)));
        assert_eq!(cli.catalog, PathBuf::from("data"));
    }
}
