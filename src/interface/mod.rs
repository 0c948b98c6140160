pub mod export;
pub mod prompts;
pub mod render;

pub use export::{print_plan_json, write_plan_csv};
pub use prompts::{
    prompt_dining_hall, prompt_goal, prompt_meal_type, prompt_target_calories, prompt_yes_no,
};
pub use render::{display_food_list, display_goals, display_halls, display_history, display_meal_plan};
