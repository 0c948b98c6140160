use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Nutrition goal selecting a target macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Balanced,
    WeightLoss,
    Bulking,
    Keto,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Balanced, Goal::WeightLoss, Goal::Bulking, Goal::Keto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Balanced => "balanced",
            Goal::WeightLoss => "weight_loss",
            Goal::Bulking => "bulking",
            Goal::Keto => "keto",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Balanced => "Balanced Diet (30/30/40)",
            Goal::WeightLoss => "Weight Loss (High Protein)",
            Goal::Bulking => "Bulking (High Carb/Calorie)",
            Goal::Keto => "Keto (High Fat, Low Carb)",
        }
    }

    /// Built-in protein/fat/carb split for this goal.
    pub fn default_ratios(&self) -> MacroRatios {
        match self {
            Goal::Balanced => MacroRatios::new(0.30, 0.30, 0.40),
            Goal::WeightLoss => MacroRatios::new(0.40, 0.25, 0.35),
            Goal::Bulking => MacroRatios::new(0.30, 0.20, 0.50),
            Goal::Keto => MacroRatios::new(0.25, 0.70, 0.05),
        }
    }

    pub fn default_profile(&self) -> GoalProfile {
        GoalProfile {
            goal: *self,
            ratios: self.default_ratios(),
        }
    }
}

impl Default for Goal {
    fn default() -> Self {
        Goal::Balanced
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Goal::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| PlannerError::InvalidInput(format!("Unknown goal: {}", s)))
    }
}

/// Fractions of calories from protein, fat and carbohydrate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

impl MacroRatios {
    pub fn new(protein: f64, fat: f64, carb: f64) -> Self {
        Self { protein, fat, carb }
    }

    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carb
    }

    /// Euclidean distance between two ratio triples.
    pub fn distance(&self, other: &MacroRatios) -> f64 {
        ((self.protein - other.protein).powi(2)
            + (self.fat - other.fat).powi(2)
            + (self.carb - other.carb).powi(2))
        .sqrt()
    }

    /// Each fraction in [0, 1] and the sum within `tolerance` of 1.
    pub fn is_valid(&self, tolerance: f64) -> bool {
        [self.protein, self.fat, self.carb]
            .iter()
            .all(|r| (0.0..=1.0).contains(r))
            && (self.sum() - 1.0).abs() <= tolerance
    }
}

/// A goal together with the macro split used when scoring against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProfile {
    pub goal: Goal,
    pub ratios: MacroRatios,
}

impl GoalProfile {
    pub fn description(&self) -> &'static str {
        self.goal.description()
    }
}

/// Dietary restriction applied to the candidate pool.
///
/// Vegan implies every vegetarian exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryMode {
    #[default]
    #[serde(alias = "none")]
    Standard,
    Vegetarian,
    Vegan,
}

impl DietaryMode {
    /// Vegan wins when both flags are set.
    pub fn from_flags(vegetarian: bool, vegan: bool) -> Self {
        if vegan {
            DietaryMode::Vegan
        } else if vegetarian {
            DietaryMode::Vegetarian
        } else {
            DietaryMode::Standard
        }
    }

    pub fn excludes_meat(&self) -> bool {
        !matches!(self, DietaryMode::Standard)
    }

    pub fn excludes_dairy_and_egg(&self) -> bool {
        matches!(self, DietaryMode::Vegan)
    }
}

impl fmt::Display for DietaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DietaryMode::Standard => "Standard",
            DietaryMode::Vegetarian => "Vegetarian",
            DietaryMode::Vegan => "Vegan",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratios_sum_to_one() {
        for goal in Goal::ALL {
            assert!(
                goal.default_ratios().is_valid(1e-9),
                "{} ratios do not sum to 1",
                goal
            );
        }
    }

    #[test]
    fn test_goal_parse() {
        assert_eq!("weight-loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert_eq!("KETO".parse::<Goal>().unwrap(), Goal::Keto);
        assert!("paleo".parse::<Goal>().is_err());
    }

    #[test]
    fn test_distance() {
        let a = MacroRatios::new(0.3, 0.3, 0.4);
        assert_eq!(a.distance(&a), 0.0);

        let b = MacroRatios::new(0.3, 0.3, 0.5);
        assert!((a.distance(&b) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_dietary_mode_flags() {
        assert_eq!(DietaryMode::from_flags(false, false), DietaryMode::Standard);
        assert_eq!(DietaryMode::from_flags(true, false), DietaryMode::Vegetarian);
        assert_eq!(DietaryMode::from_flags(false, true), DietaryMode::Vegan);
        assert_eq!(DietaryMode::from_flags(true, true), DietaryMode::Vegan);

        assert!(DietaryMode::Vegan.excludes_meat());
        assert!(DietaryMode::Vegan.excludes_dairy_and_egg());
        assert!(!DietaryMode::Vegetarian.excludes_dairy_and_egg());
        assert!(!DietaryMode::Standard.excludes_meat());
    }

    #[test]
    fn test_dietary_mode_accepts_none_alias() {
        let mode: DietaryMode = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(mode, DietaryMode::Standard);
    }
}
