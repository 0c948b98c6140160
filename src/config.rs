use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{Goal, GoalProfile, MacroRatios};
use crate::planner::constants::{
    default_keyword_set, DEFAULT_CALORIE_TOLERANCE, DEFAULT_POPULATION_SIZE,
    DEFAULT_PROTEIN_MINIMUM_FRACTION, KEYWORD_SET_NAMES, RATIO_SUM_TOLERANCE,
};

/// How close total calories must be to the target to count as met.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalorieTolerance {
    /// Within this fraction of the target (0.15 = ±15%).
    Relative(f64),
    /// Within this many kcal of the target.
    Absolute(f64),
}

impl CalorieTolerance {
    pub fn is_met(&self, total: f64, target: f64) -> bool {
        let diff = (total - target).abs();
        match *self {
            CalorieTolerance::Relative(fraction) => diff < fraction * target,
            CalorieTolerance::Absolute(kcal) => diff < kcal,
        }
    }
}

impl Default for CalorieTolerance {
    fn default() -> Self {
        CalorieTolerance::Relative(DEFAULT_CALORIE_TOLERANCE)
    }
}

/// How much protein counts as meeting the protein target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProteinTolerance {
    /// At least this fraction of the target.
    MinimumFraction(f64),
    /// At most this many grams short of the target.
    OffsetGrams(f64),
}

impl ProteinTolerance {
    pub fn is_met(&self, total: f64, target: f64) -> bool {
        match *self {
            ProteinTolerance::MinimumFraction(fraction) => total >= fraction * target,
            ProteinTolerance::OffsetGrams(grams) => total >= target - grams,
        }
    }
}

impl Default for ProteinTolerance {
    fn default() -> Self {
        ProteinTolerance::MinimumFraction(DEFAULT_PROTEIN_MINIMUM_FRACTION)
    }
}

/// Static planner configuration, optionally loaded from a JSON file.
///
/// Unset fields keep the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    pub population_size: usize,
    pub calorie_tolerance: CalorieTolerance,
    pub protein_tolerance: ProteinTolerance,
    /// Per-goal overrides of the macro split.
    pub goals: HashMap<Goal, MacroRatios>,
    /// Keyword set overrides, keyed by set name (see `KEYWORD_SET_NAMES`).
    pub dietary_keyword_sets: HashMap<String, Vec<String>>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            calorie_tolerance: CalorieTolerance::default(),
            protein_tolerance: ProteinTolerance::default(),
            goals: HashMap::new(),
            dietary_keyword_sets: HashMap::new(),
        }
    }
}

impl PlannerConfig {
    /// Goal profile with any configured override applied.
    pub fn goal_profile(&self, goal: Goal) -> GoalProfile {
        GoalProfile {
            goal,
            ratios: self
                .goals
                .get(&goal)
                .copied()
                .unwrap_or_else(|| goal.default_ratios()),
        }
    }

    /// Lowercased keywords for a named set, override first.
    pub fn keywords(&self, name: &str) -> Vec<String> {
        match self.dietary_keyword_sets.get(name) {
            Some(custom) => custom.iter().map(|k| k.trim().to_lowercase()).collect(),
            None => default_keyword_set(name)
                .unwrap_or_default()
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(PlannerError::InvalidConfig(
                "populationSize must be at least 1".to_string(),
            ));
        }

        let tolerance_ok = match self.calorie_tolerance {
            CalorieTolerance::Relative(v) | CalorieTolerance::Absolute(v) => {
                v.is_finite() && v > 0.0
            }
        };
        if !tolerance_ok {
            return Err(PlannerError::InvalidConfig(
                "calorieTolerance must be positive".to_string(),
            ));
        }

        let protein_ok = match self.protein_tolerance {
            ProteinTolerance::MinimumFraction(v) => v.is_finite() && (0.0..=1.0).contains(&v),
            ProteinTolerance::OffsetGrams(v) => v.is_finite() && v >= 0.0,
        };
        if !protein_ok {
            return Err(PlannerError::InvalidConfig(
                "proteinTolerance out of range".to_string(),
            ));
        }

        for (goal, ratios) in &self.goals {
            if !ratios.is_valid(RATIO_SUM_TOLERANCE) {
                return Err(PlannerError::InvalidConfig(format!(
                    "ratios for goal '{}' must each be in [0, 1] and sum to 1 (got {:.3})",
                    goal,
                    ratios.sum()
                )));
            }
        }

        for (name, keywords) in &self.dietary_keyword_sets {
            if !KEYWORD_SET_NAMES.contains(&name.as_str()) {
                return Err(PlannerError::InvalidConfig(format!(
                    "unknown keyword set '{}' (expected one of: {})",
                    name,
                    KEYWORD_SET_NAMES.join(", ")
                )));
            }
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(PlannerError::InvalidConfig(format!(
                    "keyword set '{}' contains a blank keyword",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Load and validate a config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    let config: PlannerConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population_size, DEFAULT_POPULATION_SIZE);
        assert_eq!(
            config.goal_profile(Goal::Keto).ratios,
            Goal::Keto.default_ratios()
        );
    }

    #[test]
    fn test_calorie_tolerance_modes() {
        let relative = CalorieTolerance::Relative(0.15);
        assert!(relative.is_met(550.0, 600.0));
        assert!(!relative.is_met(500.0, 600.0)); // 100 off, limit is 90

        let absolute = CalorieTolerance::Absolute(100.0);
        assert!(absolute.is_met(510.0, 600.0));
        assert!(!absolute.is_met(500.0, 600.0)); // strict
    }

    #[test]
    fn test_protein_tolerance_modes() {
        let fraction = ProteinTolerance::MinimumFraction(0.8);
        assert!(fraction.is_met(32.0, 40.0));
        assert!(!fraction.is_met(31.9, 40.0));
        assert!(fraction.is_met(80.0, 40.0));

        let offset = ProteinTolerance::OffsetGrams(10.0);
        assert!(offset.is_met(30.0, 40.0));
        assert!(!offset.is_met(29.0, 40.0));
    }

    #[test]
    fn test_load_config_with_overrides() {
        let json = r#"{
            "populationSize": 20,
            "calorieTolerance": {"absolute": 50},
            "proteinTolerance": {"offsetGrams": 5},
            "goals": {"keto": {"protein": 0.2, "fat": 0.75, "carb": 0.05}},
            "dietaryKeywordSets": {"meat": ["Chicken", "venison"]}
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.calorie_tolerance, CalorieTolerance::Absolute(50.0));
        assert_eq!(config.protein_tolerance, ProteinTolerance::OffsetGrams(5.0));
        assert_eq!(config.goal_profile(Goal::Keto).ratios.fat, 0.75);
        assert_eq!(
            config.goal_profile(Goal::Balanced).ratios,
            Goal::Balanced.default_ratios()
        );
        assert_eq!(config.keywords("meat"), vec!["chicken", "venison"]);
        assert!(config.keywords("dairy_egg").contains(&"cheese".to_string()));
    }

    #[test]
    fn test_validate_rejects_bad_ratios() {
        let mut config = PlannerConfig::default();
        config
            .goals
            .insert(Goal::Bulking, MacroRatios::new(0.5, 0.5, 0.5));
        assert!(matches!(
            config.validate(),
            Err(PlannerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_keyword_set() {
        let mut config = PlannerConfig::default();
        config
            .dietary_keyword_sets
            .insert("gluten".to_string(), vec!["wheat".to_string()]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gluten"));
    }

    #[test]
    fn test_validate_rejects_zero_population() {
        let config = PlannerConfig {
            population_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
