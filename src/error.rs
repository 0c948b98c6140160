use serde::Serialize;
use thiserror::Error;

use crate::models::{DietaryMode, MealType};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No items found for {meal_type} on {} ({dietary_mode})", date_or_any(.date))]
    EmptyPool {
        meal_type: MealType,
        date: Option<String>,
        dietary_mode: DietaryMode,
    },

    #[error("Invalid target: {field} must be positive, got {value}")]
    InvalidTarget { field: &'static str, value: f64 },

    #[error("Catalog unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Unknown dining hall: {location}{}", suggestion_suffix(.suggestion))]
    UnknownLocation {
        location: String,
        suggestion: Option<String>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

fn date_or_any(date: &Option<String>) -> &str {
    date.as_deref().unwrap_or("any date")
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

impl PlannerError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PlannerError::EmptyPool { .. } => "empty_pool",
            PlannerError::InvalidTarget { .. } => "invalid_target",
            PlannerError::UpstreamUnavailable(_) => "upstream_unavailable",
            PlannerError::UnknownLocation { .. } => "unknown_location",
            PlannerError::InvalidConfig(_) => "invalid_config",
            PlannerError::InvalidInput(_) => "invalid_input",
            PlannerError::Io(_)
            | PlannerError::Json(_)
            | PlannerError::Prompt(_)
            | PlannerError::Csv(_)
            | PlannerError::Pattern(_) => "internal",
        }
    }

    /// Whether the caller may retry the same request later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PlannerError::UpstreamUnavailable(_))
    }

    /// Structured error body for JSON output.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
            retryable: self.is_retryable(),
        }
    }
}

/// Error object printed in place of a plan when `--json` is set.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
    pub retryable: bool,
}

pub type Result<T> = std::result::Result<T, PlannerError>;
