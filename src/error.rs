//! Error type for the layer around the projection engine
//!
//! The calculators themselves are total; these errors come from input
//! validation, request dispatch and file loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid {field} = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("unknown calculator '{0}'")]
    UnknownCalculator(String),

    #[error("unknown risk profile '{0}'")]
    UnknownRiskProfile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ProjectionError {
    pub fn invalid(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            value,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
