//! Recommended asset allocation by age and risk profile

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Age assumed when the client has not given one
pub const DEFAULT_AGE: u32 = 30;

/// Risk profile assigned by the investor questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    #[default]
    Balanced,
    Growth,
    Aggressive,
}

impl RiskProfile {
    pub fn name(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Balanced => "Balanced",
            RiskProfile::Growth => "Growth",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskProfile {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskProfile::Conservative),
            "balanced" => Ok(RiskProfile::Balanced),
            "growth" => Ok(RiskProfile::Growth),
            "aggressive" => Ok(RiskProfile::Aggressive),
            _ => Err(ProjectionError::UnknownRiskProfile(s.to_string())),
        }
    }
}

/// Split across equity, debt and other assets, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub equity: f64,
    pub debt: f64,
    pub other: f64,
}

/// Start from equity = 100 - age, tilt by risk profile, hold debt at the age
/// and give whatever is left (never negative) to other assets.
pub fn recommended_allocation(age: u32, profile: RiskProfile) -> Allocation {
    let age = age as f64;
    let base_equity = 100.0 - age;

    let equity = match profile {
        RiskProfile::Conservative => (base_equity - 20.0).max(20.0),
        RiskProfile::Balanced => (base_equity - 10.0).max(20.0),
        RiskProfile::Growth => base_equity,
        RiskProfile::Aggressive => (base_equity + 10.0).min(90.0),
    };
    let debt = age;
    let other = (100.0 - (equity + debt)).max(0.0);

    Allocation { equity, debt, other }
}

/// One row of the current-vs-recommended comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationComparison {
    #[serde(rename = "category")]
    pub category: &'static str,
    pub current: f64,
    pub recommended: f64,
}

/// Compare the current split against the recommendation, Equity, Debt, Other
pub fn compare_allocation(current: &Allocation, recommended: &Allocation) -> Vec<AllocationComparison> {
    vec![
        AllocationComparison {
            category: "Equity",
            current: current.equity,
            recommended: recommended.equity,
        },
        AllocationComparison {
            category: "Debt",
            current: current.debt,
            recommended: recommended.debt,
        },
        AllocationComparison {
            category: "Other",
            current: current.other,
            recommended: recommended.other,
        },
    ]
}
