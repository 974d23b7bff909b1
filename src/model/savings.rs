//! Savings planning wire types (`/api/savings/plan`)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

/// Outbound savings plan payload.
#[derive(Debug, Clone, Serialize)]
pub struct SavingsRequest {
    pub goal_name: String,
    pub target_amount: f64,
    pub current_savings: f64,
    pub target_months: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub risk_tolerance: RiskTolerance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavingsStrategy {
    pub name: String,
    /// Percent of the monthly contribution.
    pub allocation: f64,
    pub description: String,
    pub expected_return: String,
    pub risk: String,
}

/// One projection sample on the way to the goal. Months are strictly
/// increasing in the served list.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Milestone {
    pub month: u32,
    pub amount: f64,
    pub percentage: f64,
}

/// Savings plan result.
#[derive(Debug, Clone, Deserialize)]
pub struct SavingsResponse {
    /// 0-100.
    pub progress: f64,
    pub monthly_required: f64,
    pub remaining: f64,
    pub feasible: bool,
    pub target_amount: f64,
    #[serde(default)]
    pub strategies: Vec<SavingsStrategy>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub tips: Vec<String>,
}
