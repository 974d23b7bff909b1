//! Budget analysis wire types (`/api/budget/analyze`)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::recs::RecPayload;

/// Outbound budget analysis payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BudgetRequest {
    pub income: f64,
    /// Category key to monthly amount.
    pub expenses: BTreeMap<String, f64>,
}

/// One needs/wants/savings slice of the analyzed budget.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BudgetSlice {
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BudgetData {
    pub needs: BudgetSlice,
    pub wants: BudgetSlice,
    pub savings: BudgetSlice,
}

/// Service-recommended split in absolute amounts.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OptimizedBudget {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Budget analysis result.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetResponse {
    pub income: f64,
    pub total_expenses: f64,
    pub remaining: f64,
    /// 0-100.
    pub health_score: f64,
    pub budget_data: BudgetData,
    pub expense_breakdown: BTreeMap<String, f64>,
    pub optimized_budget: OptimizedBudget,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub recommendations: Vec<RecPayload>,
}
