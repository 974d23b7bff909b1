//! Risk analysis wire types
//!
//! Covers the three `/api/risk/*` endpoints: fixed-income portfolio risk,
//! balance-sheet risk, and decision-impact simulation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::recs::RecPayload;

// ---------------------------------------------------------------------------
// Fixed income (`/api/risk/fixed-income`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HoldingInput {
    pub name: String,
    pub principal: f64,
    pub rate: f64,
    pub tenure_years: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FixedIncomeRequest {
    pub holdings: Vec<HoldingInput>,
}

/// Per-holding analysis as served back.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingReport {
    pub name: String,
    pub principal: f64,
    pub rate: f64,
    pub macaulay_duration: f64,
    pub price_sensitivity: f64,
    pub maturity_value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixedIncomeResponse {
    /// 0-100.
    pub risk_score: f64,
    pub total_invested: f64,
    pub portfolio_return: f64,
    pub avg_rate: f64,
    #[serde(default)]
    pub holdings: Vec<HoldingReport>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Balance sheet (`/api/risk/balance-sheet`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Assets {
    pub cash_savings: f64,
    pub investments: f64,
    pub property: f64,
    pub vehicles: f64,
    pub gold_jewelry: f64,
    pub other: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Liabilities {
    pub home_loan: f64,
    pub vehicle_loan: f64,
    pub personal_loan: f64,
    pub credit_card: f64,
    pub other: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BalanceSheetRequest {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub monthly_income: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceSheetResponse {
    /// 0-100.
    pub valuation_score: f64,
    pub net_worth: f64,
    pub solvency_ratio: f64,
    pub months_runway: f64,
    #[serde(default)]
    pub asset_breakdown: BTreeMap<String, f64>,
    #[serde(default)]
    pub liability_breakdown: BTreeMap<String, f64>,
    #[serde(default)]
    pub insights: Vec<RecPayload>,
}

// ---------------------------------------------------------------------------
// Decision impact (`/api/risk/decision-impact`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionType {
    #[default]
    Loan,
    Investment,
    Expense,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DecisionRequest {
    pub decision_type: DecisionType,
    pub amount: f64,
    pub interest_rate: f64,
    pub tenure_months: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub current_savings: f64,
    pub current_debt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DecisionVerdict {
    Recommended,
    #[serde(rename = "Proceed with Caution")]
    ProceedWithCaution,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl fmt::Display for DecisionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionVerdict::Recommended => write!(f, "Recommended"),
            DecisionVerdict::ProceedWithCaution => write!(f, "Proceed with Caution"),
            DecisionVerdict::HighRisk => write!(f, "High Risk"),
        }
    }
}

/// Monthly financial position before or after the decision.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FinancialSnapshot {
    pub monthly_surplus: f64,
    pub savings: f64,
    pub debt: f64,
}

/// One trajectory sample. Loan decisions carry balance and principal paid,
/// investment decisions carry portfolio value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimelinePoint {
    Loan {
        month: u32,
        balance: f64,
        principal: f64,
    },
    Investment {
        month: u32,
        value: f64,
    },
}

impl TimelinePoint {
    pub fn month(&self) -> u32 {
        match self {
            TimelinePoint::Loan { month, .. } | TimelinePoint::Investment { month, .. } => *month,
        }
    }

    pub fn balance(&self) -> f64 {
        match self {
            TimelinePoint::Loan { balance, .. } => *balance,
            TimelinePoint::Investment { .. } => 0.0,
        }
    }

    pub fn principal(&self) -> f64 {
        match self {
            TimelinePoint::Loan { principal, .. } => *principal,
            TimelinePoint::Investment { .. } => 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            TimelinePoint::Investment { value, .. } => *value,
            TimelinePoint::Loan { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionResponse {
    /// 0-100.
    pub impact_score: f64,
    pub verdict: DecisionVerdict,
    pub monthly_impact: f64,
    pub before: FinancialSnapshot,
    pub after: FinancialSnapshot,
    #[serde(default)]
    pub timeline: Vec<TimelinePoint>,
    #[serde(default)]
    pub risk_indicators: Vec<RecPayload>,
    pub decision_type: DecisionType,
}
