//! Loan eligibility wire types (`/api/loan/check`)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::budget::RiskLevel;

/// Outbound loan eligibility payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoanRequest {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub existing_debt: f64,
    pub savings: f64,
    pub employment_months: f64,
    pub dependents: f64,
    pub has_bank_account: bool,
    pub requested_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LoanVerdict {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl fmt::Display for LoanVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanVerdict::Excellent => write!(f, "Excellent"),
            LoanVerdict::Good => write!(f, "Good"),
            LoanVerdict::Fair => write!(f, "Fair"),
            LoanVerdict::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// One component of the eligibility score.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanFactor {
    pub name: String,
    pub score: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoanProduct {
    pub name: String,
    pub description: String,
    pub interest_rate: f64,
    pub max_eligible_amount: f64,
    pub monthly_emi: f64,
    pub affordable: bool,
}

/// Loan eligibility result.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanResponse {
    /// 0-100.
    pub score: f64,
    pub verdict: LoanVerdict,
    pub risk_level: RiskLevel,
    pub safe_emi: f64,
    pub factors: Vec<LoanFactor>,
    #[serde(default)]
    pub eligible_countries: Vec<String>,
    #[serde(default)]
    pub eligible_products: Vec<LoanProduct>,
    #[serde(default)]
    pub improvement_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_with_space_deserializes() {
        let verdict: LoanVerdict = serde_json::from_str(r#""Needs Improvement""#).unwrap();
        assert_eq!(verdict, LoanVerdict::NeedsImprovement);
        assert_eq!(verdict.to_string(), "Needs Improvement");
    }

    #[test]
    fn test_loan_response_deserializes_contract_fields() {
        let raw = r#"{
            "score": 81,
            "verdict": "Good",
            "risk_level": "low",
            "safe_emi": 12000,
            "factors": [{"name": "Income Stability", "score": 18, "max": 20}],
            "eligible_countries": ["Kenya"],
            "eligible_products": [{
                "name": "Personal Loan",
                "description": "Unsecured credit",
                "interest_rate": 14.5,
                "max_eligible_amount": 300000,
                "monthly_emi": 9500,
                "affordable": true
            }],
            "improvement_tips": ["Keep utilization low"]
        }"#;
        let response: LoanResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.verdict, LoanVerdict::Good);
        assert_eq!(response.factors[0].max, 20.0);
        assert!(response.eligible_products[0].affordable);
    }
}
