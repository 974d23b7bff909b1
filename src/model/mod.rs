//! Wire types for the analysis service
//!
//! Request and response records for every endpoint, one submodule per domain
//! family. Field names are the service contract; the analysis logic behind
//! them lives entirely on the service side.

pub mod budget;
pub mod chat;
pub mod loan;
pub mod risk;
pub mod savings;

pub use budget::{BudgetData, BudgetRequest, BudgetResponse, BudgetSlice, OptimizedBudget, RiskLevel};
pub use chat::{ChatRequest, ChatResponse};
pub use loan::{LoanFactor, LoanProduct, LoanRequest, LoanResponse, LoanVerdict};
pub use risk::{
    Assets, BalanceSheetRequest, BalanceSheetResponse, DecisionRequest, DecisionResponse,
    DecisionType, DecisionVerdict, FinancialSnapshot, FixedIncomeRequest, FixedIncomeResponse,
    HoldingInput, HoldingReport, Liabilities, TimelinePoint,
};
pub use savings::{Milestone, SavingsRequest, SavingsResponse, SavingsStrategy, RiskTolerance};
