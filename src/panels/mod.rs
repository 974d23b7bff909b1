//! Domain renderers
//!
//! One panel per analysis tool. Every panel follows the same submit
//! protocol: build the request from the form's raw field values (numeric
//! coercion defaults to 0), validate locally, issue a latest-request ticket,
//! call the gateway, and apply the result to the panel's view state only if
//! the ticket is still current. Gateway and service errors surface as a
//! user-visible notice and nothing is rendered for that submission.

pub mod balance_sheet;
pub mod budget;
pub mod decision;
pub mod fixed_income;
pub mod loan;
pub mod savings;
pub mod tracker;

pub use balance_sheet::BalanceSheetPanel;
pub use budget::BudgetPanel;
pub use decision::DecisionPanel;
pub use fixed_income::FixedIncomePanel;
pub use loan::LoanPanel;
pub use savings::SavingsPanel;
pub use tracker::TrackerPanel;

use thiserror::Error;

use crate::gateway::GatewayError;

/// Errors surfaced to the user by a panel submission.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Required user input missing; the request was never sent.
    #[error("{0}")]
    Input(String),

    /// The gateway call failed or the service reported an error.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Coerces a raw form field to a number, defaulting to 0 when absent or
/// unparsable.
pub(crate) fn num(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Like [`num`], but a blank field falls back to `default`.
pub(crate) fn num_or(raw: &str, default: f64) -> f64 {
    if raw.trim().is_empty() {
        default
    } else {
        num(raw)
    }
}
