//! Fixed-income risk panel

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, RequestSlot};
use crate::model::risk::{FixedIncomeRequest, FixedIncomeResponse, HoldingInput};
use crate::panels::{num, PanelError};
use crate::render::{build_item, currency, format, Gauge, RecItem, Recommendation};

/// Name used for a holding whose name field is left blank.
const UNNAMED_HOLDING: &str = "Unnamed";

/// One raw holding row as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct HoldingForm {
    pub name: String,
    pub principal: String,
    pub rate: String,
    pub tenure_years: String,
}

/// The fixed-income form: any number of holding rows.
#[derive(Debug, Clone, Default)]
pub struct FixedIncomeForm {
    pub holdings: Vec<HoldingForm>,
}

impl FixedIncomeForm {
    /// Rows with a non-positive principal are skipped.
    fn to_request(&self) -> FixedIncomeRequest {
        let holdings = self
            .holdings
            .iter()
            .filter_map(|row| {
                let principal = num(&row.principal);
                if principal <= 0.0 {
                    return None;
                }
                let name = if row.name.trim().is_empty() {
                    UNNAMED_HOLDING.to_string()
                } else {
                    row.name.clone()
                };
                Some(HoldingInput {
                    name,
                    principal,
                    rate: num(&row.rate),
                    tenure_years: num(&row.tenure_years),
                })
            })
            .collect();
        FixedIncomeRequest { holdings }
    }
}

/// One formatted row of the holdings analysis table.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingRow {
    pub name: String,
    pub principal: String,
    pub rate: String,
    pub duration: String,
    pub sensitivity: String,
    pub maturity_value: String,
}

/// View state of the fixed-income results.
#[derive(Debug, Clone, Default)]
pub struct FixedIncomeView {
    pub visible: bool,
    pub focused: bool,
    pub gauge: Gauge,
    pub risk_score: String,
    pub total_invested: String,
    pub portfolio_return: String,
    pub avg_rate: String,
    pub holdings: Vec<HoldingRow>,
    pub recommendations: Vec<RecItem>,
}

pub struct FixedIncomePanel {
    gateway: Arc<AnalysisGateway>,
    slot: RequestSlot,
    view: RwLock<FixedIncomeView>,
}

impl FixedIncomePanel {
    /// The fixed-income view has no chart mount points; results render as a
    /// table, so no registry is needed.
    pub fn new(gateway: Arc<AnalysisGateway>) -> Self {
        Self {
            gateway,
            slot: RequestSlot::new(),
            view: RwLock::new(FixedIncomeView::default()),
        }
    }

    /// Submits the holdings for analysis.
    ///
    /// Fails with an input notice before any request is issued when no row
    /// carries a positive principal.
    pub async fn submit(&self, form: &FixedIncomeForm) -> Result<(), PanelError> {
        let request = form.to_request();
        if request.holdings.is_empty() {
            return Err(PanelError::Input("Add at least one holding.".to_string()));
        }
        let ticket = self.slot.issue();
        let response: FixedIncomeResponse = self
            .gateway
            .call(endpoints::RISK_FIXED_INCOME, &request)
            .await?;
        if !self.slot.is_current(&ticket) {
            debug!("fixed-income response superseded, discarding");
            return Ok(());
        }
        self.apply(&response);
        Ok(())
    }

    fn apply(&self, response: &FixedIncomeResponse) {
        let mut view = self.view.write().unwrap();
        view.visible = true;
        view.focused = true;
        view.gauge.set(response.risk_score, None);
        view.risk_score = format::number(response.risk_score);
        view.total_invested = currency(response.total_invested);
        view.portfolio_return = currency(response.portfolio_return);
        view.avg_rate = format!("{}%", format::number(response.avg_rate));
        view.holdings = response
            .holdings
            .iter()
            .map(|h| HoldingRow {
                name: h.name.clone(),
                principal: currency(h.principal),
                rate: format!("{}%", format::number(h.rate)),
                duration: format!("{}y", format::number(h.macaulay_duration)),
                sensitivity: format!("{}/1%", currency(h.price_sensitivity)),
                maturity_value: currency(h.maturity_value),
            })
            .collect();
        view.recommendations = response
            .recommendations
            .iter()
            .map(|r| build_item(Recommendation::info(r.clone())))
            .collect();
    }

    pub fn view(&self) -> FixedIncomeView {
        self.view.read().unwrap().clone()
    }
}
