//! Balance-sheet risk panel

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, RequestSlot};
use crate::model::risk::{Assets, BalanceSheetRequest, BalanceSheetResponse, Liabilities};
use crate::panels::{num, PanelError};
use crate::render::chart::ChartSpec;
use crate::render::registry::VisualizationRegistry;
use crate::render::{build_item, currency, format, Gauge, RecItem};

/// Mount point for the asset composition donut.
pub const MOUNT_ASSETS: &str = "balance.assets";
/// Mount point for the liability composition donut.
pub const MOUNT_LIABILITIES: &str = "balance.liabilities";

/// Raw form field values as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct BalanceSheetForm {
    pub cash_savings: String,
    pub investments: String,
    pub property: String,
    pub vehicles: String,
    pub gold_jewelry: String,
    pub other_assets: String,
    pub home_loan: String,
    pub vehicle_loan: String,
    pub personal_loan: String,
    pub credit_card: String,
    pub other_liabilities: String,
    pub monthly_income: String,
}

impl BalanceSheetForm {
    fn to_request(&self) -> BalanceSheetRequest {
        BalanceSheetRequest {
            assets: Assets {
                cash_savings: num(&self.cash_savings),
                investments: num(&self.investments),
                property: num(&self.property),
                vehicles: num(&self.vehicles),
                gold_jewelry: num(&self.gold_jewelry),
                other: num(&self.other_assets),
            },
            liabilities: Liabilities {
                home_loan: num(&self.home_loan),
                vehicle_loan: num(&self.vehicle_loan),
                personal_loan: num(&self.personal_loan),
                credit_card: num(&self.credit_card),
                other: num(&self.other_liabilities),
            },
            monthly_income: num(&self.monthly_income),
        }
    }
}

/// View state of the balance-sheet results.
#[derive(Debug, Clone, Default)]
pub struct BalanceSheetView {
    pub visible: bool,
    pub focused: bool,
    pub gauge: Gauge,
    pub valuation_score: String,
    pub net_worth: String,
    pub net_worth_positive: bool,
    pub solvency: String,
    pub runway: String,
    pub insights: Vec<RecItem>,
}

pub struct BalanceSheetPanel {
    gateway: Arc<AnalysisGateway>,
    registry: Arc<VisualizationRegistry>,
    slot: RequestSlot,
    view: RwLock<BalanceSheetView>,
}

impl BalanceSheetPanel {
    pub fn new(gateway: Arc<AnalysisGateway>, registry: Arc<VisualizationRegistry>) -> Self {
        registry.register_mount(MOUNT_ASSETS);
        registry.register_mount(MOUNT_LIABILITIES);
        Self {
            gateway,
            registry,
            slot: RequestSlot::new(),
            view: RwLock::new(BalanceSheetView::default()),
        }
    }

    /// Submits the form and applies the valuation result to the view.
    pub async fn submit(&self, form: &BalanceSheetForm) -> Result<(), PanelError> {
        let ticket = self.slot.issue();
        let response: BalanceSheetResponse = self
            .gateway
            .call(endpoints::RISK_BALANCE_SHEET, &form.to_request())
            .await?;
        if !self.slot.is_current(&ticket) {
            debug!("balance-sheet response superseded, discarding");
            return Ok(());
        }
        self.apply(&response);
        Ok(())
    }

    fn apply(&self, response: &BalanceSheetResponse) {
        self.registry
            .render(MOUNT_ASSETS, breakdown_donut(&response.asset_breakdown));
        self.registry.render(
            MOUNT_LIABILITIES,
            breakdown_donut(&response.liability_breakdown),
        );

        let mut view = self.view.write().unwrap();
        view.visible = true;
        view.focused = true;
        view.gauge.set(response.valuation_score, None);
        view.valuation_score = format::number(response.valuation_score);
        view.net_worth = currency(response.net_worth);
        view.net_worth_positive = response.net_worth >= 0.0;
        view.solvency = format!("{}%", format::number(response.solvency_ratio));
        view.runway = format!("{} mo", format::number(response.months_runway));
        view.insights = response.insights.iter().cloned().map(build_item).collect();
    }

    pub fn view(&self) -> BalanceSheetView {
        self.view.read().unwrap().clone()
    }
}

/// Donut over a breakdown mapping, dropping zero-valued entries.
fn breakdown_donut(breakdown: &BTreeMap<String, f64>) -> ChartSpec {
    let entries: Vec<(&String, f64)> = breakdown
        .iter()
        .filter(|(_, value)| **value > 0.0)
        .map(|(key, value)| (key, *value))
        .collect();
    ChartSpec::doughnut(
        entries.iter().map(|(key, _)| (*key).clone()).collect(),
        entries.iter().map(|(_, value)| *value).collect(),
    )
}
