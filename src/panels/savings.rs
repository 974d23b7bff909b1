//! Savings planner panel

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, RequestSlot};
use crate::model::savings::{RiskTolerance, SavingsRequest, SavingsResponse};
use crate::panels::{num, PanelError};
use crate::render::chart::{ChartSpec, Series};
use crate::render::registry::VisualizationRegistry;
use crate::render::{build_item, currency, format, Gauge, RecItem, Recommendation};

/// Mount point for the growth-vs-target line chart.
pub const MOUNT_GROWTH: &str = "savings.growth";

/// Goal name used when the field is left blank.
const DEFAULT_GOAL: &str = "My Goal";

/// Raw form field values as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct SavingsForm {
    pub goal_name: String,
    pub target_amount: String,
    pub current_savings: String,
    pub target_months: String,
    pub monthly_income: String,
    pub monthly_expenses: String,
    pub risk_tolerance: RiskTolerance,
}

impl SavingsForm {
    fn to_request(&self) -> SavingsRequest {
        let goal_name = if self.goal_name.trim().is_empty() {
            DEFAULT_GOAL.to_string()
        } else {
            self.goal_name.clone()
        };
        SavingsRequest {
            goal_name,
            target_amount: num(&self.target_amount),
            current_savings: num(&self.current_savings),
            target_months: num(&self.target_months),
            monthly_income: num(&self.monthly_income),
            monthly_expenses: num(&self.monthly_expenses),
            risk_tolerance: self.risk_tolerance,
        }
    }
}

/// One strategy card.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyCard {
    pub name: String,
    pub allocation: String,
    pub description: String,
    pub expected_return: String,
    pub risk: String,
}

/// One milestone row with its progress fill.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneRow {
    pub month: String,
    pub amount: String,
    pub fill_pct: f64,
}

/// View state of the savings planner results.
#[derive(Debug, Clone, Default)]
pub struct SavingsView {
    pub visible: bool,
    pub focused: bool,
    pub gauge: Gauge,
    pub progress: String,
    pub monthly_required: String,
    pub remaining: String,
    pub feasible: bool,
    pub feasibility: String,
    pub strategies: Vec<StrategyCard>,
    pub milestones: Vec<MilestoneRow>,
    pub tips: Vec<RecItem>,
}

pub struct SavingsPanel {
    gateway: Arc<AnalysisGateway>,
    registry: Arc<VisualizationRegistry>,
    slot: RequestSlot,
    view: RwLock<SavingsView>,
}

impl SavingsPanel {
    pub fn new(gateway: Arc<AnalysisGateway>, registry: Arc<VisualizationRegistry>) -> Self {
        registry.register_mount(MOUNT_GROWTH);
        Self {
            gateway,
            registry,
            slot: RequestSlot::new(),
            view: RwLock::new(SavingsView::default()),
        }
    }

    /// Submits the form and applies the plan to the view.
    pub async fn submit(&self, form: &SavingsForm) -> Result<(), PanelError> {
        let ticket = self.slot.issue();
        let response: SavingsResponse = self
            .gateway
            .call(endpoints::SAVINGS_PLAN, &form.to_request())
            .await?;
        if !self.slot.is_current(&ticket) {
            debug!("savings response superseded, discarding");
            return Ok(());
        }
        self.apply(&response);
        Ok(())
    }

    fn apply(&self, response: &SavingsResponse) {
        let labels: Vec<String> = response
            .milestones
            .iter()
            .map(|m| format!("M{}", m.month))
            .collect();
        let projected: Vec<f64> = response.milestones.iter().map(|m| m.amount).collect();
        let target: Vec<f64> = response
            .milestones
            .iter()
            .map(|_| response.target_amount)
            .collect();
        self.registry.render(
            MOUNT_GROWTH,
            ChartSpec::line(
                labels,
                vec![
                    Series::new("Projected Savings", projected).filled(),
                    Series::new("Target", target).dashed(),
                ],
            ),
        );

        let mut view = self.view.write().unwrap();
        view.visible = true;
        view.focused = true;
        view.gauge.set(response.progress, None);
        view.progress = format!("{}%", format::number(response.progress));
        view.monthly_required = currency(response.monthly_required);
        view.remaining = currency(response.remaining);
        view.feasible = response.feasible;
        view.feasibility = if response.feasible {
            "Feasible".to_string()
        } else {
            "Stretch".to_string()
        };
        view.strategies = response
            .strategies
            .iter()
            .map(|s| StrategyCard {
                name: s.name.clone(),
                allocation: format!("{}%", format::number(s.allocation)),
                description: s.description.clone(),
                expected_return: format!("Return: {}", s.expected_return),
                risk: format!("Risk: {}", s.risk),
            })
            .collect();
        view.milestones = response
            .milestones
            .iter()
            .map(|m| MilestoneRow {
                month: format!("Month {}", m.month),
                amount: currency(m.amount),
                fill_pct: m.percentage,
            })
            .collect();
        view.tips = response
            .tips
            .iter()
            .map(|tip| build_item(Recommendation::info(tip.clone())))
            .collect();
    }

    pub fn view(&self) -> SavingsView {
        self.view.read().unwrap().clone()
    }
}
