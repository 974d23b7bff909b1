//! Budget planner panel

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, RequestSlot};
use crate::model::budget::{BudgetRequest, BudgetResponse};
use crate::panels::{num, PanelError};
use crate::render::chart::{ChartSpec, Series};
use crate::render::registry::VisualizationRegistry;
use crate::render::{build_item, category_label, currency, format, Gauge, RecItem};

/// Mount point for the expense breakdown donut.
pub const MOUNT_DONUT: &str = "budget.donut";
/// Mount point for the needs/wants/savings actual-vs-ideal bars.
pub const MOUNT_RULE: &str = "budget.rule";

/// Ideal needs/wants/savings split of the 50/30/20 rule.
const IDEAL_SPLIT: [f64; 3] = [50.0, 30.0, 20.0];

/// Raw form field values as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    pub income: String,
    pub housing: String,
    pub utilities: String,
    pub groceries: String,
    pub transportation: String,
    pub insurance: String,
    pub healthcare: String,
    pub entertainment: String,
    pub dining_out: String,
    pub shopping: String,
    pub subscriptions: String,
    pub savings: String,
    pub debt_payment: String,
}

impl BudgetForm {
    fn to_request(&self) -> BudgetRequest {
        let mut expenses = BTreeMap::new();
        expenses.insert("housing".to_string(), num(&self.housing));
        expenses.insert("utilities".to_string(), num(&self.utilities));
        expenses.insert("groceries".to_string(), num(&self.groceries));
        expenses.insert("transportation".to_string(), num(&self.transportation));
        expenses.insert("insurance".to_string(), num(&self.insurance));
        expenses.insert("healthcare".to_string(), num(&self.healthcare));
        expenses.insert("entertainment".to_string(), num(&self.entertainment));
        expenses.insert("dining_out".to_string(), num(&self.dining_out));
        expenses.insert("shopping".to_string(), num(&self.shopping));
        expenses.insert("subscriptions".to_string(), num(&self.subscriptions));
        expenses.insert("savings".to_string(), num(&self.savings));
        expenses.insert("debt_payment".to_string(), num(&self.debt_payment));
        BudgetRequest {
            income: num(&self.income),
            expenses,
        }
    }
}

/// One entry of the optimized-budget strip.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedEntry {
    pub label: String,
    /// Recommended amount, formatted.
    pub value: String,
    /// Recommended minus actual, in currency units.
    pub delta: f64,
    /// e.g. `↑ Ksh 1,200 vs current`.
    pub delta_text: String,
}

/// View state of the budget planner results.
#[derive(Debug, Clone, Default)]
pub struct BudgetView {
    pub visible: bool,
    pub focused: bool,
    pub gauge: Gauge,
    pub remaining: String,
    pub risk_level: String,
    pub save_rate: String,
    pub recommendations: Vec<RecItem>,
    pub optimized: Vec<OptimizedEntry>,
}

pub struct BudgetPanel {
    gateway: Arc<AnalysisGateway>,
    registry: Arc<VisualizationRegistry>,
    slot: RequestSlot,
    view: RwLock<BudgetView>,
}

impl BudgetPanel {
    pub fn new(gateway: Arc<AnalysisGateway>, registry: Arc<VisualizationRegistry>) -> Self {
        registry.register_mount(MOUNT_DONUT);
        registry.register_mount(MOUNT_RULE);
        Self {
            gateway,
            registry,
            slot: RequestSlot::new(),
            view: RwLock::new(BudgetView::default()),
        }
    }

    /// Submits the form and applies the analysis result to the view.
    pub async fn submit(&self, form: &BudgetForm) -> Result<(), PanelError> {
        let ticket = self.slot.issue();
        let response: BudgetResponse = self
            .gateway
            .call(endpoints::BUDGET_ANALYZE, &form.to_request())
            .await?;
        if !self.slot.is_current(&ticket) {
            debug!("budget response superseded, discarding");
            return Ok(());
        }
        self.apply(&response);
        Ok(())
    }

    fn apply(&self, response: &BudgetResponse) {
        let labels: Vec<String> = response
            .expense_breakdown
            .keys()
            .map(|k| category_label(k))
            .collect();
        let values: Vec<f64> = response.expense_breakdown.values().copied().collect();
        self.registry
            .render(MOUNT_DONUT, ChartSpec::doughnut(labels, values));

        let data = &response.budget_data;
        let actual = vec![
            data.needs.percentage,
            data.wants.percentage,
            data.savings.percentage,
        ];
        self.registry.render(
            MOUNT_RULE,
            ChartSpec::bar(
                vec!["Needs".into(), "Wants".into(), "Savings".into()],
                vec![
                    Series::new("Actual %", actual),
                    Series::new("Ideal %", IDEAL_SPLIT.to_vec()),
                ],
            ),
        );

        let mut view = self.view.write().unwrap();
        view.visible = true;
        view.focused = true;
        view.gauge.set(response.health_score, None);
        view.remaining = currency(response.remaining);
        view.risk_level = response.risk_level.to_string().to_uppercase();
        view.save_rate = format!("{}%", format::number(data.savings.percentage));
        view.recommendations = response
            .recommendations
            .iter()
            .cloned()
            .map(build_item)
            .collect();
        view.optimized = optimized_entries(response);
    }

    pub fn view(&self) -> BudgetView {
        self.view.read().unwrap().clone()
    }
}

fn optimized_entries(response: &BudgetResponse) -> Vec<OptimizedEntry> {
    let data = &response.budget_data;
    let optimized = &response.optimized_budget;
    [
        ("Needs", data.needs.amount, optimized.needs),
        ("Wants", data.wants.amount, optimized.wants),
        ("Savings", data.savings.amount, optimized.savings),
    ]
    .into_iter()
    .map(|(label, actual, ideal)| {
        let delta = ideal - actual;
        let arrow = if delta >= 0.0 { "\u{2191}" } else { "\u{2193}" };
        OptimizedEntry {
            label: label.to_string(),
            value: currency(ideal),
            delta,
            delta_text: format!("{} {} vs current", arrow, currency(delta.abs())),
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::budget::{BudgetData, BudgetSlice, OptimizedBudget, RiskLevel};

    fn response() -> BudgetResponse {
        BudgetResponse {
            income: 50000.0,
            total_expenses: 40000.0,
            remaining: 10000.0,
            health_score: 72.0,
            budget_data: BudgetData {
                needs: BudgetSlice {
                    amount: 27500.0,
                    percentage: 55.0,
                },
                wants: BudgetSlice {
                    amount: 12500.0,
                    percentage: 25.0,
                },
                savings: BudgetSlice {
                    amount: 10000.0,
                    percentage: 20.0,
                },
            },
            expense_breakdown: [("housing".to_string(), 15000.0)].into_iter().collect(),
            optimized_budget: OptimizedBudget {
                needs: 25000.0,
                wants: 15000.0,
                savings: 10000.0,
            },
            risk_level: RiskLevel::Medium,
            recommendations: Vec::new(),
        }
    }

    fn panel() -> BudgetPanel {
        BudgetPanel::new(
            Arc::new(AnalysisGateway::new("http://127.0.0.1:0")),
            Arc::new(VisualizationRegistry::new()),
        )
    }

    #[test]
    fn test_form_coerces_unparsable_fields_to_zero() {
        let form = BudgetForm {
            income: "50000".to_string(),
            housing: "15000".to_string(),
            groceries: "oops".to_string(),
            ..Default::default()
        };
        let request = form.to_request();
        assert_eq!(request.income, 50000.0);
        assert_eq!(request.expenses["housing"], 15000.0);
        assert_eq!(request.expenses["groceries"], 0.0);
        assert_eq!(request.expenses.len(), 12);
    }

    #[test]
    fn test_apply_sets_gauge_metrics_and_charts() {
        let panel = panel();
        panel.apply(&response());

        let view = panel.view();
        assert!(view.visible);
        assert_eq!(view.gauge.value_text, "72");
        assert_eq!(view.remaining, "Ksh 10,000");
        assert_eq!(view.risk_level, "MEDIUM");
        assert_eq!(view.save_rate, "20%");

        let rule = panel.registry.spec(MOUNT_RULE).unwrap();
        assert_eq!(rule.series[0].data, vec![55.0, 25.0, 20.0]);
        assert_eq!(rule.series[1].data, vec![50.0, 30.0, 20.0]);
        assert!(panel.registry.spec(MOUNT_DONUT).is_some());
    }

    #[test]
    fn test_optimized_entries_carry_signed_deltas() {
        let entries = optimized_entries(&response());
        assert_eq!(entries[0].label, "Needs");
        assert_eq!(entries[0].delta, -2500.0);
        assert_eq!(entries[0].delta_text, "\u{2193} Ksh 2,500 vs current");
        assert_eq!(entries[1].delta, 2500.0);
        assert_eq!(entries[1].delta_text, "\u{2191} Ksh 2,500 vs current");
    }

    #[test]
    fn test_rerender_replaces_widgets_without_accumulation() {
        let panel = panel();
        panel.apply(&response());
        panel.apply(&response());
        assert_eq!(panel.registry.live_count(), 2);
        assert_eq!(panel.registry.disposed_count(), 2);
    }
}
