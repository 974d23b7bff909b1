//! Decision-impact simulator panel

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, RequestSlot};
use crate::model::risk::{DecisionRequest, DecisionResponse, DecisionType, TimelinePoint};
use crate::panels::{num, PanelError};
use crate::render::chart::{ChartSpec, Series};
use crate::render::registry::VisualizationRegistry;
use crate::render::{build_item, currency, signed_currency, Gauge, RecItem};

/// Mount point for the before-vs-after comparison bars.
pub const MOUNT_BEFORE_AFTER: &str = "decision.before_after";
/// Mount point for the projection timeline.
pub const MOUNT_TIMELINE: &str = "decision.timeline";

/// Raw form field values as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct DecisionForm {
    pub decision_type: DecisionType,
    pub amount: String,
    pub interest_rate: String,
    pub tenure_months: String,
    pub monthly_income: String,
    pub monthly_expenses: String,
    pub current_savings: String,
    pub current_debt: String,
}

impl DecisionForm {
    fn to_request(&self) -> DecisionRequest {
        DecisionRequest {
            decision_type: self.decision_type,
            amount: num(&self.amount),
            interest_rate: num(&self.interest_rate),
            tenure_months: num(&self.tenure_months),
            monthly_income: num(&self.monthly_income),
            monthly_expenses: num(&self.monthly_expenses),
            current_savings: num(&self.current_savings),
            current_debt: num(&self.current_debt),
        }
    }
}

/// View state of the decision simulator results.
#[derive(Debug, Clone, Default)]
pub struct DecisionView {
    pub visible: bool,
    pub focused: bool,
    pub gauge: Gauge,
    pub verdict: String,
    pub monthly_impact: String,
    pub monthly_impact_positive: bool,
    pub after_surplus: String,
    pub after_surplus_positive: bool,
    pub risk_indicators: Vec<RecItem>,
}

pub struct DecisionPanel {
    gateway: Arc<AnalysisGateway>,
    registry: Arc<VisualizationRegistry>,
    slot: RequestSlot,
    view: RwLock<DecisionView>,
}

impl DecisionPanel {
    pub fn new(gateway: Arc<AnalysisGateway>, registry: Arc<VisualizationRegistry>) -> Self {
        registry.register_mount(MOUNT_BEFORE_AFTER);
        registry.register_mount(MOUNT_TIMELINE);
        Self {
            gateway,
            registry,
            slot: RequestSlot::new(),
            view: RwLock::new(DecisionView::default()),
        }
    }

    /// Submits the form and applies the simulated impact to the view.
    pub async fn submit(&self, form: &DecisionForm) -> Result<(), PanelError> {
        let ticket = self.slot.issue();
        let response: DecisionResponse = self
            .gateway
            .call(endpoints::RISK_DECISION_IMPACT, &form.to_request())
            .await?;
        if !self.slot.is_current(&ticket) {
            debug!("decision response superseded, discarding");
            return Ok(());
        }
        self.apply(&response);
        Ok(())
    }

    fn apply(&self, response: &DecisionResponse) {
        self.registry.render(
            MOUNT_BEFORE_AFTER,
            ChartSpec::bar(
                vec![
                    "Monthly Surplus".into(),
                    "Savings".into(),
                    "Debt".into(),
                ],
                vec![
                    Series::new(
                        "Before",
                        vec![
                            response.before.monthly_surplus,
                            response.before.savings,
                            response.before.debt,
                        ],
                    ),
                    Series::new(
                        "After",
                        vec![
                            response.after.monthly_surplus,
                            response.after.savings,
                            response.after.debt,
                        ],
                    ),
                ],
            ),
        );

        if let Some(timeline) = timeline_chart(response.decision_type, &response.timeline) {
            self.registry.render(MOUNT_TIMELINE, timeline);
        }

        let mut view = self.view.write().unwrap();
        view.visible = true;
        view.focused = true;
        view.gauge.set(response.impact_score, None);
        view.verdict = response.verdict.to_string();
        view.monthly_impact = signed_currency(response.monthly_impact);
        view.monthly_impact_positive = response.monthly_impact >= 0.0;
        view.after_surplus = currency(response.after.monthly_surplus);
        view.after_surplus_positive = response.after.monthly_surplus >= 0.0;
        view.risk_indicators = response
            .risk_indicators
            .iter()
            .cloned()
            .map(build_item)
            .collect();
    }

    pub fn view(&self) -> DecisionView {
        self.view.read().unwrap().clone()
    }
}

/// Timeline series depend on the decision type: loans plot remaining balance
/// against principal paid, investments plot portfolio value. Other decision
/// types render no timeline chart at all, even when the service sends points.
fn timeline_chart(decision_type: DecisionType, timeline: &[TimelinePoint]) -> Option<ChartSpec> {
    if timeline.is_empty() {
        return None;
    }
    let labels: Vec<String> = timeline.iter().map(|p| format!("M{}", p.month())).collect();
    match decision_type {
        DecisionType::Loan => Some(ChartSpec::line(
            labels,
            vec![
                Series::new(
                    "Remaining Balance",
                    timeline.iter().map(TimelinePoint::balance).collect(),
                ),
                Series::new(
                    "Principal Paid",
                    timeline.iter().map(TimelinePoint::principal).collect(),
                ),
            ],
        )),
        DecisionType::Investment => Some(ChartSpec::line(
            labels,
            vec![Series::new(
                "Portfolio Value",
                timeline.iter().map(TimelinePoint::value).collect(),
            )
            .filled()],
        )),
        DecisionType::Expense => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::risk::{DecisionVerdict, FinancialSnapshot};

    fn response(decision_type: DecisionType, timeline: Vec<TimelinePoint>) -> DecisionResponse {
        DecisionResponse {
            impact_score: 58.0,
            verdict: DecisionVerdict::ProceedWithCaution,
            monthly_impact: -4500.0,
            before: FinancialSnapshot {
                monthly_surplus: 12000.0,
                savings: 80000.0,
                debt: 30000.0,
            },
            after: FinancialSnapshot {
                monthly_surplus: 7500.0,
                savings: 60000.0,
                debt: 130000.0,
            },
            timeline,
            risk_indicators: Vec::new(),
            decision_type,
        }
    }

    fn loan_points() -> Vec<TimelinePoint> {
        vec![
            TimelinePoint::Loan {
                month: 6,
                balance: 90000.0,
                principal: 10000.0,
            },
            TimelinePoint::Loan {
                month: 12,
                balance: 78000.0,
                principal: 22000.0,
            },
        ]
    }

    fn panel() -> DecisionPanel {
        DecisionPanel::new(
            Arc::new(AnalysisGateway::new("http://127.0.0.1:0")),
            Arc::new(VisualizationRegistry::new()),
        )
    }

    #[test]
    fn test_loan_timeline_has_balance_and_principal_series() {
        let spec = timeline_chart(DecisionType::Loan, &loan_points()).unwrap();
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].label, "Remaining Balance");
        assert_eq!(spec.series[0].data, vec![90000.0, 78000.0]);
        assert_eq!(spec.series[1].label, "Principal Paid");
        assert_eq!(spec.series[1].data, vec![10000.0, 22000.0]);
        assert_eq!(spec.labels, vec!["M6", "M12"]);
    }

    #[test]
    fn test_investment_timeline_is_single_filled_series() {
        let points = vec![TimelinePoint::Investment {
            month: 12,
            value: 125000.0,
        }];
        let spec = timeline_chart(DecisionType::Investment, &points).unwrap();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].label, "Portfolio Value");
        assert!(spec.series[0].filled);
    }

    #[test]
    fn test_expense_renders_no_timeline_even_with_points() {
        let points = vec![TimelinePoint::Investment {
            month: 1,
            value: 1000.0,
        }];
        assert!(timeline_chart(DecisionType::Expense, &points).is_none());

        let panel = panel();
        panel.apply(&response(DecisionType::Expense, points));
        assert!(panel.registry.spec(MOUNT_TIMELINE).is_none());
        assert!(panel.registry.spec(MOUNT_BEFORE_AFTER).is_some());
    }

    #[test]
    fn test_empty_timeline_renders_no_chart() {
        assert!(timeline_chart(DecisionType::Loan, &[]).is_none());
    }

    #[test]
    fn test_apply_sets_signed_metrics_and_comparison() {
        let panel = panel();
        panel.apply(&response(DecisionType::Loan, loan_points()));

        let view = panel.view();
        assert_eq!(view.gauge.value_text, "58");
        assert_eq!(view.verdict, "Proceed with Caution");
        assert_eq!(view.monthly_impact, "Ksh -4,500");
        assert!(!view.monthly_impact_positive);
        assert_eq!(view.after_surplus, "Ksh 7,500");
        assert!(view.after_surplus_positive);

        let comparison = panel.registry.spec(MOUNT_BEFORE_AFTER).unwrap();
        assert_eq!(comparison.series[0].data, vec![12000.0, 80000.0, 30000.0]);
        assert_eq!(comparison.series[1].data, vec![7500.0, 60000.0, 130000.0]);
    }
}
