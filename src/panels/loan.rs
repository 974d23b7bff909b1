//! Loan eligibility panel

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, RequestSlot};
use crate::model::loan::{LoanRequest, LoanResponse};
use crate::panels::{num, PanelError};
use crate::render::chart::{ChartSpec, Series};
use crate::render::registry::VisualizationRegistry;
use crate::render::{build_item, currency, format, Gauge, RecItem, Recommendation};

/// Mount point for the score-factor bars.
pub const MOUNT_FACTORS: &str = "loan.factors";

/// Raw form field values as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    pub monthly_income: String,
    pub monthly_expenses: String,
    pub existing_debt: String,
    pub savings: String,
    pub employment_months: String,
    pub dependents: String,
    pub has_bank_account: bool,
    pub requested_amount: String,
}

impl LoanForm {
    fn to_request(&self) -> LoanRequest {
        LoanRequest {
            monthly_income: num(&self.monthly_income),
            monthly_expenses: num(&self.monthly_expenses),
            existing_debt: num(&self.existing_debt),
            savings: num(&self.savings),
            employment_months: num(&self.employment_months),
            dependents: num(&self.dependents),
            has_bank_account: self.has_bank_account,
            requested_amount: num(&self.requested_amount),
        }
    }
}

/// One eligible product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub name: String,
    pub description: String,
    pub rate: String,
    pub max_amount: String,
    pub emi: String,
    pub affordable: bool,
}

/// View state of the loan checker results.
#[derive(Debug, Clone, Default)]
pub struct LoanView {
    pub visible: bool,
    pub focused: bool,
    pub gauge: Gauge,
    pub score: String,
    pub verdict: String,
    pub risk_level: String,
    pub safe_emi: String,
    pub countries: Vec<String>,
    pub products: Vec<ProductCard>,
    pub tips: Vec<RecItem>,
}

pub struct LoanPanel {
    gateway: Arc<AnalysisGateway>,
    registry: Arc<VisualizationRegistry>,
    slot: RequestSlot,
    view: RwLock<LoanView>,
}

impl LoanPanel {
    pub fn new(gateway: Arc<AnalysisGateway>, registry: Arc<VisualizationRegistry>) -> Self {
        registry.register_mount(MOUNT_FACTORS);
        Self {
            gateway,
            registry,
            slot: RequestSlot::new(),
            view: RwLock::new(LoanView::default()),
        }
    }

    /// Submits the form and applies the eligibility result to the view.
    pub async fn submit(&self, form: &LoanForm) -> Result<(), PanelError> {
        let ticket = self.slot.issue();
        let response: LoanResponse = self
            .gateway
            .call(endpoints::LOAN_CHECK, &form.to_request())
            .await?;
        if !self.slot.is_current(&ticket) {
            debug!("loan response superseded, discarding");
            return Ok(());
        }
        self.apply(&response);
        Ok(())
    }

    fn apply(&self, response: &LoanResponse) {
        let labels: Vec<String> = response.factors.iter().map(|f| f.name.clone()).collect();
        let scores: Vec<f64> = response.factors.iter().map(|f| f.score).collect();
        let maxes: Vec<f64> = response.factors.iter().map(|f| f.max).collect();
        self.registry.render(
            MOUNT_FACTORS,
            ChartSpec::bar(
                labels,
                vec![Series::new("Score", scores), Series::new("Max", maxes)],
            ),
        );

        let mut view = self.view.write().unwrap();
        view.visible = true;
        view.focused = true;
        view.gauge.set(response.score, None);
        view.score = format::number(response.score);
        view.verdict = response.verdict.to_string();
        view.risk_level = response.risk_level.to_string().to_uppercase();
        view.safe_emi = currency(response.safe_emi);
        view.countries = response.eligible_countries.clone();
        view.products = response
            .eligible_products
            .iter()
            .map(|p| ProductCard {
                name: p.name.clone(),
                description: p.description.clone(),
                rate: format!("Rate: {}%", format::number(p.interest_rate)),
                max_amount: format!("Max: {}", currency(p.max_eligible_amount)),
                emi: format!("EMI: {}/mo", currency(p.monthly_emi)),
                affordable: p.affordable,
            })
            .collect();
        view.tips = response
            .improvement_tips
            .iter()
            .map(|tip| build_item(Recommendation::info(tip.clone())))
            .collect();
    }

    pub fn view(&self) -> LoanView {
        self.view.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::budget::RiskLevel;
    use crate::model::loan::{LoanFactor, LoanProduct, LoanVerdict};
    use crate::render::RecKind;

    fn response() -> LoanResponse {
        LoanResponse {
            score: 81.0,
            verdict: LoanVerdict::Good,
            risk_level: RiskLevel::Low,
            safe_emi: 12000.0,
            factors: vec![
                LoanFactor {
                    name: "Income Stability".to_string(),
                    score: 18.0,
                    max: 20.0,
                },
                LoanFactor {
                    name: "Debt Load".to_string(),
                    score: 12.0,
                    max: 20.0,
                },
            ],
            eligible_countries: vec!["Kenya".to_string()],
            eligible_products: vec![LoanProduct {
                name: "Personal Loan".to_string(),
                description: "Unsecured credit".to_string(),
                interest_rate: 14.5,
                max_eligible_amount: 300000.0,
                monthly_emi: 9500.0,
                affordable: true,
            }],
            improvement_tips: vec!["Keep utilization low".to_string()],
        }
    }

    fn panel() -> LoanPanel {
        LoanPanel::new(
            Arc::new(AnalysisGateway::new("http://127.0.0.1:0")),
            Arc::new(VisualizationRegistry::new()),
        )
    }

    #[test]
    fn test_form_coercion_and_checkbox() {
        let form = LoanForm {
            monthly_income: "45000".to_string(),
            dependents: "".to_string(),
            has_bank_account: true,
            ..Default::default()
        };
        let request = form.to_request();
        assert_eq!(request.monthly_income, 45000.0);
        assert_eq!(request.dependents, 0.0);
        assert!(request.has_bank_account);
    }

    #[test]
    fn test_apply_sets_metrics_and_factor_bars() {
        let panel = panel();
        panel.apply(&response());

        let view = panel.view();
        assert!(view.visible);
        assert_eq!(view.gauge.value_text, "81");
        assert_eq!(view.verdict, "Good");
        assert_eq!(view.risk_level, "LOW");
        assert_eq!(view.safe_emi, "Ksh 12,000");
        assert_eq!(view.countries, vec!["Kenya"]);

        let factors = panel.registry.spec(MOUNT_FACTORS).unwrap();
        assert_eq!(factors.labels, vec!["Income Stability", "Debt Load"]);
        assert_eq!(factors.series[0].data, vec![18.0, 12.0]);
        assert_eq!(factors.series[1].data, vec![20.0, 20.0]);
    }

    #[test]
    fn test_product_card_formatting() {
        let panel = panel();
        panel.apply(&response());
        let card = &panel.view().products[0];
        assert_eq!(card.rate, "Rate: 14.5%");
        assert_eq!(card.max_amount, "Max: Ksh 3,00,000");
        assert_eq!(card.emi, "EMI: Ksh 9,500/mo");
        assert!(card.affordable);
    }

    #[test]
    fn test_tips_render_as_info_items() {
        let panel = panel();
        panel.apply(&response());
        let tips = panel.view().tips;
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].kind, RecKind::Info);
        assert_eq!(tips[0].glyph, None);
    }
}
