//! Dashboard tracker panel
//!
//! Combines the budget analysis view with a locally generated twelve-month
//! synthetic expense table. The table is demonstration data only; it is not
//! derived from the analysis result and the two coexist independently.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::{Datelike, Local};
use rand::Rng;
use tracing::debug;

use crate::gateway::{endpoints, AnalysisGateway, RequestSlot};
use crate::model::budget::{BudgetRequest, BudgetResponse};
use crate::panels::{num, num_or, PanelError};
use crate::render::chart::{ChartSpec, Series};
use crate::render::registry::VisualizationRegistry;
use crate::render::{build_item, category_label, currency, format, Gauge, RecItem};

/// Mount point for the expense category donut.
pub const MOUNT_CATEGORY_DONUT: &str = "tracker.category_donut";
/// Mount point for the monthly expense trend bars.
pub const MOUNT_MONTH_BAR: &str = "tracker.month_bar";
/// Mount point for the needs/wants/savings actual-vs-ideal bars.
pub const MOUNT_RULE: &str = "tracker.rule";

/// Income assumed when the tracker form's income field is left blank.
const DEFAULT_INCOME: f64 = 30000.0;

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Demo table categories.
pub const DEMO_CATEGORIES: [&str; 9] = [
    "Housing",
    "Utilities",
    "Groceries",
    "Transport",
    "Health",
    "Entertain",
    "Dining",
    "Shopping",
    "Other",
];

/// Base monthly amount per demo category, jittered per month.
const BASE_VALUES: [f64; 9] = [
    8000.0, 2000.0, 5000.0, 2000.0, 1000.0, 1500.0, 2000.0, 1500.0, 1000.0,
];

/// Raw form field values as entered by the user. The tracker form has no
/// subscriptions field.
#[derive(Debug, Clone, Default)]
pub struct TrackerForm {
    pub income: String,
    pub housing: String,
    pub utilities: String,
    pub groceries: String,
    pub transportation: String,
    pub healthcare: String,
    pub entertainment: String,
    pub dining_out: String,
    pub shopping: String,
    pub savings: String,
    pub debt_payment: String,
    pub insurance: String,
}

impl TrackerForm {
    fn to_request(&self) -> BudgetRequest {
        let mut expenses = BTreeMap::new();
        expenses.insert("housing".to_string(), num(&self.housing));
        expenses.insert("utilities".to_string(), num(&self.utilities));
        expenses.insert("groceries".to_string(), num(&self.groceries));
        expenses.insert("transportation".to_string(), num(&self.transportation));
        expenses.insert("healthcare".to_string(), num(&self.healthcare));
        expenses.insert("entertainment".to_string(), num(&self.entertainment));
        expenses.insert("dining_out".to_string(), num(&self.dining_out));
        expenses.insert("shopping".to_string(), num(&self.shopping));
        expenses.insert("savings".to_string(), num(&self.savings));
        expenses.insert("debt_payment".to_string(), num(&self.debt_payment));
        expenses.insert("insurance".to_string(), num(&self.insurance));
        BudgetRequest {
            income: num_or(&self.income, DEFAULT_INCOME),
            expenses,
        }
    }
}

/// One row of the demo expense table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerRow {
    pub month: String,
    pub values: Vec<u64>,
    pub total: u64,
}

/// The synthetic twelve-month expense grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoTable {
    pub rows: Vec<TrackerRow>,
    /// Per-category average across the twelve months.
    pub averages: Vec<u64>,
    pub average_total: u64,
}

/// View state of the tracker.
#[derive(Debug, Clone, Default)]
pub struct TrackerView {
    pub table: DemoTable,
    pub income: String,
    pub expenses: String,
    pub savings: String,
    pub health: String,
    pub save_rate: String,
    pub gauge: Gauge,
    pub recommendations: Vec<RecItem>,
}

pub struct TrackerPanel {
    gateway: Arc<AnalysisGateway>,
    registry: Arc<VisualizationRegistry>,
    slot: RequestSlot,
    view: RwLock<TrackerView>,
}

impl TrackerPanel {
    pub fn new(gateway: Arc<AnalysisGateway>, registry: Arc<VisualizationRegistry>) -> Self {
        registry.register_mount(MOUNT_CATEGORY_DONUT);
        registry.register_mount(MOUNT_MONTH_BAR);
        registry.register_mount(MOUNT_RULE);
        let panel = Self {
            gateway,
            registry,
            slot: RequestSlot::new(),
            view: RwLock::new(TrackerView::default()),
        };
        panel.view.write().unwrap().table = generate_demo_table(&mut rand::thread_rng());
        panel
    }

    /// Runs the dashboard analysis and applies the result.
    pub async fn analyze(&self, form: &TrackerForm) -> Result<(), PanelError> {
        let ticket = self.slot.issue();
        let response: BudgetResponse = self
            .gateway
            .call(endpoints::BUDGET_ANALYZE, &form.to_request())
            .await?;
        if !self.slot.is_current(&ticket) {
            debug!("tracker response superseded, discarding");
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
            .render(MOUNT_CATEGORY_DONUT, ChartSpec::doughnut(labels, values));

        let month_labels: Vec<String> = MONTH_ABBREVS.iter().map(|m| m.to_string()).collect();
        let totals = month_totals(response.total_expenses, &mut rand::thread_rng());
        self.registry.render(
            MOUNT_MONTH_BAR,
            ChartSpec::bar(month_labels, vec![Series::new("Expenses", totals)]),
        );

        let data = &response.budget_data;
        self.registry.render(
            MOUNT_RULE,
            ChartSpec::bar(
                vec!["Needs".into(), "Wants".into(), "Savings".into()],
                vec![
                    Series::new(
                        "Actual %",
                        vec![
                            data.needs.percentage,
                            data.wants.percentage,
                            data.savings.percentage,
                        ],
                    ),
                    Series::new("Ideal %", vec![50.0, 30.0, 20.0]),
                ],
            ),
        );

        let mut view = self.view.write().unwrap();
        view.income = currency(response.income);
        view.expenses = currency(response.total_expenses);
        view.savings = currency(response.remaining);
        view.health = format!("{}/100", format::number(response.health_score));
        view.save_rate = format!("{}%", format::number(data.savings.percentage));
        view.gauge.set(response.health_score, None);
        view.recommendations = response
            .recommendations
            .iter()
            .cloned()
            .map(build_item)
            .collect();
    }

    pub fn view(&self) -> TrackerView {
        self.view.read().unwrap().clone()
    }
}

/// Month labels for the demo table, e.g. `Jan 2026`, for the current year.
pub fn demo_months() -> Vec<String> {
    let year = Local::now().year();
    MONTH_ABBREVS
        .iter()
        .map(|m| format!("{} {}", m, year))
        .collect()
}

/// Generates the synthetic expense grid: base values jittered by a factor in
/// [0.85, 1.15), with per-row totals and per-column averages.
pub fn generate_demo_table<R: Rng>(rng: &mut R) -> DemoTable {
    let months = demo_months();
    let rows: Vec<TrackerRow> = months
        .into_iter()
        .map(|month| {
            let values: Vec<u64> = BASE_VALUES
                .iter()
                .map(|base| (base * (0.85 + rng.gen::<f64>() * 0.3)).round() as u64)
                .collect();
            let total = values.iter().sum();
            TrackerRow {
                month,
                values,
                total,
            }
        })
        .collect();

    let mut column_totals = vec![0u64; DEMO_CATEGORIES.len()];
    for row in &rows {
        for (column, value) in row.values.iter().enumerate() {
            column_totals[column] += value;
        }
    }
    let month_count = rows.len() as u64;
    let averages: Vec<u64> = column_totals
        .iter()
        .map(|total| ((*total as f64) / month_count as f64).round() as u64)
        .collect();
    let grand_total: u64 = column_totals.iter().sum();
    let average_total = ((grand_total as f64) / month_count as f64).round() as u64;

    DemoTable {
        rows,
        averages,
        average_total,
    }
}

/// Jitters the analyzed total into twelve per-month bars, factor [0.9, 1.1).
fn month_totals<R: Rng>(total_expenses: f64, rng: &mut R) -> Vec<f64> {
    (0..12)
        .map(|_| (total_expenses * (0.9 + rng.gen::<f64>() * 0.2)).round())
        .collect()
}
