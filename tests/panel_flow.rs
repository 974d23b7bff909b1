//! Integration tests for the panel submit cycle against a stubbed analysis
//! service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use finboard::gateway::AnalysisGateway;
use finboard::panels::budget::{BudgetForm, BudgetPanel, MOUNT_DONUT, MOUNT_RULE};
use finboard::panels::PanelError;
use finboard::render::registry::VisualizationRegistry;

fn budget_body(health_score: f64) -> serde_json::Value {
    json!({
        "income": 50000,
        "total_expenses": 40000,
        "remaining": 10000,
        "health_score": health_score,
        "budget_data": {
            "needs": {"amount": 27500, "percentage": 55},
            "wants": {"amount": 12500, "percentage": 25},
            "savings": {"amount": 10000, "percentage": 20}
        },
        "expense_breakdown": {"housing": 15000, "groceries": 8000, "dining_out": 4000},
        "optimized_budget": {"needs": 25000, "wants": 15000, "savings": 10000},
        "risk_level": "medium",
        "recommendations": [
            {"type": "warning", "category": "Housing", "message": "Rent is high", "saving_potential": 2000}
        ]
    })
}

fn panel_for(server: &MockServer) -> (BudgetPanel, Arc<VisualizationRegistry>) {
    let gateway = Arc::new(AnalysisGateway::new(server.uri()));
    let registry = Arc::new(VisualizationRegistry::new());
    (BudgetPanel::new(gateway, registry.clone()), registry)
}

#[tokio::test]
async fn test_budget_end_to_end_renders_gauge_and_rule_chart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/budget/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(budget_body(72.0)))
        .mount(&server)
        .await;

    let (panel, registry) = panel_for(&server);
    let form = BudgetForm {
        income: "50000".to_string(),
        housing: "15000".to_string(),
        groceries: "8000".to_string(),
        dining_out: "4000".to_string(),
        ..Default::default()
    };
    panel.submit(&form).await.unwrap();

    let view = panel.view();
    assert!(view.visible);
    assert_eq!(view.gauge.value_text, "72");

    let rule = registry.spec(MOUNT_RULE).unwrap();
    assert_eq!(rule.series[0].data, vec![55.0, 25.0, 20.0]);
    assert_eq!(rule.series[1].data, vec![50.0, 30.0, 20.0]);

    let donut = registry.spec(MOUNT_DONUT).unwrap();
    assert!(donut.labels.contains(&"dining out".to_string()));

    let rec = &view.recommendations[0];
    assert_eq!(rec.category.as_deref(), Some("Housing"));
    assert_eq!(rec.saving.as_deref(), Some("Potential saving: Ksh 2,000"));
}

#[tokio::test]
async fn test_service_error_field_surfaces_notice_and_renders_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/budget/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Income is required"})),
        )
        .mount(&server)
        .await;

    let (panel, registry) = panel_for(&server);
    let result = panel.submit(&BudgetForm::default()).await;
    match result {
        Err(PanelError::Gateway(e)) => assert_eq!(e.to_string(), "Income is required"),
        other => panic!("expected gateway error, got {:?}", other.map(|_| ())),
    }
    assert!(!panel.view().visible);
    assert_eq!(registry.live_count(), 0);
}

#[tokio::test]
async fn test_non_json_body_surfaces_notice_and_renders_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/budget/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let (panel, _registry) = panel_for(&server);
    let result = panel.submit(&BudgetForm::default()).await;
    assert!(matches!(result, Err(PanelError::Gateway(_))));
    assert!(!panel.view().visible);
}

#[tokio::test]
async fn test_body_is_parsed_regardless_of_transport_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/budget/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_json(budget_body(40.0)))
        .mount(&server)
        .await;

    let (panel, _registry) = panel_for(&server);
    panel.submit(&BudgetForm::default()).await.unwrap();
    assert_eq!(panel.view().gauge.value_text, "40");
}

#[tokio::test]
async fn test_superseded_response_is_discarded() {
    let server = MockServer::start().await;
    // The earlier submission resolves last; its result must not win.
    Mock::given(method("POST"))
        .and(path("/api/budget/analyze"))
        .and(body_partial_json(json!({"income": 1000.0})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(budget_body(11.0))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/budget/analyze"))
        .and(body_partial_json(json!({"income": 2000.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(budget_body(90.0)))
        .mount(&server)
        .await;

    let (panel, _registry) = panel_for(&server);
    let slow = BudgetForm {
        income: "1000".to_string(),
        ..Default::default()
    };
    let fast = BudgetForm {
        income: "2000".to_string(),
        ..Default::default()
    };

    let (first, second) = tokio::join!(panel.submit(&slow), panel.submit(&fast));
    first.unwrap();
    second.unwrap();

    assert_eq!(panel.view().gauge.value_text, "90");
}
