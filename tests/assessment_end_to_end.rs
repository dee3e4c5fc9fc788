//! End-to-end assessment of the sample camera purchase.
//!
//! Runs the full handler pipeline against the in-memory history and checks
//! every derived figure the report exposes.

use std::sync::Arc;

use purchase_compass::adapters::InMemoryHistoryRepository;
use purchase_compass::application::{AssessDecisionCommand, AssessDecisionHandler};
use purchase_compass::domain::analysis::{
    BiasSeverity, BudgetImpactBand, Criterion, EvVerdict, RecommendationTier, RiskQuadrant,
};
use purchase_compass::domain::assessment::DecisionInput;
use purchase_compass::ports::DecisionHistoryRepository;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn sample_camera_is_a_no() {
    let repo = Arc::new(InMemoryHistoryRepository::new());
    let handler = AssessDecisionHandler::new(repo.clone());

    let result = handler
        .handle(AssessDecisionCommand {
            input: DecisionInput::sample(),
            ..Default::default()
        })
        .await
        .unwrap();
    let report = &result.report;

    // 45000 + 500 x 12 + 3000
    assert!(approx(report.metrics.year1_cost, 54_000.0));
    assert!(approx(report.metrics.year3_cost, 72_000.0));
    assert!(approx(report.metrics.cost_per_use.unwrap(), 4_500.0));
    assert!(approx(report.metrics.net_loss_if_failure, 25_000.0));

    // 0.30 x 100000 - 0.70 x 45000
    assert!(approx(report.expected_value.expected_value, -1_500.0));
    assert_eq!(report.expected_value.verdict, EvVerdict::Negative);

    let b = &report.breakdown;
    assert!(!b.criterion(Criterion::Filter).passed);
    assert!(!b.criterion(Criterion::CostPerUse).passed);
    assert!(!b.criterion(Criterion::ExpectedValue).passed);
    assert!(!b.criterion(Criterion::Regret).passed);
    assert!(b.criterion(Criterion::Biases).passed);
    assert_eq!(b.criterion(Criterion::Biases).points, 15);
    assert!(!b.criterion(Criterion::OpportunityCost).passed);
    assert_eq!(b.bias_assessment.severity, BiasSeverity::Low);

    assert_eq!(report.recommendation.score.value(), 15);
    assert!(report.recommendation.score.value() <= 35);
    assert_eq!(report.recommendation.tier, RecommendationTier::No);
    assert_eq!(report.guidance, "Skip this purchase");

    let d = &report.diagnostics;
    let impact = d.budget_impact.unwrap();
    assert!(approx(impact.percent, 27.0));
    assert_eq!(impact.band, BudgetImpactBand::Moderate);
    assert_eq!(d.usage.realistic_uses, 4);
    assert!(approx(d.reversibility_percent, 25.0));
    // 27% is under the 30% cut-off but the negative EV makes it high impact
    assert_eq!(d.risk_quadrant, RiskQuadrant::Caution);

    assert_eq!(
        report.insights.next_actions[0],
        "Skip this purchase - the numbers don't support it"
    );

    let stored = repo.find_by_id(&result.decision_id).await.unwrap().unwrap();
    assert_eq!(stored.title(), "Buy GoPro Hero 12");
    assert_eq!(stored.recommendation(), RecommendationTier::No);
    assert_eq!(stored.breakdown(), b);
}

#[tokio::test]
async fn evaluate_does_not_record() {
    let repo = Arc::new(InMemoryHistoryRepository::new());
    let handler = AssessDecisionHandler::new(repo.clone());

    let report = handler
        .evaluate(&AssessDecisionCommand {
            input: DecisionInput::sample(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(report.title, "Buy GoPro Hero 12");
    assert_eq!(repo.count().await.unwrap(), 0);
}
