//! Export round-trips through real files.

use std::sync::Arc;

use tempfile::TempDir;

use purchase_compass::adapters::{FlatCsvCodec, InMemoryHistoryRepository, JsonHistoryCodec, YamlHistoryCodec};
use purchase_compass::application::{
    AssessDecisionCommand, AssessDecisionHandler, ExportHistoryCommand, ExportHistoryHandler,
    RecordOutcomeCommand, RecordOutcomeHandler,
};
use purchase_compass::domain::analysis::{Alternative, AlternativeKind};
use purchase_compass::domain::assessment::DecisionInput;
use purchase_compass::domain::history::{Correctness, OutcomeAction, OutcomeResult};
use purchase_compass::ports::{DecisionHistoryRepository, ExportFormat};

async fn populated() -> Arc<InMemoryHistoryRepository> {
    let repo = Arc::new(InMemoryHistoryRepository::new());
    let assess = AssessDecisionHandler::new(repo.clone());

    let camera = assess
        .handle(AssessDecisionCommand {
            input: DecisionInput::sample(),
            alternatives: vec![
                Alternative::new(AlternativeKind::NewProduct, "GoPro", 45_000.0, 500.0)
                    .with_effectiveness(8),
                Alternative::new(AlternativeKind::ExistingSolution, "Phone camera", 0.0, 0.0),
            ],
            ..Default::default()
        })
        .await
        .unwrap();

    RecordOutcomeHandler::new(repo.clone())
        .handle(RecordOutcomeCommand {
            decision_id: camera.decision_id,
            action: OutcomeAction::ChoseAlternative,
            result: OutcomeResult::Excellent,
            was_correct: Correctness::Yes,
            notes: "Phone was enough, saved 45K".into(),
        })
        .await
        .unwrap();

    assess
        .handle(AssessDecisionCommand {
            input: DecisionInput {
                decision_what: "Espresso machine, dual boiler".into(),
                purchase_cost: 1_200.0,
                yearly_uses: 300,
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();

    repo
}

async fn export_to(
    repo: Arc<InMemoryHistoryRepository>,
    format: ExportFormat,
    dir: &TempDir,
) -> Vec<u8> {
    let path = dir.path().join(format!("history.{}", format.extension()));
    ExportHistoryHandler::new(repo, "%Y-%m-%d")
        .handle(ExportHistoryCommand {
            format,
            destination: Some(path.clone()),
        })
        .await
        .unwrap();
    std::fs::read(path).unwrap()
}

#[tokio::test]
async fn csv_file_reads_back_as_flat_rows() {
    let dir = TempDir::new().unwrap();
    let repo = populated().await;
    let bytes = export_to(repo, ExportFormat::Csv, &dir).await;

    let rows = FlatCsvCodec::decode(bytes.as_slice()).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].title, "Espresso machine, dual boiler");
    assert!(rows[0].is_pending());
    assert_eq!(rows[0].correct, "N/A");

    assert_eq!(rows[1].title, "Buy GoPro Hero 12");
    assert_eq!(rows[1].score, 15);
    assert_eq!(rows[1].recommendation, "NO");
    assert_eq!(rows[1].outcome, "Excellent");
    assert_eq!(rows[1].correct, "yes");
    assert_eq!(rows[1].notes, "Phone was enough, saved 45K");
}

#[tokio::test]
async fn json_file_restores_full_history() {
    let dir = TempDir::new().unwrap();
    let repo = populated().await;
    let original = repo.snapshot().await.unwrap();
    let bytes = export_to(repo, ExportFormat::Json, &dir).await;

    let restored = JsonHistoryCodec::decode(&bytes).unwrap();
    assert_eq!(restored.snapshot(), original);

    let camera = restored.iter().nth(1).unwrap();
    assert_eq!(camera.alternatives().unwrap().len(), 2);
    assert_eq!(camera.breakdown().bias_assessment.count, 2);
}

#[tokio::test]
async fn yaml_file_restores_full_history() {
    let dir = TempDir::new().unwrap();
    let repo = populated().await;
    let original = repo.snapshot().await.unwrap();
    let bytes = export_to(repo, ExportFormat::Yaml, &dir).await;

    let restored = YamlHistoryCodec::decode(&bytes).unwrap();
    assert_eq!(restored.snapshot(), original);
    assert_eq!(restored.compute_statistics().with_outcomes, 1);
}
