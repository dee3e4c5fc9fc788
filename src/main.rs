//! Demo: assess the sample decision and print the report as JSON.

use std::sync::Arc;

use purchase_compass::adapters::{FileHistoryRepository, InMemoryHistoryRepository};
use purchase_compass::application::{
    AssessDecisionCommand, AssessDecisionHandler, ExportHistoryCommand, ExportHistoryHandler,
    GetHistoryStatisticsHandler,
};
use purchase_compass::config::AppConfig;
use purchase_compass::domain::assessment::{AssessmentMode, DecisionInput};
use purchase_compass::ports::DecisionHistoryRepository;
use purchase_compass::telemetry;
use serde_json::json;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    let limit = config.history.max_records.unwrap_or(0);
    let repository: Arc<dyn DecisionHistoryRepository> = match &config.history.storage_path {
        Some(path) => Arc::new(FileHistoryRepository::open(path).await?.with_limit(limit)),
        None => Arc::new(InMemoryHistoryRepository::with_limit(limit)),
    };

    let assess =
        AssessDecisionHandler::with_settings(repository.clone(), config.analysis.settings());
    let result = assess
        .handle(AssessDecisionCommand {
            mode: AssessmentMode::Quick,
            input: DecisionInput::sample(),
            ..Default::default()
        })
        .await?;
    info!(decision_id = %result.decision_id, "Sample decision recorded");

    let statistics =
        GetHistoryStatisticsHandler::new(repository.clone(), config.history.insight_policy())
            .handle()
            .await?;

    let exported = ExportHistoryHandler::new(repository, config.export.date_format.as_str())
        .handle(ExportHistoryCommand {
            format: config.export.default_format,
            destination: None,
        })
        .await?;

    let output = json!({
        "decision_id": result.decision_id,
        "report": result.report,
        "history": statistics,
        "export": {
            "filename": exported.filename,
            "content_type": exported.content_type,
            "records": exported.record_count,
            "content": String::from_utf8_lossy(&exported.content),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
