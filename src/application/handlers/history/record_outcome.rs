//! RecordOutcomeHandler - Command handler for logging what happened after a decision.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, DomainError};
use crate::domain::history::{Correctness, Outcome, OutcomeAction, OutcomeResult};
use crate::ports::DecisionHistoryRepository;

/// Command to attach an outcome to a recorded decision.
#[derive(Debug, Clone)]
pub struct RecordOutcomeCommand {
    pub decision_id: DecisionId,
    pub action: OutcomeAction,
    pub result: OutcomeResult,
    pub was_correct: Correctness,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcomeResult {
    /// False when the decision id was unknown; nothing changed.
    pub found: bool,
}

pub struct RecordOutcomeHandler {
    repository: Arc<dyn DecisionHistoryRepository>,
}

impl RecordOutcomeHandler {
    pub fn new(repository: Arc<dyn DecisionHistoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordOutcomeCommand) -> Result<RecordOutcomeResult, DomainError> {
        let outcome = Outcome::new(cmd.action, cmd.result, cmd.was_correct, cmd.notes);
        let found = self
            .repository
            .attach_outcome(&cmd.decision_id, outcome)
            .await?;

        if found {
            tracing::info!(
                decision_id = %cmd.decision_id,
                result = %cmd.result,
                correct = %cmd.was_correct,
                "Outcome recorded"
            );
        } else {
            tracing::warn!(decision_id = %cmd.decision_id, "Outcome for unknown decision ignored");
        }

        Ok(RecordOutcomeResult { found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHistoryRepository;
    use crate::application::handlers::{AssessDecisionCommand, AssessDecisionHandler};

    fn command(decision_id: DecisionId) -> RecordOutcomeCommand {
        RecordOutcomeCommand {
            decision_id,
            action: OutcomeAction::Skipped,
            result: OutcomeResult::Good,
            was_correct: Correctness::Yes,
            notes: "Didn't miss it".into(),
        }
    }

    #[tokio::test]
    async fn attaches_outcome_to_recorded_decision() {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        let assessed = AssessDecisionHandler::new(repo.clone())
            .handle(AssessDecisionCommand::default())
            .await
            .unwrap();

        let handler = RecordOutcomeHandler::new(repo.clone());
        let result = handler.handle(command(assessed.decision_id)).await.unwrap();

        assert!(result.found);
        let stored = repo.find_by_id(&assessed.decision_id).await.unwrap().unwrap();
        assert_eq!(stored.outcome().unwrap().action, OutcomeAction::Skipped);
    }

    #[tokio::test]
    async fn unknown_decision_reports_not_found() {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        let handler = RecordOutcomeHandler::new(repo.clone());

        let result = handler.handle(command(DecisionId::new())).await.unwrap();
        assert!(!result.found);
        assert_eq!(repo.statistics().await.unwrap().with_outcomes, 0);
    }
}
