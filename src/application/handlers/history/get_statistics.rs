//! GetHistoryStatisticsHandler - Query handler for accuracy statistics and insights.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::DomainError;
use crate::domain::history::{HistoryInsights, HistoryStatistics, InsightPolicy};
use crate::ports::DecisionHistoryRepository;

/// Statistics plus the insight derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStatisticsView {
    pub statistics: HistoryStatistics,
    pub insights: HistoryInsights,
    /// Display lines for `insights`.
    pub messages: Vec<String>,
}

pub struct GetHistoryStatisticsHandler {
    repository: Arc<dyn DecisionHistoryRepository>,
    policy: InsightPolicy,
}

impl GetHistoryStatisticsHandler {
    pub fn new(repository: Arc<dyn DecisionHistoryRepository>, policy: InsightPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn handle(&self) -> Result<HistoryStatisticsView, DomainError> {
        let statistics = self.repository.statistics().await?;
        let insights = HistoryInsights::derive(&statistics, &self.policy);
        tracing::debug!(
            total = statistics.total,
            with_outcomes = statistics.with_outcomes,
            "History statistics computed"
        );
        Ok(HistoryStatisticsView {
            statistics,
            messages: insights.messages(),
            insights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHistoryRepository;
    use crate::application::handlers::{
        AssessDecisionCommand, AssessDecisionHandler, RecordOutcomeCommand, RecordOutcomeHandler,
    };
    use crate::domain::history::{Correctness, OutcomeAction, OutcomeResult};

    #[tokio::test]
    async fn empty_history_has_empty_insights() {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        let view = GetHistoryStatisticsHandler::new(repo, InsightPolicy::default())
            .handle()
            .await
            .unwrap();

        assert_eq!(view.statistics.total, 0);
        assert_eq!(view.insights, HistoryInsights::Empty);
        assert!(view.messages.is_empty());
    }

    #[tokio::test]
    async fn lower_policy_threshold_surfaces_patterns_sooner() {
        let repo = Arc::new(InMemoryHistoryRepository::new());
        let assessed = AssessDecisionHandler::new(repo.clone())
            .handle(AssessDecisionCommand::default())
            .await
            .unwrap();
        RecordOutcomeHandler::new(repo.clone())
            .handle(RecordOutcomeCommand {
                decision_id: assessed.decision_id,
                action: OutcomeAction::Skipped,
                result: OutcomeResult::Good,
                was_correct: Correctness::Yes,
                notes: String::new(),
            })
            .await
            .unwrap();

        let default_view = GetHistoryStatisticsHandler::new(repo.clone(), InsightPolicy::default())
            .handle()
            .await
            .unwrap();
        assert!(matches!(
            default_view.insights,
            HistoryInsights::NeedMoreOutcomes { recorded: 1, required: 3 }
        ));

        let eager = InsightPolicy {
            min_outcomes: 1,
            ..Default::default()
        };
        let view = GetHistoryStatisticsHandler::new(repo, eager)
            .handle()
            .await
            .unwrap();
        assert!(matches!(
            view.insights,
            HistoryInsights::Patterns { meets_target: true, .. }
        ));
        assert_eq!(view.statistics.accuracy, Some(100.0));
    }
}
