use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{
    CommitOutcome, CommitRequest, ConditionId, CustomCondition, ReviewId, ReviewRecord, WorkType,
};
use super::gate::{DecisionGate, GateError};
use super::repository::{ConditionRepository, RepositoryError, ReviewRepository};
use crate::risk::analyze_risk;

static REVIEW_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static CONDITION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_review_id() -> ReviewId {
    let id = REVIEW_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReviewId(format!("review-{id:06}"))
}

fn next_condition_id() -> ConditionId {
    let id = CONDITION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ConditionId(format!("custom-{id:06}"))
}

/// Service composing the risk engine, the decision gate and the two repositories.
pub struct ConditionReviewService<R, C> {
    reviews: Arc<R>,
    conditions: Arc<C>,
    gate: DecisionGate,
}

impl<R, C> ConditionReviewService<R, C>
where
    R: ReviewRepository + 'static,
    C: ConditionRepository + 'static,
{
    pub fn new(reviews: Arc<R>, conditions: Arc<C>, gate: DecisionGate) -> Self {
        Self {
            reviews,
            conditions,
            gate,
        }
    }

    pub fn gate(&self) -> &DecisionGate {
        &self.gate
    }

    /// Analyze a free-text entry and store the result as a review.
    pub fn review(&self, text: &str) -> Result<ReviewRecord, ConditionServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConditionServiceError::EmptyText);
        }

        let analysis = analyze_risk(text);
        let record = ReviewRecord {
            review_id: next_review_id(),
            text: text.to_string(),
            analysis,
            reviewed_at: Utc::now(),
            consumed: false,
        };

        let stored = self.reviews.insert(record)?;
        info!(
            review_id = %stored.review_id.0,
            level = %stored.analysis.level,
            score = stored.analysis.score,
            "custom condition reviewed"
        );
        Ok(stored)
    }

    /// Gate a reviewed entry and append it to the work type's custom section.
    pub fn commit(&self, request: CommitRequest) -> Result<CommitOutcome, ConditionServiceError> {
        let CommitRequest {
            work_type,
            text,
            review_id,
            confirm_override,
        } = request;

        let text = text.trim();
        if text.is_empty() {
            return Err(ConditionServiceError::EmptyText);
        }

        let review = match review_id {
            Some(id) => self.reviews.fetch(&id)?,
            None => None,
        };
        let Some(review) = review.filter(|record| record.admits(text)) else {
            debug!(%work_type, "commit attempted without a matching review");
            return Err(GateError::AnalysisRequired.into());
        };

        let admission = self
            .gate
            .admit(Some(&review.analysis), confirm_override)
            .inspect_err(|err| {
                warn!(%work_type, error = %err, "custom condition refused by gate");
            })?;

        if self.reviews.consume(&review.review_id)?.is_none() {
            debug!(
                %work_type,
                review_id = %review.review_id.0,
                "review already used by another commit"
            );
            return Err(GateError::AnalysisRequired.into());
        }

        let condition = CustomCondition {
            id: next_condition_id(),
            work_type,
            text: text.to_string(),
            risk_level: review.analysis.level,
            risk_score: review.analysis.score,
            force_added: admission.force_added,
            added_at: Utc::now(),
        };

        let stored = self.conditions.append(condition)?;
        if stored.force_added {
            warn!(
                condition_id = %stored.id.0,
                level = %stored.risk_level,
                "custom condition force-added after override"
            );
        } else {
            info!(
                condition_id = %stored.id.0,
                level = %stored.risk_level,
                "custom condition added"
            );
        }

        Ok(CommitOutcome {
            condition: stored,
            advisory: admission.advisory,
        })
    }

    pub fn recent_reviews(&self, limit: usize) -> Result<Vec<ReviewRecord>, ConditionServiceError> {
        Ok(self.reviews.recent(limit)?)
    }

    pub fn conditions(
        &self,
        work_type: WorkType,
    ) -> Result<Vec<CustomCondition>, ConditionServiceError> {
        Ok(self.conditions.list(work_type)?)
    }
}

/// Error raised by the condition review service.
#[derive(Debug, thiserror::Error)]
pub enum ConditionServiceError {
    #[error("condition text must not be empty")]
    EmptyText,
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
