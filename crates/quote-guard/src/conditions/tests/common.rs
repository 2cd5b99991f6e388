use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::conditions::domain::{CustomCondition, ReviewId, ReviewRecord, WorkType};
use crate::conditions::repository::{ConditionRepository, RepositoryError, ReviewRepository};
use crate::conditions::{condition_router, ConditionReviewService, DecisionGate, GateMode};

pub(super) const SAFE_TEXT: &str = "현장 출입 시 안전모를 착용한다";
pub(super) const LOW_TEXT: &str = "협의 후 추가 진행";
pub(super) const MEDIUM_TEXT: &str = "지체상금 조항";
pub(super) const HIGH_TEXT: &str = "본 공사의 하자는 수급인 책임으로 한다";
pub(super) const CRITICAL_TEXT: &str = "위약금과 지체상금은 전액 부담";

#[derive(Default, Clone)]
pub(super) struct MemoryReviews {
    records: Arc<Mutex<VecDeque<ReviewRecord>>>,
    capacity: Option<usize>,
}

impl MemoryReviews {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::default(),
            capacity: Some(capacity),
        }
    }
}

impl ReviewRepository for MemoryReviews {
    fn insert(&self, record: ReviewRecord) -> Result<ReviewRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("review mutex poisoned");
        if guard.iter().any(|existing| existing.review_id == record.review_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push_back(record.clone());
        if let Some(capacity) = self.capacity {
            while guard.len() > capacity {
                guard.pop_front();
            }
        }
        Ok(record)
    }

    fn fetch(&self, id: &ReviewId) -> Result<Option<ReviewRecord>, RepositoryError> {
        let guard = self.records.lock().expect("review mutex poisoned");
        Ok(guard.iter().find(|record| &record.review_id == id).cloned())
    }

    fn consume(&self, id: &ReviewId) -> Result<Option<ReviewRecord>, RepositoryError> {
        let mut guard = self.records.lock().expect("review mutex poisoned");
        Ok(guard
            .iter_mut()
            .find(|record| &record.review_id == id && !record.consumed)
            .map(|record| {
                record.consumed = true;
                record.clone()
            }))
    }

    fn recent(&self, limit: usize) -> Result<Vec<ReviewRecord>, RepositoryError> {
        let guard = self.records.lock().expect("review mutex poisoned");
        let skip = guard.len().saturating_sub(limit);
        Ok(guard.iter().skip(skip).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryConditions {
    sections: Arc<Mutex<BTreeMap<WorkType, Vec<CustomCondition>>>>,
}

impl ConditionRepository for MemoryConditions {
    fn append(&self, condition: CustomCondition) -> Result<CustomCondition, RepositoryError> {
        let mut guard = self.sections.lock().expect("condition mutex poisoned");
        guard
            .entry(condition.work_type)
            .or_default()
            .push(condition.clone());
        Ok(condition)
    }

    fn list(&self, work_type: WorkType) -> Result<Vec<CustomCondition>, RepositoryError> {
        let guard = self.sections.lock().expect("condition mutex poisoned");
        Ok(guard.get(&work_type).cloned().unwrap_or_default())
    }
}

/// Review store whose reads fail, for exercising 500 paths.
pub(super) struct OfflineReviews;

impl ReviewRepository for OfflineReviews {
    fn insert(&self, _record: ReviewRecord) -> Result<ReviewRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }

    fn fetch(&self, _id: &ReviewId) -> Result<Option<ReviewRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }

    fn consume(&self, _id: &ReviewId) -> Result<Option<ReviewRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ReviewRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("review store offline".to_string()))
    }
}

/// Condition store that refuses writes, to check a failed append surfaces as an error.
#[derive(Default)]
pub(super) struct ReadOnlyConditions {
    attempts: Mutex<HashMap<WorkType, usize>>,
}

impl ReadOnlyConditions {
    pub(super) fn attempts(&self, work_type: WorkType) -> usize {
        self.attempts
            .lock()
            .expect("attempt mutex poisoned")
            .get(&work_type)
            .copied()
            .unwrap_or(0)
    }
}

impl ConditionRepository for ReadOnlyConditions {
    fn append(&self, condition: CustomCondition) -> Result<CustomCondition, RepositoryError> {
        *self
            .attempts
            .lock()
            .expect("attempt mutex poisoned")
            .entry(condition.work_type)
            .or_default() += 1;
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn list(&self, _work_type: WorkType) -> Result<Vec<CustomCondition>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) type MemoryService = ConditionReviewService<MemoryReviews, MemoryConditions>;

pub(super) fn build_service(
    mode: GateMode,
) -> (MemoryService, Arc<MemoryReviews>, Arc<MemoryConditions>) {
    let reviews = Arc::new(MemoryReviews::default());
    let conditions = Arc::new(MemoryConditions::default());
    let service =
        ConditionReviewService::new(reviews.clone(), conditions.clone(), DecisionGate::new(mode));
    (service, reviews, conditions)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    condition_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
