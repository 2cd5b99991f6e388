use metrics_exporter_prometheus::PrometheusHandle;
use quote_guard::conditions::{
    ConditionRepository, CustomCondition, GateMode, RepositoryError, ReviewId, ReviewRecord,
    ReviewRepository, WorkType,
};
use std::collections::{HashMap, VecDeque};
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Review history capped at `capacity` entries; the oldest review is evicted first.
#[derive(Clone)]
pub(crate) struct InMemoryReviewRepository {
    records: Arc<Mutex<VecDeque<ReviewRecord>>>,
    capacity: usize,
}

impl InMemoryReviewRepository {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            records: Arc::default(),
            capacity: capacity.max(1),
        }
    }
}

impl ReviewRepository for InMemoryReviewRepository {
    fn insert(&self, record: ReviewRecord) -> Result<ReviewRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("review mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.review_id == record.review_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push_back(record.clone());
        while guard.len() > self.capacity {
            guard.pop_front();
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
pub(crate) struct InMemoryConditionRepository {
    sections: Arc<Mutex<HashMap<WorkType, Vec<CustomCondition>>>>,
}

impl ConditionRepository for InMemoryConditionRepository {
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

pub(crate) fn parse_gate_mode(raw: &str) -> Result<GateMode, String> {
    GateMode::from_str(raw)
        .map_err(|value| format!("unknown gate mode '{value}' (expected block, confirm or confirm_override)"))
}

pub(crate) fn parse_condition_text(raw: &str) -> Result<String, String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err("condition text must not be empty".to_string());
    }
    Ok(text.to_string())
}
