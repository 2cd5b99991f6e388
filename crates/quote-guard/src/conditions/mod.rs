//! Custom-condition review workflow: analyze free text, gate it, and append it to the
//! quotation document's custom section.

pub mod batch;
pub mod domain;
mod gate;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{BatchReview, BatchReviewEntry, BatchReviewError};
pub use domain::{
    CommitOutcome, CommitRequest, ConditionId, CustomCondition, ReviewId, ReviewRecord,
    UnknownWorkType, WorkType,
};
pub use gate::{
    Admission, DecisionGate, GateDecision, GateError, GateMode, MEDIUM_RISK_ADVISORY,
};
pub use repository::{ConditionRepository, RepositoryError, ReviewRepository};
pub use router::condition_router;
pub use service::{ConditionReviewService, ConditionServiceError};
