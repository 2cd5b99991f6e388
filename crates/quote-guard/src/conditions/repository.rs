use super::domain::{CustomCondition, ReviewId, ReviewRecord, WorkType};

/// Storage for review actions. Implementations may cap how many reviews they retain.
pub trait ReviewRepository: Send + Sync {
    fn insert(&self, record: ReviewRecord) -> Result<ReviewRecord, RepositoryError>;
    fn fetch(&self, id: &ReviewId) -> Result<Option<ReviewRecord>, RepositoryError>;
    /// Marks the review as used and returns it; `None` when absent or already used.
    fn consume(&self, id: &ReviewId) -> Result<Option<ReviewRecord>, RepositoryError>;
    /// Up to `limit` most recent reviews, oldest first.
    fn recent(&self, limit: usize) -> Result<Vec<ReviewRecord>, RepositoryError>;
}

/// Document-model storage for committed custom conditions.
pub trait ConditionRepository: Send + Sync {
    fn append(&self, condition: CustomCondition) -> Result<CustomCondition, RepositoryError>;
    fn list(&self, work_type: WorkType) -> Result<Vec<CustomCondition>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
