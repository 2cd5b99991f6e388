use std::sync::Arc;

use super::common::*;
use crate::conditions::{
    CommitRequest, ConditionRepository, ConditionReviewService, ConditionServiceError,
    DecisionGate, GateError, GateMode, RepositoryError, ReviewId, ReviewRepository, WorkType,
    MEDIUM_RISK_ADVISORY,
};
use crate::risk::RiskLevel;

fn commit_request(text: &str, review_id: Option<ReviewId>) -> CommitRequest {
    CommitRequest {
        work_type: WorkType::TileWork,
        text: text.to_string(),
        review_id,
        confirm_override: false,
    }
}

#[test]
fn review_rejects_blank_text() {
    let (service, reviews, _) = build_service(GateMode::Block);

    assert!(matches!(
        service.review("   \n"),
        Err(ConditionServiceError::EmptyText)
    ));
    assert!(reviews.recent(10).expect("recent").is_empty());
}

#[test]
fn review_stores_trimmed_text_and_analysis() {
    let (service, reviews, _) = build_service(GateMode::Block);

    let record = service.review("  협의 후 추가 진행 ").expect("review stored");

    assert_eq!(record.text, LOW_TEXT);
    assert_eq!(record.analysis.level, RiskLevel::Low);
    assert!(record.review_id.0.starts_with("review-"));
    let stored = reviews
        .fetch(&record.review_id)
        .expect("fetch")
        .expect("present");
    assert_eq!(stored, record);
}

#[test]
fn commit_without_review_requires_analysis() {
    let (service, _, conditions) = build_service(GateMode::Block);

    match service.commit(commit_request(LOW_TEXT, None)) {
        Err(ConditionServiceError::Gate(GateError::AnalysisRequired)) => {}
        other => panic!("expected analysis precondition, got {other:?}"),
    }
    assert!(conditions.list(WorkType::TileWork).expect("list").is_empty());
}

#[test]
fn commit_after_editing_text_requires_new_analysis() {
    let (service, _, _) = build_service(GateMode::Block);
    let record = service.review(LOW_TEXT).expect("review stored");

    let edited = format!("{LOW_TEXT} 및 위약금");
    match service.commit(commit_request(&edited, Some(record.review_id))) {
        Err(ConditionServiceError::Gate(GateError::AnalysisRequired)) => {}
        other => panic!("expected stale review to be rejected, got {other:?}"),
    }
}

#[test]
fn commit_appends_low_risk_condition() {
    let (service, _, conditions) = build_service(GateMode::Block);
    let record = service.review(LOW_TEXT).expect("review stored");

    let outcome = service
        .commit(commit_request(&format!(" {LOW_TEXT} "), Some(record.review_id)))
        .expect("commit succeeds");

    assert!(outcome.advisory.is_none());
    assert_eq!(outcome.condition.text, LOW_TEXT);
    assert_eq!(outcome.condition.risk_level, RiskLevel::Low);
    assert_eq!(outcome.condition.risk_score, 10);
    assert!(!outcome.condition.force_added);
    assert!(outcome.condition.id.0.starts_with("custom-"));

    let listed = conditions.list(WorkType::TileWork).expect("list");
    assert_eq!(listed, vec![outcome.condition]);
    assert!(conditions.list(WorkType::PaintingWork).expect("list").is_empty());
}

#[test]
fn each_review_admits_a_single_commit() {
    let (service, reviews, conditions) = build_service(GateMode::Block);
    let record = service.review(LOW_TEXT).expect("review stored");

    service
        .commit(commit_request(LOW_TEXT, Some(record.review_id.clone())))
        .expect("first commit succeeds");

    for _ in 0..2 {
        match service.commit(commit_request(LOW_TEXT, Some(record.review_id.clone()))) {
            Err(ConditionServiceError::Gate(GateError::AnalysisRequired)) => {}
            other => panic!("expected repeat commit to need a new analysis, got {other:?}"),
        }
    }
    assert_eq!(conditions.list(WorkType::TileWork).expect("list").len(), 1);

    let stored = reviews
        .fetch(&record.review_id)
        .expect("fetch")
        .expect("review kept in history");
    assert!(stored.consumed);

    let fresh = service.review(LOW_TEXT).expect("review stored");
    service
        .commit(commit_request(LOW_TEXT, Some(fresh.review_id)))
        .expect("fresh review admits the entry again");
    assert_eq!(conditions.list(WorkType::TileWork).expect("list").len(), 2);
}

#[test]
fn refused_commit_leaves_review_usable() {
    let (service, _, _) = build_service(GateMode::ConfirmOverride);
    let record = service.review(HIGH_TEXT).expect("review stored");

    assert!(matches!(
        service.commit(commit_request(HIGH_TEXT, Some(record.review_id.clone()))),
        Err(ConditionServiceError::Gate(GateError::OverrideRequired { .. }))
    ));

    let mut request = commit_request(HIGH_TEXT, Some(record.review_id));
    request.confirm_override = true;
    let outcome = service.commit(request).expect("confirmed commit admits");
    assert!(outcome.condition.force_added);
}

#[test]
fn commit_surfaces_medium_advisory() {
    let (service, _, _) = build_service(GateMode::Block);
    let record = service.review(MEDIUM_TEXT).expect("review stored");

    let outcome = service
        .commit(commit_request(MEDIUM_TEXT, Some(record.review_id)))
        .expect("commit succeeds");

    assert_eq!(outcome.advisory.as_deref(), Some(MEDIUM_RISK_ADVISORY));
}

#[test]
fn block_mode_refuses_high_risk() {
    let (service, _, conditions) = build_service(GateMode::Block);
    let record = service.review(HIGH_TEXT).expect("review stored");

    let mut request = commit_request(HIGH_TEXT, Some(record.review_id));
    request.confirm_override = true;

    match service.commit(request) {
        Err(ConditionServiceError::Gate(GateError::Blocked { level })) => {
            assert_eq!(level, RiskLevel::High)
        }
        other => panic!("expected block, got {other:?}"),
    }
    assert!(conditions.list(WorkType::TileWork).expect("list").is_empty());
}

#[test]
fn confirm_mode_flags_forced_additions() {
    let (service, _, conditions) = build_service(GateMode::ConfirmOverride);
    let record = service.review(CRITICAL_TEXT).expect("review stored");

    let refused = service.commit(commit_request(CRITICAL_TEXT, Some(record.review_id.clone())));
    assert!(matches!(
        refused,
        Err(ConditionServiceError::Gate(GateError::OverrideRequired { .. }))
    ));

    let mut request = commit_request(CRITICAL_TEXT, Some(record.review_id));
    request.confirm_override = true;
    let outcome = service.commit(request).expect("override admits");

    assert!(outcome.condition.force_added);
    assert_eq!(outcome.condition.risk_level, RiskLevel::Critical);
    assert_eq!(conditions.list(WorkType::TileWork).expect("list").len(), 1);
}

#[test]
fn evicted_reviews_must_be_rerun() {
    let reviews = Arc::new(MemoryReviews::with_capacity(2));
    let service = ConditionReviewService::new(
        reviews.clone(),
        Arc::new(MemoryConditions::default()),
        DecisionGate::new(GateMode::Block),
    );

    let first = service.review(LOW_TEXT).expect("review stored");
    service.review(SAFE_TEXT).expect("review stored");
    service.review(MEDIUM_TEXT).expect("review stored");

    let history = service.recent_reviews(10).expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].text, SAFE_TEXT);
    assert_eq!(history[1].text, MEDIUM_TEXT);

    assert!(matches!(
        service.commit(commit_request(LOW_TEXT, Some(first.review_id))),
        Err(ConditionServiceError::Gate(GateError::AnalysisRequired))
    ));
}

#[test]
fn repository_failures_propagate() {
    let service = ConditionReviewService::new(
        Arc::new(OfflineReviews),
        Arc::new(MemoryConditions::default()),
        DecisionGate::default(),
    );
    assert!(matches!(
        service.review(LOW_TEXT),
        Err(ConditionServiceError::Repository(RepositoryError::Unavailable(_)))
    ));

    let reviews = Arc::new(MemoryReviews::default());
    let conditions = Arc::new(ReadOnlyConditions::default());
    let service =
        ConditionReviewService::new(reviews, conditions.clone(), DecisionGate::default());
    let record = service.review(LOW_TEXT).expect("review stored");
    assert!(matches!(
        service.commit(commit_request(LOW_TEXT, Some(record.review_id))),
        Err(ConditionServiceError::Repository(_))
    ));
    assert_eq!(conditions.attempts(WorkType::TileWork), 1);
}
