use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::risk::{RiskAnalysis, RiskLevel};

/// Detailed work type a quotation sheet is assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    TileWork,
    FramingWork,
    FinishingWork,
    PaintingWork,
    InteriorWoodwork,
}

impl WorkType {
    pub const ALL: [WorkType; 5] = [
        WorkType::TileWork,
        WorkType::FramingWork,
        WorkType::FinishingWork,
        WorkType::PaintingWork,
        WorkType::InteriorWoodwork,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WorkType::TileWork => "tile_work",
            WorkType::FramingWork => "framing_work",
            WorkType::FinishingWork => "finishing_work",
            WorkType::PaintingWork => "painting_work",
            WorkType::InteriorWoodwork => "interior_woodwork",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkType::TileWork => "타일 공사",
            WorkType::FramingWork => "골조 공사",
            WorkType::FinishingWork => "미장 공사",
            WorkType::PaintingWork => "도장 공사",
            WorkType::InteriorWoodwork => "내장 목공사",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown work type '{0}'")]
pub struct UnknownWorkType(pub String);

impl FromStr for WorkType {
    type Err = UnknownWorkType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        WorkType::ALL
            .into_iter()
            .find(|work_type| work_type.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownWorkType(value.to_string()))
    }
}

/// Identifier of a stored review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub String);

/// Identifier of a committed custom condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionId(pub String);

/// One "review" action: the analyzed entry and its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub review_id: ReviewId,
    /// Trimmed text exactly as analyzed; a commit must present the same entry.
    pub text: String,
    pub analysis: RiskAnalysis,
    pub reviewed_at: DateTime<Utc>,
    /// Set once a commit has used this review; each review admits a single entry.
    #[serde(default)]
    pub consumed: bool,
}

impl ReviewRecord {
    pub fn covers(&self, text: &str) -> bool {
        self.text == text.trim()
    }

    /// Unused review whose text matches the entry being committed.
    pub fn admits(&self, text: &str) -> bool {
        !self.consumed && self.covers(text)
    }
}

/// Operator-authored condition admitted into the quotation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCondition {
    pub id: ConditionId,
    pub work_type: WorkType,
    pub text: String,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    /// Set when a critical/high entry was admitted through an override confirmation.
    pub force_added: bool,
    pub added_at: DateTime<Utc>,
}

/// Request to append a reviewed entry to a work type's custom section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    pub work_type: WorkType,
    pub text: String,
    #[serde(default)]
    pub review_id: Option<ReviewId>,
    #[serde(default)]
    pub confirm_override: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub condition: CustomCondition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}
