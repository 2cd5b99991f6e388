//! Heuristic risk screening for free-text quotation conditions.
//!
//! The engine is a pure function of its input and the static rule tables: keyword tiers add
//! weighted points per distinct keyword, pattern rules add a fixed increment, and the
//! accumulated score maps onto a [`RiskLevel`]. No state is kept between calls.

mod keywords;
mod patterns;
mod presentation;
mod scorer;
mod suggestions;

pub use keywords::{RuleTier, NEUTRAL_CATEGORY, RULE_TIERS};
pub use patterns::{PatternRule, PATTERN_INCREMENT, PATTERN_RULES};
pub use presentation::{risk_level_catalog, risk_level_info, RiskLevelInfo};
pub use scorer::analyze_risk;
pub use suggestions::{suggestions_for, suggestions_for_label};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete risk classification, ordered from harmless to most dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Safe,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Threshold mapping from an accumulated keyword score.
    pub fn from_score(score: u32) -> Self {
        match score {
            50.. => RiskLevel::Critical,
            30..=49 => RiskLevel::High,
            15..=29 => RiskLevel::Medium,
            5..=14 => RiskLevel::Low,
            _ => RiskLevel::Safe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Critical and high analyses may not be committed without gate intervention.
    pub fn is_blocking(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized risk level '{0}'")]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "safe" => Ok(RiskLevel::Safe),
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(UnknownRiskLevel(value.to_string())),
        }
    }
}

/// Result of a single analysis request. Constructed fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Accumulated severity clamped to `0..=100`.
    pub score: u8,
    pub level: RiskLevel,
    /// Category of the last blocking tier matched, or [`NEUTRAL_CATEGORY`].
    pub category: String,
    /// One entry per matched tier or pattern, in evaluation order.
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    /// Literal keywords from critical/high tiers. Duplicates across tiers are kept.
    pub blocked_keywords: Vec<String>,
}

impl RiskAnalysis {
    pub fn has_blocked_keywords(&self) -> bool {
        !self.blocked_keywords.is_empty()
    }
}
