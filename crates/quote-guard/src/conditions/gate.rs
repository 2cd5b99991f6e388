use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::risk::{RiskAnalysis, RiskLevel};

pub const MEDIUM_RISK_ADVISORY: &str =
    "중간 위험도의 조건입니다. 담당자와 협의 후 추가하시기 바랍니다.";

/// How critical/high analyses are treated at commit time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateMode {
    /// Refuse critical/high entries outright.
    #[default]
    Block,
    /// Admit critical/high entries only after an explicit override, flagged as force-added.
    ConfirmOverride,
}

impl FromStr for GateMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(GateMode::Block),
            "confirm" | "confirm_override" => Ok(GateMode::ConfirmOverride),
            other => Err(other.to_string()),
        }
    }
}

/// Verdict for a reviewed entry before any override is considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Allow,
    Advise { advisory: String },
    RequireOverride { level: RiskLevel },
    Block { level: RiskLevel },
}

impl GateDecision {
    pub fn summary(&self) -> String {
        match self {
            GateDecision::Allow => "allowed".to_string(),
            GateDecision::Advise { advisory } => format!("allowed with advisory: {advisory}"),
            GateDecision::RequireOverride { level } => {
                format!("{level} risk requires override confirmation")
            }
            GateDecision::Block { level } => format!("{level} risk blocked"),
        }
    }

    pub fn is_admissible(&self) -> bool {
        matches!(self, GateDecision::Allow | GateDecision::Advise { .. })
    }
}

/// What the caller records alongside an admitted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub force_added: bool,
    pub advisory: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("run the risk analysis before adding this condition")]
    AnalysisRequired,
    #[error("{level} risk conditions cannot be added; revise the text or consult the contract owner")]
    Blocked { level: RiskLevel },
    #[error("{level} risk conditions require an explicit override confirmation")]
    OverrideRequired { level: RiskLevel },
}

/// Caller-side policy deciding whether an analyzed entry may enter the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionGate {
    mode: GateMode,
}

impl DecisionGate {
    pub fn new(mode: GateMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> GateMode {
        self.mode
    }

    pub fn evaluate(&self, analysis: Option<&RiskAnalysis>) -> Result<GateDecision, GateError> {
        let analysis = analysis.ok_or(GateError::AnalysisRequired)?;
        Ok(self.decide(analysis.level))
    }

    pub fn decide(&self, level: RiskLevel) -> GateDecision {
        match level {
            RiskLevel::Critical | RiskLevel::High => match self.mode {
                GateMode::Block => GateDecision::Block { level },
                GateMode::ConfirmOverride => GateDecision::RequireOverride { level },
            },
            RiskLevel::Medium => GateDecision::Advise {
                advisory: MEDIUM_RISK_ADVISORY.to_string(),
            },
            RiskLevel::Low | RiskLevel::Safe => GateDecision::Allow,
        }
    }

    pub fn admit(
        &self,
        analysis: Option<&RiskAnalysis>,
        confirm_override: bool,
    ) -> Result<Admission, GateError> {
        match self.evaluate(analysis)? {
            GateDecision::Allow => Ok(Admission {
                force_added: false,
                advisory: None,
            }),
            GateDecision::Advise { advisory } => Ok(Admission {
                force_added: false,
                advisory: Some(advisory),
            }),
            GateDecision::RequireOverride { .. } if confirm_override => Ok(Admission {
                force_added: true,
                advisory: None,
            }),
            GateDecision::RequireOverride { level } => Err(GateError::OverrideRequired { level }),
            GateDecision::Block { level } => Err(GateError::Blocked { level }),
        }
    }
}
