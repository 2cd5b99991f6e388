use super::RiskLevel;
use serde::Serialize;

/// Display metadata for a risk level (badge colors, icon, Korean label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskLevelInfo {
    pub level: RiskLevel,
    pub color: &'static str,
    pub bg_color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub fn risk_level_info(level: RiskLevel) -> RiskLevelInfo {
    let (color, icon, label) = match level {
        RiskLevel::Safe => ("green", "✅", "안전"),
        RiskLevel::Low => ("blue", "ℹ️", "주의"),
        RiskLevel::Medium => ("yellow", "⚠️", "경고"),
        RiskLevel::High => ("orange", "🚨", "위험"),
        RiskLevel::Critical => ("red", "🚫", "매우위험"),
    };

    let (bg_color, border_color, text_color) = match level {
        RiskLevel::Safe => ("bg-green-50", "border-green-200", "text-green-700"),
        RiskLevel::Low => ("bg-blue-50", "border-blue-200", "text-blue-700"),
        RiskLevel::Medium => ("bg-yellow-50", "border-yellow-200", "text-yellow-700"),
        RiskLevel::High => ("bg-orange-50", "border-orange-200", "text-orange-700"),
        RiskLevel::Critical => ("bg-red-50", "border-red-200", "text-red-700"),
    };

    RiskLevelInfo {
        level,
        color,
        bg_color,
        border_color,
        text_color,
        icon,
        label,
    }
}

pub fn risk_level_catalog() -> Vec<RiskLevelInfo> {
    RiskLevel::ALL.into_iter().map(risk_level_info).collect()
}
