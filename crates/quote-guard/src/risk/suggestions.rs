use super::RiskLevel;

const CRITICAL: &[&str] = &[
    "해당 조건은 부당특약에 해당할 가능성이 매우 높습니다.",
    "건축 외주팀 담당자와 즉시 협의하시기 바랍니다.",
    "계약서 검토를 통해 조건을 수정하거나 삭제를 요청하세요.",
    "법무팀 검토를 받아보시기 바랍니다.",
];

const HIGH: &[&str] = &[
    "책임 범위가 명확하지 않은 조건입니다.",
    "구체적인 책임 범위와 한계를 명시하도록 요청하세요.",
    "상호 협의를 통한 해결 방안을 제시하세요.",
    "관련 법규를 확인하여 적법성을 검토하세요.",
];

const MEDIUM: &[&str] = &[
    "추가 비용 발생 가능성이 있는 조건입니다.",
    "비용 부담 주체를 명확히 하도록 요청하세요.",
    "예상 비용 규모를 사전에 협의하세요.",
    "비용 상한선을 설정하는 것을 고려하세요.",
];

const LOW: &[&str] = &[
    "일반적인 협의 사항이 포함되어 있습니다.",
    "구체적인 협의 절차와 기준을 확인하세요.",
    "협의 결과에 대한 문서화를 요청하세요.",
];

const SAFE: &[&str] = &[
    "일반적인 공사 조건에 부합합니다.",
    "특별한 위험 요소가 발견되지 않았습니다.",
];

/// Advisory lines shown for a level. Depends on nothing but the level.
pub fn suggestions_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Critical => CRITICAL,
        RiskLevel::High => HIGH,
        RiskLevel::Medium => MEDIUM,
        RiskLevel::Low => LOW,
        RiskLevel::Safe => SAFE,
    }
}

/// Lookup by wire label; unrecognized labels get the `safe` list.
pub fn suggestions_for_label(label: &str) -> &'static [&'static str] {
    label
        .parse::<RiskLevel>()
        .map(suggestions_for)
        .unwrap_or(SAFE)
}
