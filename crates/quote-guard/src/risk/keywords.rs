use super::RiskLevel;

/// Category reported when neither a critical nor a high tier matched.
pub const NEUTRAL_CATEGORY: &str = "일반사항";

/// Severity bucket with its keyword table and per-keyword weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTier {
    pub level: RiskLevel,
    pub weight: u32,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

impl RuleTier {
    /// Distinct keywords contained in `normalized`, in table order.
    ///
    /// `normalized` is expected to be lowercased already; keywords are lowercased here so the
    /// comparison stays case-insensitive on both sides.
    pub fn matched_keywords(&self, normalized: &str) -> Vec<&'static str> {
        self.keywords
            .iter()
            .copied()
            .filter(|keyword| normalized.contains(keyword.to_lowercase().as_str()))
            .collect()
    }

    /// Matches from blocking tiers are surfaced as blocked keywords and set the category.
    pub fn is_blocking(&self) -> bool {
        self.level.is_blocking()
    }
}

/// Evaluation order matters: later blocking tiers overwrite the reported category.
pub const RULE_TIERS: [RuleTier; 4] = [
    RuleTier {
        level: RiskLevel::Critical,
        weight: 25,
        category: "부당특약",
        keywords: &[
            "신호수",
            "비용으로 재시공",
            "일체 책임",
            "전액 부담",
            "손해배상",
            "위약금",
            "지체상금",
        ],
    },
    RuleTier {
        level: RiskLevel::High,
        weight: 20,
        category: "책임전가",
        keywords: &[
            "귀책",
            "원사업자 비용",
            "수급인 책임",
            "무상",
            "책임으로 한다",
            "배상",
            "과태료",
        ],
    },
    RuleTier {
        level: RiskLevel::Medium,
        weight: 15,
        category: "비용부담",
        keywords: &[
            "별도 비용",
            "추가 부담",
            "재작업",
            "재시공",
            "본인 부담",
            "자비",
        ],
    },
    RuleTier {
        level: RiskLevel::Low,
        weight: 5,
        category: "주의사항",
        keywords: &["협의", "별도", "추가", "변경", "조정", "검토", "확인"],
    },
];
