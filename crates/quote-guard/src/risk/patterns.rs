use regex::Regex;
use std::sync::LazyLock;

/// Points added for every pattern rule that matches.
pub const PATTERN_INCREMENT: u32 = 15;

/// Phrase-level heuristic evaluated independently of the keyword tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub source: &'static str,
    pub increment: u32,
    pub description: &'static str,
}

/// Wildcards stop at line terminators (`\n`, `\r`, U+2028, U+2029).
pub const PATTERN_RULES: [PatternRule; 4] = [
    PatternRule {
        source: r"[0-9]+%?\s*(?:이상|초과)[^\n\r\x{2028}\x{2029}]*부담",
        increment: PATTERN_INCREMENT,
        description: "비율 기반 부담 조건",
    },
    PatternRule {
        source: r"(?:전부|모든|일체)[^\n\r\x{2028}\x{2029}]*책임",
        increment: PATTERN_INCREMENT,
        description: "포괄적 책임 조건",
    },
    PatternRule {
        source: r"무제한[^\n\r\x{2028}\x{2029}]*책임",
        increment: PATTERN_INCREMENT,
        description: "무제한 책임 조건",
    },
    PatternRule {
        source: r"(?:즉시|지체없이)[^\n\r\x{2028}\x{2029}]*배상",
        increment: PATTERN_INCREMENT,
        description: "즉시 배상 조건",
    },
];

static COMPILED_PATTERNS: LazyLock<Vec<(PatternRule, Regex)>> = LazyLock::new(|| {
    PATTERN_RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.source).expect("static pattern rule compiles");
            (*rule, regex)
        })
        .collect()
});

/// Pattern rules matching `normalized`, in declaration order.
pub(crate) fn matched_patterns(normalized: &str) -> impl Iterator<Item = &'static PatternRule> + '_ {
    COMPILED_PATTERNS
        .iter()
        .filter(move |(_, regex)| regex.is_match(normalized))
        .map(|(rule, _)| rule)
}
