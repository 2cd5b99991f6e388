use super::keywords::{NEUTRAL_CATEGORY, RULE_TIERS};
use super::patterns::matched_patterns;
use super::suggestions::suggestions_for;
use super::{RiskAnalysis, RiskLevel};

const MAX_REPORTED_SCORE: u32 = 100;

/// Score `text` against the keyword tiers and pattern rules.
///
/// Total over every input: text without any indicator yields a `safe` analysis with score 0.
/// Blank input is not special-cased; callers reject it before reviewing.
pub fn analyze_risk(text: &str) -> RiskAnalysis {
    let normalized = text.to_lowercase();
    let normalized = normalized.trim();

    let mut total_score: u32 = 0;
    let mut issues = Vec::new();
    let mut blocked_keywords = Vec::new();
    let mut category = NEUTRAL_CATEGORY;

    for tier in &RULE_TIERS {
        let matched = tier.matched_keywords(normalized);
        if matched.is_empty() {
            continue;
        }

        total_score += tier.weight * matched.len() as u32;
        issues.push(format!("{}: {}", tier.category, matched.join(", ")));

        if tier.is_blocking() {
            blocked_keywords.extend(matched.iter().map(|keyword| keyword.to_string()));
            category = tier.category;
        }
    }

    let mut level = RiskLevel::from_score(total_score);

    // Pattern hits raise the score and lift safe/low to medium, but the level is not
    // re-derived from the new score.
    for rule in matched_patterns(normalized) {
        total_score += rule.increment;
        issues.push(format!("위험 패턴: {}", rule.description));
        if level < RiskLevel::Medium {
            level = RiskLevel::Medium;
        }
    }

    let score = total_score.min(MAX_REPORTED_SCORE) as u8;

    RiskAnalysis {
        score,
        level,
        category: category.to_string(),
        issues,
        suggestions: suggestions_for(level)
            .iter()
            .map(|suggestion| suggestion.to_string())
            .collect(),
        blocked_keywords,
    }
}
