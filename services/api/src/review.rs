use crate::infra::{parse_condition_text, parse_gate_mode};
use clap::Args;
use quote_guard::conditions::{BatchReview, BatchReviewEntry, DecisionGate, GateDecision, GateMode};
use quote_guard::error::AppError;
use quote_guard::risk::{
    analyze_risk, risk_level_catalog, risk_level_info, suggestions_for, RiskAnalysis, RiskLevel,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Condition text to analyze
    #[arg(long, value_parser = parse_condition_text)]
    pub(crate) text: String,
    /// Gate policy for critical/high results (block, confirm or confirm_override)
    #[arg(long, default_value = "block", value_parser = parse_gate_mode)]
    pub(crate) gate: GateMode,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV sheet with `id` and `text` columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the entries as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Gate policy for critical/high results (block, confirm or confirm_override)
    #[arg(long, default_value = "block", value_parser = parse_gate_mode)]
    pub(crate) gate: GateMode,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs { text, gate } = args;

    let analysis = analyze_risk(&text);
    let decision = DecisionGate::new(gate).decide(analysis.level);
    render_analysis(&text, &analysis, &decision);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, json, gate } = args;

    let entries = BatchReview::from_path(&csv, &DecisionGate::new(gate))?;
    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(payload) => println!("{}", payload),
            Err(err) => println!("Batch payload unavailable: {}", err),
        }
        return Ok(());
    }

    println!("Condition sheet review: {}", csv.display());
    render_batch(&entries);
    Ok(())
}

pub(crate) fn run_levels() -> Result<(), AppError> {
    println!("Risk levels");
    for info in risk_level_catalog() {
        println!("{} {} ({}) | color={}", info.icon, info.label, info.level, info.color);
        for suggestion in suggestions_for(info.level) {
            println!("  - {}", suggestion);
        }
    }
    Ok(())
}

fn render_analysis(text: &str, analysis: &RiskAnalysis, decision: &GateDecision) {
    let info = risk_level_info(analysis.level);
    println!("Condition: {}", text);
    println!(
        "{} {} ({}) | score {} | category {}",
        info.icon, info.label, analysis.level, analysis.score, analysis.category
    );

    if analysis.issues.is_empty() {
        println!("Issues: none");
    } else {
        println!("Issues:");
        for issue in &analysis.issues {
            println!("  - {}", issue);
        }
    }

    if analysis.has_blocked_keywords() {
        println!("Blocked keywords: {}", analysis.blocked_keywords.join(", "));
    }

    println!("Suggestions:");
    for suggestion in &analysis.suggestions {
        println!("  - {}", suggestion);
    }

    println!("Gate: {}", decision.summary());
}

fn render_batch(entries: &[BatchReviewEntry]) {
    if entries.is_empty() {
        println!("  No condition rows found");
        return;
    }

    for entry in entries {
        let info = risk_level_info(entry.analysis.level);
        println!(
            "  #{} [{}] {} {} {} | {}",
            entry.row,
            entry.id.as_deref().unwrap_or("-"),
            info.icon,
            entry.analysis.level,
            entry.analysis.score,
            entry.decision.summary()
        );
    }

    let totals = level_totals(entries);
    let breakdown: Vec<String> = totals
        .iter()
        .rev()
        .map(|(level, count)| format!("{level}={count}"))
        .collect();
    let refused = entries
        .iter()
        .filter(|entry| !entry.decision.is_admissible())
        .count();
    println!("Totals: {}", breakdown.join(" | "));
    println!(
        "- {} of {} rows need revision or an override before they can be added",
        refused,
        entries.len()
    );
}

fn level_totals(entries: &[BatchReviewEntry]) -> BTreeMap<RiskLevel, usize> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.analysis.level).or_insert(0) += 1;
    }
    totals
}
