//! Risk screening for custom quotation conditions.
//!
//! [`risk`] holds the deterministic scoring engine; [`conditions`] wraps it in the review and
//! commit workflow the quotation form relies on.

pub mod conditions;
pub mod config;
pub mod error;
pub mod risk;
pub mod telemetry;

pub use risk::{analyze_risk, RiskAnalysis, RiskLevel};
