//! Offline review of many candidate conditions from a CSV sheet.
//!
//! The sheet needs a `text` column; an `id` column is carried through when present. Rows
//! whose text is blank are skipped, mirroring the blank-text rejection of the interactive flow.

use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

use super::gate::{DecisionGate, GateDecision};
use crate::risk::{analyze_risk, RiskAnalysis};

#[derive(Debug)]
pub enum BatchReviewError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchReviewError::Io(err) => write!(f, "failed to read condition sheet: {}", err),
            BatchReviewError::Csv(err) => write!(f, "invalid condition sheet: {}", err),
        }
    }
}

impl std::error::Error for BatchReviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchReviewError::Io(err) => Some(err),
            BatchReviewError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchReviewError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchReviewError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Analysis and gate verdict for one sheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReviewEntry {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub id: Option<String>,
    pub text: String,
    pub analysis: RiskAnalysis,
    pub decision: GateDecision,
}

pub struct BatchReview;

impl BatchReview {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        gate: &DecisionGate,
    ) -> Result<Vec<BatchReviewEntry>, BatchReviewError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, gate)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        gate: &DecisionGate,
    ) -> Result<Vec<BatchReviewEntry>, BatchReviewError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, record) in csv_reader.deserialize::<ConditionRow>().enumerate() {
            let row = record?;
            let Some(text) = row.text else {
                continue;
            };

            let analysis = analyze_risk(&text);
            let decision = gate.decide(analysis.level);
            entries.push(BatchReviewEntry {
                row: index + 1,
                id: row.id,
                text,
                analysis,
                decision,
            });
        }

        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct ConditionRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    text: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::GateMode;
    use crate::risk::RiskLevel;
    use std::io::Cursor;

    #[test]
    fn reviews_each_row_and_skips_blank_text() {
        let sheet = "id,text\nA-1,협의 후 추가 진행\nA-2,\nA-3,본 공사의 하자는 수급인 책임으로 한다\n";
        let gate = DecisionGate::new(GateMode::Block);

        let entries = BatchReview::from_reader(Cursor::new(sheet), &gate).expect("sheet parses");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].row, 1);
        assert_eq!(entries[0].id.as_deref(), Some("A-1"));
        assert_eq!(entries[0].analysis.level, RiskLevel::Low);
        assert_eq!(entries[0].decision, GateDecision::Allow);
        assert_eq!(entries[1].row, 3);
        assert_eq!(
            entries[1].decision,
            GateDecision::Block {
                level: RiskLevel::High
            }
        );
    }

    #[test]
    fn id_column_is_optional() {
        let sheet = "text\n지체상금 조항\n";
        let gate = DecisionGate::new(GateMode::ConfirmOverride);

        let entries = BatchReview::from_reader(Cursor::new(sheet), &gate).expect("sheet parses");

        assert_eq!(entries.len(), 1);
        assert!(entries[0].id.is_none());
        assert_eq!(entries[0].analysis.score, 25);
        assert!(matches!(entries[0].decision, GateDecision::Advise { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let gate = DecisionGate::default();
        let result = BatchReview::from_path("/nonexistent/conditions.csv", &gate);
        assert!(matches!(result, Err(BatchReviewError::Io(_))));
    }
}
