use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::applications::{
    collect_suggestion_entries, score_application, AnimalAgeSignal, AnswerSet, Question,
    ScoreResult, SuggestionEntry,
};

const APPLICANT_COLUMN: &str = "applicant";
const AGE_MONTHS_COLUMN: &str = "age_months";
const AGE_YEARS_COLUMN: &str = "age_years";

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read applications export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applications CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("applications CSV is missing the '{0}' column")]
    MissingColumn(&'static str),
    #[error("line {line}: '{value}' is not a whole number of {unit}")]
    InvalidAge {
        line: u64,
        unit: &'static str,
        value: String,
    },
}

/// Scored row of an applications export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub applicant: String,
    pub age: AnimalAgeSignal,
    pub result: ScoreResult,
    pub suggestions: Vec<SuggestionEntry>,
}

/// Scores every row of a CSV export of questionnaire answers.
///
/// Columns are matched by header: `applicant` is required, `age_months` and
/// `age_years` are optional, and any question key (e.g. `familyDecision`) is read
/// as an answer. Other columns are ignored and empty cells count as unanswered.
pub struct BatchScorer;

impl BatchScorer {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRow>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BatchRow>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let position = |name: &str| headers.iter().position(|header| header == name);
        let applicant_idx =
            position(APPLICANT_COLUMN).ok_or(BatchImportError::MissingColumn(APPLICANT_COLUMN))?;
        let months_idx = position(AGE_MONTHS_COLUMN);
        let years_idx = position(AGE_YEARS_COLUMN);
        let question_columns: Vec<(Question, usize)> = Question::ALL
            .iter()
            .filter_map(|question| position(question.key()).map(|idx| (*question, idx)))
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let cell = |idx: usize| record.get(idx).filter(|value| !value.is_empty());

            let age = AnimalAgeSignal {
                age_months: parse_age(months_idx.and_then(cell), line, "months")?,
                age_years: parse_age(years_idx.and_then(cell), line, "years")?,
            };

            let answers: AnswerSet = question_columns
                .iter()
                .filter_map(|(question, idx)| cell(*idx).map(|value| (*question, value)))
                .collect();

            rows.push(BatchRow {
                applicant: cell(applicant_idx).unwrap_or_default().to_string(),
                age,
                result: score_application(&answers, age),
                suggestions: collect_suggestion_entries(&answers),
            });
        }

        Ok(rows)
    }
}

fn parse_age(
    raw: Option<&str>,
    line: u64,
    unit: &'static str,
) -> Result<Option<u32>, BatchImportError> {
    raw.map(|value| {
        value.parse::<u32>().map_err(|_| BatchImportError::InvalidAge {
            line,
            unit,
            value: value.to_string(),
        })
    })
    .transpose()
}
