use adoption_screening::error::AppError;
use adoption_screening::workflows::adoption::applications::{
    improvement_summary, AdoptionApplicationService, AnimalRecord, AnswerSet,
    ApplicationSubmission, EvaluationOutcome,
};
use adoption_screening::workflows::adoption::{BatchRow, BatchScorer};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Questionnaire answers as a JSON object keyed by question (e.g. '{"familyDecision": "agree"}'),
    /// or `@path` to read that object from a file
    #[arg(long)]
    pub(crate) answers: String,
    /// Animal age in months (preferred over --age-years)
    #[arg(long)]
    pub(crate) age_months: Option<u32>,
    /// Animal age in whole years
    #[arg(long)]
    pub(crate) age_years: Option<u32>,
    /// Animal birth date (YYYY-MM-DD), used when --age-months is absent
    #[arg(long, value_parser = parse_date)]
    pub(crate) birth_date: Option<NaiveDate>,
    /// Adopter contact e-mail, checked for provider typos
    #[arg(long, default_value = "adopter@example.com")]
    pub(crate) email: String,
    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with an `applicant` column, optional age columns, and one column per question
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Inline JSON, or `@path` pointing at a JSON file.
pub(crate) fn load_answers(raw: &str) -> Result<AnswerSet, AppError> {
    let raw = raw.trim();
    let answers = match raw.strip_prefix('@') {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path.trim())?)?,
        None => serde_json::from_str(raw)?,
    };
    Ok(answers)
}

pub(crate) fn evaluate_answers(
    args: EvaluateArgs,
    today: NaiveDate,
) -> Result<EvaluationOutcome, AppError> {
    let EvaluateArgs {
        answers,
        age_months,
        age_years,
        birth_date,
        email,
        ..
    } = args;

    let submission = ApplicationSubmission {
        adopter_email: email,
        animal: AnimalRecord {
            birth_date,
            age_months,
            age_years,
            ..AnimalRecord::default()
        },
        answers: load_answers(&answers)?,
    };

    let service = AdoptionApplicationService::new();
    Ok(service.evaluate(submission, today)?)
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let json = args.json;
    let outcome = evaluate_answers(args, Local::now().date_naive())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", render_outcome(&outcome));
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let rows = BatchScorer::from_path(&args.csv)?;
    println!("Scored {} application(s) from {}", rows.len(), args.csv.display());
    for row in &rows {
        println!("{}", batch_line(row));
    }
    Ok(())
}

fn render_outcome(outcome: &EvaluationOutcome) -> String {
    let category = if outcome.puppy { "puppy" } else { "adult" };
    let mut lines = vec![
        format!("Adoption questionnaire score ({category})"),
        format!(
            "- {}% | {}",
            outcome.score.percentage,
            outcome.verdict.summary()
        ),
        "Breakdown:".to_string(),
    ];

    for (question, detail) in &outcome.score.detail {
        lines.push(format!(
            "  - {}: {} ({}/100)",
            question.label(),
            detail.value,
            detail.contribution
        ));
    }

    if let Some(summary) = improvement_summary(&outcome.suggestions) {
        lines.push(format!("Suggestions:\n{summary}"));
    }

    if !outcome.rejection_reasons.is_empty() {
        lines.push("Reviewer notes:".to_string());
        for reason in &outcome.rejection_reasons {
            lines.push(format!("  - {reason}"));
        }
    }

    if let Some(suggestion) = &outcome.email_suggestion {
        lines.push(format!(
            "Did you mean {} instead of {}?",
            suggestion.suggested, suggestion.original
        ));
    }

    if !outcome.ignored_keys.is_empty() {
        lines.push(format!("Ignored fields: {}", outcome.ignored_keys.join(", ")));
    }

    lines.join("\n")
}

fn batch_line(row: &BatchRow) -> String {
    let status = if row.result.eligible {
        "eligible"
    } else {
        "not eligible"
    };
    let flagged: Vec<&str> = row
        .suggestions
        .iter()
        .map(|entry| entry.question.key())
        .collect();
    let answered = row
        .result
        .detail
        .values()
        .filter(|detail| detail.value.is_specified())
        .count();

    let mut line = format!(
        "{}: {}% {} ({answered}/{} answered)",
        row.applicant,
        row.result.percentage,
        status,
        row.result.detail.len()
    );
    if !flagged.is_empty() {
        line.push_str(&format!(" | flagged: {}", flagged.join(", ")));
    }
    line
}
