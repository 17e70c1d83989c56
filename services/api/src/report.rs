use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use wellbeing::config::AppConfig;
use wellbeing::error::AppError;
use wellbeing::scoring::{
    compute_wellbeing, ActivityLogs, ComponentWeights, GoalTargets, MeditationWindow,
    ScoringContext, UserId, WeightMap, WeightScale, WellbeingResult,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON document with `logs`, `goals`, and optional `weights`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// User the report is labelled with
    #[arg(long, default_value = "local")]
    pub(crate) user: String,
    /// Reference date for the scoring windows (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Days of meditation logs to count; 0 counts every log (defaults to configuration)
    #[arg(long)]
    pub(crate) meditation_window_days: Option<u32>,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

/// On-disk scoring input.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScoreDocument {
    #[serde(default)]
    pub(crate) logs: ActivityLogs,
    #[serde(default)]
    pub(crate) goals: GoalTargets,
    #[serde(default)]
    pub(crate) weights: Option<WeightMap>,
    #[serde(default)]
    pub(crate) scale: WeightScale,
}

impl ScoreDocument {
    /// Validated weights from the document, or the defaults when none are given.
    pub(crate) fn component_weights(&self) -> Result<ComponentWeights, AppError> {
        match &self.weights {
            Some(weights) => Ok(ComponentWeights::try_from_scaled(weights, self.scale)?),
            None => Ok(ComponentWeights::default()),
        }
    }
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        user,
        today,
        meditation_window_days,
        json,
    } = args;

    let meditation_window = match meditation_window_days {
        Some(days) => MeditationWindow::from_days(days),
        None => AppConfig::load()?.scoring.meditation_window,
    };
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let reader = BufReader::new(File::open(&input)?);
    let document: ScoreDocument = serde_json::from_reader(reader)?;
    let result = score_document(
        &UserId(user),
        &document,
        ScoringContext {
            today,
            meditation_window,
        },
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_score_report(&result, today);
    }

    Ok(())
}

pub(crate) fn score_document(
    user_id: &UserId,
    document: &ScoreDocument,
    context: ScoringContext,
) -> Result<WellbeingResult, AppError> {
    let weights = document.component_weights()?;
    Ok(compute_wellbeing(
        user_id,
        &document.logs,
        &document.goals,
        &weights,
        &context,
    ))
}

fn render_score_report(result: &WellbeingResult, today: NaiveDate) {
    println!("Wellbeing report for {} ({})", result.user_id, today);
    println!("Overall score: {}/100", result.overall_score);

    println!("\nComponents");
    for (component, score) in result.component_scores.iter() {
        println!(
            "- {}: {:.1} ({})",
            component,
            score,
            result.category.get(component).label()
        );
    }

    println!("\nAdvice");
    for (component, advice) in result.advice.iter() {
        println!("- {}: {}", component, advice);
    }
}
