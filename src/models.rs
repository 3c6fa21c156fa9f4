use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single execution of a workflow, as handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub conclusion: String,
    pub actor: String,
    pub run_attempt: u32,
    pub html_url: String,
    pub jobs_url: String,
    pub logs_url: String,
    pub run_started_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    /// Seconds between `run_started_at` and `updated_at`
    pub duration: f64,
}

/// Seconds elapsed from `started` to `updated`, or 0 when either is unknown.
#[allow(clippy::cast_precision_loss)]
pub fn run_duration_seconds(
    started: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
) -> f64 {
    match (started, updated) {
        (Some(started), Some(updated)) => {
            (updated - started).num_milliseconds() as f64 / 1000.0
        }
        _ => 0.0,
    }
}
