use std::path::Path;

use log::info;
use serde::Deserialize;

use super::github::{WorkflowRunDto, WorkflowRunsPage};
use crate::error::Result;
use crate::models::WorkflowRun;

/// Saved runs, either a full API response or just its `workflow_runs` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedRuns {
    Page(WorkflowRunsPage),
    Runs(Vec<WorkflowRunDto>),
}

pub fn load_workflow_runs(path: &Path) -> Result<Vec<WorkflowRun>> {
    let contents = std::fs::read_to_string(path)?;

    let runs = match serde_json::from_str::<SavedRuns>(&contents)? {
        SavedRuns::Page(page) => page.into_runs(),
        SavedRuns::Runs(runs) => runs.into_iter().map(WorkflowRun::from).collect(),
    };

    info!("Loaded {} runs from {}", runs.len(), path.display());
    Ok(runs)
}
