use std::ops::Index;

use serde::Serialize;

use crate::models::WorkflowRun;

/// Outcome category a run is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    Success,
    Failure,
    Others,
}

impl Conclusion {
    pub const ALL: [Conclusion; 3] = [Self::Success, Self::Failure, Self::Others];

    /// Maps a raw API conclusion onto its category. Anything that is not
    /// exactly "success" or "failure" (cancelled, skipped, empty...) is `Others`.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "failure" => Self::Failure,
            _ => Self::Others,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Others => "others",
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowRunsConclusion {
    pub runs_count: usize,
    pub workflow_runs: Vec<WorkflowRun>,
}

impl WorkflowRunsConclusion {
    pub(crate) fn push(&mut self, run: WorkflowRun) {
        self.runs_count += 1;
        self.workflow_runs.push(run);
    }
}

/// One bucket per [`Conclusion`]; always holds all three.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Conclusions {
    pub success: WorkflowRunsConclusion,
    pub failure: WorkflowRunsConclusion,
    pub others: WorkflowRunsConclusion,
}

impl Conclusions {
    pub fn get(&self, conclusion: Conclusion) -> &WorkflowRunsConclusion {
        match conclusion {
            Conclusion::Success => &self.success,
            Conclusion::Failure => &self.failure,
            Conclusion::Others => &self.others,
        }
    }

    pub(crate) fn get_mut(&mut self, conclusion: Conclusion) -> &mut WorkflowRunsConclusion {
        match conclusion {
            Conclusion::Success => &mut self.success,
            Conclusion::Failure => &mut self.failure,
            Conclusion::Others => &mut self.others,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Conclusion, &WorkflowRunsConclusion)> {
        Conclusion::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Index<Conclusion> for Conclusions {
    type Output = WorkflowRunsConclusion;

    fn index(&self, conclusion: Conclusion) -> &Self::Output {
        self.get(conclusion)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rate {
    pub success_rate: f64,
    pub failure_rate: f64,
    pub others_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExecutionDurationStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub std: f64,
    pub med: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowRunsStatsSummary {
    pub total_runs_count: usize,
    pub name: String,
    pub rate: Rate,
    pub execution_duration_stats: ExecutionDurationStats,
    pub conclusions: Conclusions,
}
