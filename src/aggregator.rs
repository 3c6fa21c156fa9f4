use log::debug;

use crate::models::WorkflowRun;
use crate::summary::{
    Conclusion, Conclusions, ExecutionDurationStats, Rate, WorkflowRunsStatsSummary,
};

/// Buckets `runs` by conclusion and summarizes rates and successful-run durations.
pub fn aggregate(runs: &[WorkflowRun]) -> WorkflowRunsStatsSummary {
    let total_runs_count = runs.len();

    let conclusions = runs.iter().fold(Conclusions::default(), |mut acc, run| {
        acc.get_mut(Conclusion::classify(&run.conclusion))
            .push(run.clone());
        acc
    });

    for (conclusion, bucket) in conclusions.iter() {
        debug!("{conclusion}: {} of {total_runs_count} runs", bucket.runs_count);
    }

    let durations: Vec<f64> = conclusions
        .success
        .workflow_runs
        .iter()
        .map(|r| r.duration)
        .collect();

    WorkflowRunsStatsSummary {
        total_runs_count,
        name: runs.first().map(|r| r.name.clone()).unwrap_or_default(),
        rate: calculate_rate(&conclusions, total_runs_count),
        execution_duration_stats: ExecutionDurationStats::from_durations(&durations),
        conclusions,
    }
}

fn calculate_rate(conclusions: &Conclusions, total: usize) -> Rate {
    Rate {
        success_rate: ratio(conclusions.success.runs_count, total),
        failure_rate: ratio(conclusions.failure.runs_count, total),
        others_rate: ratio(conclusions.others.runs_count, total),
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let rate = count as f64 / total as f64;
    rate
}
