use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::WorkflowStatsError;
use crate::models::{run_duration_seconds, WorkflowRun};

/// `owner/name` pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = WorkflowStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(WorkflowStatsError::Config(format!(
                "Repository must be in 'owner/name' form, got '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One page of `GET /repos/{owner}/{repo}/actions/workflows/{id}/runs`.
#[derive(Debug, Deserialize)]
pub struct WorkflowRunsPage {
    pub total_count: usize,
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRunDto>,
}

impl WorkflowRunsPage {
    pub fn into_runs(self) -> Vec<WorkflowRun> {
        self.workflow_runs.into_iter().map(WorkflowRun::from).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ActorDto {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct WorkflowRunDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub actor: Option<ActorDto>,
    #[serde(default)]
    pub run_attempt: Option<u32>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub jobs_url: String,
    #[serde(default)]
    pub logs_url: String,
    #[serde(default)]
    pub run_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<WorkflowRunDto> for WorkflowRun {
    fn from(dto: WorkflowRunDto) -> Self {
        let duration = run_duration_seconds(dto.run_started_at, dto.updated_at);

        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            conclusion: dto.conclusion.unwrap_or_default(),
            actor: dto.actor.map(|a| a.login).unwrap_or_default(),
            run_attempt: dto.run_attempt.unwrap_or(1),
            html_url: dto.html_url,
            jobs_url: dto.jobs_url,
            logs_url: dto.logs_url,
            run_started_at: dto.run_started_at,
            updated_at: dto.updated_at,
            created_at: dto.created_at,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_slug_parses_owner_and_name() {
        let slug: RepoSlug = "octo-org/hello-world".parse().unwrap();
        assert_eq!(slug.owner, "octo-org");
        assert_eq!(slug.name, "hello-world");
        assert_eq!(slug.to_string(), "octo-org/hello-world");
    }

    #[test]
    fn test_repo_slug_rejects_malformed_values() {
        for raw in ["", "owner", "owner/", "/repo", "a/b/c"] {
            let err = raw.parse::<RepoSlug>().unwrap_err();
            assert!(
                matches!(err, WorkflowStatsError::Config(_)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_page_converts_runs_in_order() {
        let page: WorkflowRunsPage =
            serde_json::from_str(include_str!("../../../testdata/runs/success.json")).unwrap();

        assert_eq!(page.total_count, 2);
        let runs = page.into_runs();
        assert_eq!(runs.len(), 2);

        assert_eq!(runs[0].id, 10000);
        assert_eq!(runs[0].name, "CI");
        assert_eq!(runs[0].status, "completed");
        assert_eq!(runs[0].conclusion, "success");
        assert_eq!(runs[0].actor, "test-user");
        assert_eq!(runs[0].run_attempt, 1);
        assert_eq!(
            runs[0].html_url,
            "https://github.com/owner/repos/actions/runs/10000/attempts/1"
        );
        assert_eq!(
            runs[0].jobs_url,
            "https://api.github.com/repos/owner/repos/actions/runs/10000/jobs"
        );
        assert_eq!(
            runs[0].logs_url,
            "https://api.github.com/repos/owner/repos/actions/runs/10000/logs"
        );
        assert_eq!(runs[0].duration, 20.0);

        assert_eq!(runs[1].id, 10001);
        assert_eq!(runs[1].actor, "test-user2");
        assert_eq!(runs[1].duration, 40.0);
    }

    #[test]
    fn test_in_progress_run_has_empty_conclusion() {
        let json = r#"{
            "id": 42,
            "name": "CI",
            "status": "in_progress",
            "conclusion": null,
            "run_started_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:05Z"
        }"#;
        let run = WorkflowRun::from(serde_json::from_str::<WorkflowRunDto>(json).unwrap());

        assert_eq!(run.status, "in_progress");
        assert_eq!(run.conclusion, "");
        assert_eq!(run.actor, "");
        assert_eq!(run.run_attempt, 1);
        assert_eq!(run.duration, 5.0);
        assert!(run.created_at.is_none());
    }

    #[test]
    fn test_missing_start_time_yields_zero_duration() {
        let json = r#"{
            "id": 7,
            "conclusion": "success",
            "updated_at": "2024-01-01T00:00:20Z"
        }"#;
        let run = WorkflowRun::from(serde_json::from_str::<WorkflowRunDto>(json).unwrap());

        assert_eq!(run.duration, 0.0);
        assert_eq!(run.name, "");
    }

    #[test]
    fn test_page_without_runs_field() {
        let page: WorkflowRunsPage = serde_json::from_str(r#"{"total_count": 0}"#).unwrap();
        assert!(page.into_runs().is_empty());
    }
}
