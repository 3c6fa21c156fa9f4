use reqwest::Client;
use url::Url;

use super::types::{RepoSlug, WorkflowRunsPage};
use crate::auth::Token;
use crate::error::{Result, WorkflowStatsError};

const API_VERSION: &str = "2022-11-28";

/// Query filters accepted by the workflow runs endpoint.
#[derive(Debug, Clone, Default)]
pub struct RunFilters {
    pub branch: Option<String>,
    pub actor: Option<String>,
    pub event: Option<String>,
    pub status: Option<String>,
    /// GitHub date-range syntax, e.g. `>=2024-01-01` or `2024-01-01..2024-01-31`
    pub created: Option<String>,
    pub exclude_pull_requests: bool,
}

impl RunFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = [
            ("branch", &self.branch),
            ("actor", &self.actor),
            ("event", &self.event),
            ("status", &self.status),
            ("created", &self.created),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect();

        if self.exclude_pull_requests {
            pairs.push(("exclude_pull_requests", "true".to_string()));
        }

        pairs
    }
}

pub struct GitHubClient {
    client: Client,
    api_url: Url,
    token: Option<Token>,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<Token>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("workflow-stats/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                WorkflowStatsError::Config(format!("Failed to create HTTP client: {e}"))
            })?;

        let api_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| WorkflowStatsError::Config(format!("Invalid API URL: {e}")))?;

        if api_url.cannot_be_a_base() {
            return Err(WorkflowStatsError::Config(format!(
                "Invalid API URL: {base_url}"
            )));
        }

        Ok(Self {
            client,
            api_url,
            token,
        })
    }

    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.token {
            request.bearer_auth(token.as_str())
        } else {
            request
        }
    }

    /// `{api}/repos/{owner}/{name}/actions/workflows/{workflow}/runs`, with each
    /// segment percent-encoded.
    fn workflow_runs_url(&self, repo: &RepoSlug, workflow: &str) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                WorkflowStatsError::Config(format!("Invalid API URL: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend([
                "repos",
                repo.owner.as_str(),
                repo.name.as_str(),
                "actions",
                "workflows",
                workflow,
                "runs",
            ]);
        Ok(url)
    }

    /// Fetch one page of runs for a workflow, identified by file name or numeric ID.
    pub async fn fetch_workflow_runs_page(
        &self,
        repo: &RepoSlug,
        workflow: &str,
        filters: &RunFilters,
        page: u32,
        per_page: u32,
    ) -> Result<WorkflowRunsPage> {
        let url = self.workflow_runs_url(repo, workflow)?;

        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .query(&[("page", page), ("per_page", per_page)])
            .query(&filters.query_pairs());
        let request = self.auth_request(request);

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WorkflowStatsError::Api(format!(
                "Failed to fetch workflow runs for {repo} ({workflow}): {status} - {body}"
            )));
        }

        let runs_page = response.json::<WorkflowRunsPage>().await?;
        Ok(runs_page)
    }
}
