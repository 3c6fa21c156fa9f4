use futures::{stream, StreamExt, TryStreamExt};
use log::{info, warn};

use super::client::{GitHubClient, RunFilters};
use super::types::{RepoSlug, WorkflowRunsPage};
use crate::aggregator::aggregate;
use crate::auth::Token;
use crate::error::Result;
use crate::models::WorkflowRun;
use crate::summary::WorkflowRunsStatsSummary;

const CONCURRENCY: usize = 5;
const MAX_PER_PAGE: usize = 100;

pub struct GitHubProvider {
    client: GitHubClient,
    repo: RepoSlug,
    workflow: String,
}

impl GitHubProvider {
    pub fn new(
        api_url: &str,
        repo: RepoSlug,
        workflow: String,
        token: Option<Token>,
    ) -> Result<Self> {
        let client = GitHubClient::new(api_url, token)?;

        Ok(Self {
            client,
            repo,
            workflow,
        })
    }

    /// Fetches up to `limit` runs, newest first as the API returns them.
    pub async fn fetch_workflow_runs(
        &self,
        limit: usize,
        filters: &RunFilters,
    ) -> Result<Vec<WorkflowRun>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let per_page = limit.min(MAX_PER_PAGE);
        #[allow(clippy::cast_possible_truncation)]
        let per_page_param = per_page as u32;

        info!(
            "Fetching up to {limit} runs of {} in {}...",
            self.workflow, self.repo
        );

        let first_page = self
            .client
            .fetch_workflow_runs_page(&self.repo, &self.workflow, filters, 1, per_page_param)
            .await?;

        let available = first_page.total_count.min(limit);
        let total_pages = available.div_ceil(per_page).max(1);

        let mut runs = first_page.into_runs();
        info!(
            "Page 1/{total_pages}: fetched {} runs ({available} to collect)",
            runs.len()
        );

        if total_pages > 1 {
            #[allow(clippy::cast_possible_truncation)]
            let pages: Vec<Vec<WorkflowRun>> = stream::iter(2..=total_pages as u32)
                .map(|page| async move {
                    self.client
                        .fetch_workflow_runs_page(
                            &self.repo,
                            &self.workflow,
                            filters,
                            page,
                            per_page_param,
                        )
                        .await
                        .map(WorkflowRunsPage::into_runs)
                })
                .buffered(CONCURRENCY)
                .try_collect()
                .await?;

            runs.extend(pages.into_iter().flatten());
        }

        runs.truncate(limit);
        info!("Collected {} runs", runs.len());

        Ok(runs)
    }

    pub async fn collect_summary(
        &self,
        limit: usize,
        filters: &RunFilters,
    ) -> Result<WorkflowRunsStatsSummary> {
        let runs = self.fetch_workflow_runs(limit, filters).await?;

        if runs.is_empty() {
            warn!("No runs found for workflow {} in {}", self.workflow, self.repo);
        }

        Ok(aggregate(&runs))
    }
}
