use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::aggregator::aggregate;
use crate::auth::Token;
use crate::providers::file::load_workflow_runs;
use crate::providers::github::{GitHubProvider, RepoSlug, RunFilters};
use crate::summary::WorkflowRunsStatsSummary;

#[derive(Parser)]
#[command(name = "workflow-stats")]
#[command(author, version, about = "GitHub Actions workflow run statistics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize runs of a workflow fetched from GitHub
    Github {
        /// GitHub API token (optional, required for private repositories)
        #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// GitHub API URL
        #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
        api_url: String,

        /// Repository in owner/name form
        #[arg(short = 'R', long)]
        repo: RepoSlug,

        /// Workflow file name (e.g. "ci.yml") or numeric workflow ID
        #[arg(short, long)]
        workflow: String,

        /// Maximum number of runs to analyze
        #[arg(short, long, default_value_t = 100)]
        limit: usize,

        /// Only runs on this branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Only runs triggered by this user
        #[arg(short, long)]
        actor: Option<String>,

        /// Only runs triggered by this event (e.g. "push")
        #[arg(short, long)]
        event: Option<String>,

        /// Only runs with this status or conclusion (e.g. "completed", "failure")
        #[arg(short, long)]
        status: Option<String>,

        /// Only runs created in this date range (e.g. ">=2024-01-01")
        #[arg(short, long)]
        created: Option<String>,

        /// Leave out runs triggered by pull requests
        #[arg(long, default_value_t = false)]
        exclude_pull_requests: bool,
    },

    /// Summarize runs saved from the GitHub workflow runs API
    File {
        /// JSON file holding an API response or an array of runs
        path: PathBuf,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let summary = match &self.command {
            Commands::Github {
                token,
                api_url,
                repo,
                workflow,
                limit,
                branch,
                actor,
                event,
                status,
                created,
                exclude_pull_requests,
            } => {
                info!("Collecting run statistics for {workflow} in {repo}");

                let token = Token::from_optional(token.as_deref());
                let provider = GitHubProvider::new(api_url, repo.clone(), workflow.clone(), token)?;
                let filters = RunFilters {
                    branch: branch.clone(),
                    actor: actor.clone(),
                    event: event.clone(),
                    status: status.clone(),
                    created: created.clone(),
                    exclude_pull_requests: *exclude_pull_requests,
                };

                provider.collect_summary(*limit, &filters).await?
            }
            Commands::File { path } => {
                info!("Collecting run statistics from {}", path.display());

                aggregate(&load_workflow_runs(path)?)
            }
        };

        self.write_summary(&summary)
    }

    fn write_summary(&self, summary: &WorkflowRunsStatsSummary) -> Result<()> {
        let json_output = if self.pretty {
            serde_json::to_string_pretty(summary)?
        } else {
            serde_json::to_string(summary)?
        };

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, json_output)?;
            info!("Summary written to: {}", output_path.display());
        } else {
            println!("{json_output}");
        }

        Ok(())
    }
}
