mod client;
mod provider;
mod types;

pub use client::RunFilters;
pub use provider::GitHubProvider;
pub use types::{RepoSlug, WorkflowRunDto, WorkflowRunsPage};
