use crate::formatter::workflow_run_text;
use crate::github::{GitHubClient, RequestDescriptor};
use crate::types::RepositoryId;

use super::{ListShape, render_list};

/// Number of runs shown by `list_workflow_runs`
pub const MAX_WORKFLOW_RUNS: usize = 10;

/// Runs of the whole repository, or of one workflow when `workflow_id` is given
/// (numeric id or file name such as `ci.yml`).
pub fn list_workflow_runs_request(
    repository_id: &RepositoryId,
    workflow_id: Option<&str>,
) -> RequestDescriptor {
    let path = match workflow_id.filter(|id| !id.is_empty()) {
        Some(workflow_id) => repository_id.api_path_with(&format!(
            "actions/workflows/{}/runs",
            urlencoding::encode(workflow_id)
        )),
        None => repository_id.api_path_with("actions/runs"),
    };

    RequestDescriptor::get(path).with_query("per_page", MAX_WORKFLOW_RUNS)
}

pub async fn list_workflow_runs(
    github_client: &GitHubClient,
    repository_id: &RepositoryId,
    workflow_id: Option<&str>,
) -> String {
    let result = github_client
        .execute(list_workflow_runs_request(repository_id, workflow_id))
        .await;
    render_list(
        result,
        "list workflow runs",
        ListShape::Field("workflow_runs"),
        "No workflow runs found.",
        Some(MAX_WORKFLOW_RUNS),
        workflow_run_text,
    )
}
