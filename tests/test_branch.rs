//! Integration tests for branch listing, creation and deletion

use mockito::Matcher;
use serde_json::json;

use github_toolbox::tools::error::ToolError;
use github_toolbox::tools::functions::branch::{
    create_branch, create_branch_from_source, delete_branch, list_branches,
};
use github_toolbox::types::{Branch, Pagination, RepositoryId};
use test_util::{create_test_github_client, start_mock_github};

#[tokio::test]
async fn test_list_branches() {
    let mut server = start_mock_github().await;
    let mock = server
        .mock("GET", "/repos/o/r/branches")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("per_page".into(), "30".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(
            json!([
                {"name": "main", "commit": {"sha": "c5b97d5"}, "_links": {"html": "https://github.com/o/r/tree/main"}},
                {"name": "dev", "commit": {"sha": "d6cd1e2"}, "protected": false},
                {"name": "gh-pages"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = list_branches(&client, &RepositoryId::new("o", "r"), Pagination::default()).await;

    let entries: Vec<&str> = text.split("\n---\n").collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0],
        "Name: main\nSHA: c5b97d5\nURL: https://github.com/o/r/tree/main"
    );
    assert_eq!(entries[1], "Name: dev\nSHA: d6cd1e2\nURL: No URL");
    assert_eq!(entries[2], "Name: gh-pages\nSHA: Unknown\nURL: No URL");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_branches_empty() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/branches")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = list_branches(&client, &RepositoryId::new("o", "r"), Pagination::default()).await;

    assert_eq!(text, "No branches found.");
}

#[tokio::test]
async fn test_create_branch_resolves_source_then_creates_ref() {
    let mut server = start_mock_github().await;
    let resolve = server
        .mock("GET", "/repos/o/r/git/refs/heads/develop")
        .with_status(200)
        .with_body(
            json!({
                "ref": "refs/heads/develop",
                "object": {"sha": "aa218f56b14c9653891f9e74264a383fa43fefbd", "type": "commit"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let create = server
        .mock("POST", "/repos/o/r/git/refs")
        .match_body(Matcher::Json(json!({
            "ref": "refs/heads/feature/login",
            "sha": "aa218f56b14c9653891f9e74264a383fa43fefbd"
        })))
        .with_status(201)
        .with_body(r#"{"ref":"refs/heads/feature/login"}"#)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = create_branch(
        &client,
        &RepositoryId::new("o", "r"),
        &Branch::new("feature/login"),
        &Branch::new("develop"),
    )
    .await;

    assert_eq!(
        text,
        "Branch 'feature/login' created successfully from 'develop'."
    );
    resolve.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_branch_without_source_sha_never_creates_ref() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/git/refs/heads/main")
        .with_status(200)
        .with_body(r#"{"ref":"refs/heads/main","object":{"type":"commit"}}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/repos/o/r/git/refs")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let repository_id = RepositoryId::new("o", "r");

    let error = create_branch_from_source(
        &client,
        &repository_id,
        &Branch::new("topic"),
        &Branch::new("main"),
    )
    .await
    .unwrap_err();
    assert_eq!(error, ToolError::SourceBranchShaMissing);

    let text = create_branch(
        &client,
        &repository_id,
        &Branch::new("topic"),
        &Branch::new("main"),
    )
    .await;
    assert_eq!(text, "Unable to get source branch SHA.");

    create.assert_async().await;
}

#[tokio::test]
async fn test_create_branch_missing_source_branch() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/git/refs/heads/nope")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/repos/o/r/git/refs")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = create_branch(
        &client,
        &RepositoryId::new("o", "r"),
        &Branch::new("topic"),
        &Branch::new("nope"),
    )
    .await;

    assert_eq!(text, "Unable to get source branch: Not Found");
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_branch_already_exists() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/git/refs/heads/main")
        .with_status(200)
        .with_body(r#"{"object":{"sha":"abc"}}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/repos/o/r/git/refs")
        .with_status(422)
        .with_body(r#"{"message":"Reference already exists"}"#)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let error = create_branch_from_source(
        &client,
        &RepositoryId::new("o", "r"),
        &Branch::new("topic"),
        &Branch::new("main"),
    )
    .await
    .unwrap_err();

    assert_eq!(error.failure().and_then(|f| f.status()), Some(422));
    assert_eq!(
        error.to_string(),
        "Unable to create branch: Reference already exists"
    );
}

#[tokio::test]
async fn test_delete_branch() {
    let mut server = start_mock_github().await;
    let mock = server
        .mock("DELETE", "/repos/o/r/git/refs/heads/feature/old")
        .with_status(204)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = delete_branch(
        &client,
        &RepositoryId::new("o", "r"),
        &Branch::new("feature/old"),
    )
    .await;

    assert_eq!(text, "Branch 'feature/old' deleted successfully.");
    mock.assert_async().await;
}
