//! Integration tests for reading and writing repository files
//!
//! Writes first look up the current blob sha so that existing files can be
//! overwritten; these tests pin down how the lookup outcome shapes the write.

use mockito::Matcher;
use serde_json::json;

use github_toolbox::tools::functions::file::{create_or_update_file, get_file_contents};
use github_toolbox::types::{Branch, RepositoryId};
use test_util::{create_test_github_client, start_mock_github};

#[tokio::test]
async fn test_update_existing_file_sends_sha() {
    let mut server = start_mock_github().await;
    let lookup = server
        .mock("GET", "/repos/o/r/contents/docs/notes.md")
        .match_query(Matcher::UrlEncoded("ref".into(), "dev".into()))
        .with_status(200)
        .with_body(
            json!({"type": "file", "path": "docs/notes.md", "sha": "abc123"}).to_string(),
        )
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/repos/o/r/contents/docs/notes.md")
        .match_body(Matcher::Json(json!({
            "message": "Update notes",
            "content": "aGVsbG8=",
            "branch": "dev",
            "sha": "abc123"
        })))
        .with_status(200)
        .with_body(r#"{"content":{"sha":"def456"}}"#)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = create_or_update_file(
        &client,
        &RepositoryId::new("o", "r"),
        "docs/notes.md",
        "hello",
        "Update notes",
        &Branch::new("dev"),
    )
    .await;

    assert_eq!(
        text,
        "File 'docs/notes.md' created/updated successfully in branch 'dev'."
    );
    lookup.assert_async().await;
    write.assert_async().await;
}

#[tokio::test]
async fn test_create_new_file_omits_sha() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/contents/new.txt")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;
    // exact JSON match: a "sha" field would make this mock miss
    let write = server
        .mock("PUT", "/repos/o/r/contents/new.txt")
        .match_body(Matcher::Json(json!({
            "message": "Add file",
            "content": "aGVsbG8=",
            "branch": "main"
        })))
        .with_status(201)
        .with_body(r#"{"content":{"sha":"0d5a690"}}"#)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = create_or_update_file(
        &client,
        &RepositoryId::new("o", "r"),
        "new.txt",
        "hello",
        "Add file",
        &Branch::new("main"),
    )
    .await;

    assert_eq!(
        text,
        "File 'new.txt' created/updated successfully in branch 'main'."
    );
    write.assert_async().await;
}

#[tokio::test]
async fn test_lookup_auth_failure_stops_write() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/contents/a.txt")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/repos/o/r/contents/a.txt")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = create_or_update_file(
        &client,
        &RepositoryId::new("o", "r"),
        "a.txt",
        "x",
        "msg",
        &Branch::new("main"),
    )
    .await;

    assert_eq!(text, "Unable to create/update file: Bad credentials");
    write.assert_async().await;
}

#[tokio::test]
async fn test_write_conflict_is_reported() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/contents/a.txt")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"sha":"stale"}"#)
        .create_async()
        .await;
    server
        .mock("PUT", "/repos/o/r/contents/a.txt")
        .with_status(409)
        .with_body(r#"{"message":"a.txt does not match stale"}"#)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = create_or_update_file(
        &client,
        &RepositoryId::new("o", "r"),
        "a.txt",
        "x",
        "msg",
        &Branch::new("main"),
    )
    .await;

    assert_eq!(text, "Unable to create/update file: a.txt does not match stale");
}

#[tokio::test]
async fn test_get_file_contents_decodes_text() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/contents/README.md")
        .match_query(Matcher::UrlEncoded("ref".into(), "main".into()))
        .with_status(200)
        .with_body(
            json!({
                "type": "file",
                "path": "README.md",
                "sha": "3d21ec5",
                "size": 12,
                "encoding": "base64",
                "content": "SGVsbG8s\nIHdvcmxk\n",
                "html_url": "https://github.com/o/r/blob/main/README.md"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = get_file_contents(
        &client,
        &RepositoryId::new("o", "r"),
        "README.md",
        &Branch::new("main"),
    )
    .await;

    assert!(text.starts_with("Path: README.md\nType: file\nSHA: 3d21ec5\nSize: 12\n"));
    assert!(text.ends_with("Content:\nHello, world"));
}

#[tokio::test]
async fn test_get_file_contents_lists_directory() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/repos/o/r/contents/src")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!([
                {"type": "file", "path": "src/lib.rs", "sha": "a1", "size": 10},
                {"type": "dir", "path": "src/bin", "sha": "b2", "size": 0}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = get_file_contents(
        &client,
        &RepositoryId::new("o", "r"),
        "src",
        &Branch::new("main"),
    )
    .await;

    assert_eq!(text.split("\n---\n").count(), 2);
    assert!(text.contains("Path: src/bin\nType: dir"));
}
