//! Integration tests for repository search

use mockito::Matcher;

use github_toolbox::tools::functions::search::search_repositories;
use github_toolbox::types::Pagination;
use test_util::{create_test_github_client, start_mock_github};

#[tokio::test]
async fn test_search_repositories_formats_each_item() {
    let mut server = start_mock_github().await;
    let mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "lang:go stars:>1000".into()),
            Matcher::UrlEncoded("per_page".into(), "2".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[{"full_name":"a/b","stargazers_count":5000,"html_url":"u1"},{"full_name":"c/d","stargazers_count":2000,"html_url":"u2"}]}"#,
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = search_repositories(
        &client,
        "lang:go stars:>1000",
        Pagination::new(Some(2), Some(1)),
    )
    .await;

    assert_eq!(
        text,
        "Name: a/b\nDescription: No description\nStars: 5000\nURL: u1\n---\nName: c/d\nDescription: No description\nStars: 2000\nURL: u2"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_repositories_default_pagination() {
    let mut server = start_mock_github().await;
    let mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "tokio".into()),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"total_count":0,"incomplete_results":false,"items":[]}"#)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = search_repositories(&client, "tokio", Pagination::default()).await;

    assert_eq!(text, "No repositories found for this query.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_repositories_rejected_query() {
    let mut server = start_mock_github().await;
    server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::Any)
        .with_status(422)
        .with_body(r#"{"message":"Validation Failed","errors":[{"code":"missing"}]}"#)
        .create_async()
        .await;

    let client = create_test_github_client(&server);
    let text = search_repositories(&client, "", Pagination::new(Some(1000), Some(0))).await;

    assert_eq!(text, "Unable to search repositories: Validation Failed");
}
