//! Integration tests for `NotionStore` using wiremock HTTP mocks.

use notion_store::{NotionStore, RecordUpdate, VideoStore};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_store(base_url: &str) -> NotionStore {
    NotionStore::new("secret-token").with_base_url(base_url.to_string())
}

fn page(id: &str, url: &str, title: Option<&str>) -> serde_json::Value {
    let title_items = match title {
        Some(title) => json!([ { "plain_text": title } ]),
        None => json!([]),
    };
    json!({
        "id": id,
        "properties": {
            "URL": { "url": url },
            "Title": { "title": title_items }
        }
    })
}

#[tokio::test]
async fn query_pending_parses_records() {
    let server = MockServer::start().await;

    let body = json!({
        "results": [
            page("page-1", "https://www.youtube.com/watch?v=dQw4w9WgXcQ", Some("Existing title")),
            page("page-2", "https://youtu.be/AbCdEfGhIjK", None),
        ],
        "has_more": false,
        "next_cursor": null
    });

    Mock::given(method("POST"))
        .and(path("/v1/databases/db-123/query"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Notion-Version", "2022-06-28"))
        .and(body_partial_json(json!({
            "filter": {
                "and": [
                    { "property": "URL", "url": { "is_not_empty": true } },
                    { "property": "Summary", "rich_text": { "is_empty": true } }
                ]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let records = store.query_pending("db-123").await.expect("query succeeds");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].page_id, "page-1");
    assert_eq!(
        records[0].url,
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    );
    assert_eq!(records[0].title.as_deref(), Some("Existing title"));
    assert_eq!(records[1].page_id, "page-2");
    assert!(records[1].title.is_none());
}

#[tokio::test]
async fn query_pending_follows_pagination_cursor() {
    let server = MockServer::start().await;

    let first = json!({
        "results": [ page("page-1", "https://youtu.be/AbCdEfGhIjK", None) ],
        "has_more": true,
        "next_cursor": "cursor-1"
    });
    let second = json!({
        "results": [ page("page-2", "https://youtu.be/LmNoPqRsTuV", None) ],
        "has_more": false,
        "next_cursor": null
    });

    // the first-page mock expires after one request; the follow-up must
    // carry the cursor to match the second mock
    Mock::given(method("POST"))
        .and(path("/v1/databases/db-123/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&first))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/databases/db-123/query"))
        .and(body_partial_json(json!({ "start_cursor": "cursor-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&second))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let records = store.query_pending("db-123").await.expect("query succeeds");

    let page_ids: Vec<_> = records.iter().map(|r| r.page_id.as_str()).collect();
    assert_eq!(page_ids, vec!["page-1", "page-2"]);
}

#[tokio::test]
async fn query_pending_skips_rows_without_url() {
    let server = MockServer::start().await;

    let body = json!({
        "results": [
            { "id": "page-1", "properties": { "Title": { "title": [] } } },
            page("page-2", "https://youtu.be/AbCdEfGhIjK", None),
        ],
        "has_more": false,
        "next_cursor": null
    });

    Mock::given(method("POST"))
        .and(path("/v1/databases/db-123/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let records = store.query_pending("db-123").await.expect("query succeeds");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].page_id, "page-2");
}

#[tokio::test]
async fn query_pending_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/databases/db-123/query"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "API token is invalid" })),
        )
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let err = store
        .query_pending("db-123")
        .await
        .expect_err("401 should fail the query");

    let message = format!("{err:?}");
    assert!(message.contains("401"), "got: {message}");
}

#[tokio::test]
async fn update_record_formats_notion_properties() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/pages/page-1"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Notion-Version", "2022-06-28"))
        .and(body_partial_json(json!({
            "properties": {
                "Title": { "title": [ { "text": { "content": "A video" } } ] },
                "Summary": { "rich_text": [ { "text": { "content": "A short summary." } } ] },
                "Main points": {
                    "rich_text": [ { "text": { "content": "- first point\n- second point" } } ]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "page-1" })))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let update = RecordUpdate {
        title: "A video".to_string(),
        summary: "A short summary.".to_string(),
        main_points: vec!["first point".to_string(), "second point".to_string()],
    };

    store
        .update_record("page-1", &update)
        .await
        .expect("update succeeds");
}

#[tokio::test]
async fn update_record_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/pages/page-1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Could not find page" })),
        )
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let update = RecordUpdate {
        title: "A video".to_string(),
        summary: "A short summary.".to_string(),
        main_points: vec![],
    };

    let err = store
        .update_record("page-1", &update)
        .await
        .expect_err("404 should fail the update");
    assert!(format!("{err:?}").contains("404"));
}
