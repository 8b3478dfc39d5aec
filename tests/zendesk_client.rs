// tests/zendesk_client.rs

//! Integration tests for the Zendesk client against a mock upstream.

use httpmock::prelude::*;
use serde_json::json;

use zenmirror::config::Config;
use zenmirror::error::AppError;
use zenmirror::zendesk::{Pagination, ZenDesk};

const TOKEN: &str = "dGVzdDp0b2tlbg==";

fn client_for(base_url: &str) -> ZenDesk {
    let mut conf = Config::default();
    conf.zendesk.auth_token = TOKEN.to_string();
    conf.zendesk.request_timeout_sec = 5;
    conf.zendesk.hk_base_url = base_url.to_string();
    conf.zendesk.id_base_url = base_url.to_string();
    conf.zendesk.jp_base_url = base_url.to_string();
    conf.zendesk.my_base_url = base_url.to_string();
    conf.zendesk.ph_base_url = base_url.to_string();
    conf.zendesk.sg_base_url = base_url.to_string();
    conf.zendesk.th_base_url = base_url.to_string();
    conf.zendesk.tw_base_url = base_url.to_string();
    ZenDesk::new(&conf).unwrap()
}

fn category(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_at": "2023-01-02T03:04:05Z",
        "updated_at": "2023-01-02T03:04:05Z",
        "name": name,
        "locale": "en-us"
    })
}

#[tokio::test]
async fn listing_follows_next_page_and_enforces_page_size() {
    let server = MockServer::start_async().await;

    let page2_url = format!(
        "{}/api/v2/help_center/en-us/categories.json?page=2",
        server.base_url()
    );
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/en-us/categories.json")
                .query_param("page", "1")
                .query_param("per_page", "100");
            then.status(200).json_body(json!({
                "categories": [category(1, "Payments")],
                "next_page": page2_url
            }));
        })
        .await;
    // the server-issued next URL carried no per_page; the client appends one
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/en-us/categories.json")
                .query_param("page", "2")
                .query_param("per_page", "100");
            then.status(200).json_body(json!({
                "categories": [category(2, "Account")],
                "next_page": null
            }));
        })
        .await;

    let client = client_for(&server.base_url());
    let categories = client.list_categories("tw", "en-us").await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Payments");
    assert_eq!(categories[1].id, 2);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn empty_string_next_page_terminates() {
    let server = MockServer::start_async().await;
    let listing = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/en-us/sections.json");
            then.status(200).json_body(json!({
                "sections": [{
                    "id": 7,
                    "category_id": 1,
                    "created_at": "2023-01-02T03:04:05Z",
                    "updated_at": "2023-01-02T03:04:05Z",
                    "name": "Refunds",
                    "locale": "en-us"
                }],
                "next_page": ""
            }));
        })
        .await;

    let client = client_for(&server.base_url());
    let sections = client.list_sections("sg", "en-us").await.unwrap();

    assert_eq!(sections.len(), 1);
    listing.assert_hits_async(1).await;
}

#[tokio::test]
async fn global_listings_send_basic_auth_via_fixed_slot() {
    let server = MockServer::start_async().await;
    let listing = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/ticket_forms.json")
                .header("authorization", format!("Basic {TOKEN}"))
                .header("cache-control", "no-cache");
            then.status(200).json_body(json!({
                "ticket_forms": [{
                    "id": 20,
                    "name": "Default form",
                    "created_at": "2023-01-02T03:04:05Z",
                    "updated_at": "2023-01-02T03:04:05Z"
                }],
                "next_page": null
            }));
        })
        .await;

    // only the tw slot is configured; global resources must route through it
    let mut conf = Config::default();
    conf.zendesk.auth_token = TOKEN.to_string();
    conf.zendesk.tw_base_url = server.base_url();
    let client = ZenDesk::new(&conf).unwrap();

    let ticket_forms = client.list_ticket_forms().await.unwrap();
    assert_eq!(ticket_forms.len(), 1);
    assert_eq!(ticket_forms[0].name, "Default form");
    listing.assert_async().await;
}

#[tokio::test]
async fn help_center_listings_are_unauthenticated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/ja/articles.json");
            then.status(200).json_body(json!({
                "articles": [{
                    "id": 11,
                    "section_id": 7,
                    "created_at": "2023-01-02T03:04:05Z",
                    "updated_at": "2023-01-02T03:04:05Z",
                    "title": "How to refund",
                    "locale": "ja"
                }],
                "next_page": null
            }));
        })
        .await;

    let client = client_for(&server.base_url());
    let articles = client.list_articles("jp", "ja").await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "How to refund");
}

#[tokio::test]
async fn unexpected_status_is_reported_with_both_codes() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/en-us/articles.json");
            then.status(503).body("upstream down");
        })
        .await;

    let client = client_for(&server.base_url());
    let err = client.list_articles("tw", "en-us").await.unwrap_err();

    match err {
        AppError::UnexpectedStatus {
            expected, actual, ..
        } => {
            assert_eq!(expected, 200);
            assert_eq!(actual, 503);
        }
        other => panic!("expected UnexpectedStatus, got {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/en-us/categories.json");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let client = client_for(&server.base_url());
    let err = client.list_categories("tw", "en-us").await.unwrap_err();
    assert!(matches!(err, AppError::Decode { .. }));
}

#[tokio::test]
async fn unknown_country_fails_at_transport() {
    let client = client_for("http://127.0.0.1:1");
    let err = client.list_categories("xx", "en-us").await.unwrap_err();
    assert!(matches!(err, AppError::Transport { .. }));
}

#[tokio::test]
async fn show_article_fetches_by_id() {
    let server = MockServer::start_async().await;
    let shown = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/en-us/articles/360017882372.json");
            then.status(200).json_body(json!({
                "article": {
                    "id": 360017882372i64,
                    "section_id": 7,
                    "created_at": "2023-01-02T03:04:05Z",
                    "updated_at": "2023-01-02T03:04:05Z",
                    "title": "How to refund",
                    "locale": "en-us"
                }
            }));
        })
        .await;

    let client = client_for(&server.base_url());
    let article = client.show_article(360017882372, "tw", "en-us").await.unwrap();

    assert_eq!(article.id, 360017882372);
    assert_eq!(article.title, "How to refund");
    shown.assert_async().await;
}

#[tokio::test]
async fn create_vote_posts_form_encoded_value() {
    let server = MockServer::start_async().await;
    let voted = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/hc/en-us/articles/11/vote")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("value=up");
            then.status(200).json_body(json!({
                "id": 99,
                "vote_sum": 5,
                "vote_count": 7,
                "upvote_count": 6,
                "label": "5 out of 7 found this helpful",
                "value": "up"
            }));
        })
        .await;

    let client = client_for(&server.base_url());
    let vote = client.create_vote(11, "up", "tw", "en-us").await.unwrap();

    assert_eq!(vote.id, 99);
    assert_eq!(vote.vote_sum, 5);
    assert_eq!(vote.value, "up");
    voted.assert_async().await;
}

#[tokio::test]
async fn create_request_expects_created() {
    let server = MockServer::start_async().await;
    let created = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/requests.json")
                .header("authorization", format!("Basic {TOKEN}"))
                .header("content-type", "application/json");
            then.status(201).json_body(json!({"request": {"id": 55}}));
        })
        .await;

    let client = client_for(&server.base_url());
    let payload = json!({
        "request": {
            "subject": "Refund not received",
            "comment": {"body": "Order 123 was refunded a week ago."}
        }
    });
    client.create_request("tw", &payload).await.unwrap();
    created.assert_async().await;
}

#[tokio::test]
async fn create_request_rejects_non_created_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v2/requests.json");
            then.status(200).json_body(json!({"request": {"id": 55}}));
        })
        .await;

    let client = client_for(&server.base_url());
    let err = client
        .create_request("tw", &json!({"request": {}}))
        .await
        .unwrap_err();
    match err {
        AppError::UnexpectedStatus {
            expected, actual, ..
        } => {
            assert_eq!(expected, 201);
            assert_eq!(actual, 200);
        }
        other => panic!("expected UnexpectedStatus, got {other}"),
    }
}

#[tokio::test]
async fn instant_search_passes_locale_and_query() {
    let server = MockServer::start_async().await;
    let searched = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/hc/api/internal/instant_search.json")
                .query_param("locale", "en-us")
                .query_param("query", "refund");
            then.status(200).json_body(json!({
                "results": [{
                    "title": "How to refund",
                    "category_title": "Payments",
                    "url": "/hc/en-us/articles/11"
                }]
            }));
        })
        .await;

    let client = client_for(&server.base_url());
    let out = client.instant_search("refund", "tw", "en-us").await.unwrap();

    assert_eq!(out.results.len(), 1);
    assert_eq!(out.results[0].category_title, "Payments");
    searched.assert_async().await;
}

#[tokio::test]
async fn search_filters_by_category_ids() {
    let server = MockServer::start_async().await;
    let searched = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/help_center/articles/search.json")
                .query_param("per_page", "30")
                .query_param("page", "1")
                .query_param("sort_order", "desc")
                .query_param("locale", "en-us")
                .query_param("query", "refund")
                .query_param("category", "1,2");
            then.status(200).json_body(json!({
                "results": [{
                    "id": 11,
                    "section_id": 7,
                    "created_at": "2023-01-02T03:04:05Z",
                    "updated_at": "2023-01-02T03:04:05Z",
                    "title": "How to refund",
                    "locale": "en-us",
                    "snippet": "a <em>refund</em> takes 3 days",
                    "result_type": "article"
                }],
                "next_page": null,
                "count": 1
            }));
        })
        .await;

    let client = client_for(&server.base_url());
    let pagination = Pagination {
        per_page: 30,
        page: 1,
        sort_order: "desc".to_string(),
    };
    let out = client
        .search(&[1, 2], "refund", "tw", "en-us", &pagination)
        .await
        .unwrap();

    assert_eq!(out.articles.len(), 1);
    assert_eq!(out.articles[0].article.id, 11);
    assert!(out.articles[0].snippet.contains("refund"));
    searched.assert_async().await;
}
