use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use serde::Deserialize;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scryfall_api_client::rate_limit::RateLimiter;
use scryfall_api_client::rest::ScryfallClient;
use scryfall_api_client::{List, ScryfallError};

#[derive(Debug, Deserialize, PartialEq)]
struct Widget {
    name: String,
    count: u32,
}

fn build_client(server: &MockServer) -> ScryfallClient {
    ScryfallClient::builder()
        .base_url(server.uri())
        .rate_limiter(None)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_sends_identification_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/1"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "deck-builder/2.0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(server.uri())
        .user_agent("deck-builder/2.0")
        .build()
        .unwrap();
    let widget: Widget = client.get("widgets/1").await.unwrap();

    assert_eq!(
        widget,
        Widget {
            name: "gear".to_string(),
            count: 3
        }
    );

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_default_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/1"))
        .and(header(
            "user-agent",
            concat!("scryfall-api-client/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let _: Widget = client.get("widgets/1").await.unwrap();
}

#[tokio::test]
async fn test_client_secret_sent_as_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/application"))
        .and(header("authorization", "Bearer cs-12345"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "app", "count": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(server.uri())
        .client_secret("cs-12345")
        .build()
        .unwrap();
    let _: Widget = client.get("application").await.unwrap();
}

#[tokio::test]
async fn test_grant_secret_sent_as_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .and(header("authorization", "Bearer gs-67890"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "me", "count": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(server.uri())
        .grant_secret("gs-67890")
        .build()
        .unwrap();
    let _: Widget = client.get("account").await.unwrap();
}

#[tokio::test]
async fn test_multiple_secrets_make_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = ScryfallClient::builder()
        .base_url(server.uri())
        .client_secret("cs")
        .grant_secret("gs")
        .build();

    assert!(matches!(result, Err(ScryfallError::MultipleSecrets)));
}

#[tokio::test]
async fn test_not_found_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/does-not-exist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "object": "error",
            "code": "not_found",
            "status": 404,
            "details": "The requested object or REST method was not found."
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result: Result<Widget, _> = client.get("cards/does-not-exist").await;

    match result {
        Err(ScryfallError::Api(error)) => {
            assert_eq!(error.status, 404);
            assert_eq!(error.code, "not_found");
            assert_eq!(
                error.details,
                "The requested object or REST method was not found."
            );
            assert!(error.is_not_found());
            assert!(error.error_type.is_none());
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ambiguous_error_with_warnings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "object": "error",
            "code": "not_found",
            "status": 404,
            "type": "ambiguous",
            "details": "Too many cards match ambiguous name \"jace\". Add more words to refine your search.",
            "warnings": null
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .get::<Widget>("cards/named?fuzzy=jace")
        .await
        .unwrap_err();

    let api_error = err.as_api_error().unwrap();
    assert!(api_error.is_ambiguous());
    assert!(api_error.warnings.is_empty());
}

#[tokio::test]
async fn test_non_200_success_status_is_not_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/1"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.get::<Widget>("widgets/1").await;

    assert!(matches!(
        result,
        Err(ScryfallError::ErrorBody { status: 202, .. })
    ));
}

#[tokio::test]
async fn test_malformed_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.get::<Widget>("widgets/1").await;

    match result {
        Err(ScryfallError::ErrorBody { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected error body failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limited_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "object": "error",
            "code": "rate_limited",
            "status": 429,
            "details": "You are sending requests too quickly."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get::<Widget>("widgets/1").await.unwrap_err();

    assert!(err.as_api_error().unwrap().is_rate_limited());
}

#[tokio::test]
async fn test_shape_mismatch_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": 42, "count": "three"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.get::<Widget>("widgets/1").await;

    assert!(matches!(result, Err(ScryfallError::Json(_))));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/widgets"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"name": "sprocket"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"name": "sprocket", "count": 1})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let body = serde_json::json!({"name": "sprocket"});
    let widget: Widget = client.post("widgets", Some(&body)).await.unwrap();

    assert_eq!(widget.name, "sprocket");
    assert_eq!(widget.count, 1);
}

#[tokio::test]
async fn test_post_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/widgets/reset"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "reset", "count": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let _: Widget = client
        .post::<_, serde_json::Value>("widgets/reset", None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_list_get_returns_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "has_more": false,
            "data": [
                {"name": "gear", "count": 3},
                {"name": "cog", "count": 8}
            ]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let widgets: Vec<Widget> = client.list_get("widgets").await.unwrap();

    assert_eq!(widgets.len(), 2);
    assert_eq!(widgets[1].name, "cog");
}

#[tokio::test]
async fn test_list_get_item_mismatch_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "has_more": false,
            "data": [{"title": "not a widget"}]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.list_get::<Vec<Widget>>("widgets").await;

    assert!(matches!(result, Err(ScryfallError::Json(_))));
}

#[tokio::test]
async fn test_list_page_follows_next_page() {
    let server = MockServer::start().await;
    let next_page = format!("{}/widgets?page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "has_more": false,
            "total_cards": 3,
            "data": [{"name": "bolt", "count": 1}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "has_more": true,
            "next_page": next_page,
            "total_cards": 3,
            "warnings": ["Unknown parameter ignored."],
            "data": [{"name": "gear", "count": 3}, {"name": "cog", "count": 8}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let first: List<Vec<Widget>> = client.list_page("widgets?page=1").await.unwrap();

    assert_eq!(first.data.len(), 2);
    assert_eq!(first.total_cards, Some(3));
    assert_eq!(first.warnings, vec!["Unknown parameter ignored.".to_string()]);
    assert_eq!(first.next_page(), Some(next_page.as_str()));

    let second: List<Vec<Widget>> = client.list_page(first.next_page().unwrap()).await.unwrap();
    assert_eq!(second.data[0].name, "bolt");
    assert_eq!(second.next_page(), None);
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mirror/v1/widgets/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(format!("{}/mirror/v1", server.uri()))
        .rate_limiter(None)
        .build()
        .unwrap();
    let widget: Widget = client.get("widgets/1").await.unwrap();

    assert_eq!(widget.name, "gear");
}

#[tokio::test]
async fn test_timeout_surfaces_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"name": "gear", "count": 3}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .rate_limiter(None)
        .build()
        .unwrap();
    let err = client.get::<Widget>("widgets/1").await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {:?}", err);
}

#[tokio::test]
async fn test_rate_limiter_spaces_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .expect(6)
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(server.uri())
        .rate_limiter(Some(RateLimiter::per_second(NonZeroU32::new(5).unwrap())))
        .build()
        .unwrap();

    let start = Instant::now();
    for _ in 0..6 {
        let _: Widget = client.get("widgets/1").await.unwrap();
    }

    // Six admissions at 5/s span at least one second.
    assert!(start.elapsed() >= Duration::from_millis(950));
}

#[tokio::test]
async fn test_disabled_rate_limiter_never_waits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .expect(20)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let start = Instant::now();
    for _ in 0..20 {
        let _: Widget = client.get("widgets/1").await.unwrap();
    }

    // The default limiter would need close to two seconds for this.
    assert!(start.elapsed() < Duration::from_millis(1500));
}

#[tokio::test]
async fn test_limiter_wait_is_cancellable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(server.uri())
        .rate_limiter(Some(RateLimiter::per_second(NonZeroU32::new(1).unwrap())))
        .build()
        .unwrap();

    let _: Widget = client.get("widgets/1").await.unwrap();

    // The second admission is a second away; dropping the call abandons it.
    let second = tokio::time::timeout(Duration::from_millis(100), client.get::<Widget>("widgets/1")).await;
    assert!(second.is_err());
}

#[tokio::test]
async fn test_clones_share_the_limiter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "gear", "count": 3})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ScryfallClient::builder()
        .base_url(server.uri())
        .rate_limiter(Some(RateLimiter::per_second(NonZeroU32::new(1).unwrap())))
        .build()
        .unwrap();
    let clone = client.clone();

    let _: Widget = client.get("widgets/1").await.unwrap();
    assert!(clone.rate_limiter().unwrap().try_acquire().is_err());
}
