//! Integration tests for `StorefrontClient::fetch_products`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the request shape (path, headers, body),
//! the happy paths, and every error variant `fetch_products` can return.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use swatch_core::StorefrontConfig;
use swatch_storefront::{StorefrontClient, StorefrontError, PRODUCTS_QUERY};

const GRAPHQL_PATH: &str = "/api/2023-07/graphql.json";

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        store_domain: "example.myshopify.com".to_owned(),
        storefront_token: "test-token".to_owned(),
        api_version: "2023-07".to_owned(),
        request_timeout_secs: 5,
        user_agent: "swatch-test/0.1".to_owned(),
        log_level: "warn".to_owned(),
    }
}

fn test_client(server: &MockServer) -> StorefrontClient {
    StorefrontClient::with_base_url(&test_config(), &server.uri())
        .expect("failed to build test StorefrontClient")
}

fn products_json(nodes: &[serde_json::Value]) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = nodes.iter().map(|n| json!({ "node": n })).collect();
    json!({ "data": { "products": { "edges": edges } } })
}

fn shirt_node() -> serde_json::Value {
    json!({
        "id": "gid://shopify/Product/1",
        "title": "Shirt",
        "handle": "shirt",
        "productType": "Apparel",
        "tags": ["summer", "cotton"],
        "options": [
            {"name": "Size", "values": ["S", "M"]},
            {"name": "Color", "values": ["Red", "Blue"]}
        ],
        "variants": {"edges": [
            {"node": {
                "id": "gid://shopify/ProductVariant/11",
                "title": "S / Red",
                "selectedOptions": [
                    {"name": "Size", "value": "S"},
                    {"name": "Color", "value": "Red"}
                ]
            }}
        ]}
    })
}

fn mug_node() -> serde_json::Value {
    json!({
        "id": "gid://shopify/Product/2",
        "title": "Mug",
        "handle": "mug",
        "productType": "Drinkware",
        "tags": ["kitchen", "gift"],
        "options": [{"name": "Title", "values": ["Default Title"]}],
        "variants": {"edges": [
            {"node": {
                "id": "gid://shopify/ProductVariant/21",
                "title": "Default Title",
                "selectedOptions": [{"name": "Title", "value": "Default Title"}]
            }}
        ]}
    })
}

// ---------------------------------------------------------------------------
// Request shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_products_posts_query_with_token_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Storefront-Access-Token", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({ "query": PRODUCTS_QUERY })))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_products().await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_products_returns_empty_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json(&[])))
        .mount(&server)
        .await;

    let products = test_client(&server).fetch_products().await.unwrap();
    assert!(products.is_empty(), "expected no products");
}

#[tokio::test]
async fn fetch_products_converts_nodes_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(products_json(&[shirt_node(), mug_node()])),
        )
        .mount(&server)
        .await;

    let products = test_client(&server).fetch_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].handle, "shirt");
    assert_eq!(products[0].options.len(), 2);
    assert_eq!(products[0].options[1].values, vec!["Red", "Blue"]);
    assert_eq!(products[0].variants[0].selected_options.len(), 2);
    assert_eq!(products[1].handle, "mug");
    assert_eq!(products[1].product_type.as_deref(), Some("Drinkware"));
    assert_eq!(
        products[1].tags,
        Some(vec!["kitchen".to_owned(), "gift".to_owned()])
    );
}

#[tokio::test]
async fn fetch_products_feeds_classifier() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(products_json(&[shirt_node(), mug_node()])),
        )
        .mount(&server)
        .await;

    let products = test_client(&server).fetch_products().await.unwrap();
    let classification = swatch_core::classify(&products).unwrap();

    assert_eq!(classification.with_colors.len(), 1);
    assert_eq!(classification.with_colors[0].colors, vec!["Red", "Blue"]);
    assert_eq!(classification.without_colors.len(), 1);
    assert_eq!(classification.without_colors[0].product_type, "Drinkware");
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_products_returns_unexpected_status_on_401() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_products().await;

    assert!(
        matches!(result, Err(StorefrontError::UnexpectedStatus { status: 401, .. })),
        "expected UnexpectedStatus(401), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_does_not_retry_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_products().await;

    assert!(
        matches!(result, Err(StorefrontError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_returns_graphql_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                {"message": "Access denied for products field."},
                {"message": "Throttled"}
            ]
        })))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_products().await;

    match result {
        Err(StorefrontError::GraphQl(messages)) => {
            assert_eq!(
                messages,
                vec!["Access denied for products field.", "Throttled"]
            );
        }
        other => panic!("expected GraphQl error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_products_returns_deserialize_error_on_bad_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_products().await;

    assert!(
        matches!(result, Err(StorefrontError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_returns_deserialize_error_when_node_lacks_title() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json(&[json!({
            "id": "gid://shopify/Product/9",
            "handle": "untitled"
        })])))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_products().await;

    assert!(
        matches!(result, Err(StorefrontError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_returns_http_error_when_server_unreachable() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind port");
    let addr = listener.local_addr().expect("listener has no local addr");
    drop(listener);

    let client =
        StorefrontClient::with_base_url(&test_config(), &format!("http://{addr}")).unwrap();
    let result = client.fetch_products().await;

    assert!(
        matches!(result, Err(StorefrontError::Http(_))),
        "expected Http error, got: {result:?}"
    );
}
