use super::*;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use serde_json::{json, Value};
use storefront_core::{CatalogSettings, HomeRail};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/wp-json/wc/v3";

fn catalog_settings(base_url: Option<String>) -> CatalogSettings {
    CatalogSettings {
        base_url,
        consumer_key: Some("ck_test".to_string()),
        consumer_secret: Some("cs_test".to_string()),
    }
}

fn test_state(server: &MockServer, operator: OperatorConfig) -> AppState {
    let catalog = CatalogClient::new(
        &catalog_settings(Some(format!("{}{API_PATH}", server.uri()))),
        5,
        "storefront-test/0.1",
    )
    .expect("catalog client");
    let slides = SlideClient::new(
        Some(&format!("{}/slides", server.uri())),
        5,
        "storefront-test/0.1",
    )
    .expect("slide client");

    AppState {
        catalog: Arc::new(catalog),
        slides: Arc::new(slides),
        operator: Arc::new(operator),
    }
}

fn unconfigured_state() -> AppState {
    let catalog = CatalogClient::new(&catalog_settings(None), 5, "storefront-test/0.1")
        .expect("catalog client");
    let slides = SlideClient::new(None, 5, "storefront-test/0.1").expect("slide client");
    AppState {
        catalog: Arc::new(catalog),
        slides: Arc::new(slides),
        operator: Arc::new(OperatorConfig::default()),
    }
}

fn product_json(id: u64, slug: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "slug": slug,
        "status": "publish",
        "price": "120",
        "regular_price": "150",
        "sale_price": "120",
        "stock_status": "instock",
        "images": [],
        "categories": [{ "id": 15, "name": "Nike" }]
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, serde_json::from_slice(&body).expect("json parse"))
}

// ---------------------------------------------------------------------------
// Envelope and middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok_envelope() {
    let (status, json) = get(build_app(unconfigured_state()), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["meta"]["request_id"].is_string());
    assert!(json["meta"]["timestamp"].is_string());
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let response = build_app(unconfigured_state())
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-42")
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json parse");
    assert_eq!(json["meta"]["request_id"], "req-42");
}

#[test]
fn api_error_codes_map_to_statuses() {
    assert_eq!(
        ApiError::new("req-1", "not_found", "missing")
            .into_response()
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        ApiError::new("req-1", "upstream_error", "boom")
            .into_response()
            .status(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        ApiError::new("req-1", "configuration_error", "unset")
            .into_response()
            .status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_products_proxies_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/products")))
        .and(query_param("category", "15"))
        .and(query_param("per_page", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([product_json(1, "air-max-90")])))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_app(test_state(&server, OperatorConfig::default()));
    let (status, json) = get(app, "/api/products?category=15&per_page=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["slug"], "air-max-90");
    assert_eq!(json["data"][0]["on_sale"], true);
}

#[tokio::test]
async fn list_products_malformed_query_is_400_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_app(test_state(&server, OperatorConfig::default()));
    let (status, json) = get(app, "/api/products?category=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
    assert!(json["error"]["message"]
        .as_str()
        .is_some_and(|message| message.starts_with("Failed to deserialize query string")));
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn list_products_without_configuration_is_500() {
    let (status, json) = get(build_app(unconfigured_state()), "/api/products").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "configuration_error");
    assert_eq!(json["error"]["message"], "could not load catalog");
}

#[tokio::test]
async fn list_products_upstream_failure_is_502() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/products")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = build_app(test_state(&server, OperatorConfig::default()));
    let (status, json) = get(app, "/api/products").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(
        json["error"]["message"],
        "Error fetching products: Internal Server Error"
    );
}

#[tokio::test]
async fn get_product_missing_slug_is_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/products")))
        .and(query_param("slug", "ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let app = build_app(test_state(&server, OperatorConfig::default()));
    let (status, json) = get(app, "/api/products/ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

// ---------------------------------------------------------------------------
// Categories and slides
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_categories_returns_catalog_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/products/categories")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 15, "name": "Nike", "slug": "nike", "count": 3 }
        ])))
        .mount(&server)
        .await;

    let app = build_app(test_state(&server, OperatorConfig::default()));
    let (status, json) = get(app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["slug"], "nike");
}

#[tokio::test]
async fn list_slides_degrades_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slides"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = build_app(test_state(&server, OperatorConfig::default()));
    let (status, json) = get(app, "/api/slides").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_page_is_always_200() {
    let (status, json) = get(build_app(unconfigured_state()), "/api/pages/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["banners"], json!([]));
    assert_eq!(json["data"]["rails"][0]["state"], "failed");
    assert_eq!(json["data"]["rails"][0]["message"], "could not load catalog");
}

#[tokio::test]
async fn home_page_renders_operator_rails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/products")))
        .and(query_param("category", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([product_json(1, "air-max-90")])))
        .mount(&server)
        .await;

    let operator = OperatorConfig {
        display_name: Some("Shop Sneakers".to_string()),
        home_rails: vec![HomeRail {
            category_id: 15,
            title: "Nike".to_string(),
        }],
        ..OperatorConfig::default()
    };
    let app = build_app(test_state(&server, operator));
    let (status, json) = get(app, "/api/pages/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["storefront"]["display_name"], "Shop Sneakers");
    assert_eq!(json["data"]["rails"][0]["title"], "Nike");
    assert_eq!(json["data"]["rails"][0]["anchor"], "nike");
    assert_eq!(json["data"]["rails"][0]["products"][0]["slug"], "air-max-90");
}

#[tokio::test]
async fn product_page_reports_not_found_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API_PATH}/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let app = build_app(test_state(&server, OperatorConfig::default()));
    let (status, json) = get(app, "/api/pages/products/ghost").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["state"], "not_found");
    assert_eq!(json["data"]["slug"], "ghost");
}
