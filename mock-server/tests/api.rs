use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

const AUTH: &str = "Bearer test-token";

async fn body_json(response: axum::response::Response) -> Value {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::AUTHORIZATION, AUTH)
        .body(String::new())
        .unwrap()
}

fn delete(uri: &str) -> Request<String> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(http::header::AUTHORIZATION, AUTH)
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, AUTH)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_token_returns_401_envelope() {
    let resp = app()
        .oneshot(Request::builder().uri("/countries").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 401);
    assert_eq!(body["error"]["reason"], "Unauthorized");
}

#[tokio::test]
async fn empty_bearer_is_rejected() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/countries")
                .header(http::header::AUTHORIZATION, "Bearer ")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- sync products ---

#[tokio::test]
async fn list_sync_products_empty_has_paging() {
    let resp = app().oneshot(get("/store/products?offset=0&limit=10")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 200);
    assert_eq!(body["result"], serde_json::json!([]));
    assert_eq!(body["paging"], serde_json::json!({"offset": 0, "limit": 10, "total": 0}));
}

#[tokio::test]
async fn get_sync_product_not_found() {
    let resp = app().oneshot(get("/store/products/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 404);
    assert_eq!(body["error"]["message"], "Not found");
}

#[tokio::test]
async fn create_sync_product_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/store/products", r#"{"nope":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- orders ---

#[tokio::test]
async fn create_order_without_items_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/orders", r#"{"recipient":{"name":"A"}}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn cancel_unknown_order_not_found() {
    let resp = app().oneshot(delete("/orders/@nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- mockups ---

#[tokio::test]
async fn unknown_mockup_task_not_found() {
    let resp = app()
        .oneshot(get("/mockup-generator/task?task_key=gt-missing"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn sync_product_and_order_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create product with one variant
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/store/products",
            r#"{"sync_product":{"name":"Tee","external_id":"tee-1"},"sync_variants":[{"variant_id":4011,"retail_price":"21.00"}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await;
    assert_eq!(created["result"]["name"], "Tee");
    assert_eq!(created["result"]["variants"], 1);
    let id = created["result"]["id"].as_u64().unwrap();

    // get by external id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/store/products/@tee-1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched["result"]["sync_product"]["id"], id);
    assert_eq!(fetched["result"]["sync_variants"][0]["variant_id"], 4011);

    // create a draft order, then re-submit with update_existing
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/orders?confirm=false&update_existing=false",
            r#"{"external_id":"o-1","recipient":{"name":"Jane"},"items":[{"variant_id":4011,"quantity":1}]}"#,
        ))
        .await
        .unwrap();
    let order = body_json(resp).await;
    assert_eq!(order["result"]["status"], "draft");
    let order_id = order["result"]["id"].as_u64().unwrap();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/orders?confirm=true&update_existing=true",
            r#"{"external_id":"o-1","recipient":{"name":"Jane"},"items":[{"variant_id":4011,"quantity":2}]}"#,
        ))
        .await
        .unwrap();
    let updated = body_json(resp).await;
    assert_eq!(updated["result"]["id"], order_id);
    assert_eq!(updated["result"]["status"], "pending");

    // cancel twice: second attempt is an application error
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete(&format!("/orders/{order_id}")))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["result"]["status"], "canceled");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete(&format!("/orders/{order_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // delete product, then it is gone
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete(&format!("/store/products/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/store/products?offset=0&limit=20"))
        .await
        .unwrap();
    let list = body_json(resp).await;
    assert_eq!(list["paging"]["total"], 0);
}
