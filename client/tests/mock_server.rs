//! End-to-end lifecycle through the async client and the mock server.

use pretty_assertions::assert_eq;
use printful::models::{Order, OrderItem, Recipient};
use printful::{Config, Printful, ResourceId};
use serde_json::json;
use url::Url;

async fn start_server() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    Url::parse(&format!("http://{addr}")).unwrap()
}

fn order(external_id: &str) -> Order {
    Order {
        external_id: Some(external_id.to_string()),
        recipient: Recipient {
            name: "Jane Doe".into(),
            address1: "1 Main St".into(),
            city: "Riga".into(),
            country_code: "LV".into(),
            zip: "LV-1010".into(),
            ..Recipient::default()
        },
        items: vec![OrderItem {
            variant_id: Some(4012),
            quantity: 2,
            ..OrderItem::default()
        }],
        ..Order::default()
    }
}

#[tokio::test]
async fn sync_product_lifecycle() {
    let printful = Printful::from_config(Config::new(start_server().await).token("test-token")).unwrap();
    let products = printful.products();

    let empty = products.get_sync_products(0, 20, None).await.unwrap();
    assert!(empty.products.is_empty());
    assert_eq!(empty.paging.total(), Some(0));

    let created = products
        .create_sync_product(&json!({
            "sync_product": {"name": "Tee", "external_id": "tee-1"},
            "sync_variants": [
                {"variant_id": 4012, "retail_price": "21.00"},
                {"variant_id": 4013, "retail_price": "21.00"}
            ]
        }))
        .await
        .unwrap();
    assert!(created.error.is_empty());
    assert_eq!(created.sync_product["variants"], 2);

    let info = products.get_sync_product(ResourceId::external("tee-1")).await.unwrap();
    assert_eq!(info.sync_product["name"], "Tee");
    assert_eq!(info.sync_variants.len(), 2);

    let listed = products.get_sync_products(0, 20, None).await.unwrap();
    assert_eq!(listed.products.len(), 1);

    let id = created.sync_product["id"].as_u64().unwrap();
    let deleted = products.delete_sync_product(id).await.unwrap();
    assert!(deleted.error.is_empty());

    let gone = products.get_sync_product(id).await.unwrap();
    assert_eq!(gone.sync_product, json!({}));
    assert_eq!(gone.error.reason(), Some("NotFound"));
}

#[tokio::test]
async fn order_lifecycle() {
    let printful = Printful::from_config(Config::new(start_server().await).token("test-token")).unwrap();
    let orders = printful.orders();

    let draft = orders.create_order(&order("o-1"), false, false).await.unwrap();
    assert_eq!(draft.order["status"], "draft");

    let rejected = orders.create_order(&order("o-1"), false, false).await.unwrap();
    assert_eq!(rejected.order, json!({}));
    assert_eq!(rejected.error.reason(), Some("BadRequest"));

    let updated = orders.create_order(&order("o-1"), true, true).await.unwrap();
    assert_eq!(updated.order["id"], draft.order["id"]);
    assert_eq!(updated.order["status"], "pending");

    let fetched = orders.get_order(ResourceId::external("o-1")).await.unwrap();
    assert_eq!(fetched.order["items"][0]["quantity"], 2);

    let canceled = orders.cancel_order(ResourceId::external("o-1")).await.unwrap();
    assert_eq!(canceled.order["status"], "canceled");

    let page = orders.get_orders(None, 0, 10).await.unwrap();
    assert_eq!(page.orders.len(), 1);
    assert_eq!(page.paging.limit(), Some(10));
}

#[tokio::test]
async fn mockup_task_is_polled_by_key() {
    let printful = Printful::from_config(Config::new(start_server().await).token("test-token")).unwrap();
    let mockups = printful.mockups();

    let task = mockups
        .create_mockup_task(71, &json!({"variant_ids": [4012], "files": []}))
        .await
        .unwrap();
    let key = task.task_key().unwrap().to_string();
    assert_eq!(task.task["status"], "pending");

    let done = mockups.get_mockup_task(&key).await.unwrap();
    assert_eq!(done.task["status"], "completed");

    let unknown = mockups.get_mockup_task("gt-unknown").await.unwrap();
    assert_eq!(unknown.task, json!({}));
    assert!(!unknown.error.is_empty());
}

#[tokio::test]
async fn empty_token_is_rejected_remotely() {
    let printful = Printful::from_config(Config::new(start_server().await)).unwrap();

    let countries = printful.countries().get_countries().await.unwrap();
    assert!(countries.countries.is_empty());
    assert_eq!(countries.error.reason(), Some("Unauthorized"));

    let catalog = printful.catalog().get_products(None).await.unwrap();
    assert!(catalog.products.is_empty());
}
