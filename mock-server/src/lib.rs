use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncProduct {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub variants: u32,
    #[serde(default)]
    pub synced: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncVariant {
    pub id: u64,
    pub sync_product_id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub variant_id: u64,
    #[serde(default)]
    pub retail_price: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub recipient: Value,
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Deserialize)]
pub struct CreateSyncProduct {
    pub sync_product: NewSyncProduct,
    #[serde(default)]
    pub sync_variants: Vec<NewSyncVariant>,
}

#[derive(Deserialize)]
pub struct NewSyncProduct {
    pub name: String,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Deserialize)]
pub struct NewSyncVariant {
    pub variant_id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub retail_price: Option<String>,
}

#[derive(Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub recipient: Value,
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Deserialize)]
pub struct Page {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

#[derive(Deserialize)]
pub struct OrderFlags {
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub update_existing: bool,
}

#[derive(Deserialize)]
pub struct TaskQuery {
    pub task_key: String,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    products: BTreeMap<u64, SyncProduct>,
    variants: BTreeMap<u64, SyncVariant>,
    orders: BTreeMap<u64, Order>,
    tasks: BTreeMap<String, u64>,
}

impl Store {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Resolve a numeric id or an `@external_id` to a product id.
    fn product_id(&self, raw: &str) -> Option<u64> {
        match raw.strip_prefix('@') {
            Some(ext) => self
                .products
                .values()
                .find(|p| p.external_id.as_deref() == Some(ext))
                .map(|p| p.id),
            None => raw.parse().ok().filter(|id| self.products.contains_key(id)),
        }
    }

    fn order_id(&self, raw: &str) -> Option<u64> {
        match raw.strip_prefix('@') {
            Some(ext) => self
                .orders
                .values()
                .find(|o| o.external_id.as_deref() == Some(ext))
                .map(|o| o.id),
            None => raw.parse().ok().filter(|id| self.orders.contains_key(id)),
        }
    }

    fn product_with_variants(&self, id: u64) -> Value {
        let variants: Vec<&SyncVariant> = self
            .variants
            .values()
            .filter(|v| v.sync_product_id == id)
            .collect();
        json!({"sync_product": self.products.get(&id), "sync_variants": variants})
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/products", get(list_catalog_products))
        .route("/countries", get(list_countries))
        .route("/store/products", get(list_sync_products).post(create_sync_product))
        .route(
            "/store/products/{id}",
            get(get_sync_product).delete(delete_sync_product),
        )
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order).delete(cancel_order))
        .route("/mockup-generator/create-task/{id}", post(create_mockup_task))
        .route("/mockup-generator/task", get(get_mockup_task))
        .layer(middleware::from_fn(require_bearer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn envelope(status: StatusCode, result: Value) -> Response {
    let code = status.as_u16();
    (status, Json(json!({"code": code, "result": result}))).into_response()
}

fn paged_envelope(result: Value, offset: usize, limit: usize, total: usize) -> Response {
    let body = json!({
        "code": 200,
        "result": result,
        "paging": {"offset": offset, "limit": limit, "total": total}
    });
    (StatusCode::OK, Json(body)).into_response()
}

pub fn failure(status: StatusCode, reason: &str, message: &str) -> Response {
    let code = status.as_u16();
    let body = json!({
        "code": code,
        "result": message,
        "error": {"reason": reason, "message": message}
    });
    (status, Json(body)).into_response()
}

fn not_found() -> Response {
    failure(StatusCode::NOT_FOUND, "NotFound", "Not found")
}

async fn require_bearer(request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or("");
    if token.is_empty() {
        return failure(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Malformed Authorization header.",
        );
    }
    next.run(request).await
}

async fn list_catalog_products() -> Response {
    envelope(
        StatusCode::OK,
        json!([
            {"id": 71, "type": "T-SHIRT", "model": "Unisex Staple T-Shirt", "variant_count": 171},
            {"id": 19, "type": "MUG", "model": "White Glossy Mug", "variant_count": 3}
        ]),
    )
}

async fn list_countries() -> Response {
    envelope(
        StatusCode::OK,
        json!([
            {"code": "US", "name": "United States", "states": []},
            {"code": "LV", "name": "Latvia", "states": null}
        ]),
    )
}

async fn list_sync_products(State(db): State<Db>, Query(page): Query<Page>) -> Response {
    let store = db.read().await;
    let all: Vec<&SyncProduct> = store.products.values().collect();
    let slice: Vec<&SyncProduct> = all.iter().skip(page.offset).take(page.limit).copied().collect();
    paged_envelope(json!(slice), page.offset, page.limit, all.len())
}

async fn create_sync_product(
    State(db): State<Db>,
    Json(input): Json<CreateSyncProduct>,
) -> Response {
    let mut store = db.write().await;
    let id = store.allocate();
    let product = SyncProduct {
        id,
        external_id: input.sync_product.external_id,
        name: input.sync_product.name,
        variants: input.sync_variants.len() as u32,
        synced: input.sync_variants.len() as u32,
    };
    for v in input.sync_variants {
        let vid = store.allocate();
        store.variants.insert(
            vid,
            SyncVariant {
                id: vid,
                sync_product_id: id,
                external_id: v.external_id,
                variant_id: v.variant_id,
                retail_price: v.retail_price,
            },
        );
    }
    store.products.insert(id, product.clone());
    envelope(StatusCode::OK, json!(product))
}

async fn get_sync_product(State(db): State<Db>, Path(raw): Path<String>) -> Response {
    let store = db.read().await;
    match store.product_id(&raw) {
        Some(id) => envelope(StatusCode::OK, store.product_with_variants(id)),
        None => not_found(),
    }
}

async fn delete_sync_product(State(db): State<Db>, Path(raw): Path<String>) -> Response {
    let mut store = db.write().await;
    let Some(id) = store.product_id(&raw) else {
        return not_found();
    };
    let result = store.product_with_variants(id);
    store.products.remove(&id);
    store.variants.retain(|_, v| v.sync_product_id != id);
    envelope(StatusCode::OK, result)
}

async fn list_orders(State(db): State<Db>, Query(page): Query<Page>) -> Response {
    let store = db.read().await;
    let all: Vec<&Order> = store.orders.values().collect();
    let slice: Vec<&Order> = all.iter().skip(page.offset).take(page.limit).copied().collect();
    paged_envelope(json!(slice), page.offset, page.limit, all.len())
}

async fn create_order(
    State(db): State<Db>,
    Query(flags): Query<OrderFlags>,
    Json(input): Json<NewOrder>,
) -> Response {
    if input.items.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "BadRequest", "Order must contain items");
    }
    let status = if flags.confirm { "pending" } else { "draft" };
    let mut store = db.write().await;

    let existing = input
        .external_id
        .as_deref()
        .and_then(|ext| store.order_id(&format!("@{ext}")));
    if let Some(id) = existing {
        if !flags.update_existing {
            return failure(
                StatusCode::BAD_REQUEST,
                "BadRequest",
                "Order with this external ID already exists",
            );
        }
        if let Some(order) = store.orders.get_mut(&id) {
            order.recipient = input.recipient;
            order.items = input.items;
            order.status = status.to_string();
            return envelope(StatusCode::OK, json!(order));
        }
    }

    let id = store.allocate();
    let order = Order {
        id,
        external_id: input.external_id,
        status: status.to_string(),
        recipient: input.recipient,
        items: input.items,
    };
    store.orders.insert(id, order.clone());
    envelope(StatusCode::OK, json!(order))
}

async fn get_order(State(db): State<Db>, Path(raw): Path<String>) -> Response {
    let store = db.read().await;
    match store.order_id(&raw).and_then(|id| store.orders.get(&id)) {
        Some(order) => envelope(StatusCode::OK, json!(order)),
        None => not_found(),
    }
}

async fn cancel_order(State(db): State<Db>, Path(raw): Path<String>) -> Response {
    let mut store = db.write().await;
    let Some(id) = store.order_id(&raw) else {
        return not_found();
    };
    let Some(order) = store.orders.get_mut(&id) else {
        return not_found();
    };
    if order.status == "canceled" {
        return failure(StatusCode::BAD_REQUEST, "BadRequest", "Order is already canceled");
    }
    order.status = "canceled".to_string();
    envelope(StatusCode::OK, json!(order))
}

async fn create_mockup_task(
    State(db): State<Db>,
    Path(product_id): Path<u64>,
    Json(_input): Json<Value>,
) -> Response {
    let task_key = format!("gt-{}", Uuid::new_v4().simple());
    db.write().await.tasks.insert(task_key.clone(), product_id);
    envelope(StatusCode::OK, json!({"task_key": task_key, "status": "pending"}))
}

async fn get_mockup_task(State(db): State<Db>, Query(q): Query<TaskQuery>) -> Response {
    let store = db.read().await;
    match store.tasks.get(&q.task_key) {
        Some(product_id) => envelope(
            StatusCode::OK,
            json!({
                "task_key": q.task_key,
                "status": "completed",
                "mockups": [{"placement": "front", "variant_ids": [], "product_id": product_id}]
            }),
        ),
        None => not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_product_serializes_to_json() {
        let product = SyncProduct {
            id: 1,
            external_id: Some("tee".to_string()),
            name: "Tee".to_string(),
            variants: 2,
            synced: 2,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["external_id"], "tee");
        assert_eq!(json["variants"], 2);
    }

    #[test]
    fn create_sync_product_defaults_variants_to_empty() {
        let input: CreateSyncProduct =
            serde_json::from_str(r#"{"sync_product":{"name":"Mug"}}"#).unwrap();
        assert_eq!(input.sync_product.name, "Mug");
        assert!(input.sync_product.external_id.is_none());
        assert!(input.sync_variants.is_empty());
    }

    #[test]
    fn create_sync_product_rejects_missing_name() {
        let result: Result<CreateSyncProduct, _> =
            serde_json::from_str(r#"{"sync_product":{"external_id":"x"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn page_defaults() {
        let page: Page = serde_json::from_str("{}").unwrap();
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, 20);
    }

    #[test]
    fn store_resolves_external_ids() {
        let mut store = Store::default();
        let id = store.allocate();
        store.products.insert(
            id,
            SyncProduct {
                id,
                external_id: Some("shirt".to_string()),
                name: "Shirt".to_string(),
                variants: 0,
                synced: 0,
            },
        );
        assert_eq!(store.product_id("@shirt"), Some(id));
        assert_eq!(store.product_id(&id.to_string()), Some(id));
        assert_eq!(store.product_id("@missing"), None);
        assert_eq!(store.product_id("999"), None);
    }
}
