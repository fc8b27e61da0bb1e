//! Black-box tests for the repository client against a real HTTP server
//! bound to an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header::CACHE_CONTROL};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use armory_client::{ApiError, ClientConfig, InventoryClient};
use armory_core::ItemId;
use armory_inventory::{Category, ItemDraft, ItemPatch, Rarity};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> InventoryClient {
        InventoryClient::new(ClientConfig::new(self.base_url.as_str()))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn item_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "category": "Weapons",
        "quantity": 1,
        "price": 10.0,
        "rarity": "rare",
        "image_url": null,
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:00:00Z"
    })
}

fn valid_draft(name: &str) -> ItemDraft {
    let mut draft = ItemDraft::new();
    draft.set_name(name);
    draft.set_category(Category::Weapons);
    draft.set_quantity_input("1");
    draft.set_price_input("10");
    draft.set_rarity(Rarity::Rare);
    draft
}

#[tokio::test]
async fn list_items_parses_the_returned_array() {
    let app = Router::new().route(
        "/inventory",
        get(|| async { Json(json!([item_json(1, "Sword"), item_json(2, "Shield")])) }),
    );
    let server = TestServer::spawn(app).await;

    let items = server.client().list_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, ItemId::new(1));
    assert_eq!(items[1].name, "Shield");
}

#[tokio::test]
async fn list_items_failure_yields_the_generic_message() {
    let app = Router::new().route(
        "/inventory",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server = TestServer::spawn(app).await;

    let err = server.client().list_items().await.unwrap_err();
    assert_eq!(err.to_string(), "failed to fetch inventory items");
    assert_eq!(err.http_status(), Some(500));
}

#[tokio::test]
async fn reads_disable_response_caching() {
    let seen = Arc::new(Mutex::new(None::<String>));
    let seen_by_handler = seen.clone();

    let app = Router::new().route(
        "/inventory",
        get(move |headers: HeaderMap| {
            let seen = seen_by_handler.clone();
            async move {
                *seen.lock().unwrap() = headers
                    .get(CACHE_CONTROL)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                Json(json!([]))
            }
        }),
    );
    let server = TestServer::spawn(app).await;

    server.client().list_items().await.unwrap();
    assert_eq!(seen.lock().unwrap().as_deref(), Some("no-cache"));
}

#[tokio::test]
async fn get_item_targets_the_id_path() {
    let app = Router::new().route(
        "/inventory/:id",
        get(|Path(id): Path<i64>| async move { Json(item_json(id, "Sword")) }),
    );
    let server = TestServer::spawn(app).await;

    let item = server.client().get_item(ItemId::new(7)).await.unwrap();
    assert_eq!(item.id, ItemId::new(7));
}

#[tokio::test]
async fn get_item_failure_is_generic_and_treated_as_not_found() {
    let app = Router::new().route("/inventory/:id", get(|| async { StatusCode::NOT_FOUND }));
    let server = TestServer::spawn(app).await;

    let err = server.client().get_item(ItemId::new(99)).await.unwrap_err();
    assert_eq!(err.to_string(), "failed to fetch inventory item");
    assert_eq!(err.http_status(), Some(404));
}

#[tokio::test]
async fn get_stats_reads_the_opaque_aggregate() {
    let app = Router::new().route(
        "/inventory/stats",
        get(|| async { Json(json!({"total": 9, "weapons": 2, "armor": 3, "consumables": 4})) }),
    );
    let server = TestServer::spawn(app).await;

    let stats = server.client().get_stats().await.unwrap();
    assert_eq!(stats.total, 9);
    assert_eq!(stats.consumables, 4);
}

#[tokio::test]
async fn create_posts_the_full_draft_body() {
    let seen = Arc::new(Mutex::new(None::<Value>));
    let seen_by_handler = seen.clone();

    let app = Router::new().route(
        "/inventory",
        post(move |Json(body): Json<Value>| {
            let seen = seen_by_handler.clone();
            async move {
                *seen.lock().unwrap() = Some(body);
                (StatusCode::CREATED, Json(item_json(5, "Sword")))
            }
        }),
    );
    let server = TestServer::spawn(app).await;

    let created = server.client().create_item(&valid_draft("Sword")).await.unwrap();
    assert_eq!(created.id, ItemId::new(5));

    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Sword",
            "description": "",
            "category": "Weapons",
            "quantity": 1,
            "price": 10.0,
            "rarity": "rare",
            "image_url": "",
        })
    );
}

#[tokio::test]
async fn create_failure_embeds_the_server_body() {
    let app = Router::new().route(
        "/inventory",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "name already exists") }),
    );
    let server = TestServer::spawn(app).await;

    let err = server.client().create_item(&valid_draft("Sword")).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 422, .. }));
    assert!(err.to_string().contains("name already exists"));
}

#[tokio::test]
async fn update_patches_only_the_supplied_fields() {
    let seen = Arc::new(Mutex::new(None::<Value>));
    let seen_by_handler = seen.clone();

    let app = Router::new().route(
        "/inventory/:id",
        patch(move |Path(id): Path<i64>, Json(body): Json<Value>| {
            let seen = seen_by_handler.clone();
            async move {
                *seen.lock().unwrap() = Some(body);
                Json(item_json(id, "Sword"))
            }
        }),
    );
    let server = TestServer::spawn(app).await;

    let patch_body = ItemPatch {
        quantity: Some(4),
        ..ItemPatch::default()
    };
    server
        .client()
        .update_item(ItemId::new(7), &patch_body)
        .await
        .unwrap();

    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(body, json!({ "quantity": 4 }));
}

#[tokio::test]
async fn update_failure_yields_the_generic_message() {
    let app = Router::new().route(
        "/inventory/:id",
        patch(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server = TestServer::spawn(app).await;

    let err = server
        .client()
        .update_item(ItemId::new(7), &ItemPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "failed to update inventory item");
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let app = Router::new().route(
        "/inventory/:id",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let server = TestServer::spawn(app).await;

    server.client().delete_item(ItemId::new(5)).await.unwrap();
}

#[tokio::test]
async fn delete_failure_yields_the_generic_message() {
    let app = Router::new().route(
        "/inventory/:id",
        delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server = TestServer::spawn(app).await;

    let err = server.client().delete_item(ItemId::new(5)).await.unwrap_err();
    assert_eq!(err.to_string(), "failed to delete inventory item");
    assert_eq!(err.http_status(), Some(500));
}

#[tokio::test]
async fn unreachable_service_surfaces_a_transport_error() {
    // Bind then immediately drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = InventoryClient::new(ClientConfig::new(format!("http://{}", addr)));
    let err = client.list_items().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
