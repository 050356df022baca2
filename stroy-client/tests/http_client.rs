// stroy-client/tests/http_client.rs
// Integration tests against an in-process catalog backend

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::CatalogError;
use stroy_client::{ClientConfig, ClientError, HttpClient};

fn products_json() -> Value {
    json!([
        {"MaterialId": 10, "MaterialName": "Бетон М300", "MaterialTreeId": 4, "RetailPrice": "2350", "WholesalePrice": 2120, "SuppliersCount": 14},
        {"MaterialId": 11, "MaterialName": "Арматура А500", "MaterialTreeId": 4, "RetailPrice": null, "SuppliersCount": null}
    ])
}

fn catalog_json() -> Value {
    json!([
        {"MaterialTreeId": 1, "ParId": 1, "MaterialTreeName": "Стройматериалы"},
        {"MaterialTreeId": 2, "ParId": 1, "MaterialTreeName": "Бетон"},
        {"MaterialTreeId": 3, "ParId": 2, "MaterialTreeName": "Товарный бетон"},
        {"MaterialTreeId": 4, "ParId": 3, "MaterialTreeName": "М300"}
    ])
}

async fn product_by_id(Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    products_json()
        .as_array()
        .and_then(|items| items.iter().find(|p| p["MaterialId"] == id).cloned())
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn photos(Path(id): Path<i64>) -> Json<Value> {
    if id == 10 {
        Json(json!([{"FileSrc": "~/Content/Images/Materials/img_10.png", "FileName": "img_10.png"}]))
    } else {
        Json(json!([]))
    }
}

/// Start the fake backend and return its base URL
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/catalog", get(|| async { Json(catalog_json()) }))
        .route("/api/products", get(|| async { Json(products_json()) }))
        .route("/api/products/{id}", get(product_by_id))
        .route("/api/products/{id}/photos", get(photos))
        .route("/data2.json", get(|| async { Json(catalog_json()) }))
        .route("/products2.json", get(|| async { Json(products_json()) }))
        .route("/images/ok.png", get(|| async { "png" }))
        .route(
            "/broken/api/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/empty/api/catalog", get(|| async { "" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_api_mode_lists() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::new(&base)).unwrap();

    let categories = client.categories().await.unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[3].parent_id, 3);

    let products = client.products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].retail_price, Some(2350.0));
    assert_eq!(products[1].suppliers_count, 0);
}

#[tokio::test]
async fn test_api_mode_product_lookup() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::new(&base)).unwrap();

    let product = client.product(11).await.unwrap();
    assert_eq!(product.material_name, "Арматура А500");

    let err = client.product(999).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref r) if r == "product 999"));
}

#[tokio::test]
async fn test_api_mode_photos() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::new(&base)).unwrap();

    let photos = client.product_photos(10).await.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].file_name, "img_10.png");
    assert!(client.product_photos(11).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_local_json_mode() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::local_json(&base)).unwrap();

    assert_eq!(client.categories().await.unwrap().len(), 4);
    assert_eq!(client.product(10).await.unwrap().material_tree_id, 4);
    assert!(matches!(
        client.product(12).await.unwrap_err(),
        ClientError::NotFound(_)
    ));
    assert!(client.product_photos(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_success_status() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::new(format!("{base}/broken"))).unwrap();

    match client.products().await.unwrap_err() {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_listing_endpoint_is_transport() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::new(format!("{base}/nowhere"))).unwrap();

    let err = client.categories().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 404, .. }));
    let err: CatalogError = err.into();
    assert!(err.is_transport());
    assert!(!err.is_not_found());

    let err: CatalogError = client.products().await.unwrap_err().into();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_empty_body_is_invalid() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::new(format!("{base}/empty"))).unwrap();

    assert!(matches!(
        client.categories().await.unwrap_err(),
        ClientError::InvalidResponse(_)
    ));
}

#[tokio::test]
async fn test_image_probe() {
    let base = spawn_backend().await;
    let client = HttpClient::new(&ClientConfig::new(&base)).unwrap();

    assert!(client.is_image_available(&format!("{base}/images/ok.png")).await);
    assert!(!client.is_image_available(&format!("{base}/images/missing.png")).await);
}
