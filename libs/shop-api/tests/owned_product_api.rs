//! Integration test: owned product endpoints against a mock backend

mod common;

use common::{fixtures, setup, BEARER, TOKEN};
use serde_json::json;
use shop_api::client::OwnedProduct;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_owned_products() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/shopping/owned-products/"))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 5,
            "user": 1,
            "sku": "SKU-9",
            "spu_name": "Mug",
            "sku_title": "White",
            "purchased_at": "2024-03-02T10:00:00Z",
            "image": "http://localhost:8000/media/products/mug.png"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let products: Vec<OwnedProduct> = client
        .owned_products()
        .list_mine(TOKEN)
        .await
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].sku, "SKU-9");
}

#[tokio::test]
async fn test_delete_owned_product() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/shopping/owned-products/5/"))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.owned_products().delete(5, TOKEN).await.unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_delete_someone_elses_record() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/shopping/owned-products/6/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "forbidden" })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.owned_products().delete(6, TOKEN).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
}

#[tokio::test]
async fn test_missing_record() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/shopping/owned-products/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(fixtures::not_found()))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.owned_products().delete(99, TOKEN).await.unwrap_err();
    assert!(err.is_not_found());
}
