use anyhow::Result;
use ceremic_admin::{AdminApi, ApiConfig};
use httpmock::prelude::*;
use serde_json::json;

fn admin_api(server: &MockServer) -> AdminApi {
    AdminApi::from_config(&ApiConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_create_product_posts_payload() -> Result<()> {
    let server = MockServer::start_async().await;
    let payload = json!({"name": "Speckled mug", "price": 24.5, "tags": ["stoneware"]});

    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/create")
                .header("content-type", "application/json")
                .header("accept", "*/*")
                .json_body(payload.clone());
            then.status(201)
                .json_body(json!({"id": 17, "name": "Speckled mug"}));
        })
        .await;

    let body = admin_api(&server).products.create_product(&payload).await?;

    create_mock.assert_async().await;
    assert_eq!(body, json!({"id": 17, "name": "Speckled mug"}));
    Ok(())
}

#[tokio::test]
async fn test_lookup_lists_are_passed_through() -> Result<()> {
    let server = MockServer::start_async().await;
    let api = admin_api(&server);

    let routes = [
        ("/benefits", json!([{"id": 1, "text": "Handmade"}])),
        ("/lovePoints", json!([{"id": 2, "text": "Microwave safe"}])),
        ("/productDetails", json!([{"id": 3, "label": "Capacity"}])),
        ("/discounts", json!([{"code": "SPRING", "percent": 10}])),
        ("/collections", json!([{"id": 4, "name": "Bowls"}])),
    ];

    let mut mocks = Vec::new();
    for (path, body) in &routes {
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(*path);
                then.status(200).json_body(body.clone());
            })
            .await;
        mocks.push(mock);
    }

    assert_eq!(api.products.get_benefits().await?, routes[0].1);
    assert_eq!(api.products.get_love_points().await?, routes[1].1);
    assert_eq!(api.products.get_product_details().await?, routes[2].1);
    assert_eq!(api.products.get_discounts().await?, routes[3].1);
    assert_eq!(api.products.get_products().await?, routes[4].1);

    for mock in &mocks {
        assert_eq!(mock.hits_async().await, 1);
    }
    Ok(())
}

#[tokio::test]
async fn test_product_seo_lifecycle_paths() -> Result<()> {
    let server = MockServer::start_async().await;
    let api = admin_api(&server);
    let seo = json!({"productId": 9, "metaTitle": "Ash glaze vase"});

    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/product-seo").json_body(seo.clone());
            then.status(201).json_body(json!({"id": 3, "productId": 9}));
        })
        .await;
    let update_mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/product-seo/3").json_body(seo.clone());
            then.status(200).json_body(json!({"id": 3, "updated": true}));
        })
        .await;
    let get_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/product-seo/product/9");
            then.status(200).json_body(json!({"id": 3, "productId": 9}));
        })
        .await;

    let created = api.products.create_product_seo(&seo).await?;
    let updated = api.products.update_product_seo(3, &seo).await?;
    let fetched = api.products.get_product_seo_by_product_id(9).await?;

    create_mock.assert_async().await;
    update_mock.assert_async().await;
    get_mock.assert_async().await;
    assert_eq!(created, json!({"id": 3, "productId": 9}));
    assert_eq!(updated, json!({"id": 3, "updated": true}));
    assert_eq!(fetched, json!({"id": 3, "productId": 9}));
    Ok(())
}
