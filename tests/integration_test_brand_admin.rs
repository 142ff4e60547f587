mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use common::{brand, parse_body, TestApp, ADMIN_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn put_brands(app: &TestApp, host: &str, token: Option<&str>, payload: Value) -> Response {
    let mut builder = Request::builder()
        .method("PUT")
        .uri("/api/v1/brands")
        .header(header::HOST, host)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    app.router.clone().oneshot(builder.body(Body::from(payload.to_string())).unwrap()).await.unwrap()
}

async fn admin_get(app: &TestApp, uri: &str) -> Response {
    app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN))
            .body(Body::empty())
            .unwrap()
    ).await.unwrap()
}

fn two_brands() -> Value {
    json!([
        {"id": "a", "name": "Alpha", "domain": "a.example.com", "primaryColor": "#111111"},
        {"id": "b", "name": "Beta", "domain": "b.example.com", "isPrimary": true, "brandType": "interest"}
    ])
}

#[tokio::test]
async fn test_replace_requires_admin_token() {
    let app = TestApp::new().await;

    let res = put_brands(&app, "a.example.com", None, two_brands()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = put_brands(&app, "a.example.com", Some("wrong"), two_brands()).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Nothing was written.
    let all = parse_body(admin_get(&app, "/api/v1/brands").await).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["id"], "default");
}

#[tokio::test]
async fn test_admin_disabled_without_configured_token() {
    let app = TestApp::with_config(|c| c.admin_api_token = None).await;

    let res = put_brands(&app, "a.example.com", Some(ADMIN_TOKEN), two_brands()).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(admin_get(&app, "/api/v1/brands").await.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_replace_round_trips_in_order() {
    let app = TestApp::new().await;

    let res = put_brands(&app, "a.example.com", Some(ADMIN_TOKEN), two_brands()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["persist"]["status"], "saved");
    assert_eq!(body["count"], 2);

    let all = parse_body(admin_get(&app, "/api/v1/brands").await).await;
    let ids: Vec<&str> = all.as_array().unwrap().iter().map(|b| b["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(all[0]["primaryColor"], "#111111");
    assert_eq!(all[0]["isActive"], true);
    assert_eq!(all[1]["brandType"], "interest");

    let one = parse_body(admin_get(&app, "/api/v1/brands/b").await).await;
    assert_eq!(one["name"], "Beta");

    assert_eq!(admin_get(&app, "/api/v1/brands/zzz").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_ids_are_rejected_and_registry_kept() {
    let app = TestApp::new().await;
    app.seed_brands(&[brand("keep", "keep.example.com", true, true)]).await;

    let res = put_brands(&app, "keep.example.com", Some(ADMIN_TOKEN), json!([
        {"id": "x", "name": "X"},
        {"id": "x", "name": "X again"}
    ])).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("Duplicate brand id"));

    let all = parse_body(admin_get(&app, "/api/v1/brands").await).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["id"], "keep");
}

#[tokio::test]
async fn test_replace_refreshes_current_brand_without_reresolving() {
    let app = TestApp::new().await;
    app.seed_brands(&[
        brand("a", "a.example.com", true, false),
        brand("b", "b.example.com", true, true),
    ]).await;

    let res = put_brands(&app, "a.example.com", Some(ADMIN_TOKEN), json!([
        {"id": "a", "name": "Alpha Renamed", "domain": "a.example.com"},
        {"id": "b", "name": "Beta", "domain": "b.example.com", "isPrimary": true}
    ])).await;
    let body = parse_body(res).await;
    assert_eq!(body["currentBrand"]["id"], "a");
    assert_eq!(body["currentBrand"]["name"], "Alpha Renamed");

    let site = parse_body(app.get("a.example.com", "/api/v1/site/brand").await).await;
    assert_eq!(site["brand"]["name"], "Alpha Renamed");
}

#[tokio::test]
async fn test_replace_with_empty_set_restores_builtin() {
    let app = TestApp::new().await;
    app.seed_brands(&[brand("a", "a.example.com", true, true)]).await;

    let res = put_brands(&app, "a.example.com", Some(ADMIN_TOKEN), json!([])).await;
    assert_eq!(res.status(), StatusCode::OK);

    let site = parse_body(app.get("a.example.com", "/api/v1/site/brand").await).await;
    assert_eq!(site["brand"]["id"], "default");
}

#[tokio::test]
async fn test_token_must_match_exactly() {
    let app = TestApp::new().await;

    let padded = format!("{} ", ADMIN_TOKEN);
    let res = put_brands(&app, "a.example.com", Some(&padded), two_brands()).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let prefix = &ADMIN_TOKEN[..ADMIN_TOKEN.len() - 1];
    let res = put_brands(&app, "a.example.com", Some(prefix), two_brands()).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = put_brands(&app, "a.example.com", Some(ADMIN_TOKEN), two_brands()).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_removing_current_brand_falls_back_to_primary() {
    let app = TestApp::new().await;
    app.seed_brands(&[
        brand("a", "a.example.com", true, false),
        brand("b", "b.example.com", true, true),
    ]).await;

    let res = put_brands(&app, "a.example.com", Some(ADMIN_TOKEN), json!([
        {"id": "b", "name": "Beta", "domain": "b.example.com", "isPrimary": true}
    ])).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["currentBrand"]["id"], "b");

    let site = parse_body(app.get("a.example.com", "/api/v1/site/brand").await).await;
    assert_eq!(site["brand"]["id"], "b");
}

#[tokio::test]
async fn test_unknown_feature_toggles_are_stored_and_served() {
    let app = TestApp::new().await;

    let res = put_brands(&app, "a.example.com", Some(ADMIN_TOKEN), json!([
        {"id": "a", "name": "Alpha", "domain": "a.example.com", "isPrimary": true,
         "features": {"deals": false, "loyaltyCards": false, "marketplace": true}}
    ])).await;
    assert_eq!(res.status(), StatusCode::OK);

    let stored = parse_body(admin_get(&app, "/api/v1/brands/a").await).await;
    assert_eq!(stored["features"]["deals"], false);
    assert_eq!(stored["features"]["loyaltyCards"], false);
    assert_eq!(stored["features"]["marketplace"], true);
    assert_eq!(stored["features"]["events"], true);
}
