//! HTTP-level integration tests for the `/pcs` and `/links` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn rig_a() -> Value {
    json!({
        "name": "Rig A",
        "info": "gaming",
        "parts": [{"type": "CPU", "brand": "AMD", "model": "5800X", "qty": 1}],
        "images": [{"link": "img1.png"}],
    })
}

/// Create a build and return `(edit_id, view_id)`.
async fn create(pool: &PgPool, body: Value) -> (String, String) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/pcs", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    (
        json["editId"].as_str().unwrap().to_string(),
        json["viewId"].as_str().unwrap().to_string(),
    )
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_link_pair(pool: PgPool) {
    let (edit_id, view_id) = create(&pool, rig_a()).await;
    assert_ne!(edit_id, view_id);
    assert_eq!(edit_id.len(), 32);
    assert_eq!(view_id.len(), 32);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_unknown_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/pcs",
        json!({"name": "Rig", "info": "x", "price": 1200}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_malformed_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/v1/pcs", "{\"name\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_requires_name_and_info(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/pcs", json!({"name": "", "info": "x"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/pcs", json!({"name": "Rig"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_negative_qty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/pcs",
        json!({"name": "Rig", "info": "x", "parts": [{"type": "Fan", "qty": -2}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_via_view_token_hides_edit_token(pool: PgPool) {
    let (edit_id, view_id) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/pcs/{view_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Rig A");
    assert_eq!(json["info"], "gaming");
    assert_eq!(json["parts"].as_array().unwrap().len(), 1);
    assert_eq!(json["parts"][0]["model"], "5800X");
    assert_eq!(json["images"][0]["link"], "img1.png");
    assert_eq!(json["links"]["viewId"], view_id);
    assert!(json["links"].get("editId").is_none());

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/pcs/{edit_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["links"]["editId"], edit_id);
    assert_eq!(json["links"]["viewId"], view_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_token_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pcs/0123456789abcdef0123456789abcdef").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_links_endpoint(pool: PgPool) {
    let (edit_id, view_id) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/links/{edit_id}")).await).await;
    assert_eq!(json, json!({"editId": edit_id, "viewId": view_id}));

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/links/{view_id}")).await).await;
    assert_eq!(json, json!({"viewId": view_id}));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/links/nope").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pages_forward(pool: PgPool) {
    for i in 0..4 {
        create(
            &pool,
            json!({"name": format!("Build {i}"), "info": "listed"}),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/pcs/0/3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page[0]["name"], "Build 0");
    assert!(page.iter().all(|e| e["viewId"].is_string()));

    let last = page[2]["pcId"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    let rest = body_json(get(app, &format!("/api/v1/pcs/{last}/3")).await).await;
    let rest = rest.as_array().unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0]["name"], "Build 3");

    // Each entry opens the same build through its view token.
    let view_id = rest[0]["viewId"].as_str().unwrap();
    let app = common::build_test_app(pool);
    let build = body_json(get(app, &format!("/api/v1/pcs/{view_id}")).await).await;
    assert_eq!(build["pcId"], rest[0]["pcId"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_caps_page_size(pool: PgPool) {
    for i in 0..3 {
        create(&pool, json!({"name": format!("B{i}"), "info": "x"})).await;
    }

    let mut config = common::test_config();
    config.max_page_size = 2;
    let app = common::build_test_app_with(pool, config);
    let page = body_json(get(app, "/api/v1/pcs/0/50").await).await;
    assert_eq!(page.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_page_size_zero_is_empty(pool: PgPool) {
    for i in 0..3 {
        create(&pool, json!({"name": format!("B{i}"), "info": "x"})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pcs/0/0").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_rejects_negative_page_size(pool: PgPool) {
    create(&pool, rig_a()).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pcs/0/-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_rejects_non_numeric_bounds(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pcs/zero/10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_view_token_returns_403(pool: PgPool) {
    let (_edit_id, view_id) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/pcs/{view_id}"),
        json!({"name": "Rig A+", "info": "gaming"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/pcs/{view_id}")).await).await;
    assert_eq!(json["name"], "Rig A");
    assert_eq!(json["parts"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_unknown_token_returns_403(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/pcs/0123456789abcdef0123456789abcdef",
        json!({"name": "n", "info": "i"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_requires_name_and_info(pool: PgPool) {
    let (edit_id, _view_id) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/pcs/{edit_id}"),
        json!({"name": "Rig A+", "info": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fetched_build_can_be_submitted_back(pool: PgPool) {
    let (edit_id, _view_id) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool.clone());
    let mut fetched = body_json(get(app, &format!("/api/v1/pcs/{edit_id}")).await).await;
    fetched["name"] = json!("Rig A (tuned)");

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/v1/pcs/{edit_id}"), fetched).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Rig A (tuned)");
    assert_eq!(json["parts"][0]["brand"], "AMD");
    assert_eq!(json["images"][0]["link"], "img1.png");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_with_view_token_returns_403(pool: PgPool) {
    let (_edit_id, view_id) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/pcs/{view_id}")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/pcs/{view_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_with_edit_token_removes_build(pool: PgPool) {
    let (edit_id, view_id) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/pcs/{edit_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for token in [&edit_id, &view_id] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/pcs/{token}")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let app = common::build_test_app(pool);
    let page = body_json(get(app, "/api/v1/pcs/0/10").await).await;
    assert!(page.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rig_a_scenario(pool: PgPool) {
    let (e1, v1) = create(&pool, rig_a()).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/pcs/{v1}")).await).await;
    assert_eq!(json["name"], "Rig A");
    assert_eq!(json["parts"].as_array().unwrap().len(), 1);
    assert_eq!(json["images"].as_array().unwrap().len(), 1);

    let update = json!({"name": "Rig A+", "info": "gaming", "parts": [], "images": []});

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/pcs/{v1}"), update.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/pcs/{e1}"), update).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/pcs/{e1}")).await).await;
    assert_eq!(json["name"], "Rig A+");
    assert!(json["parts"].as_array().unwrap().is_empty());
    assert!(json["images"].as_array().unwrap().is_empty());
}
