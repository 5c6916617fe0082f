mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{Value, json};
use test_context::test_context;

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_suggest_recipes_caprese(app: &mut TestApp) {
    let response = app
        .server
        .post("/api/recipes")
        .json(&json!({
            "ingredients": ["tomatoes", "basil", "olive oil", "cheese", "balsamic vinegar"]
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let caprese = body
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["title"] == "Caprese Salad")
        .unwrap();

    assert_eq!(caprese["matchedIngredients"].as_array().unwrap().len(), 5);
    assert!(caprese["missingIngredients"].as_array().unwrap().is_empty());
    assert_eq!(caprese["cookTime"], "10 minutes");
    assert_eq!(caprese["difficulty"], "Easy");
    assert!(caprese["id"].is_string());
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_suggest_recipes_peppers_and_onions(app: &mut TestApp) {
    let response = app
        .server
        .post("/api/recipes")
        .json(&json!({ "ingredients": ["bell peppers", "onions"] }))
        .await;

    response.assert_status_ok();
    let titles = titles(&response.json::<Value>());

    assert!(titles.contains(&"Vegetable Stir Fry".to_string()));
    assert!(titles.contains(&"Cheese Omelette".to_string()));
    assert!(!titles.contains(&"Caprese Salad".to_string()));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_suggest_recipes_without_match_is_empty(app: &mut TestApp) {
    let response = app
        .server
        .post("/api/recipes")
        .json(&json!({ "ingredients": ["chocolate"] }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_suggest_recipes_rejects_malformed_bodies(app: &mut TestApp) {
    let bodies = [
        json!({}),
        json!({ "ingredients": [] }),
        json!({ "ingredients": [1, 2] }),
        json!({ "ingredients": "tomatoes" }),
    ];

    for body in bodies {
        let response = app
            .server
            .post("/api/recipes")
            .json(&body)
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            response.json::<Value>()["error"].is_string(),
            "missing error for {}",
            body
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_empty_ingredient_list_message(app: &mut TestApp) {
    let response = app
        .server
        .post("/api/recipes")
        .json(&json!({ "ingredients": [] }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid ingredients provided" }));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_catalog_lists_builtin_templates(app: &mut TestApp) {
    let response = app.server.get("/api/recipes/catalog").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let templates = body["data"].as_array().unwrap();
    assert_eq!(templates.len(), 5);
    assert_eq!(templates[0]["title"], "Pasta Primavera");
    assert!(templates[0]["possibleIngredients"].is_array());
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_health(app: &mut TestApp) {
    let response = app.server.get("/api/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "catalogSize": 5 }));
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_openapi_document_is_served(app: &mut TestApp) {
    let response = app.server.get("/api/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert!(body["paths"]["/api/recipes"].is_object());
    assert!(body["paths"]["/api/sessions/{session_id}"].is_object());
}
