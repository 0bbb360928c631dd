use axum::http::StatusCode;
use axum_test::TestServer;
use inv_axum::router;
use inv_core::models::MAX_NAME_LEN;
use inv_json::{JsonStore, config::JsonConfig};
use rstest::rstest;
use serde_json::{Value, json};

async fn server() -> TestServer {
    let store = JsonStore::open(&JsonConfig::default()).await.unwrap();
    TestServer::new(router(store).0).unwrap()
}

fn product(id: &str, name: &str, quantity: u32, category_id: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "importDate": "2024-01-01",
        "quantity": quantity,
        "categoryId": category_id,
    })
}

#[tokio::test]
async fn health_check_responds() {
    let server = server().await;
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = server().await;
    let response = server.get("/docs/api.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["info"]["title"], "Inventory API");
}

#[tokio::test]
async fn insert_then_fetch_by_id_returns_the_stored_record() {
    let server = server().await;

    let body = product("P3", "X", 1, "C1");
    let response = server.post("/products").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), body);

    let response = server.get("/products").add_query_param("id", "P3").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), body);
}

#[tokio::test]
async fn fetch_of_an_unknown_id_is_not_found() {
    let server = server().await;
    let response = server.get("/products").add_query_param("id", "P404").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_sorts_by_quantity_with_stable_ties() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P1", "first", 5, "C1"))
        .await;
    server
        .post("/products")
        .json(&product("P2", "second", 2, "C1"))
        .await;
    server
        .post("/products")
        .json(&product("P4", "tied with P2", 2, "C1"))
        .await;

    let response = server.get("/products").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let listing = response.json::<Value>();
    let ids: Vec<&str> = listing["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    // P4 ties with P2 on quantity and stays behind it
    assert_eq!(ids, ["P2", "P4", "P1"]);
}

#[tokio::test]
async fn search_matches_name_substrings_case_insensitively() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P1", "Áo Sơ Mi", 5, "C1"))
        .await;
    server
        .post("/products")
        .json(&product("P2", "Quần Tây", 2, "C2"))
        .await;

    let response = server.get("/products").add_query_param("name", "sơ").await;
    let listing = response.json::<Value>();
    assert_eq!(listing["products"].as_array().unwrap().len(), 1);
    assert_eq!(listing["products"][0]["id"], "P1");
}

#[tokio::test]
async fn category_filter_returns_only_exact_matches() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P1", "shirt", 5, "C1"))
        .await;
    server
        .post("/products")
        .json(&product("P2", "trousers", 2, "C2"))
        .await;

    let response = server
        .get("/products")
        .add_query_param("categoryId", "C2")
        .await;
    let listing = response.json::<Value>();
    assert_eq!(listing["products"].as_array().unwrap().len(), 1);
    assert_eq!(listing["products"][0]["id"], "P2");
}

#[rstest]
#[case::at_limit(MAX_NAME_LEN, StatusCode::CREATED)]
#[case::over_limit(MAX_NAME_LEN + 1, StatusCode::BAD_REQUEST)]
#[tokio::test]
async fn create_enforces_the_name_length_limit(
    #[case] len: usize,
    #[case] expected: StatusCode,
) {
    let server = server().await;
    let response = server
        .post("/products")
        .json(&product("P1", &"a".repeat(len), 1, "C1"))
        .await;
    assert_eq!(response.status_code(), expected);
}

#[tokio::test]
async fn rejected_insert_leaves_the_dataset_unchanged() {
    let server = server().await;
    let response = server
        .post("/products")
        .json(&product("P1", &"a".repeat(MAX_NAME_LEN + 1), 1, "C1"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let listing = server.get("/products").await.json::<Value>();
    assert_eq!(listing["products"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn duplicate_ids_are_permitted_and_lookup_takes_the_first() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P1", "original", 1, "C1"))
        .await;
    server
        .post("/products")
        .json(&product("P1", "duplicate", 2, "C1"))
        .await;

    let response = server.get("/products").add_query_param("id", "P1").await;
    assert_eq!(response.json::<Value>()["name"], "original");
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P1", "before", 1, "C1"))
        .await;

    let replacement = product("P1", "after", 9, "C2");
    let response = server.put("/products").json(&replacement).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), replacement);

    let response = server.get("/products").add_query_param("id", "P1").await;
    assert_eq!(response.json::<Value>(), replacement);
}

#[tokio::test]
async fn update_of_an_unknown_id_is_not_found_and_changes_nothing() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P1", "only", 1, "C1"))
        .await;

    let response = server
        .put("/products")
        .json(&product("P9", "ghost", 1, "C1"))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let listing = server.get("/products").await.json::<Value>();
    assert_eq!(listing["products"].as_array().unwrap().len(), 1);
    assert_eq!(listing["products"][0]["name"], "only");
}

#[tokio::test]
async fn update_enforces_the_name_length_limit() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P1", "fine", 1, "C1"))
        .await;

    let response = server
        .put("/products")
        .json(&product("P1", &"a".repeat(MAX_NAME_LEN + 1), 1, "C1"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let server = server().await;
    server
        .post("/products")
        .json(&product("P3", "X", 1, "C1"))
        .await;
    server
        .post("/products")
        .json(&product("P5", "survivor", 2, "C1"))
        .await;

    let response = server.delete("/products").add_query_param("id", "P3").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "deleted product P3" })
    );

    let response = server.get("/products").add_query_param("id", "P3").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let listing = server.get("/products").await.json::<Value>();
    assert_eq!(listing["products"].as_array().unwrap().len(), 1);
    assert_eq!(listing["products"][0]["id"], "P5");
}

#[tokio::test]
async fn delete_without_an_id_is_a_bad_request() {
    let server = server().await;
    let response = server.delete("/products").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_of_an_unknown_id_is_not_found() {
    let server = server().await;
    let response = server.delete("/products").add_query_param("id", "P404").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categories_ride_along_with_every_listing() {
    // categories cannot be created through the API, so seed them through a
    // file-backed store
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(
        &path,
        serde_json::to_string_pretty(&json!({
            "products": [product("P1", "Áo Sơ Mi", 5, "C1")],
            "categories": [
                { "id": "C1", "name": "Áo" },
                { "id": "C2", "name": "Quần" },
            ],
        }))
        .unwrap(),
    )
    .unwrap();

    let store = JsonStore::open(&JsonConfig {
        database_path: Some(path),
        create_if_missing: false,
    })
    .await
    .unwrap();
    let server = TestServer::new(router(store).0).unwrap();

    // even a search that excludes every product keeps the full category list
    let listing = server
        .get("/products")
        .add_query_param("name", "no such product")
        .await
        .json::<Value>();
    assert_eq!(listing["products"].as_array().unwrap().len(), 0);
    assert_eq!(listing["categories"].as_array().unwrap().len(), 2);
}
