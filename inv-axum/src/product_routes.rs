//! REST API endpoints for product records.
//!
//! One resource carries the four operations: fetch/search, insert, replace,
//! delete. Every handler performs a single load → compute → (save) round
//! trip against the dataset store; no state is carried between requests,
//! and concurrent mutations are last-writer-wins by design of the store.

use crate::ApiStore;
use aide::axum::{ApiRouter, routing::get};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use inv_core::models::{Dataset, Product, ProductId, ProductQuery};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// Creates a router with product-related endpoints.
pub fn router<T: ApiStore>() -> ApiRouter<T> {
    ApiRouter::new().api_route(
        "/",
        get(fetch_products::<T>)
            .post(create_product::<T>)
            .put(update_product::<T>)
            .delete(delete_product::<T>),
    )
}

/// Successful response to the fetch/search endpoint.
///
/// A point lookup (`?id=`) returns the bare product; a search returns the
/// filtered products together with the full category list.
#[derive(Serialize, JsonSchema)]
#[serde(untagged)]
#[schemars(inline)]
enum FetchResponse {
    /// A single product selected by id
    Product(Product),
    /// The filtered listing plus the category references
    Listing(Dataset),
}

/// Acknowledgment returned by the delete endpoint.
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct Confirmation {
    /// A one-line description of what happened
    message: String,
}

/// Query parameters for the delete endpoint.
#[derive(Deserialize, JsonSchema)]
#[schemars(inline)]
struct DeleteQuery {
    /// The id of the product to remove
    id: Option<ProductId>,
}

/// Fetch a single product, or search the product list.
///
/// With an `id` parameter this is a point lookup and the other parameters
/// are ignored. Otherwise the product list is filtered by the optional
/// `name` substring (case-insensitive) and exact `categoryId`, then sorted
/// ascending by quantity; the category list rides along unfiltered.
///
/// # Returns
///
/// - `200 OK`: the product, or the filtered listing
/// - `404 Not Found`: no product carries the requested id
/// - `500 Internal Server Error`: the dataset could not be read
async fn fetch_products<T: ApiStore>(
    State(store): State<T>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<FetchResponse>, (StatusCode, String)> {
    let dataset = store.load().await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to read the dataset".to_string(),
        )
    })?;

    if let Some(id) = &query.id {
        let product = dataset
            .product(id)
            .cloned()
            .ok_or((StatusCode::NOT_FOUND, format!("unknown product {id}")))?;
        Ok(Json(FetchResponse::Product(product)))
    } else {
        Ok(Json(FetchResponse::Listing(dataset.search(&query))))
    }
}

/// Create a new product record.
///
/// The record is appended exactly as supplied: the caller provides the id,
/// and neither id uniqueness nor the category reference is checked.
///
/// # Returns
///
/// - `201 Created`: the stored record
/// - `400 Bad Request`: the name exceeds the length limit
/// - `500 Internal Server Error`: the dataset could not be read or written
async fn create_product<T: ApiStore>(
    State(store): State<T>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, String)> {
    product
        .validate()
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    let mut dataset = store.load().await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to read the dataset".to_string(),
        )
    })?;

    dataset.products.push(product.clone());

    store.save(dataset).await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to save the dataset".to_string(),
        )
    })?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace an existing product record.
///
/// This is a whole-record replacement, not a patch: the body must carry
/// every field, and the first product whose id matches is overwritten.
///
/// # Returns
///
/// - `200 OK`: the replacement record
/// - `400 Bad Request`: the name exceeds the length limit
/// - `404 Not Found`: no product carries the supplied id
/// - `500 Internal Server Error`: the dataset could not be read or written
async fn update_product<T: ApiStore>(
    State(store): State<T>,
    Json(product): Json<Product>,
) -> Result<Json<Product>, (StatusCode, String)> {
    product
        .validate()
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    let mut dataset = store.load().await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to read the dataset".to_string(),
        )
    })?;

    dataset.replace(product.clone()).ok_or((
        StatusCode::NOT_FOUND,
        format!("unknown product {}", product.id),
    ))?;

    store.save(dataset).await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to save the dataset".to_string(),
        )
    })?;

    Ok(Json(product))
}

/// Delete a product record.
///
/// Removes the first product whose id matches the `id` query parameter.
///
/// # Returns
///
/// - `200 OK`: a confirmation message
/// - `400 Bad Request`: the `id` parameter is missing
/// - `404 Not Found`: no product carries the supplied id
/// - `500 Internal Server Error`: the dataset could not be read or written
async fn delete_product<T: ApiStore>(
    State(store): State<T>,
    Query(DeleteQuery { id }): Query<DeleteQuery>,
) -> Result<Json<Confirmation>, (StatusCode, String)> {
    let id = id.ok_or((StatusCode::BAD_REQUEST, "missing product id".to_string()))?;

    let mut dataset = store.load().await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to read the dataset".to_string(),
        )
    })?;

    dataset
        .remove(&id)
        .ok_or((StatusCode::NOT_FOUND, format!("unknown product {id}")))?;

    store.save(dataset).await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to save the dataset".to_string(),
        )
    })?;

    Ok(Json(Confirmation {
        message: format!("deleted product {id}"),
    }))
}
