//! Inventory API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::inventory::{
        CreateInventoryItem, InventoryItem, InventoryListResponse, InventoryQuery,
        UpdateInventoryItem,
    },
};

/// Search a property's inventory
#[utoipa::path(
    get,
    path = "/properties/{property_id}/inventory",
    tag = "inventory",
    params(
        ("property_id" = i32, Path, description = "Property ID"),
        InventoryQuery
    ),
    responses(
        (status = 200, description = "Inventory list", body = InventoryListResponse)
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<InventoryListResponse>> {
    let response = state.services.inventory.fetch(property_id, &query).await?;
    Ok(Json(response))
}

/// Get inventory item by ID
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item details", body = InventoryItem)
    )
)]
pub async fn get_inventory_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.services.inventory.get_by_id(id).await?;
    Ok(Json(item))
}

/// Create inventory item
#[utoipa::path(
    post,
    path = "/properties/{property_id}/inventory",
    tag = "inventory",
    params(("property_id" = i32, Path, description = "Property ID")),
    request_body = CreateInventoryItem,
    responses(
        (status = 201, description = "Inventory item created", body = InventoryItem)
    )
)]
pub async fn create_inventory_item(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let item = state.services.inventory.create(property_id, &data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update inventory item
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = i32, Path, description = "Inventory item ID")),
    request_body = UpdateInventoryItem,
    responses(
        (status = 200, description = "Inventory item updated", body = InventoryItem)
    )
)]
pub async fn update_inventory_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateInventoryItem>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.services.inventory.update(id, &data).await?;
    Ok(Json(item))
}

/// Delete inventory item
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 204, description = "Inventory item deleted")
    )
)]
pub async fn delete_inventory_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.inventory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
