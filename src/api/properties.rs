//! Property API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::property::{CreateProperty, Property, UpdateProperty},
};

/// List all properties
#[utoipa::path(
    get,
    path = "/properties",
    tag = "properties",
    responses(
        (status = 200, description = "Property list", body = Vec<Property>)
    )
)]
pub async fn list_properties(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Property>>> {
    let properties = state.services.properties.list().await?;
    Ok(Json(properties))
}

/// Get property by ID
#[utoipa::path(
    get,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property details", body = Property)
    )
)]
pub async fn get_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Property>> {
    let property = state.services.properties.get_by_id(id).await?;
    Ok(Json(property))
}

/// Create property
#[utoipa::path(
    post,
    path = "/properties",
    tag = "properties",
    request_body = CreateProperty,
    responses(
        (status = 201, description = "Property created", body = Property)
    )
)]
pub async fn create_property(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = state.services.properties.create(&data).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Update property
#[utoipa::path(
    put,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property updated", body = Property)
    )
)]
pub async fn update_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    let property = state.services.properties.update(id, &data).await?;
    Ok(Json(property))
}

/// Delete property
#[utoipa::path(
    delete,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    responses(
        (status = 204, description = "Property deleted")
    )
)]
pub async fn delete_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.properties.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
