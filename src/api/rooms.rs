//! Room API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    engine::rooms::CompatibilityResult,
    error::AppResult,
    models::room::{CreateRoom, Room, UpdateRoom},
};

/// Query parameters for the suitable-rooms search
#[derive(Debug, Deserialize, IntoParams)]
pub struct SuitableRoomsQuery {
    /// Attendee count the room must seat
    pub attendees: i32,
}

/// Room compatibility check request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomCompatibilityRequest {
    /// Room name (case-insensitive)
    pub room_name: String,
    /// Planned equipment, free-text names
    #[serde(default)]
    pub equipment_list: Vec<String>,
}

/// List rooms for a property
#[utoipa::path(
    get,
    path = "/properties/{property_id}/rooms",
    tag = "rooms",
    params(("property_id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Room list", body = Vec<Room>)
    )
)]
pub async fn list_rooms(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.services.rooms.list(property_id).await?;
    Ok(Json(rooms))
}

/// Get room by ID
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = Room)
    )
)]
pub async fn get_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Room>> {
    let room = state.services.rooms.get_by_id(id).await?;
    Ok(Json(room))
}

/// Create room
#[utoipa::path(
    post,
    path = "/properties/{property_id}/rooms",
    tag = "rooms",
    params(("property_id" = i32, Path, description = "Property ID")),
    request_body = CreateRoom,
    responses(
        (status = 201, description = "Room created", body = Room)
    )
)]
pub async fn create_room(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let room = state.services.rooms.create(property_id, &data).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// Update room
#[utoipa::path(
    put,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Room updated", body = Room)
    )
)]
pub async fn update_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    let room = state.services.rooms.update(id, &data).await?;
    Ok(Json(room))
}

/// Delete room
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted")
    )
)]
pub async fn delete_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.rooms.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Find rooms that can host an attendee count, tightest fit first
#[utoipa::path(
    get,
    path = "/properties/{property_id}/rooms/suitable",
    tag = "rooms",
    params(
        ("property_id" = i32, Path, description = "Property ID"),
        SuitableRoomsQuery
    ),
    responses(
        (status = 200, description = "Suitable rooms, ascending by capacity", body = Vec<Room>)
    )
)]
pub async fn find_suitable_rooms(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Query(query): Query<SuitableRoomsQuery>,
) -> AppResult<Json<Vec<Room>>> {
    let rooms = state
        .services
        .rooms
        .find_suitable(property_id, query.attendees)
        .await?;
    Ok(Json(rooms))
}

/// Check a room's built-in capabilities against planned equipment
#[utoipa::path(
    post,
    path = "/properties/{property_id}/rooms/capabilities",
    tag = "rooms",
    params(("property_id" = i32, Path, description = "Property ID")),
    request_body = RoomCompatibilityRequest,
    responses(
        (status = 200, description = "Compatibility result", body = CompatibilityResult)
    )
)]
pub async fn check_room_capabilities(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<RoomCompatibilityRequest>,
) -> AppResult<Json<CompatibilityResult>> {
    let result = state
        .services
        .rooms
        .check_compatibility(property_id, &data.room_name, &data.equipment_list)
        .await?;
    Ok(Json(result))
}
