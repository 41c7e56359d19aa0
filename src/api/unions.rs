//! Labor union API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::labor_union::{
        CreateLaborUnion, CreateUnionEquipmentRequirement, CreateUnionScheduleRule,
        CreateUnionVenueRule, LaborUnion, UnionEquipmentRequirement, UnionScheduleRule,
        UnionVenueRule, UpdateLaborUnion,
    },
};

/// List unions for a property
#[utoipa::path(
    get,
    path = "/properties/{property_id}/unions",
    tag = "unions",
    params(("property_id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Union list", body = Vec<LaborUnion>)
    )
)]
pub async fn list_unions(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
) -> AppResult<Json<Vec<LaborUnion>>> {
    let unions = state.services.unions.list(property_id).await?;
    Ok(Json(unions))
}

/// Get union by ID
#[utoipa::path(
    get,
    path = "/unions/{id}",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    responses(
        (status = 200, description = "Union details", body = LaborUnion)
    )
)]
pub async fn get_union(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LaborUnion>> {
    let union = state.services.unions.get_by_id(id).await?;
    Ok(Json(union))
}

/// Create union
#[utoipa::path(
    post,
    path = "/properties/{property_id}/unions",
    tag = "unions",
    params(("property_id" = i32, Path, description = "Property ID")),
    request_body = CreateLaborUnion,
    responses(
        (status = 201, description = "Union created", body = LaborUnion)
    )
)]
pub async fn create_union(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<CreateLaborUnion>,
) -> AppResult<(StatusCode, Json<LaborUnion>)> {
    let union = state.services.unions.create(property_id, &data).await?;
    Ok((StatusCode::CREATED, Json(union)))
}

/// Update union
#[utoipa::path(
    put,
    path = "/unions/{id}",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    request_body = UpdateLaborUnion,
    responses(
        (status = 200, description = "Union updated", body = LaborUnion)
    )
)]
pub async fn update_union(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateLaborUnion>,
) -> AppResult<Json<LaborUnion>> {
    let union = state.services.unions.update(id, &data).await?;
    Ok(Json(union))
}

/// Delete union
#[utoipa::path(
    delete,
    path = "/unions/{id}",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    responses(
        (status = 204, description = "Union deleted")
    )
)]
pub async fn delete_union(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.unions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a union's schedule rules
#[utoipa::path(
    get,
    path = "/unions/{id}/schedule-rules",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    responses(
        (status = 200, description = "Schedule rule list", body = Vec<UnionScheduleRule>)
    )
)]
pub async fn list_schedule_rules(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<UnionScheduleRule>>> {
    let rules = state.services.unions.list_schedule_rules(id).await?;
    Ok(Json(rules))
}

/// Add a schedule rule to a union
#[utoipa::path(
    post,
    path = "/unions/{id}/schedule-rules",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    request_body = CreateUnionScheduleRule,
    responses(
        (status = 201, description = "Schedule rule created", body = UnionScheduleRule)
    )
)]
pub async fn create_schedule_rule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateUnionScheduleRule>,
) -> AppResult<(StatusCode, Json<UnionScheduleRule>)> {
    let rule = state.services.unions.create_schedule_rule(id, &data).await?;
    Ok((StatusCode::CREATED, Json(rule)))
}

/// Delete a schedule rule
#[utoipa::path(
    delete,
    path = "/schedule-rules/{id}",
    tag = "unions",
    params(("id" = i32, Path, description = "Schedule rule ID")),
    responses(
        (status = 204, description = "Schedule rule deleted")
    )
)]
pub async fn delete_schedule_rule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.unions.delete_schedule_rule(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a union's equipment crew requirements
#[utoipa::path(
    get,
    path = "/unions/{id}/equipment-requirements",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    responses(
        (status = 200, description = "Equipment requirement list", body = Vec<UnionEquipmentRequirement>)
    )
)]
pub async fn list_equipment_requirements(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<UnionEquipmentRequirement>>> {
    let requirements = state.services.unions.list_equipment_requirements(id).await?;
    Ok(Json(requirements))
}

/// Add an equipment crew requirement to a union
#[utoipa::path(
    post,
    path = "/unions/{id}/equipment-requirements",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    request_body = CreateUnionEquipmentRequirement,
    responses(
        (status = 201, description = "Equipment requirement created", body = UnionEquipmentRequirement)
    )
)]
pub async fn create_equipment_requirement(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateUnionEquipmentRequirement>,
) -> AppResult<(StatusCode, Json<UnionEquipmentRequirement>)> {
    let requirement = state
        .services
        .unions
        .create_equipment_requirement(id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(requirement)))
}

/// Delete an equipment crew requirement
#[utoipa::path(
    delete,
    path = "/equipment-requirements/{id}",
    tag = "unions",
    params(("id" = i32, Path, description = "Equipment requirement ID")),
    responses(
        (status = 204, description = "Equipment requirement deleted")
    )
)]
pub async fn delete_equipment_requirement(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.unions.delete_equipment_requirement(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a union's venue rules
#[utoipa::path(
    get,
    path = "/unions/{id}/venue-rules",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    responses(
        (status = 200, description = "Venue rule list", body = Vec<UnionVenueRule>)
    )
)]
pub async fn list_venue_rules(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<UnionVenueRule>>> {
    let rules = state.services.unions.list_venue_rules(id).await?;
    Ok(Json(rules))
}

/// Add a venue rule to a union
#[utoipa::path(
    post,
    path = "/unions/{id}/venue-rules",
    tag = "unions",
    params(("id" = i32, Path, description = "Union ID")),
    request_body = CreateUnionVenueRule,
    responses(
        (status = 201, description = "Venue rule created", body = UnionVenueRule)
    )
)]
pub async fn create_venue_rule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateUnionVenueRule>,
) -> AppResult<(StatusCode, Json<UnionVenueRule>)> {
    let rule = state.services.unions.create_venue_rule(id, &data).await?;
    Ok((StatusCode::CREATED, Json(rule)))
}

/// Delete a venue rule
#[utoipa::path(
    delete,
    path = "/venue-rules/{id}",
    tag = "unions",
    params(("id" = i32, Path, description = "Venue rule ID")),
    responses(
        (status = 204, description = "Venue rule deleted")
    )
)]
pub async fn delete_venue_rule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.unions.delete_venue_rule(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
