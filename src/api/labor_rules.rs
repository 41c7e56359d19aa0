//! Labor rule API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::labor_rule::{CreateLaborRule, LaborRule, UpdateLaborRule},
};

/// List labor rules for a property
#[utoipa::path(
    get,
    path = "/properties/{property_id}/labor-rules",
    tag = "labor-rules",
    params(("property_id" = i32, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Labor rule list", body = Vec<LaborRule>)
    )
)]
pub async fn list_labor_rules(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
) -> AppResult<Json<Vec<LaborRule>>> {
    let rules = state.services.labor_rules.list(property_id).await?;
    Ok(Json(rules))
}

/// Get labor rule by ID
#[utoipa::path(
    get,
    path = "/labor-rules/{id}",
    tag = "labor-rules",
    params(("id" = i32, Path, description = "Labor rule ID")),
    responses(
        (status = 200, description = "Labor rule details", body = LaborRule)
    )
)]
pub async fn get_labor_rule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LaborRule>> {
    let rule = state.services.labor_rules.get_by_id(id).await?;
    Ok(Json(rule))
}

/// Create labor rule
#[utoipa::path(
    post,
    path = "/properties/{property_id}/labor-rules",
    tag = "labor-rules",
    params(("property_id" = i32, Path, description = "Property ID")),
    request_body = CreateLaborRule,
    responses(
        (status = 201, description = "Labor rule created", body = LaborRule)
    )
)]
pub async fn create_labor_rule(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<CreateLaborRule>,
) -> AppResult<(StatusCode, Json<LaborRule>)> {
    let rule = state.services.labor_rules.create(property_id, &data).await?;
    Ok((StatusCode::CREATED, Json(rule)))
}

/// Update labor rule
#[utoipa::path(
    put,
    path = "/labor-rules/{id}",
    tag = "labor-rules",
    params(("id" = i32, Path, description = "Labor rule ID")),
    request_body = UpdateLaborRule,
    responses(
        (status = 200, description = "Labor rule updated", body = LaborRule)
    )
)]
pub async fn update_labor_rule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateLaborRule>,
) -> AppResult<Json<LaborRule>> {
    let rule = state.services.labor_rules.update(id, &data).await?;
    Ok(Json(rule))
}

/// Delete labor rule
#[utoipa::path(
    delete,
    path = "/labor-rules/{id}",
    tag = "labor-rules",
    params(("id" = i32, Path, description = "Labor rule ID")),
    responses(
        (status = 204, description = "Labor rule deleted")
    )
)]
pub async fn delete_labor_rule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.labor_rules.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
