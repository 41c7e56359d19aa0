//! Order validation API endpoints
//!
//! These are the engine operations exposed to external callers (admin
//! UI or the chat assistant's function-calling layer). Validation
//! always returns HTTP 200 with a structured report; a failed order is
//! `valid: false`, never an error status.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    engine::{inventory::EquipmentRequest, labor::LaborPlan, validator::ValidationReport},
    error::AppResult,
};

/// Order validation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateOrderRequest {
    /// Requested equipment lines
    pub equipment_list: Vec<EquipmentRequest>,
    /// Attendee count; room capacity is not checked when absent
    pub attendees: Option<i32>,
    /// Event duration in hours
    pub event_duration_hours: f64,
}

/// Labor plan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LaborPlanRequest {
    /// Equipment lines (category or item name + quantity)
    #[serde(default)]
    pub equipment_list: Vec<EquipmentRequest>,
    pub attendees: i32,
    /// Event duration in hours
    pub event_duration_hours: f64,
}

/// Validate a proposed event order against a property's configuration
#[utoipa::path(
    post,
    path = "/properties/{property_id}/validate-order",
    tag = "validation",
    params(("property_id" = i32, Path, description = "Property ID")),
    request_body = ValidateOrderRequest,
    responses(
        (status = 200, description = "Validation report (valid may be false)", body = ValidationReport)
    )
)]
pub async fn validate_order(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<ValidateOrderRequest>,
) -> Json<ValidationReport> {
    let report = state
        .services
        .validation
        .validate_order(
            property_id,
            &data.equipment_list,
            data.attendees,
            data.event_duration_hours,
        )
        .await;
    Json(report)
}

/// Compute labor requirements for a proposed event
#[utoipa::path(
    post,
    path = "/properties/{property_id}/labor-plan",
    tag = "validation",
    params(("property_id" = i32, Path, description = "Property ID")),
    request_body = LaborPlanRequest,
    responses(
        (status = 200, description = "Labor plan", body = LaborPlan)
    )
)]
pub async fn calculate_labor(
    State(state): State<crate::AppState>,
    Path(property_id): Path<i32>,
    Json(data): Json<LaborPlanRequest>,
) -> AppResult<Json<LaborPlan>> {
    let plan = state
        .services
        .validation
        .calculate_labor(
            property_id,
            &data.equipment_list,
            data.attendees,
            data.event_duration_hours,
        )
        .await?;
    Ok(Json(plan))
}
