//! Labor rule model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Labor rule record.
///
/// `rule_data` is a JSON document whose shape depends on `rule_type`
/// ("technician_ratio", "setup_time", "union_requirements", ...). It is
/// stored as text and parsed at evaluation time: a payload that fails to
/// parse is skipped with a warning, never a hard error, so a bad admin
/// edit cannot break order validation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LaborRule {
    pub id: i32,
    pub property_id: i32,
    /// Rule discriminant ("technician_ratio", "setup_time", "union_requirements", ...)
    pub rule_type: String,
    /// JSON payload, shape keyed by rule_type
    pub rule_data: String,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create labor rule request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLaborRule {
    pub rule_type: String,
    pub rule_data: String,
    pub notes: Option<String>,
}

/// Update labor rule request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLaborRule {
    pub rule_type: Option<String>,
    pub rule_data: Option<String>,
    pub notes: Option<String>,
}
