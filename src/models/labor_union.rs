//! Labor union model and child collections

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Labor union record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LaborUnion {
    pub id: i32,
    pub property_id: i32,
    /// Union name
    pub name: String,
    /// Local chapter number (e.g. "Local 720")
    pub local_number: Option<String>,
    /// Trade covered (e.g. "stagehands", "projectionists")
    pub trade: Option<String>,
    #[schema(value_type = f64)]
    pub regular_rate: Option<Decimal>,
    #[schema(value_type = f64)]
    pub overtime_rate: Option<Decimal>,
    #[schema(value_type = f64)]
    pub doubletime_rate: Option<Decimal>,
    /// Hours after which the overtime rate applies
    pub overtime_threshold_hours: Option<f64>,
    /// Hours after which the doubletime rate applies
    pub doubletime_threshold_hours: Option<f64>,
    /// Weekend pay rules, free text
    pub weekend_rules: Option<String>,
    /// Holiday pay rules, free text
    pub holiday_rules: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create union request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLaborUnion {
    pub name: String,
    pub local_number: Option<String>,
    pub trade: Option<String>,
    #[schema(value_type = f64)]
    pub regular_rate: Option<Decimal>,
    #[schema(value_type = f64)]
    pub overtime_rate: Option<Decimal>,
    #[schema(value_type = f64)]
    pub doubletime_rate: Option<Decimal>,
    pub overtime_threshold_hours: Option<f64>,
    pub doubletime_threshold_hours: Option<f64>,
    pub weekend_rules: Option<String>,
    pub holiday_rules: Option<String>,
}

/// Update union request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLaborUnion {
    pub name: Option<String>,
    pub local_number: Option<String>,
    pub trade: Option<String>,
    #[schema(value_type = f64)]
    pub regular_rate: Option<Decimal>,
    #[schema(value_type = f64)]
    pub overtime_rate: Option<Decimal>,
    #[schema(value_type = f64)]
    pub doubletime_rate: Option<Decimal>,
    pub overtime_threshold_hours: Option<f64>,
    pub doubletime_threshold_hours: Option<f64>,
    pub weekend_rules: Option<String>,
    pub holiday_rules: Option<String>,
}

/// Day-of-week schedule rule: a time window with a pay rate multiplier
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UnionScheduleRule {
    pub id: i32,
    pub union_id: i32,
    /// Day of week (0=Sunday .. 6=Saturday)
    pub day_of_week: i16,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Pay rate multiplier within this window (e.g. 1.5)
    pub rate_multiplier: f64,
}

/// Create schedule rule request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUnionScheduleRule {
    #[validate(range(min = 0, max = 6, message = "day_of_week must be 0-6"))]
    pub day_of_week: i16,
    /// Start time (HH:MM)
    pub start_time: Option<String>,
    /// End time (HH:MM)
    pub end_time: Option<String>,
    pub rate_multiplier: f64,
}

/// Minimum crew size required when a category of equipment is in use
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UnionEquipmentRequirement {
    pub id: i32,
    pub union_id: i32,
    /// Equipment category (e.g. "Video")
    pub equipment_category: String,
    /// Narrower equipment type, optional (e.g. "LED wall")
    pub equipment_type: Option<String>,
    pub minimum_crew_size: i32,
}

/// Create equipment requirement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUnionEquipmentRequirement {
    pub equipment_category: String,
    pub equipment_type: Option<String>,
    #[validate(range(min = 1, message = "minimum_crew_size must be at least 1"))]
    pub minimum_crew_size: i32,
}

/// Venue-specific exception or requirement.
///
/// Conditions are free text ("more than 3 simultaneous ICW rooms") with an
/// optional numeric threshold. The validation engine never interprets the
/// threshold mechanically; venue rules are surfaced as advisory text and
/// the calling layer decides relevance.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UnionVenueRule {
    pub id: i32,
    pub union_id: i32,
    /// Condition, free text
    pub condition_text: String,
    pub threshold_value: Option<f64>,
    /// Unit for the threshold (e.g. "rooms", "hours")
    pub threshold_unit: Option<String>,
    /// What the condition requires (e.g. "add a projectionist")
    pub action_required: String,
    /// Restrict the rule to one room, optional
    pub room_id: Option<i32>,
}

/// Create venue rule request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUnionVenueRule {
    pub condition_text: String,
    pub threshold_value: Option<f64>,
    pub threshold_unit: Option<String>,
    pub action_required: String,
    pub room_id: Option<i32>,
}
