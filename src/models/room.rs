//! Room model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Room record.
///
/// `built_in_av` and `features` are free-text descriptions entered by
/// property admins; the validation engine matches them heuristically
/// against equipment keywords rather than through a structured
/// capability taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub property_id: i32,
    /// Room name
    pub name: String,
    /// Seating capacity (always positive)
    pub capacity: i32,
    /// Dimensions, free text (e.g. "24m x 18m, 6m ceiling")
    pub dimensions: Option<String>,
    /// Built-in AV description, free text
    pub built_in_av: Option<String>,
    /// Other features, free text
    pub features: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create room request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoom {
    pub name: String,
    #[validate(range(min = 1, message = "capacity must be positive"))]
    pub capacity: i32,
    pub dimensions: Option<String>,
    pub built_in_av: Option<String>,
    pub features: Option<String>,
    pub notes: Option<String>,
}

/// Update room request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoom {
    pub name: Option<String>,
    #[validate(range(min = 1, message = "capacity must be positive"))]
    pub capacity: Option<i32>,
    pub dimensions: Option<String>,
    pub built_in_av: Option<String>,
    pub features: Option<String>,
    pub notes: Option<String>,
}
