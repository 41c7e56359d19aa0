//! Property (venue) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Property record: a venue that owns rooms, inventory, and labor configuration
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Property {
    pub id: i32,
    /// Property name
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create property request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProperty {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}

/// Update property request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}
