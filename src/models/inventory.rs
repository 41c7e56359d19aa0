//! Inventory item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Inventory record (equipment stock owned by a property)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryItem {
    pub id: i32,
    pub property_id: i32,
    /// Item name (e.g. "Wireless Mic")
    pub name: String,
    /// Category (e.g. "Audio", "Video", "Lighting")
    pub category: Option<String>,
    pub sub_category: Option<String>,
    /// Units in stock (never negative)
    pub quantity_available: i32,
    /// Status (0=available, 1=maintenance, 2=reserved, 3=out_of_service)
    pub status: i16,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create inventory item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItem {
    pub name: String,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    #[validate(range(min = 0, message = "quantity_available cannot be negative"))]
    pub quantity_available: i32,
    /// Status (0=available, 1=maintenance, 2=reserved, 3=out_of_service)
    #[validate(range(min = 0, max = 3, message = "status must be 0-3"))]
    pub status: Option<i16>,
    pub notes: Option<String>,
}

/// Update inventory item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    #[validate(range(min = 0, message = "quantity_available cannot be negative"))]
    pub quantity_available: Option<i32>,
    #[validate(range(min = 0, max = 3, message = "status must be 0-3"))]
    pub status: Option<i16>,
    pub notes: Option<String>,
}

/// Query parameters for inventory search
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct InventoryQuery {
    /// Filter by category (case-insensitive)
    pub category: Option<String>,
    /// Filter by sub-category (case-insensitive)
    pub sub_category: Option<String>,
    /// Search term matched against name and category
    pub search: Option<String>,
    /// Page number (1-based)
    pub page: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
}

/// Paginated inventory response
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryListResponse {
    pub items: Vec<InventoryItem>,
    pub total_items: i64,
}
