//! Repository layer for database operations

pub mod inventory;
pub mod labor_rules;
pub mod properties;
pub mod rooms;
pub mod unions;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub properties: properties::PropertiesRepository,
    pub rooms: rooms::RoomsRepository,
    pub inventory: inventory::InventoryRepository,
    pub labor_rules: labor_rules::LaborRulesRepository,
    pub unions: unions::UnionsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            properties: properties::PropertiesRepository::new(pool.clone()),
            rooms: rooms::RoomsRepository::new(pool.clone()),
            inventory: inventory::InventoryRepository::new(pool.clone()),
            labor_rules: labor_rules::LaborRulesRepository::new(pool.clone()),
            unions: unions::UnionsRepository::new(pool.clone()),
            pool,
        }
    }
}
