//! Business logic services

pub mod inventory;
pub mod labor_rules;
pub mod properties;
pub mod rooms;
pub mod unions;
pub mod validation;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub properties: properties::PropertiesService,
    pub rooms: rooms::RoomsService,
    pub inventory: inventory::InventoryService,
    pub labor_rules: labor_rules::LaborRulesService,
    pub unions: unions::UnionsService,
    pub validation: validation::ValidationService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            properties: properties::PropertiesService::new(repository.clone()),
            rooms: rooms::RoomsService::new(repository.clone()),
            inventory: inventory::InventoryService::new(repository.clone()),
            labor_rules: labor_rules::LaborRulesService::new(repository.clone()),
            unions: unions::UnionsService::new(repository.clone()),
            validation: validation::ValidationService::new(repository),
        }
    }
}
