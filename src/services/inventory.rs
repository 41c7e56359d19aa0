//! Inventory management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::inventory::{
        CreateInventoryItem, InventoryItem, InventoryListResponse, InventoryQuery,
        UpdateInventoryItem,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Filtered, paginated inventory search (the assistant's
    /// fetch_inventory function)
    pub async fn fetch(
        &self,
        property_id: i32,
        query: &InventoryQuery,
    ) -> AppResult<InventoryListResponse> {
        self.repository.properties.get_by_id(property_id).await?;
        let (items, total_items) = self.repository.inventory.list(property_id, query).await?;
        Ok(InventoryListResponse { items, total_items })
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<InventoryItem> {
        self.repository.inventory.get_by_id(id).await
    }

    pub async fn create(
        &self,
        property_id: i32,
        data: &CreateInventoryItem,
    ) -> AppResult<InventoryItem> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.inventory.create(property_id, data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateInventoryItem) -> AppResult<InventoryItem> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.inventory.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.inventory.delete(id).await
    }
}
