//! Property management service

use crate::{
    error::AppResult,
    models::property::{CreateProperty, Property, UpdateProperty},
    repository::Repository,
};

#[derive(Clone)]
pub struct PropertiesService {
    repository: Repository,
}

impl PropertiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Property>> {
        self.repository.properties.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Property> {
        self.repository.properties.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        self.repository.properties.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateProperty) -> AppResult<Property> {
        self.repository.properties.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.properties.delete(id).await
    }
}
